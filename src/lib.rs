//! Garden bed layout planner: plant catalog, spacing rules and a greedy
//! auto-arranger over a 3-inch planting grid, exposed as a JSON API.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;

pub use error::PlannerError;
