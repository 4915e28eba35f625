pub mod auto_place;
pub mod filter;
pub mod geometry;
pub mod manual;
pub mod observer;
pub mod plant_list;
pub mod session;
pub mod spacing;
