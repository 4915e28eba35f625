use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod bed;
pub mod plant;
pub mod request;

/// Convenience alias for a two-dimensional grid, indexed `[y][x]`.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (x, y) cell index within a bed's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}
