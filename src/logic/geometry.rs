//! Conversions between physical bed measurements and the planting grid.
//!
//! The grid has four cells per foot, so one cell covers 3×3 inches.

use crate::models::{bed::GardenBed, Coordinate};

pub const CELLS_PER_FOOT: u32 = 4;
pub const INCHES_PER_CELL: u32 = 3;

/// Grid dimensions of a bed, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cells_x: u32,
    pub cells_y: u32,
}

impl GridSize {
    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < self.cells_x && at.y < self.cells_y
    }
}

pub fn grid_size(bed: &GardenBed) -> GridSize {
    GridSize {
        cells_x: bed.width_ft() * CELLS_PER_FOOT,
        cells_y: bed.height_ft() * CELLS_PER_FOOT,
    }
}

/// A plant's spacing expressed in whole grid cells, rounded up.
pub fn spacing_radius(spacing_in: u32) -> u32 {
    spacing_in.div_ceil(INCHES_PER_CELL)
}

/// Euclidean distance between two cell indices.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    dx.hypot(dy)
}
