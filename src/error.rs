use thiserror::Error;

use crate::models::bed::MAX_BED_FEET;

/// Errors raised by the layout engine and the planning session.
///
/// Rejected placements are not errors: a click on a cell that violates
/// spacing is reported as an outcome, not through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error(
        "Bed dimensions must be between 1 and {} feet, got {width}x{height}.",
        MAX_BED_FEET
    )]
    InvalidBedDimensions { width: u32, height: u32 },

    #[error("Plant '{0}' must have a strictly positive spacing.")]
    InvalidSpacing(String),

    #[error("Cell ({x}, {y}) is outside the {cells_x}x{cells_y} grid.")]
    CellOutOfBounds {
        x: u32,
        y: u32,
        cells_x: u32,
        cells_y: u32,
    },

    #[error("Plant '{0}' not found.")]
    UnknownPlant(String),

    #[error("Bed '{0}' not found.")]
    UnknownBed(String),

    #[error("Zone {0} is outside the supported USDA range 2-10.")]
    InvalidZone(u8),

    #[error("Invalid auto-placement settings: {0}")]
    InvalidConfig(String),
}
