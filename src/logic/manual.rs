use log::debug;

use crate::error::PlannerError;
use crate::logic::geometry::grid_size;
use crate::logic::observer::PlacementObserver;
use crate::logic::spacing::is_available;
use crate::models::{
    bed::{GardenBed, PlacedPlant},
    plant::Plant,
    Coordinate,
};

/// Result of a single click on the bed grid.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// The clicked cell held a plant, which was taken out.
    Removed(PlacedPlant),
    /// The selected plant was added at the clicked cell.
    Placed(PlacedPlant),
    /// The selected plant would crowd an existing one; nothing changed.
    Rejected,
    /// Empty cell and no plant selected.
    Ignored,
}

/// Applies a click at `at` and returns the updated bed.
///
/// Removal wins over placement: clicking an occupied cell always removes
/// that plant, whatever is selected. Only an actual placement reaches
/// `observer`.
pub fn handle_cell_click<O>(
    bed: &GardenBed,
    selected: Option<&Plant>,
    at: Coordinate,
    observer: &mut O,
) -> Result<(GardenBed, ClickOutcome), PlannerError>
where
    O: PlacementObserver + ?Sized,
{
    let size = grid_size(bed);
    if !size.contains(at) {
        return Err(PlannerError::CellOutOfBounds {
            x: at.x,
            y: at.y,
            cells_x: size.cells_x,
            cells_y: size.cells_y,
        });
    }

    if let Some(index) = bed.plants().iter().position(|p| p.position() == at) {
        let mut plants = bed.plants().to_vec();
        let removed = plants.remove(index);
        debug!("Removed {} at ({}, {}) from bed '{}'", removed.plant.id, at.x, at.y, bed.id());
        return Ok((bed.with_plants(plants), ClickOutcome::Removed(removed)));
    }

    let Some(plant) = selected else {
        return Ok((bed.clone(), ClickOutcome::Ignored));
    };
    if plant.spacing_in == 0 {
        return Err(PlannerError::InvalidSpacing(plant.id.clone()));
    }

    if !is_available(bed, at, plant.spacing_in) {
        debug!("Rejected {} at ({}, {}): too close to a neighbour", plant.id, at.x, at.y);
        return Ok((bed.clone(), ClickOutcome::Rejected));
    }

    let placed = PlacedPlant::new(plant.clone(), at);
    let mut updated = bed.clone();
    updated.push(placed.clone());
    observer.on_plant_placed(&placed);
    Ok((updated, ClickOutcome::Placed(placed)))
}

/// Removes every plant, keeping the bed's identity and size.
pub fn clear_layout(bed: &GardenBed) -> GardenBed {
    bed.cleared()
}
