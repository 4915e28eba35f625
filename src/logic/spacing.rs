use serde::Serialize;
use utoipa::ToSchema;

use crate::logic::geometry::{distance, grid_size, spacing_radius};
use crate::models::{bed::GardenBed, plant::Plant, Coordinate};

/// True when two plants `dist` cells apart keep clear of each other.
///
/// The threshold is the mean of both radii; a distance exactly on the
/// threshold is allowed.
pub fn respects_spacing(dist: f64, radius_a: u32, radius_b: u32) -> bool {
    let threshold = f64::from(radius_a + radius_b) / 2.0;
    dist >= threshold
}

/// Whether a plant with `spacing_in` inches of spacing may go at `at`,
/// checked pairwise against every plant already in the bed.
pub fn is_available(bed: &GardenBed, at: Coordinate, spacing_in: u32) -> bool {
    let radius = spacing_radius(spacing_in);
    bed.plants().iter().all(|placed| {
        respects_spacing(
            distance(at, placed.position()),
            radius,
            spacing_radius(placed.plant.spacing_in),
        )
    })
}

/// Hover helper: is `at` inside the circle of `radius` cells around `center`.
pub fn is_within_radius(at: Coordinate, center: Coordinate, radius: u32) -> bool {
    distance(at, center) <= f64::from(radius)
}

/// What a hover over an empty cell would highlight.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpacingPreview {
    /// Whether the hovered cell is a valid spot for the plant.
    pub available: bool,
    /// Empty cells inside the plant's radius, row-major.
    pub cells: Vec<Coordinate>,
}

pub fn spacing_preview(bed: &GardenBed, hover: Coordinate, plant: &Plant) -> SpacingPreview {
    let size = grid_size(bed);
    let radius = spacing_radius(plant.spacing_in);
    let min_x = hover.x.saturating_sub(radius);
    let min_y = hover.y.saturating_sub(radius);
    let max_x = (hover.x + radius).min(size.cells_x.saturating_sub(1));
    let max_y = (hover.y + radius).min(size.cells_y.saturating_sub(1));

    let mut cells = Vec::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let cell = Coordinate::new(x, y);
            if bed.plant_at(cell).is_none() && is_within_radius(cell, hover, radius) {
                cells.push(cell);
            }
        }
    }

    SpacingPreview {
        available: is_available(bed, hover, plant.spacing_in),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::plants::get_plant_by_id;
    use crate::models::bed::PlacedPlant;

    fn get(id: &str) -> Plant {
        get_plant_by_id(id).unwrap_or_else(|| panic!("Plant '{}' not found", id))
    }

    fn with_spacing(spacing_in: u32) -> Plant {
        Plant {
            spacing_in,
            ..get("lettuce")
        }
    }

    fn bed_with(plants: Vec<PlacedPlant>) -> GardenBed {
        GardenBed::new("1", "Test", 8, 4).unwrap().with_plants(plants)
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // radii 2 and 3 → threshold 2.5
        assert!(respects_spacing(2.5, 2, 3));
        assert!(!respects_spacing(2.4, 2, 3));
        assert!(respects_spacing(2.6, 3, 2));
    }

    #[test]
    fn test_empty_bed_always_available() {
        let bed = bed_with(vec![]);
        assert!(is_available(&bed, Coordinate::new(0, 0), 24));
    }

    #[test]
    fn test_same_cell_is_unavailable() {
        let bed = bed_with(vec![PlacedPlant::new(get("carrot"), Coordinate::new(5, 5))]);
        assert!(!is_available(&bed, Coordinate::new(5, 5), 3));
    }

    #[test]
    fn test_mixed_radii_boundary() {
        // existing radius 3 (9"), candidate radius 2 (6") → threshold 2.5
        let bed = bed_with(vec![PlacedPlant::new(with_spacing(9), Coordinate::new(10, 10))]);
        assert!(!is_available(&bed, Coordinate::new(12, 10), 6), "distance 2 < 2.5");
        assert!(!is_available(&bed, Coordinate::new(12, 11), 6), "distance 2.24 < 2.5");
        assert!(is_available(&bed, Coordinate::new(13, 10), 6), "distance 3 >= 2.5");
        assert!(is_available(&bed, Coordinate::new(12, 12), 6), "distance 2.83 >= 2.5");
    }

    #[test]
    fn test_exact_threshold_accepted() {
        // two radius-2 plants → threshold 2, distance exactly 2
        let bed = bed_with(vec![PlacedPlant::new(get("lettuce"), Coordinate::new(4, 4))]);
        assert!(is_available(&bed, Coordinate::new(6, 4), 6));
        assert!(!is_available(&bed, Coordinate::new(5, 5), 6));
    }

    #[test]
    fn test_any_conflict_rejects() {
        let bed = bed_with(vec![
            PlacedPlant::new(get("carrot"), Coordinate::new(0, 0)),
            PlacedPlant::new(get("tomato"), Coordinate::new(20, 8)),
        ]);
        // far from the carrot, within the tomato's reach (threshold 4.5)
        assert!(!is_available(&bed, Coordinate::new(16, 8), 3));
        assert!(is_available(&bed, Coordinate::new(15, 8), 3));
    }

    #[test]
    fn test_is_within_radius_is_inclusive() {
        let center = Coordinate::new(5, 5);
        assert!(is_within_radius(Coordinate::new(7, 5), center, 2));
        assert!(!is_within_radius(Coordinate::new(7, 6), center, 2));
        assert!(is_within_radius(center, center, 0));
    }

    #[test]
    fn test_preview_lists_cells_inside_radius() {
        let bed = bed_with(vec![]);
        // radius 1 around (0, 0), clipped by the grid edge
        let preview = spacing_preview(&bed, Coordinate::new(0, 0), &get("carrot"));
        assert!(preview.available);
        assert_eq!(
            preview.cells,
            vec![Coordinate::new(0, 0), Coordinate::new(1, 0), Coordinate::new(0, 1)]
        );
    }

    #[test]
    fn test_preview_skips_occupied_cells_and_flags_conflict() {
        // lettuce radius 2 next to a carrot radius 1 → threshold 1.5
        let bed = bed_with(vec![PlacedPlant::new(get("lettuce"), Coordinate::new(6, 5))]);
        let preview = spacing_preview(&bed, Coordinate::new(5, 5), &get("carrot"));
        assert!(!preview.available);
        assert_eq!(preview.cells.len(), 4);
        assert!(!preview.cells.contains(&Coordinate::new(6, 5)));
    }
}
