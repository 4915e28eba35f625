use log::{debug, info};

use crate::error::PlannerError;
use crate::logic::geometry::{grid_size, spacing_radius, GridSize};
use crate::logic::observer::PlacementObserver;
use crate::logic::spacing::is_available;
use crate::models::{
    bed::{GardenBed, PlacedPlant},
    plant::Plant,
    Coordinate, Matrix,
};

/// How many instances of each plant type the engine tries to place.
pub const DEFAULT_ATTEMPTS_PER_PLANT: u32 = 3;
/// Step, in cells, between scanned candidate cells on both axes.
pub const DEFAULT_SCAN_STRIDE: u32 = 2;

/// Tuning knobs of the greedy packer. Both values change packing density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPlaceConfig {
    /// Scan passes per plant type; each pass places at most one plant.
    pub attempts_per_plant: u32,
    /// Distance between scanned cells, independent of plant size.
    pub stride: u32,
}

impl Default for AutoPlaceConfig {
    fn default() -> Self {
        Self {
            attempts_per_plant: DEFAULT_ATTEMPTS_PER_PLANT,
            stride: DEFAULT_SCAN_STRIDE,
        }
    }
}

impl AutoPlaceConfig {
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.stride == 0 {
            return Err(PlannerError::InvalidConfig("stride must be at least 1".into()));
        }
        if self.attempts_per_plant == 0 {
            return Err(PlannerError::InvalidConfig(
                "attempts per plant must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Cells already claimed during a packing run.
///
/// Claims are squares of ±radius around each plant, coarser than the
/// Euclidean spacing rule.
struct OccupancyMask {
    cells: Matrix<bool>,
}

impl OccupancyMask {
    fn new(size: GridSize) -> Self {
        Self {
            cells: vec![vec![false; size.cells_x as usize]; size.cells_y as usize],
        }
    }

    fn is_claimed(&self, at: Coordinate) -> bool {
        self.cells[at.y as usize][at.x as usize]
    }

    fn claim_square(&mut self, center: Coordinate, radius: u32) {
        let rows = self.cells.len();
        let min_y = center.y.saturating_sub(radius) as usize;
        let max_y = (center.y as usize + radius as usize).min(rows.saturating_sub(1));
        for row in &mut self.cells[min_y..=max_y] {
            let cols = row.len();
            let min_x = center.x.saturating_sub(radius) as usize;
            let max_x = (center.x as usize + radius as usize).min(cols.saturating_sub(1));
            row[min_x..=max_x].fill(true);
        }
    }
}

/// Packs the catalog into `bed`, largest spacing first, replacing every
/// existing placement.
///
/// Runs are deterministic for a given bed size, catalog order and config.
/// Plants that find no room are skipped without error, so the result may
/// hold fewer than `catalog.len() * attempts_per_plant` plants. Once the
/// new layout is built, `observer` sees each plant in placement order.
pub fn auto_place<O>(
    bed: &GardenBed,
    catalog: &[Plant],
    config: &AutoPlaceConfig,
    observer: &mut O,
) -> Result<GardenBed, PlannerError>
where
    O: PlacementObserver + ?Sized,
{
    config.validate()?;
    if let Some(plant) = catalog.iter().find(|p| p.spacing_in == 0) {
        return Err(PlannerError::InvalidSpacing(plant.id.clone()));
    }

    let size = grid_size(bed);
    let mut ordered: Vec<&Plant> = catalog.iter().collect();
    // Stable: equal spacing keeps catalog order.
    ordered.sort_by(|a, b| b.spacing_in.cmp(&a.spacing_in));

    let mut layout = bed.cleared();
    let mut mask = OccupancyMask::new(size);

    for plant in ordered {
        let radius = spacing_radius(plant.spacing_in);
        let mut placed = 0;
        for _ in 0..config.attempts_per_plant {
            // An empty pass leaves the state untouched, so later passes would fail too.
            let Some(at) = find_spot(&layout, &mask, plant, radius, size, config.stride) else {
                break;
            };
            layout.push(PlacedPlant::new(plant.clone(), at));
            mask.claim_square(at, radius);
            placed += 1;
        }
        debug!(
            "Auto-placed {placed}/{} {} (radius {radius}) in bed '{}'",
            config.attempts_per_plant,
            plant.id,
            bed.id()
        );
    }

    info!(
        "Auto-arranged bed '{}' ({}x{} cells): {} plants from {} types",
        bed.id(),
        size.cells_x,
        size.cells_y,
        layout.plants().len(),
        catalog.len()
    );

    for placed in layout.plants() {
        observer.on_plant_placed(placed);
    }
    Ok(layout)
}

/// First scanned cell, rows outer and columns inner, that passes both the
/// spacing check and the occupancy mask.
fn find_spot(
    layout: &GardenBed,
    mask: &OccupancyMask,
    plant: &Plant,
    radius: u32,
    size: GridSize,
    stride: u32,
) -> Option<Coordinate> {
    let end_x = size.cells_x.saturating_sub(radius);
    let end_y = size.cells_y.saturating_sub(radius);
    for y in (radius..end_y).step_by(stride as usize) {
        for x in (radius..end_x).step_by(stride as usize) {
            let at = Coordinate::new(x, y);
            if is_available(layout, at, plant.spacing_in) && !mask.is_claimed(at) {
                return Some(at);
            }
        }
    }
    None
}
