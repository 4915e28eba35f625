use crate::models::bed::PlacedPlant;

/// Receives every plant added to a bed, once per plant, in placement order.
pub trait PlacementObserver {
    fn on_plant_placed(&mut self, placed: &PlacedPlant);
}

impl<F> PlacementObserver for F
where
    F: FnMut(&PlacedPlant),
{
    fn on_plant_placed(&mut self, placed: &PlacedPlant) {
        self(placed)
    }
}

/// Observer for callers that only want the resulting bed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PlacementObserver for NoopObserver {
    fn on_plant_placed(&mut self, _placed: &PlacedPlant) {}
}
