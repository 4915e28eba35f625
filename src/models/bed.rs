use serde::Serialize;

use crate::error::PlannerError;
use crate::models::{plant::Plant, Coordinate};

/// Largest bed side accepted, in feet.
pub const MAX_BED_FEET: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPlant {
    pub plant: Plant,
    pub x: u32,
    pub y: u32,
}

impl PlacedPlant {
    pub fn new(plant: Plant, at: Coordinate) -> Self {
        Self {
            plant,
            x: at.x,
            y: at.y,
        }
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.x, self.y)
    }
}

/// A rectangular bed and the plants placed on it, in insertion order.
///
/// Dimensions are validated once at construction; every mutation goes
/// through a copy so callers always hold a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenBed {
    id: String,
    name: String,
    width_ft: u32,
    height_ft: u32,
    plants: Vec<PlacedPlant>,
}

impl GardenBed {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        width_ft: u32,
        height_ft: u32,
    ) -> Result<Self, PlannerError> {
        let in_range = |feet: u32| (1..=MAX_BED_FEET).contains(&feet);
        if !in_range(width_ft) || !in_range(height_ft) {
            return Err(PlannerError::InvalidBedDimensions {
                width: width_ft,
                height: height_ft,
            });
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            width_ft,
            height_ft,
            plants: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width_ft(&self) -> u32 {
        self.width_ft
    }

    pub fn height_ft(&self) -> u32 {
        self.height_ft
    }

    pub fn plants(&self) -> &[PlacedPlant] {
        &self.plants
    }

    pub fn plant_at(&self, at: Coordinate) -> Option<&PlacedPlant> {
        self.plants.iter().find(|p| p.position() == at)
    }

    /// Same bed with its placements replaced wholesale.
    pub fn with_plants(&self, plants: Vec<PlacedPlant>) -> Self {
        Self {
            plants,
            ..self.cleared()
        }
    }

    /// Same bed with no placements.
    pub fn cleared(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            width_ft: self.width_ft,
            height_ft: self.height_ft,
            plants: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, placed: PlacedPlant) {
        self.plants.push(placed);
    }
}
