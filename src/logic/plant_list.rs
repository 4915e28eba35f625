//! Per-bed shopping and sowing list, the data behind a printed plan.

use chrono::NaiveDate;
use serde::Serialize;
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::bed::GardenBed;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantListEntry {
    pub plant_id: String,
    pub name: String,
    pub count: usize,
    pub spacing_in: u32,
    pub start_indoors: Option<String>,
    pub transplant_outdoors: Option<String>,
    pub direct_sow: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedSheet {
    pub bed_id: String,
    pub name: String,
    pub width_ft: u32,
    pub height_ft: u32,
    pub plants: Vec<PlantListEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrintablePlan {
    pub generated_on: NaiveDate,
    pub beds: Vec<BedSheet>,
}

/// One entry per distinct plant, in order of first placement.
pub fn plant_list(bed: &GardenBed) -> Vec<PlantListEntry> {
    let mut entries: Vec<PlantListEntry> = Vec::new();
    for placed in bed.plants() {
        let plant = &placed.plant;
        match entries.iter_mut().find(|e| e.plant_id == plant.id) {
            Some(entry) => entry.count += 1,
            None => entries.push(PlantListEntry {
                plant_id: plant.id.clone(),
                name: plant.name.clone(),
                count: 1,
                spacing_in: plant.spacing_in,
                start_indoors: plant.start_indoors.clone(),
                transplant_outdoors: plant.transplant_outdoors.clone(),
                direct_sow: plant.direct_sow.clone(),
            }),
        }
    }
    entries
}

pub fn printable_plan(beds: &[GardenBed], generated_on: NaiveDate) -> PrintablePlan {
    PrintablePlan {
        generated_on,
        beds: beds
            .iter()
            .map(|bed| BedSheet {
                bed_id: bed.id().to_string(),
                name: bed.name().to_string(),
                width_ft: bed.width_ft(),
                height_ft: bed.height_ft(),
                plants: plant_list(bed),
            })
            .collect(),
    }
}
