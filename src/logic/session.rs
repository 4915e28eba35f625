use chrono::NaiveDate;
use log::info;
use serde::Serialize;

use crate::error::PlannerError;
use crate::logic::{
    auto_place::{auto_place, AutoPlaceConfig},
    filter::{filter_by_zone, validate_zone},
    manual::{clear_layout, handle_cell_click, ClickOutcome},
    plant_list::{printable_plan, PrintablePlan},
};
use crate::models::{
    bed::{GardenBed, PlacedPlant},
    plant::Plant,
    Coordinate,
};

pub const DEFAULT_ZONE: u8 = 5;
pub const DEFAULT_BED_NAME: &str = "Main Garden";
pub const DEFAULT_BED_WIDTH_FT: u32 = 8;
pub const DEFAULT_BED_HEIGHT_FT: u32 = 4;

/// One plant added to a bed, as reported to the session's observer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementEvent {
    pub bed_id: String,
    pub plant_id: String,
    pub at: Coordinate,
}

/// Everything a planning session holds: the chosen zone, the selected
/// plant and the beds being laid out.
///
/// The layout functions stay pure; the session only swaps in the beds
/// they return.
#[derive(Debug, Clone)]
pub struct PlannerSession {
    catalog: Vec<Plant>,
    zone: u8,
    selected_plant: Option<Plant>,
    beds: Vec<GardenBed>,
    active: usize,
    next_bed_id: u64,
    auto_place_config: AutoPlaceConfig,
    placement_log: Vec<PlacementEvent>,
}

impl PlannerSession {
    pub fn new(catalog: Vec<Plant>) -> Result<Self, PlannerError> {
        let main = GardenBed::new(
            "1",
            DEFAULT_BED_NAME,
            DEFAULT_BED_WIDTH_FT,
            DEFAULT_BED_HEIGHT_FT,
        )?;
        Ok(Self {
            catalog,
            zone: DEFAULT_ZONE,
            selected_plant: None,
            beds: vec![main],
            active: 0,
            next_bed_id: 2,
            auto_place_config: AutoPlaceConfig::default(),
            placement_log: Vec::new(),
        })
    }

    pub fn with_auto_place_config(
        mut self,
        config: AutoPlaceConfig,
    ) -> Result<Self, PlannerError> {
        config.validate()?;
        self.auto_place_config = config;
        Ok(self)
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    /// Changing zone keeps the current selection and every placed plant.
    pub fn set_zone(&mut self, zone: u8) -> Result<(), PlannerError> {
        self.zone = validate_zone(zone)?;
        Ok(())
    }

    pub fn available_plants(&self) -> Vec<Plant> {
        filter_by_zone(&self.catalog, self.zone, None)
    }

    /// Selects a plant among those available in the current zone.
    pub fn select_plant(&mut self, id: &str) -> Result<(), PlannerError> {
        let plant = self
            .available_plants()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| PlannerError::UnknownPlant(id.to_string()))?;
        self.selected_plant = Some(plant);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_plant = None;
    }

    pub fn selected_plant(&self) -> Option<&Plant> {
        self.selected_plant.as_ref()
    }

    pub fn beds(&self) -> &[GardenBed] {
        &self.beds
    }

    pub fn active_bed(&self) -> &GardenBed {
        &self.beds[self.active]
    }

    /// Creates an empty bed and makes it the active one.
    pub fn add_bed(
        &mut self,
        name: &str,
        width_ft: u32,
        height_ft: u32,
    ) -> Result<&GardenBed, PlannerError> {
        let bed = GardenBed::new(self.next_bed_id.to_string(), name, width_ft, height_ft)?;
        self.next_bed_id += 1;
        info!("Added bed '{}' ({width_ft}x{height_ft} ft)", bed.name());
        self.beds.push(bed);
        self.active = self.beds.len() - 1;
        Ok(self.active_bed())
    }

    pub fn select_bed(&mut self, id: &str) -> Result<(), PlannerError> {
        self.active = self
            .beds
            .iter()
            .position(|b| b.id() == id)
            .ok_or_else(|| PlannerError::UnknownBed(id.to_string()))?;
        Ok(())
    }

    /// Click on a cell of the active bed.
    pub fn click(&mut self, at: Coordinate) -> Result<ClickOutcome, PlannerError> {
        let bed_id = self.active_bed().id().to_string();
        let log = &mut self.placement_log;
        let mut record = |placed: &PlacedPlant| log.push(event(&bed_id, placed));
        let (bed, outcome) = handle_cell_click(
            &self.beds[self.active],
            self.selected_plant.as_ref(),
            at,
            &mut record,
        )?;
        self.beds[self.active] = bed;
        Ok(outcome)
    }

    /// Re-packs the active bed with every plant available in the zone and
    /// returns how many plants were placed.
    pub fn auto_arrange(&mut self) -> Result<usize, PlannerError> {
        let catalog = self.available_plants();
        let bed_id = self.active_bed().id().to_string();
        let log = &mut self.placement_log;
        let mut record = |placed: &PlacedPlant| log.push(event(&bed_id, placed));
        let bed = auto_place(
            &self.beds[self.active],
            &catalog,
            &self.auto_place_config,
            &mut record,
        )?;
        let placed = bed.plants().len();
        self.beds[self.active] = bed;
        Ok(placed)
    }

    pub fn clear_layout(&mut self) {
        self.beds[self.active] = clear_layout(&self.beds[self.active]);
    }

    /// Every placement seen this session, across all beds.
    pub fn placement_log(&self) -> &[PlacementEvent] {
        &self.placement_log
    }

    pub fn printable_plan(&self, generated_on: NaiveDate) -> PrintablePlan {
        printable_plan(&self.beds, generated_on)
    }
}

fn event(bed_id: &str, placed: &PlacedPlant) -> PlacementEvent {
    PlacementEvent {
        bed_id: bed_id.to_string(),
        plant_id: placed.plant.id.clone(),
        at: placed.position(),
    }
}
