use std::ops::RangeInclusive;

use crate::error::PlannerError;
use crate::models::plant::{Plant, SunRequirement};

/// USDA hardiness zones the planner offers.
pub const SUPPORTED_ZONES: RangeInclusive<u8> = 2..=10;

pub fn validate_zone(zone: u8) -> Result<u8, PlannerError> {
    if SUPPORTED_ZONES.contains(&zone) {
        Ok(zone)
    } else {
        Err(PlannerError::InvalidZone(zone))
    }
}

/// Plants that grow in `zone` (and match `sun` when given), in catalog order.
pub fn filter_by_zone(catalog: &[Plant], zone: u8, sun: Option<SunRequirement>) -> Vec<Plant> {
    catalog
        .iter()
        .filter(|p| p.grows_in(zone))
        .filter(|p| sun.map_or(true, |s| p.sun == s))
        .cloned()
        .collect()
}
