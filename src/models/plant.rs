use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SunRequirement {
    Full,
    Partial,
    Shade,
}

/// Rendering tag for a plant. Presentation layers map it to an icon; the
/// layout engine never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlantCategory {
    Fruiting,
    Leafy,
    Root,
    Herb,
}

/// Immutable catalog entry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    /// Advisory sowing windows, e.g. `"February-March"`.
    pub start_indoors: Option<String>,
    pub transplant_outdoors: Option<String>,
    pub direct_sow: Option<String>,
    pub harvest_weeks: u32,
    /// Minimum distance between two plants, in inches.
    pub spacing_in: u32,
    pub sun: SunRequirement,
    pub description: String,
    pub category: PlantCategory,
    /// USDA hardiness zones the plant grows in.
    pub zones: Vec<u8>,
}

impl Plant {
    pub fn grows_in(&self, zone: u8) -> bool {
        self.zones.contains(&zone)
    }
}
