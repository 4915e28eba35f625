use std::collections::HashMap;

use actix_web::http::Method;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::{IntoParams, ToSchema};

use crate::error::PlannerError;
use crate::logic::geometry::grid_size;
use crate::logic::plant_list::PlantListEntry;
use crate::models::{
    bed::{GardenBed, PlacedPlant},
    plant::{Plant, PlantCategory, SunRequirement},
    Coordinate, Matrix,
};

/// Serde adapter for `actix_web::http::Method` (serialises as its uppercase string).
mod method_serde {
    use actix_web::http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Method, D::Error> {
        let s = String::deserialize(d)?;
        Method::from_bytes(s.as_bytes()).map_err(serde::de::Error::custom)
    }
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(with = "method_serde")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plant domain struct for use in responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlantResponse {
    #[serde(flatten)]
    pub plant: Plant,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// USDA hardiness zone (2-10). All plants when omitted.
    pub zone: Option<u8>,
    pub sun: Option<SunRequirement>,
}

/// A placed plant on the wire: catalog id plus grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacementDto {
    pub plant_id: String,
    pub x: u32,
    pub y: u32,
}

impl From<&PlacedPlant> for PlacementDto {
    fn from(placed: &PlacedPlant) -> Self {
        Self {
            plant_id: placed.plant.id.clone(),
            x: placed.x,
            y: placed.y,
        }
    }
}

/// A bed as sent by the client, with plants referenced by catalog id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedPayload {
    pub id: String,
    pub name: String,
    pub width_ft: u32,
    pub height_ft: u32,
    #[serde(default)]
    pub plants: Vec<PlacementDto>,
}

impl BedPayload {
    /// Validates dimensions, resolves plant ids against `catalog` and checks
    /// every placement lies on the grid.
    pub fn to_bed(&self, catalog: &[Plant]) -> Result<GardenBed, PlannerError> {
        let bed = GardenBed::new(self.id.clone(), self.name.clone(), self.width_ft, self.height_ft)?;
        let size = grid_size(&bed);
        let plants = self
            .plants
            .iter()
            .map(|p| {
                let at = Coordinate::new(p.x, p.y);
                if !size.contains(at) {
                    return Err(PlannerError::CellOutOfBounds {
                        x: p.x,
                        y: p.y,
                        cells_x: size.cells_x,
                        cells_y: size.cells_y,
                    });
                }
                let plant = catalog
                    .iter()
                    .find(|c| c.id == p.plant_id)
                    .cloned()
                    .ok_or_else(|| PlannerError::UnknownPlant(p.plant_id.clone()))?;
                Ok(PlacedPlant::new(plant, at))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(bed.with_plants(plants))
    }
}

/// One rendered grid cell; empty cells serialise as `{}`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    pub plant_id: Option<String>,
    pub category: Option<PlantCategory>,
}

/// A bed as returned to the client, with a row-major rendering of its grid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BedView {
    pub id: String,
    pub name: String,
    pub width_ft: u32,
    pub height_ft: u32,
    pub cells_x: u32,
    pub cells_y: u32,
    pub plants: Vec<PlacementDto>,
    #[schema(value_type = Vec<Vec<GridCell>>)]
    pub grid: Matrix<GridCell>,
}

impl From<&GardenBed> for BedView {
    fn from(bed: &GardenBed) -> Self {
        let size = grid_size(bed);
        let mut grid: Matrix<GridCell> = (0..size.cells_y)
            .map(|_| {
                (0..size.cells_x)
                    .map(|_| GridCell {
                        plant_id: None,
                        category: None,
                    })
                    .collect()
            })
            .collect();
        // Placements off the grid are listed in `plants` but not drawn.
        for placed in bed.plants() {
            let Some(cell) = grid
                .get_mut(placed.y as usize)
                .and_then(|row| row.get_mut(placed.x as usize))
            else {
                continue;
            };
            cell.plant_id = Some(placed.plant.id.clone());
            cell.category = Some(placed.plant.category);
        }
        Self {
            id: bed.id().to_string(),
            name: bed.name().to_string(),
            width_ft: bed.width_ft(),
            height_ft: bed.height_ft(),
            cells_x: size.cells_x,
            cells_y: size.cells_y,
            plants: bed.plants().iter().map(PlacementDto::from).collect(),
            grid,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickRequest {
    pub bed: BedPayload,
    /// Plant being placed; `None` means nothing is selected.
    pub selected_plant_id: Option<String>,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ClickOutcomeKind {
    Placed,
    Removed,
    Rejected,
    Ignored,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClickResponse {
    pub outcome: ClickOutcomeKind,
    /// The plant added or removed, if any.
    pub plant: Option<PlacementDto>,
    pub bed: BedView,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub bed: BedPayload,
    pub plant_id: String,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoPlaceRequest {
    pub bed: BedPayload,
    /// Zone whose plants are packed into the bed.
    pub zone: u8,
    pub sun: Option<SunRequirement>,
    /// Restricts the zone's plants to these ids; catalog order is kept.
    pub plant_ids: Option<Vec<String>>,
    /// Overrides the default of 3 instances per plant type.
    pub attempts_per_plant: Option<u32>,
    /// Overrides the default scan stride of 2 cells.
    pub stride: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoPlaceResponse {
    /// Newly placed plants, in placement order.
    pub placed: Vec<PlacementDto>,
    pub plant_list: Vec<PlantListEntry>,
    pub bed: BedView,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    pub bed: BedPayload,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    pub beds: Vec<BedPayload>,
}
