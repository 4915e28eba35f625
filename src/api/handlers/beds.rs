use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    api::handlers::{bad_request, bed_links, resolve_plant},
    data::plants::get_all_plants,
    error::PlannerError,
    logic::{
        auto_place::{auto_place, AutoPlaceConfig},
        filter::{filter_by_zone, validate_zone},
        geometry::grid_size,
        manual::{clear_layout, handle_cell_click, ClickOutcome},
        observer::NoopObserver,
        plant_list::plant_list,
        spacing::{spacing_preview, SpacingPreview},
    },
    models::{
        bed::PlacedPlant,
        request::{
            ApiResponse, AutoPlaceRequest, AutoPlaceResponse, BedView, ClearRequest, ClickOutcomeKind,
            ClickRequest, ClickResponse, PlacementDto, PreviewRequest,
        },
        Coordinate,
    },
};

fn click(request: ClickRequest) -> Result<ClickResponse, PlannerError> {
    let catalog = get_all_plants();
    let bed = request.bed.to_bed(&catalog)?;
    let selected = request
        .selected_plant_id
        .as_deref()
        .map(|id| resolve_plant(&catalog, id))
        .transpose()?;

    let at = Coordinate::new(request.x, request.y);
    let (updated, outcome) = handle_cell_click(&bed, selected, at, &mut NoopObserver)?;
    let (outcome, plant) = match outcome {
        ClickOutcome::Placed(p) => (ClickOutcomeKind::Placed, Some(PlacementDto::from(&p))),
        ClickOutcome::Removed(p) => (ClickOutcomeKind::Removed, Some(PlacementDto::from(&p))),
        ClickOutcome::Rejected => (ClickOutcomeKind::Rejected, None),
        ClickOutcome::Ignored => (ClickOutcomeKind::Ignored, None),
    };
    Ok(ClickResponse {
        outcome,
        plant,
        bed: BedView::from(&updated),
    })
}

fn preview(request: PreviewRequest) -> Result<SpacingPreview, PlannerError> {
    let catalog = get_all_plants();
    let bed = request.bed.to_bed(&catalog)?;
    let plant = resolve_plant(&catalog, &request.plant_id)?;
    let size = grid_size(&bed);
    let hover = Coordinate::new(request.x, request.y);
    if !size.contains(hover) {
        return Err(PlannerError::CellOutOfBounds {
            x: hover.x,
            y: hover.y,
            cells_x: size.cells_x,
            cells_y: size.cells_y,
        });
    }
    Ok(spacing_preview(&bed, hover, plant))
}

fn arrange(request: AutoPlaceRequest) -> Result<AutoPlaceResponse, PlannerError> {
    let catalog = get_all_plants();
    let bed = request.bed.to_bed(&catalog)?;
    let zone = validate_zone(request.zone)?;
    let mut candidates = filter_by_zone(&catalog, zone, request.sun);
    if let Some(ids) = &request.plant_ids {
        for id in ids {
            resolve_plant(&catalog, id)?;
        }
        candidates.retain(|p| ids.contains(&p.id));
    }

    let defaults = AutoPlaceConfig::default();
    let config = AutoPlaceConfig {
        attempts_per_plant: request.attempts_per_plant.unwrap_or(defaults.attempts_per_plant),
        stride: request.stride.unwrap_or(defaults.stride),
    };

    let mut placed = Vec::new();
    let mut record = |p: &PlacedPlant| placed.push(PlacementDto::from(p));
    let arranged = auto_place(&bed, &candidates, &config, &mut record)?;
    Ok(AutoPlaceResponse {
        placed,
        plant_list: plant_list(&arranged),
        bed: BedView::from(&arranged),
    })
}

/// POST /api/beds/click
/// Applies a click on one grid cell: removes the plant there, or places the
/// selected plant when spacing allows.
#[utoipa::path(
    post,
    path = "/api/beds/click",
    tag = "beds",
    request_body = ClickRequest,
    responses(
        (status = 200, description = "Updated bed and what the click did", body = ClickResponse),
        (status = 400, description = "Invalid bed, plant or cell", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/beds/click")]
pub async fn post_click(body: web::Json<ClickRequest>) -> impl Responder {
    match click(body.into_inner()) {
        Ok(response) => {
            HttpResponse::Ok().json(ApiResponse::new(response, bed_links("/api/beds/click")))
        }
        Err(e) => bad_request(&e),
    }
}

/// POST /api/beds/preview
/// Cells a plant would cover if placed at the hovered cell, and whether it fits.
#[utoipa::path(
    post,
    path = "/api/beds/preview",
    tag = "beds",
    request_body = PreviewRequest,
    responses(
        (status = 200, description = "Spacing preview", body = SpacingPreview),
        (status = 400, description = "Invalid bed, plant or cell", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/beds/preview")]
pub async fn post_preview(body: web::Json<PreviewRequest>) -> impl Responder {
    match preview(body.into_inner()) {
        Ok(response) => {
            HttpResponse::Ok().json(ApiResponse::new(response, bed_links("/api/beds/preview")))
        }
        Err(e) => bad_request(&e),
    }
}

/// POST /api/beds/auto-place
/// Replaces the bed's plants with a greedy packing of the zone's catalog.
#[utoipa::path(
    post,
    path = "/api/beds/auto-place",
    tag = "beds",
    request_body = AutoPlaceRequest,
    responses(
        (status = 200, description = "Packed bed", body = AutoPlaceResponse),
        (status = 400, description = "Invalid bed, zone or settings", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/beds/auto-place")]
pub async fn post_auto_place(body: web::Json<AutoPlaceRequest>) -> impl Responder {
    match arrange(body.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(ApiResponse::new(
            response,
            bed_links("/api/beds/auto-place"),
        )),
        Err(e) => bad_request(&e),
    }
}

/// POST /api/beds/clear
/// Removes every plant from the bed.
#[utoipa::path(
    post,
    path = "/api/beds/clear",
    tag = "beds",
    request_body = ClearRequest,
    responses(
        (status = 200, description = "Empty bed", body = BedView),
        (status = 400, description = "Invalid bed", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/beds/clear")]
pub async fn post_clear(body: web::Json<ClearRequest>) -> impl Responder {
    let request = body.into_inner();
    match request.bed.to_bed(&get_all_plants()) {
        Ok(bed) => HttpResponse::Ok().json(ApiResponse::new(
            BedView::from(&clear_layout(&bed)),
            bed_links("/api/beds/clear"),
        )),
        Err(e) => bad_request(&e),
    }
}
