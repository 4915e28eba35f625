use actix_web::{get, http::Method, web, HttpResponse, Responder};

use crate::{
    api::handlers::bad_request,
    data::plants::{get_all_plants, get_plant_by_id},
    logic::filter::{filter_by_zone, validate_zone},
    models::request::{
        link, ApiResponse, CatalogQuery, ErrorResponse, Links, PaginatedResponse, Pagination,
        PlantResponse,
    },
};

fn plant_links(id: &str) -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link(format!("/api/plants/{id}"), Method::GET));
    links.insert("collection".into(), link("/api/plants", Method::GET));
    links
}

/// GET /api/plants
/// Returns the catalog, optionally narrowed to a hardiness zone and sun exposure.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Plants in catalog order", body = [PlantResponse]),
        (status = 400, description = "Unsupported zone", body = ErrorResponse),
    )
)]
#[get("/plants")]
pub async fn list_plants(query: web::Query<CatalogQuery>) -> impl Responder {
    let query = query.into_inner();
    let catalog = get_all_plants();
    let plants = match query.zone {
        Some(zone) => match validate_zone(zone) {
            Ok(zone) => filter_by_zone(&catalog, zone, query.sun),
            Err(e) => return bad_request(&e),
        },
        None => catalog
            .into_iter()
            .filter(|p| query.sun.map_or(true, |s| p.sun == s))
            .collect(),
    };

    let total = plants.len();
    let items: Vec<ApiResponse<PlantResponse>> = plants
        .into_iter()
        .map(|plant| {
            let links = plant_links(&plant.id);
            ApiResponse::new(PlantResponse { plant }, links)
        })
        .collect();
    let mut collection_links = Links::new();
    collection_links.insert("self".into(), link("/api/plants", Method::GET));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        collection_links,
        Pagination {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        },
    ))
}

/// GET /api/plants/{id}
/// Returns a single plant by id.
#[utoipa::path(
    get,
    path = "/api/plants/{id}",
    tag = "plants",
    params(("id" = String, Path, description = "Plant id, e.g. `tomato`")),
    responses(
        (status = 200, description = "The plant", body = PlantResponse),
        (status = 404, description = "Unknown plant", body = ErrorResponse),
    )
)]
#[get("/plants/{id}")]
pub async fn get_plant(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match get_plant_by_id(&id) {
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: format!("Plant '{id}' not found."),
        }),
        Some(plant) => {
            HttpResponse::Ok().json(ApiResponse::new(PlantResponse { plant }, plant_links(&id)))
        }
    }
}
