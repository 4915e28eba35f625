use actix_web::{http::Method, HttpResponse};

use crate::error::PlannerError;
use crate::models::{
    plant::Plant,
    request::{link, ErrorResponse, Links},
};

pub mod beds;
pub mod plan;
pub mod plants;

/// Every planner error reaching a handler comes from the request body.
pub(crate) fn bad_request(err: &PlannerError) -> HttpResponse {
    log::debug!("Rejected request: {err}");
    HttpResponse::BadRequest().json(ErrorResponse {
        error: err.to_string(),
    })
}

pub(crate) fn resolve_plant<'a>(catalog: &'a [Plant], id: &str) -> Result<&'a Plant, PlannerError> {
    catalog
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| PlannerError::UnknownPlant(id.to_string()))
}

pub(crate) fn bed_links(self_href: &str) -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link(self_href, Method::POST));
    links.insert("plants".into(), link("/api/plants", Method::GET));
    links
}
