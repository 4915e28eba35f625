use actix_web::{http::Method, post, web, HttpResponse, Responder};
use chrono::Local;

use crate::{
    api::handlers::bad_request,
    data::plants::get_all_plants,
    logic::plant_list::printable_plan,
    models::request::{link, ApiResponse, Links, PrintRequest},
};

/// POST /api/plan/print
/// Builds the printable plant list of every bed, dated today.
#[utoipa::path(
    post,
    path = "/api/plan/print",
    tag = "plan",
    request_body = PrintRequest,
    responses(
        (status = 200, description = "Per-bed plant lists", body = crate::logic::plant_list::PrintablePlan),
        (status = 400, description = "Invalid bed", body = crate::models::request::ErrorResponse),
    )
)]
#[post("/plan/print")]
pub async fn post_print(body: web::Json<PrintRequest>) -> impl Responder {
    let request = body.into_inner();
    let catalog = get_all_plants();
    let beds = match request
        .beds
        .iter()
        .map(|b| b.to_bed(&catalog))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(beds) => beds,
        Err(e) => return bad_request(&e),
    };

    let mut links = Links::new();
    links.insert("self".into(), link("/api/plan/print", Method::POST));
    links.insert("plants".into(), link("/api/plants", Method::GET));
    HttpResponse::Ok().json(ApiResponse::new(
        printable_plan(&beds, Local::now().date_naive()),
        links,
    ))
}
