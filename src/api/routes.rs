use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    handlers::{
        beds::{post_auto_place, post_clear, post_click, post_preview},
        plan::post_print,
        plants::{get_plant, list_plants},
    },
    openapi::ApiDoc,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_plants)
            .service(get_plant)
            .service(post_click)
            .service(post_preview)
            .service(post_auto_place)
            .service(post_clear)
            .service(post_print),
    )
    .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
}
