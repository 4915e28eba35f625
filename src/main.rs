use actix_web::{middleware, web, App, HttpServer};
use garden_layout::config::ServerConfig;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let bind_addr = config.bind_addr.as_str();
    info!("Garden layout API started at http://{bind_addr}");
    info!("   GET  /api/plants?zone={{zone}}");
    info!("   GET  /api/plants/{{id}}");
    info!("   POST /api/beds/click | /api/beds/preview | /api/beds/auto-place | /api/beds/clear");
    info!("   POST /api/plan/print");
    info!("   Swagger UI → http://{bind_addr}/swagger-ui/");
    HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(garden_layout::api::routes::configure)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
