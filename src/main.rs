use actix_web::http::StatusCode;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenvy::dotenv;
use env_logger::Env;
use log::{error, info};

mod database;
mod middleware;
mod utils;
use middleware::not_found::not_found;
use post::post_service::PostService;
use router::index::routes;
use serde_json::json;
mod post;
mod router;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Post service is running",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10000);
    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data.db".to_string());

    let pool = match database::init_pool(&db_path).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("DB Error: {}", e);
            std::process::exit(1);
        }
    };

    let post_service = web::Data::new(PostService::new(pool));

    info!("Server Running at {}", port);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .app_data(post_service.clone())
            .configure(routes)
            .service(default)
            .default_service(web::to(not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    // Log after server has started (this line will only be reached when the server shuts down)
    info!("Server has stopped");

    Ok(())
}
