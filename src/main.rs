use actix_web::{middleware::Logger, web, App, HttpServer};
use slate::config::{EnvConfig, CONFIG};
use slate::db::database_service::DatabaseService;
use slate::routes::configure_routes;
use slate::storage::{LocalBlobStore, SofficeConverter, Storage};
use std::sync::Arc;
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = CONFIG.get_or_init(EnvConfig::from_env);
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .expect("Failed to initialize DatabaseService"),
    );

    match database_service.expire_sessions().await {
        Ok(n) if n > 0 => info!("Dropped {} expired sessions", n),
        Ok(_) => {}
        Err(e) => warn!("Could not drop expired sessions: {}", e),
    }

    let storage = Storage::new(
        LocalBlobStore::new(&config.storage.upload_dir, &config.storage.public_prefix),
        SofficeConverter::new(&config.storage.soffice_bin),
    );

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(storage.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
