use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use pet_facts::config::Settings;
use pet_facts::core::Catalog;
use pet_facts::routes::{self, handle_form_payload_error, handle_query_payload_error, AppState};
use pet_facts::services::SuggestionStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        _ => subscriber.compact().init(),
    }

    info!("Starting Pet Facts service...");

    // The catalog is required; refuse to serve without it
    let catalog = Catalog::load(&settings.catalog.path).unwrap_or_else(|e| {
        error!("Failed to load catalog: {}", e);
        std::process::exit(1);
    });
    let catalog = Arc::new(catalog);

    let suggestions = SuggestionStore::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
    )
    .await
    .map_err(|e| {
        error!("Failed to open suggestion database: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("Suggestion store initialized");

    let app_state = AppState {
        catalog,
        suggestions: Arc::new(suggestions),
        display_offset: settings.display.offset(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::FormConfig::default().error_handler(handle_form_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
