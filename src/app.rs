use std::{sync::Arc, time::Instant};

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{debug, info};
use sqids::Sqids;

use crate::{
    config::{Config, Environment},
    errors::{AppError, ConfigError},
    middleware::RequestLogger,
    routes,
    services::{self, CodecService, CodecServiceTrait},
    types::AppState,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

// Setup logging with custom format and configuration
fn setup_logging(config: &Config) -> Result<(), AppError> {
    // Configure log level based on environment and config
    let log_level = match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug,actix_web=info".to_string(),
        Environment::Production => "info,actix_web=warn".to_string(),
    };

    let env = Env::default()
        .filter_or("RUST_LOG", log_level)
        .write_style_or("RUST_LOG_STYLE", "always");

    env_logger::try_init_from_env(env)
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}

pub async fn server() -> AppResult<()> {
    // Load application configuration
    let config = Config::load()?;

    // Setup enhanced logging based on configuration
    setup_logging(&config)?;

    // One immutable encoder shared by every worker
    let sqids = Sqids::new(config.sqids.options()).map_err(ConfigError::from)?;
    info!(
        "Encoder ready: {} character alphabet, min length {}, {} blocked words",
        sqids.alphabet_len(),
        sqids.min_length(),
        sqids.blocklist_len()
    );
    let codec: Arc<dyn CodecServiceTrait> = Arc::new(CodecService::new(Arc::new(sqids)));

    // Capture start time for uptime calculation
    let start_time = Instant::now();

    // Log startup information
    info!("Starting {} v{}", config.app.name, config.app.version);
    info!("Environment: {:?}", config.app.environment);
    info!(
        "Binding to {}:{} with {} workers",
        config.server.host, config.server.port, config.server.workers
    );

    if config.app.environment == Environment::Development {
        debug!("Debug logging enabled");
        debug!("Full configuration: {:?}", config);
    }

    // Determine if we should enable more verbose logging
    let enable_debug_logging = config.app.environment != Environment::Production;

    // Determine log format based on environment
    let log_format = if enable_debug_logging {
        // Detailed format for development/testing
        "%a \"%r\" %s %b %T \"%{Referer}i\" \"%{User-Agent}i\" %{x-request-id}o"
    } else {
        // Simple format for production
        "%a \"%r\" %s %b %T"
    };

    let version = config.app.version.clone();

    // Start the HTTP server
    HttpServer::new(move || {
        let codec = Arc::clone(&codec);

        App::new()
            .app_data(web::Data::new(AppState {
                start_time,
                version: version.clone(),
            }))
            .configure(|cfg| services::register(codec, cfg))
            // Add request tracking ID and request start/end logging
            .wrap(RequestLogger::new(enable_debug_logging))
            // Outside the request logger so the access log sees the request ID
            .wrap(Logger::new(log_format))
            .wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET", "POST"]))
            .configure(routes::configure_routes)
    })
    .workers(config.server.workers)
    .bind((config.server.host.to_string(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
