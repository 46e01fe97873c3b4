use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use freelancmusic::config::{Settings, StorageBackend};
use freelancmusic::core::{sample_musicians, CatalogStore};
use freelancmusic::models::ErrorResponse;
use freelancmusic::routes::{self, AppState};
use freelancmusic::services::{
    FileKeyValueStore, GeminiClient, KeyValueStore, MemoryKeyValueStore, PreferenceStore,
};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    })
    .into()
}

/// Handle path parameter errors
pub fn handle_path_error(err: error::PathError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Path error on {}: {}", req.path(), err);
    JsonError(ErrorResponse {
        error: "invalid_path".to_string(),
        message: format!("Invalid path: {}", err),
        status_code: 404,
    })
    .into()
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn open_storage(settings: &Settings) -> Box<dyn KeyValueStore> {
    match settings.storage.backend {
        StorageBackend::File => {
            info!("Persisting preferences to {}", settings.storage.path);
            Box::new(FileKeyValueStore::open(&settings.storage.path))
        }
        StorageBackend::Memory => {
            info!("Keeping preferences in memory only");
            Box::new(MemoryKeyValueStore::new())
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings);

    info!("Starting FreelancMusic catalog service...");

    let preferences = PreferenceStore::new(open_storage(&settings), settings.storage.keys());

    let profiles = if settings.catalog.seed_sample_data {
        sample_musicians()
    } else {
        Vec::new()
    };

    let store = CatalogStore::open(profiles, preferences, settings.appearance.system_theme);

    let bio_assist = GeminiClient::new(
        settings.bio_assist.endpoint.clone(),
        settings.bio_assist.api_key.clone(),
        settings.bio_assist.model.clone(),
        settings.bio_assist.timeout(),
    )
    .map_err(|e| {
        error!("Failed to create bio assist client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    if bio_assist.is_configured() {
        info!("Bio assist enabled with model {}", settings.bio_assist.model);
    } else {
        info!("Bio assist API key not set, bio generation will return a configuration message");
    }

    let app_state = AppState::new(store, bio_assist, settings.bio_assist.max_tracked_requests);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
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
