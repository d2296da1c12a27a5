use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use lume_api_mock::config::{LogFormat, LoggingSettings, Settings};
use lume_api_mock::routes::{self, AppState, ENDPOINTS};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // `logging.level` already folds in LOG_LEVEL; RUST_LOG is not consulted
    let parsed = EnvFilter::try_new(&logging.level);
    let level_known = parsed.is_ok();
    let filter = parsed.unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let format = logging.log_format();
    if format == Some(LogFormat::Pretty) {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    if !level_known {
        warn!("Unknown log level {:?}, using info", logging.level);
    }
    if format.is_none() {
        warn!("Unknown log format {:?}, using json", logging.format);
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting Lume API mock...");

    let app_state = AppState::new(settings.otp.clone());

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Server running on {}:{}", host, port);
    for (method, path) in ENDPOINTS {
        info!("  {:<6} {}", method, path);
    }

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(lume_api_mock::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
