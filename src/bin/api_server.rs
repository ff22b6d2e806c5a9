use std::env;

use geocap::api::create_router;
use geocap::ServerConfig;

#[tokio::main]
async fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::try_init().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let app = create_router(&config);

    let listener = match tokio::net::TcpListener::bind(&config.listen_address).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Failed to bind {}: {}", config.listen_address, e);
            std::process::exit(1);
        }
    };

    log::info!("Listening on http://{}", config.listen_address);
    log::info!("  GET  /api/health");
    log::info!("  POST /api/hull    {{\"points\": [{{\"lat\", \"lng\"}}]}}");
    log::info!("  POST /api/circle  {{\"points\": [...], \"config\"?: {{...}}}}");
    log::info!("  POST /api/batch   {{\"sets\": [[...]]}}");
    log::info!("  POST /api/upload  (multipart/form-data: csv file + optional base)");

    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
