use std::process::ExitCode;

use atoms_workspace::catalog::Catalog;
use atoms_workspace::config::Config;
use atoms_workspace::server::{router, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Startup aborted: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = router(AppState::new(catalog, &config.three_url));
    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log::error!("Could not bind {}: {e}", config.addr);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Serving on http://{}", config.addr);
    if let Err(e) = axum::serve(listener, app).await {
        log::error!("Server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
