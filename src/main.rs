use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;

mod assets;
mod catalog;
mod config;
mod domain;
mod errors;
mod logger;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Settings from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::setup(&config) {
        eprintln!("❌ Logger setup failed: {e}");
        std::process::exit(1);
    }

    // 2️⃣ Load the catalog once; it is read-only from here on
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Catalog load failed: {e}");
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        log::warn!("Catalog at {} has no listings", config.catalog_path.display());
    }
    let app = AppState { catalog };

    // 3️⃣ Start the server
    log::info!(
        "Starting server at http://{} with {} workers",
        config.addr,
        config.workers
    );

    let server = Server::bind(&config.addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
