use crate::catalog::Catalog;
use crate::config::Config;
use crate::logging::init_logging;
use crate::router::{respond, AppState};
use astra::{ConnectionInfo, Request, Server};
use tracing::{error, info, warn};

mod catalog;
mod config;
mod content;
mod domain;
mod errors;
mod logging;
mod requests;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Settings from env / .env
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&cfg.log_filter);

    // 2️⃣ Load the listings once; they are read-only from here on
    let catalog = match Catalog::load(cfg.catalog_path.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "catalog failed to load");
            std::process::exit(1);
        }
    };

    if catalog.is_empty() {
        warn!("catalog has no properties; listing pages will be empty");
    }

    let state = AppState {
        catalog,
        static_dir: cfg.static_dir.clone(),
    };

    // 3️⃣ Start the server
    info!(addr = %cfg.addr, workers = cfg.max_workers, "starting server at http://{}", cfg.addr);

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req: Request, _info: ConnectionInfo| respond(req, &state));

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
