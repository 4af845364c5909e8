use tracing::info;

use corkboard::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = corkboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        corkboard::logging::init_console_only(&config.logging.level);
    }

    // The signing secret may come from the environment instead of the file
    if config.auth.jwt_secret.is_empty() {
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
    }
    if config.auth.jwt_secret.is_empty() {
        tracing::error!("No token signing secret configured (set [auth] jwt_secret or JWT_SECRET)");
        std::process::exit(1);
    }

    info!("Corkboard - bulletin board backend");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to open database: {e}");
            std::process::exit(1);
        }
    };

    info!(
        "Server configured on {}:{} ({:?} post authorization)",
        config.server.host, config.server.port, config.auth.post_auth
    );

    let server = WebServer::new(&config, db);
    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {e}");
        std::process::exit(1);
    }
}
