//! Single binary web server: bracket page at /, JSON bracket via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, ROSTER_PATH (CSV roster), REFRESH_SECS (page reload interval).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use std::path::PathBuf;
use tournament_bracket::api::{configure, BracketSettings};

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("data/roster.csv")
}

fn default_refresh_secs() -> u64 {
    5
}

/// Read `key` from the environment and parse it, ignoring missing or invalid values.
fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = env_parsed("PORT").unwrap_or_else(default_port);
    let settings = BracketSettings {
        roster_path: std::env::var_os("ROSTER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_roster_path),
        refresh_secs: env_parsed("REFRESH_SECS").unwrap_or_else(default_refresh_secs),
    };
    log::info!(
        "Serving bracket from {} (refresh every {}s)",
        settings.roster_path.display(),
        settings.refresh_secs
    );
    log::info!("Starting server at http://{}:{}", host, port);

    let state = Data::new(settings);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
