//! Classboard Backend Server
//!
//! actix-web serving shell wiring the board's HTTP routes and the
//! `/receive-data` push channel, driven entirely by environment variables.
//!
//! ## Submodules
//!
//! - [`routes`] — HTTP handlers for snapshot ingestion, definitions, analytics
//! - [`websocket`] — the observer-facing broadcast fan-out

mod routes;
mod websocket;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::web;
use classboard_construction::ScoreWeights;
use classboard_dictionary::Dictionary;
use classboard_hosting::Board;
use std::path::PathBuf;
use std::sync::Arc;

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key).unwrap_or_else(|_| default.to_string()).into()
}

fn env_f32(key: &str, default: f32) -> f32 {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn weights_from_env() -> ScoreWeights {
    let defaults = ScoreWeights::default();
    ScoreWeights {
        floor: env_f32("SCORE_FREQUENCY_FLOOR", defaults.floor),
        frequency: env_f32("SCORE_WEIGHT_FREQUENCY", defaults.frequency),
        length: env_f32("SCORE_WEIGHT_LENGTH", defaults.length),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let data_dir = env_path("DATA_DIR", "data");
    let log_dir = env_path("LOG_DIR", "logs/journal");
    let port = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(classboard_core::DEFAULT_PORT);
    let save_interval = std::env::var("AGGREGATE_SAVE_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(std::time::Duration::from_secs)
        .unwrap_or(classboard_core::AGGREGATE_SAVE_INTERVAL);

    let dict = Dictionary::load(&data_dir);
    let board = web::Data::new(Arc::new(Board::new(dict, &data_dir, &log_dir, weights_from_env())));

    let flush_board = board.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(save_interval);
        loop {
            ticker.tick().await;
            if let Err(e) = flush_board.solver.flush().await {
                log::error!("periodic aggregate flush failed: {e}");
            }
            if classboard_core::interrupted() {
                break;
            }
        }
        if let Err(e) = flush_board.solver.flush().await {
            log::error!("final aggregate flush failed: {e}");
        }
    });

    log::info!("starting classboard server on port {port}");
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(board.clone())
            .route("/health", web::get().to(routes::health))
            .route("/update-data", web::post().to(routes::update_data))
            .route("/update-image", web::post().to(routes::update_image))
            .route("/definition/{word}", web::get().to(routes::definition))
            .route("/analytics", web::get().to(routes::analytics))
            .route("/analytics/player/{id}", web::get().to(routes::analytics_player))
            .route("/analytics/move-log", web::get().to(routes::analytics_move_log))
            .route("/receive-data", web::get().to(websocket::receive_data))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
