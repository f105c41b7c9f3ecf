use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod handlers;

use handlers::{health, predict};
use nba_predict::config::ServerConfig;
use nba_predict::{DataStore, PredictionService, RecentGames};

/// Application state shared across handlers
pub struct AppState {
    pub service: PredictionService,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;

    let config = ServerConfig::from_env();
    let addr = config.addr();

    // The bundle is required; recent games are optional
    let store = DataStore::load(&config.bundle_path)
        .with_context(|| format!("Failed to load model bundle {:?}", config.bundle_path))?;
    let recent_games = RecentGames::load_or_empty(&config.recent_games_path);

    let app_state = Arc::new(AppState {
        service: PredictionService::new(store, recent_games),
    });

    info!("Starting NBA predictor at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(predict::form_config())
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(predict::index_page))
            .route("/", web::post().to(predict::submit_prediction))
            .route("/health", web::get().to(health::health_check))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
