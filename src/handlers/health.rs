use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::AppState;
use nba_predict::models::HealthResponse;

/// Health check endpoint
pub async fn health_check(state: web::Data<Arc<AppState>>) -> impl Responder {
    let store = state.service.store();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        players: store.players().len(),
        teams: store.teams().len(),
        recent_games_loaded: !state.service.recent_games().is_empty(),
    };

    HttpResponse::Ok().json(response)
}
