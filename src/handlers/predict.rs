use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use nba_predict::error::AppError;
use nba_predict::models::PredictForm;

/// Prediction form data (player and team lists)
pub async fn index_page(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(state.service.index())
}

/// Handle a prediction form submission
pub async fn submit_prediction(
    state: web::Data<Arc<AppState>>,
    form: web::Form<PredictForm>,
) -> Result<HttpResponse, AppError> {
    let response = state.service.submit(&form)?;

    if let Some(ref prediction) = response.prediction {
        info!(
            "Predicted {} vs {} (factor {:.2}): {:.1} pts, {:.1} reb, {:.1} ast",
            prediction.name,
            prediction.opponent,
            prediction.context.factor,
            prediction.stats.points,
            prediction.stats.rebounds,
            prediction.stats.assists
        );
    }

    Ok(HttpResponse::Ok().json(response))
}

/// Form extractor config returning JSON validation errors
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::app_state;
    use actix_web::{http::StatusCode, test, App};
    use nba_predict::models::IndexResponse;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(app_state())
                    .app_data(form_config())
                    .route("/", web::get().to(index_page))
                    .route("/", web::post().to(submit_prediction)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_index_page_lists_players_and_teams() {
        let app = app!();
        let req = test::TestRequest::get().uri("/").to_request();
        let body: IndexResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.players, vec!["Jayson Tatum", "Jrue Holiday"]);
        assert_eq!(body.teams, vec!["Miami Heat", "Orlando Magic"]);
        assert!(body.prediction.is_none());
    }

    #[actix_web::test]
    async fn test_submit_prediction() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/")
            .set_form([
                ("player_name", "Jayson Tatum"),
                ("opponent_team", "Miami Heat"),
            ])
            .to_request();
        let body: IndexResponse = test::call_and_read_body_json(&app, req).await;

        // League avg 110, Miami 115: 20 * 115 / 110 = 20.909..
        let prediction = body.prediction.unwrap();
        assert_eq!(prediction.stats.points, 20.9);
        assert_eq!(prediction.stats.rebounds, 5.2);
        assert_eq!(prediction.stats.assists, 3.1);
        assert_eq!(prediction.actual_avg.points, 26.9);
        assert_eq!(prediction.context.factor, 1.05);

        let series = body.last_7_data.unwrap();
        assert_eq!(series.dates, vec!["Jan 03, 2025", "Jan 05, 2025"]);
        assert_eq!(series.pts, vec![21, 33]);
    }

    #[actix_web::test]
    async fn test_submit_without_recent_games() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/")
            .set_form([
                ("player_name", "Jrue Holiday"),
                ("opponent_team", "Toronto Raptors"),
            ])
            .to_request();
        let body: IndexResponse = test::call_and_read_body_json(&app, req).await;

        let prediction = body.prediction.unwrap();
        assert_eq!(prediction.context.factor, 1.0);
        assert_eq!(prediction.stats.points, 10.0);
        assert!(body.last_7_data.is_none());
    }

    #[actix_web::test]
    async fn test_incomplete_submission() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/")
            .set_form([("player_name", "Jayson Tatum")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: IndexResponse = test::read_body_json(resp).await;
        assert!(body.prediction.is_none());
        assert_eq!(body.selected_player.as_deref(), Some("Jayson Tatum"));
    }

    #[actix_web::test]
    async fn test_unknown_player_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/")
            .set_form([
                ("player_name", "Bill Russell"),
                ("opponent_team", "Miami Heat"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
