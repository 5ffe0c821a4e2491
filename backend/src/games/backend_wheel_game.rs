use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::info;
use wof_shared::shared_wheel_game::PrizeDocument;

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/prize.json", get(get_prize))
}

/// Every winner gets the same configured prize; `null` when none is set.
async fn get_prize(State(state): State<AppState>) -> impl IntoResponse {
    let prize = state.config.prize.clone();
    match &prize {
        Some(prize) => info!("Prize requested, serving \"{}\"", prize),
        None => info!("Prize requested, none configured"),
    }

    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(PrizeDocument { prize }),
    )
}
