use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::games::backend_wheel_game::create_router as create_wheel_game_router;

mod config;
mod error;
mod games;
mod logging;

#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.config.allowed_origins.clone())
        .allow_methods(vec![Method::GET, Method::OPTIONS]);

    // Widget assets are rebuilt often, make browsers revalidate
    let cache_control_layer = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    );
    let static_service = cache_control_layer.layer(ServeDir::new(&state.config.static_dir));

    Router::new()
        .route("/health", get(health_check))
        .merge(create_wheel_game_router())
        .fallback_service(static_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };
    if config.prize.is_none() {
        info!("WOF_PRIZE not set, winners will be asked to contact support");
    }

    let bind_addr = config.bind_addr;
    let app = build_app(AppState {
        config: Arc::new(config),
    });

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(error::Error::from)?;
    info!("Wheel of Fortune server listening on {}", bind_addr);
    axum::serve(listener, app).await.map_err(error::Error::from)?;
    Ok(())
}
