use std::sync::Arc;

use axum::{Router, middleware::from_fn};
use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{
    bank::handlers::bank_routes, common::app_state::AppState, config::config::CONFIG,
    health::handlers::health_routes, mw::request_mw::request_mw,
    session::handlers::session_routes,
};

mod bank;
mod common;
mod config;
mod game;
mod health;
mod mw;
mod session;
mod tests;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/banks", bank_routes(state.clone()))
        .nest("/sessions", session_routes(state.clone()))
        .layer(from_fn(request_mw))
}

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_config(&CONFIG);
    info!(
        "Question banks stored in: {}",
        state.get_bank_store().directory().display()
    );

    let app = build_router(state);

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .expect("Failed to bind listener");

    info!(
        "Server listening on address: {}",
        listener
            .local_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".into())
    );
    axum::serve(listener, app).await.expect("Server crashed");
}
