mod auth;
mod availability;
mod booking;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod reviews;
mod routes;
mod seed;
mod templates;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: DatabaseConnection,
}

pub fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,cinepass=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let db = db::connect_and_migrate(&config.database_url).await?;

    if config.seed_demo_data {
        seed::ensure_demo_data(&db).await?;
    }

    let state = Arc::new(AppState { config: config.clone(), db });

    let app = Router::new()
        .route("/", get(routes::home))
        .route("/movies/", get(routes::movie_list))
        .route("/movie/{id}/", get(routes::movie_detail))
        .route("/search/", get(routes::search))
        .route("/register/", get(auth::register_page).post(auth::register))
        .route("/login/", get(auth::login_page).post(auth::login))
        .route("/logout/", get(auth::logout).post(auth::logout))
        .route("/bookings/seat-selection/{showtime_id}/", get(routes::seat_selection))
        .route(
            "/bookings/checkout/{showtime_id}/",
            get(routes::checkout_page).post(routes::checkout_submit),
        )
        .route("/bookings/confirmation/{booking_id}/", get(routes::confirmation))
        .route("/bookings/ticket/{booking_id}/", get(routes::ticket))
        .route("/bookings/history/", get(routes::history))
        .route("/bookings/dashboard/", get(routes::dashboard))
        .route(
            "/bookings/api/seat-availability/{showtime_id}/",
            get(routes::seat_availability),
        )
        .route(
            "/bookings/add-review/{movie_id}/",
            get(routes::add_review_page).post(routes::add_review),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
