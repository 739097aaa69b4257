// src/routes/mod.rs
pub mod chat;
pub mod updates;

use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;
use chat::chat_handler;
use updates::updates_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/chat", post(chat_handler))
        .route("/updates", post(updates_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../public/index.html"))
}
