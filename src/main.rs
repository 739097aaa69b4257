use std::sync::Arc;

use tower_http::cors::CorsLayer;

use healthbot_backend::config::AppConfig;
use healthbot_backend::routes;
use healthbot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::load()?;

    let state = Arc::new(AppState::new(&config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;

    tracing::info!(
        "🚀 health chatbot running at http://{}:{}",
        config.host,
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
