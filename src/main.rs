use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studyplan::api::router;
use studyplan::cohere::{CohereConfig, CohereHttpClient};
use studyplan::state::AppState;
use studyplan::store::SessionStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "studyplan=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    // A missing API key is fatal: the service cannot generate plans without it.
    let config = CohereConfig::new_from_env()?;
    let generator = Arc::new(CohereHttpClient::new(config)?);

    let state = AppState {
        sessions: SessionStore::new(),
        generator,
    };

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
