use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use events_api::config::Config;
use events_api::modules::events::adapters::outbound::firestore::FirestoreEvents;
use events_api::shell;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load()?;

    let client = reqwest::Client::builder()
        .timeout(config.store_timeout)
        .build()?;
    let store = Arc::new(FirestoreEvents::new(client, &config));
    let state = AppState::new(store);

    let app = shell::http::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("events app listening at http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
