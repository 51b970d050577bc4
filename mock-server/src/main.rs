use mock_server::{sample_feed, AppState, MockConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,mock_server=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = MockConfig::from_env()?;
    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("mock news API listening on http://{addr}{}", mock_server::NEWS_PATH);

    mock_server::run(listener, AppState::new(config.access_key, sample_feed())).await?;
    Ok(())
}
