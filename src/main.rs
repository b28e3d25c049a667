//! TechGear shop server: reads settings from the environment, prepares the database, serves the API.

use techgear_shop::{app, connect, ensure_schema, AppState, Settings, SqliteShop};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("techgear_shop=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;
    ensure_schema(&pool).await?;

    let state = AppState::new(SqliteShop::new(pool));
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, settings.body_limit_bytes)).await?;
    Ok(())
}
