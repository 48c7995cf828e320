use std::sync::Arc;

use velora_contact_relay::{router, AppState, HttpMailer, RelayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = RelayConfig::from_env()?;
    let mailer = Arc::new(HttpMailer::new(&config)?);
    let addr = format!("0.0.0.0:{}", config.port);
    let app = router(AppState::new(mailer, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("contact relay listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
