use client_api::config::Config;
use tokio::net::TcpListener;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(app = %config.app_name, %addr, "listening");
    client_api::run(listener, &config).await?;
    Ok(())
}
