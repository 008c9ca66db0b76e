use clap::Parser;
use tracing::info;

/// Static JSON API for the inventory dashboard.
#[derive(Parser, Debug)]
#[command(name = "inventory-server", about = "Inventory dashboard API stub")]
struct Cli {
    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:5000")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let app = inventory_server::routes::router();
    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;

    info!("inventory-server listening on {}", cli.listen);
    axum::serve(listener, app).await?;
    Ok(())
}
