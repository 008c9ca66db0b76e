//! Prints the dashboard widgets as JSON.
//!
//! Usage:
//!   dashboard [--live] [--user <id>] [--location <code-or-name>] [--session <path>]

use clap::Parser;
use inventory_client::{ClientConfig, DashboardSnapshot, InventoryApi, Location, SessionStore};
use inventory_core::country::Country;
use inventory_core::seed::DEMO_USER_ID;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Inventory dashboard snapshot")]
struct Cli {
    /// Call the backend instead of the built-in demo data.
    #[arg(long)]
    live: bool,

    /// User id; defaults to the one cached in the session file.
    #[arg(long)]
    user: Option<String>,

    /// Nordic country code or name; remembered in the session file.
    #[arg(long)]
    location: Option<String>,

    /// Session file path (overrides INVENTORY_SESSION).
    #[arg(long)]
    session: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if cli.live {
        config.mock = false;
    }
    if let Some(path) = cli.session {
        config.session_path = path;
    }

    let mut session = SessionStore::open(&config.session_path);
    if let Some(user) = cli.user {
        session.set_user_id(user);
    }
    if let Some(raw) = cli.location.as_deref() {
        let country = Country::from_code_or_name(raw)
            .ok_or_else(|| anyhow::anyhow!("unknown location '{raw}'"))?;
        session.set_location(Location::from(country));
    }
    if let Err(err) = session.save_if_dirty() {
        warn!(path = %config.session_path.display(), error = %err, "session not saved");
    }

    let user_id = session.user_id().unwrap_or(DEMO_USER_ID).to_string();
    let api = InventoryApi::from_config(&config);
    info!(mock = api.is_mock(), user = %user_id, "loading dashboard");

    let snapshot = DashboardSnapshot::load(&api, &user_id, session.location()).await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
