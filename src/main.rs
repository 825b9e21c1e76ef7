//! daily-todo: local to-do list with a daily reset of completed tasks

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use daily_todo::config::{default_data_dir, DEFAULT_PORT};
use daily_todo::{AppConfig, TodoServer};

/// Local to-do list served to the browser
#[derive(Parser)]
#[command(name = "daily-todo")]
#[command(about = "Local to-do list whose completed flags reset every day", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding todos.json and last_updated.txt
    /// (defaults to `data/` next to the executable)
    #[arg(long, env = "DAILY_TODO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Port to listen on (127.0.0.1 only)
    #[arg(long, env = "DAILY_TODO_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Do not open the browser after startup
    #[arg(long)]
    no_open: bool,

    /// HTML file to serve instead of the built-in page
    #[arg(long, env = "DAILY_TODO_TEMPLATE")]
    template: Option<PathBuf>,

    /// Also run the daily reset before every task list read
    #[arg(long)]
    reconcile_on_read: bool,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
            port: cli.port,
            open_browser: !cli.no_open,
            template: cli.template,
            reconcile_on_read: cli.reconcile_on_read,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = AppConfig::from(Cli::parse());
    TodoServer::start(config).await
}

/// Log filter comes from `RUST_LOG`, defaulting to `info`
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
