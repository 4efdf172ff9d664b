use clap::Parser;
use std::sync::Arc;
use termscout_core::providers::ClinicalTablesProvider;
use termscout_core::search::SearchProvider;
use termscout_core::theme;
use termscout_tui::{run_tui, App, ClipboardSink, SystemClipboard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "termscout")]
#[command(version, about = "Terminal ICD-10 diagnosis code lookup", long_about = None)]
struct Cli {
    /// Start with the dark palette, skipping host detection
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Start with the light palette, skipping host detection
    #[arg(long)]
    light: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways.
    // Stderr only: stdout belongs to the alternate screen.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "termscout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let dark = if cli.dark {
        true
    } else if cli.light {
        false
    } else {
        theme::detect_dark()
    };
    tracing::debug!(dark, "initial theme resolved");

    let provider: Arc<dyn SearchProvider> = Arc::new(ClinicalTablesProvider::new());

    let clipboard = SystemClipboard::new().map(|c| Box::new(c) as Box<dyn ClipboardSink>);
    if clipboard.is_none() {
        tracing::warn!("system clipboard unavailable; copy will report failure");
    }

    let app = App::new(dark, clipboard);

    run_tui(app, provider).await
}
