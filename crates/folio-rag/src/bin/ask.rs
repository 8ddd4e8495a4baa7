//! Command-line client: resolves one question the way the chat widget does
//!
//! Run with: cargo run -p folio-rag --bin folio-ask -- "What is your tech stack?"

use std::path::PathBuf;

use clap::Parser;
use folio_rag::{config::FolioConfig, QueryDispatcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "folio-ask", version, about = "Ask the portfolio assistant a question")]
struct Args {
    /// Question to ask
    #[arg(required = true)]
    question: Vec<String>,

    /// TOML configuration file (defaults to $FOLIO_CONFIG, then built-ins)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Answer service base URL
    #[arg(short, long)]
    remote: Option<String>,

    /// Remote timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Skip the answer service and answer from the local knowledge base
    #[arg(long)]
    offline: bool,

    /// Print where the answer came from (remote, local, fallback)
    #[arg(long)]
    show_source: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_rag=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = FolioConfig::load(args.config.as_deref())?;
    if let Some(remote) = args.remote {
        config.remote.base_url = remote;
    }
    if let Some(timeout) = args.timeout {
        config.remote.timeout_secs = timeout;
    }

    let dispatcher = if args.offline {
        QueryDispatcher::local_from_config(&config)?
    } else {
        QueryDispatcher::from_config(&config)?
    };

    let question = args.question.join(" ");
    let result = dispatcher.resolve(&question).await;

    if args.show_source {
        println!("[{}] {}", result.source, result.answer);
    } else {
        println!("{}", result.answer);
    }

    Ok(())
}
