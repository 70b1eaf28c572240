//! Copydesk CLI - generative UX copy, error analysis, and JSON conversion.

use clap::Parser;
use copydesk_cli::{commands, session};
use copydesk_cli::{Cli, Command, Config, Formatter};
use copydesk_engine::Engine;
use copydesk_llm::GeminiClient;
use copydesk_store::StateStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> copydesk_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    let mut store = StateStore::open(Config::state_path()?)?;

    // Theme is read before the first output so everything renders in it
    let theme = store.theme();

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled, theme);

    // An empty key is carried as-is; the first request reports the failure
    let api_key = cli.api_key.unwrap_or(config.api_key);
    let client = GeminiClient::with_base_url(api_key, config.base_url);
    let engine = Engine::new(client);

    match cli.command {
        None | Some(Command::Session) => {
            session::run_session(&engine, &mut store, &formatter).await?;
        }
        Some(Command::Copy(args)) => {
            commands::copy::execute(&args, &engine, &mut store, &formatter).await?;
        }
        Some(Command::Analyze(args)) => {
            commands::analyze::execute(&args, &engine, &formatter).await?;
        }
        Some(Command::Convert(args)) => {
            commands::convert::execute(&args, &engine, &formatter).await?;
        }
        Some(Command::Concept(args)) => {
            commands::concept::execute(&args, &engine, &mut store, &formatter).await?;
        }
        Some(Command::Favorites(args)) => {
            commands::favorites::execute(&args, &mut store, &formatter)?;
        }
        Some(Command::Theme(args)) => {
            commands::theme::execute(&args, &mut store, &formatter)?;
        }
    }

    Ok(())
}
