//! namesake CLI
//!
//! Main entry point: asks for a name and prints what it means.

use clap::Parser;
use namesake::{load_env_file, LlmOracle, NameSequencer, NamesakeConfig, Provider};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namesake")]
#[command(about = "Ask a language model what your name means", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Completion provider: gemini (default), openai
    #[arg(long, env = "NAMESAKE_PROVIDER", default_value = "gemini")]
    provider: Provider,

    /// Model identifier (defaults per provider)
    #[arg(long, env = "NAMESAKE_MODEL")]
    model: Option<String>,

    /// API base URL (defaults per provider)
    #[arg(long, env = "NAMESAKE_BASE_URL")]
    base_url: Option<String>,

    /// Variable holding the API key (GEMINI_API_KEY / OPENAI_API_KEY by default)
    #[arg(long)]
    api_key_env: Option<String>,

    /// Request timeout in seconds (none unless given)
    #[arg(long, env = "NAMESAKE_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Env file to load before reading the API key
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries only the prompt and the result
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> namesake::Result<NamesakeConfig> {
    load_env_file(&cli.env_file)?;

    let key_var = cli
        .api_key_env
        .clone()
        .unwrap_or_else(|| cli.provider.api_key_env().to_string());
    let mut config = NamesakeConfig::from_env_var(cli.provider, &key_var)?;

    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if let Some(model) = &cli.model {
        config = config.with_model(model.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli).map_err(|e| {
        error!(kind = e.kind(), "Startup failed");
        e
    })?;
    let oracle = Arc::new(LlmOracle::new(config.build_model()?, config.model()));

    let mut sequencer = NameSequencer::new(
        std::io::stdin().lock(),
        std::io::stdout(),
        oracle.clone(),
        oracle,
    );
    let outcome = sequencer.run().await.map_err(|e| {
        error!(kind = e.kind(), "Run failed");
        e
    })?;

    println!("Final Result: {}", outcome.result);
    Ok(())
}
