use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use walletgen_core::{Config, ProcessExecutor, Registry, WalletGenerator};

#[derive(Parser)]
#[command(name = "walletgen")]
#[command(about = "HD wallet generation service backed by an external wallet tool")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Path to a TOML config file
    #[arg(short, long, env = "WALLETGEN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (e.g. "0.0.0.0:8001")
        #[arg(short, long, env = "WALLETGEN_BIND")]
        bind: Option<String>,

        #[command(flatten)]
        tool: ToolArgs,
    },

    /// List supported cryptocurrency symbols
    Symbols,

    /// Generate a single wallet and print it as JSON
    Generate {
        /// Cryptocurrency symbol (e.g. "BTC", "ETH")
        #[arg(short, long)]
        symbol: String,

        #[command(flatten)]
        tool: ToolArgs,
    },
}

#[derive(Args, Default)]
struct ToolArgs {
    /// Wallet tool executable
    #[arg(long = "tool", env = "WALLETGEN_TOOL")]
    program: Option<String>,

    /// Seconds to wait for the wallet tool before killing it
    #[arg(long, env = "WALLETGEN_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `generate` output stays machine-readable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    match cli.command {
        Commands::Serve { bind, tool } => {
            let config = resolve_config(cli.config.as_ref(), bind, tool)?;
            tracing::info!(
                bind = %config.server.bind,
                tool = %config.tool.program,
                timeout_secs = config.tool.timeout_secs,
                "Starting wallet generation service"
            );
            walletgen_api::start_server(build_generator(&config), &config.server.bind).await?;
        }
        Commands::Symbols => {
            println!("Supported cryptocurrencies:");
            for c in Registry::builtin().all() {
                println!(
                    "  {:<10} {:<18} coin type {:<5} {:?}",
                    c.symbol, c.name, c.coin_type, c.network
                );
            }
        }
        Commands::Generate { symbol, tool } => {
            let config = resolve_config(cli.config.as_ref(), None, tool)?;
            let wallet = build_generator(&config)
                .generate(&symbol)
                .await
                .with_context(|| format!("Wallet generation for {} failed", symbol))?;
            println!("{}", serde_json::to_string_pretty(&wallet)?);
        }
    }

    Ok(())
}

/// Layer config: defaults, then the TOML file, then flags / env vars.
fn resolve_config(path: Option<&PathBuf>, bind: Option<String>, tool: ToolArgs) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    if let Some(program) = tool.program {
        config.tool.program = program;
    }
    if let Some(timeout_secs) = tool.timeout_secs {
        config.tool.timeout_secs = timeout_secs;
    }

    config.validate()?;
    Ok(config)
}

fn build_generator(config: &Config) -> WalletGenerator {
    let executor = ProcessExecutor::new(config.tool.timeout());
    WalletGenerator::new(Arc::new(executor), Registry::builtin(), config.tool.program.clone())
}
