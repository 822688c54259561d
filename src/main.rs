//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_checker` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use url_checker::config::{
    CLI_TIMEOUT, DEFAULT_CHECK_URL, DEFAULT_PORT, GSB_API_KEY_ENV, GSB_ENDPOINT, SERVER_TIMEOUT,
};
use url_checker::initialization::init_logger_with;
use url_checker::server::start_server;
use url_checker::{run_check, ApiKey, CheckerConfig, LogFormat, LogLevel, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "url_checker", version, about)]
struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check one URL and print the result as JSON
    Check(CheckArgs),
    /// Serve `GET /check?url=...` over HTTP
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// URL to check
    #[arg(default_value = DEFAULT_CHECK_URL)]
    url: String,

    /// Timeout in seconds for each outbound request
    #[arg(long, default_value_t = CLI_TIMEOUT.as_secs())]
    timeout_seconds: u64,

    #[command(flatten)]
    gsb: GsbArgs,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Timeout in seconds for each outbound request
    #[arg(long, default_value_t = SERVER_TIMEOUT.as_secs())]
    timeout_seconds: u64,

    #[command(flatten)]
    gsb: GsbArgs,
}

#[derive(Debug, Args)]
struct GsbArgs {
    /// Google Safe Browsing API key (overrides GSB_API_KEY)
    #[arg(long = "gsb-api-key", value_name = "KEY")]
    api_key: Option<String>,

    /// Safe Browsing lookup endpoint
    #[arg(long, env = "GSB_ENDPOINT", default_value = GSB_ENDPOINT)]
    gsb_endpoint: String,
}

impl GsbArgs {
    /// Resolves the checker configuration; the environment is read here once.
    fn checker_config(self, timeout_seconds: u64) -> Result<CheckerConfig, url_checker::CheckError> {
        let api_key = ApiKey::resolve(self.api_key, std::env::var(GSB_API_KEY_ENV).ok())?;
        Ok(CheckerConfig::new(api_key)
            .with_gsb_endpoint(self.gsb_endpoint)
            .with_timeout(Duration::from_secs(timeout_seconds)))
    }
}

fn load_dotenv() {
    // Current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Check(args) => {
            let config = args.gsb.checker_config(args.timeout_seconds)?;
            let result = run_check(&config, &args.url).await?;
            let json =
                serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
            println!("{}", json);
            Ok(())
        }
        Command::Serve(args) => {
            // Fail fast: no key, no server
            let checker = args.gsb.checker_config(args.timeout_seconds)?;
            let config = ServerConfig {
                port: args.port,
                checker,
            };
            start_server(config).await
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    load_dotenv();

    // Usage errors exit 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = init_logger_with(cli.log_level.clone().into(), cli.log_format.clone()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
