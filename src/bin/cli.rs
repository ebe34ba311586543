use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use invoice_cashflow_core as lib;
use lib::config::Config;

#[derive(Parser)]
#[command(name = "invoice-cashflow-core", version)]
struct Cli {
    /// Path to config TOML
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an invoice's due-date offset into an urgency tier
    Classify {
        /// Days until the due date (negative = overdue)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "due_date")]
        days: Option<i64>,

        /// Due date (YYYY-MM-DD); the day offset is computed against today
        #[arg(long)]
        due_date: Option<NaiveDate>,

        /// Emit the full urgency record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build the OAuth authorization URL for a configured provider
    AuthUrl {
        /// Provider name from the config, e.g. "ponto"
        #[arg(long)]
        provider: String,
    },
    /// Validate config file and exit
    ConfigValidate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Honor RUST_LOG if set, otherwise default to info.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("config/providers.toml"));

    match cli.command {
        Commands::Classify { days, due_date, json } => {
            let days = match (days, due_date) {
                (Some(d), _) => d,
                (None, Some(date)) => (date - chrono::Local::now().date_naive()).num_days(),
                (None, None) => bail!("provide either --days or --due-date"),
            };
            let urgency = lib::urgency::classify(days);
            if json {
                println!("{}", serde_json::to_string_pretty(&urgency)?);
            } else {
                println!("{} ({})", urgency.display_name, urgency.color_code);
                println!("{}", lib::urgency::due_date_message(urgency.level));
            }
        }
        Commands::AuthUrl { provider } => {
            let cfg = Config::from_path(&config_path)
                .with_context(|| format!("loading config from {}", config_path.display()))?;
            let oauth_cfg = cfg
                .provider(&provider)
                .ok_or_else(|| anyhow!("no provider '{}' in {}", provider, config_path.display()))?;
            let req = lib::oauth::authorize::build_authorization_url(oauth_cfg)
                .with_context(|| format!("building authorization url for '{}'", provider))?;

            println!(
                "Open this URL in your browser to connect '{}':\n\n{}\n",
                provider, req.url
            );
            println!(
                "Keep the code verifier for the token exchange step:\n{}",
                req.code_verifier
            );
        }
        Commands::ConfigValidate => match Config::from_path(&config_path) {
            Ok(cfg) => {
                println!("OK ({} provider(s) configured)", cfg.providers.len());
            }
            Err(e) => {
                eprintln!("Config validation failed: {}", e);
                std::process::exit(2);
            }
        },
    }

    Ok(())
}
