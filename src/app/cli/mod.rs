//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::app::{api, logging};
use crate::domain::{AppError, parse_literal};

#[derive(Parser)]
#[command(name = "setting-mixins")]
#[command(version)]
#[command(
    about = "Resolve configuration-backed keyword arguments with fallback defaults",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a mixin's settings and print the forwarded keyword arguments
    #[clap(visible_alias = "r")]
    Resolve {
        /// Mixin declaration file (TOML, YAML or JSON)
        #[arg(short, long)]
        mixin: PathBuf,
        /// Settings file(s); later files win
        #[arg(short, long = "settings", env = "SETTING_MIXINS_SETTINGS", value_delimiter = ',')]
        settings: Vec<PathBuf>,
        /// Read `{PREFIX}{KEY}` environment variables on top of the settings files
        #[arg(short, long)]
        env_prefix: Option<String>,
        /// Explicit keyword argument (NAME=VALUE); never overridden by settings
        #[arg(short, long = "kwarg", value_parser = parse_kwarg)]
        kwarg: Vec<(String, Value)>,
    },
    /// Show a mixin's managed settings
    #[clap(visible_alias = "d")]
    Describe {
        /// Mixin declaration file (TOML, YAML or JSON)
        #[arg(short, long)]
        mixin: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve { mixin, settings, env_prefix, kwarg } => {
            let options = api::ResolveOptions { mixin, settings, env_prefix, kwargs: kwarg };
            api::resolve(&options).and_then(|kwargs| print_json(&kwargs))
        }
        Commands::Describe { mixin } => {
            api::describe(&mixin).and_then(|description| print_json(&description))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_kwarg(raw: &str) -> Result<(String, Value), String> {
    let (name, value) =
        raw.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    if name.is_empty() {
        return Err(format!("missing keyword name in '{}'", raw));
    }
    Ok((name.to_string(), parse_literal(value)))
}
