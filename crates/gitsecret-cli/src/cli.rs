//! CLI structure and command definitions.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gitsecret_core::config::Config;
use gitsecret_types::LogLevel;
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "gitsecret")]
#[command(version = gitsecret_core::VERSION)]
#[command(about = "Generate Git authentication Secret manifests for GitOps controllers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to <config dir>/gitsecret/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Secret manifest holding Git credentials
    Create(CreateArgs),

    /// Print the effective defaults, or the value at a dotted key
    Config {
        /// Dotted configuration key, e.g. `log.level`
        key: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Secret name
    pub name: String,

    /// Git repository URL (ssh://, http:// or https://)
    #[arg(long)]
    pub url: String,

    /// Secret namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Root directory the manifest is written under
    #[arg(long)]
    pub target_path: Option<String>,

    /// Manifest file name
    #[arg(long)]
    pub manifest_file: Option<String>,

    /// Basic authentication username
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// Basic authentication password
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Existing PEM private key to use instead of generating one
    #[arg(long)]
    pub private_key_file: Option<PathBuf>,

    /// Algorithm for a generated key (rsa, ecdsa, ed25519)
    #[arg(long)]
    pub ssh_key_algorithm: Option<String>,

    /// RSA key size in bits
    #[arg(long)]
    pub ssh_rsa_bits: Option<usize>,

    /// ECDSA curve (p256, p384, p521)
    #[arg(long)]
    pub ssh_ecdsa_curve: Option<String>,

    /// TLS CA certificate file
    #[arg(long)]
    pub ca_file: Option<PathBuf>,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    pub export: bool,
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let config = self.load_config()?;
        let defaults = config.defaults()?;
        let _log_guard = gitsecret_core::log::init(&defaults.log)?;

        match &self.command {
            Commands::Create(args) => commands::create::execute(args, &defaults),
            Commands::Config { key } => commands::config::execute(&config, &defaults, key.as_deref()),
        }
    }

    fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(gitsecret_core::util::expand_path(path)),
            None => Config::load_default(),
        }
        .context("Failed to load configuration")?;

        let mut config = config.with_env_prefix("GITSECRET");
        if self.verbose {
            config.set("log.level", LogLevel::Debug)?;
        } else if self.quiet {
            config.set("log.level", LogLevel::Error)?;
        }
        Ok(config)
    }
}
