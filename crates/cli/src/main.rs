//! Origin web UI CLI
//!
//! ```bash
//! # Prompt twice (masked) and reset the admin password
//! origin-ui web-ui reset-password --login-cookie "$COOKIE"
//!
//! # Scripted: password and confirmation on the first two lines of stdin
//! printf 'pw\npw\n' | origin-ui web-ui reset-password --stdin --server https://origin:8444
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod reset;

/// Manage the Pelican origin web UI
#[derive(Parser)]
#[command(name = "origin-ui")]
#[command(version)]
#[command(about = "Manage the Pelican origin web UI")]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file
    #[arg(short, long, global = true, default_value = client::config::CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the origin web UI
    WebUi {
        #[command(subcommand)]
        action: WebUiAction,
    },
}

#[derive(Subcommand)]
enum WebUiAction {
    /// Reset the admin password for the web UI
    ResetPassword(reset::ResetPasswordArgs),
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    client::telemetry::init_tracing(log_filter(cli.verbose));

    let config = client::config::load_config(&cli.config);

    match cli.command {
        Commands::WebUi { action } => match action {
            WebUiAction::ResetPassword(args) => reset::run(args, config).await,
        },
    }
}
