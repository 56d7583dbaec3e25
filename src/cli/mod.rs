//! Command-line interface for citizen
//!
//! Each screen of the reporting app maps to a subcommand. Global flags pick
//! the config file, verbosity and output format.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod output;

pub use output::Output;

/// citizen - report coastal hazards with photos, video and location
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the screen the app opens on
    Start,
    /// Log in with a one-time password
    Login {
        /// Username (prompted when omitted)
        #[arg(long)]
        username: Option<String>,
        /// Mobile number the OTP is sent to (prompted when omitted)
        #[arg(long)]
        mobile: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Fill in and submit a hazard report
    Report(ReportArgs),
    /// List reports held by the server
    Reports,
    /// List hazard categories
    Hazards,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Report form fields
#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Hazard category, e.g. "Storm Surges" or storm-surges
    #[arg(long)]
    pub hazard: Option<String>,

    /// What was observed
    #[arg(short, long)]
    pub description: Option<String>,

    /// Photo to attach (up to 3)
    #[arg(short, long = "image", value_name = "PATH")]
    pub images: Vec<PathBuf>,

    /// Video to attach (at most 1)
    #[arg(long, value_name = "PATH")]
    pub video: Option<PathBuf>,

    /// Latitude of the hazard
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the hazard
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Print the request body instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        // Under --format json stdout carries only the JSON document
        let output =
            Output::new(self.verbose > 0, self.quiet).with_stderr(self.format == Format::Json);
        let config = self.config.as_deref();

        match self.command {
            Some(Commands::Start) => commands::start::execute(config, &output).await,
            Some(Commands::Login { username, mobile }) => {
                commands::login::execute(username, mobile, config, &output).await
            }
            Some(Commands::Logout) => commands::logout::execute(config, &output).await,
            Some(Commands::Report(args)) => {
                commands::report::execute(args, config, self.format, &output).await
            }
            Some(Commands::Reports) => commands::reports::execute(config, self.format, &output).await,
            Some(Commands::Hazards) => commands::hazards::execute(self.format, &output).await,
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, config, self.format).await,
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,hyper=info,reqwest=info"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
