use std::path::{Path, PathBuf};

mod init;
mod list;
mod menu;
mod show;
mod terminal;

use clap::ArgAction;
use init::Init;
use list::List;
use menu::Menu;
use planner::{Config, Ledger};
use show::Show;
use terminal::Colorize;
use tracing::instrument;

/// The configuration file read from the working directory when no
/// `--config` is given.
const DEFAULT_CONFIG: &str = "planner.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file (defaults to ./planner.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Menu(Menu::default()))
            .run(self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu(Menu),

    /// Print every course in a catalogue after the configured reorder
    List(List),

    /// Show a single course and its prerequisites
    Show(Show),

    /// Write a default configuration file
    Init(Init),
}

impl Command {
    fn run(self, config_path: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Menu(command) => command.run(&load_config(config_path)?)?,
            Self::List(command) => command.run(&load_config(config_path)?)?,
            Self::Show(command) => command.run(&load_config(config_path)?)?,
            Self::Init(command) => {
                command.run(config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG)))?;
            }
        }
        Ok(())
    }
}

/// Loads the configuration.
///
/// An explicit path must exist and parse. Without one, `planner.toml` in the
/// working directory is used if present, and defaults otherwise.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path).map_err(|e| anyhow::anyhow!("{e}"));
    }

    let path = Path::new(DEFAULT_CONFIG);
    if !path.exists() {
        tracing::debug!("no {DEFAULT_CONFIG} found, using default configuration");
        return Ok(Config::default());
    }
    Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))
}

/// Loads a catalogue file into `ledger`, reporting skipped records on stderr.
#[instrument(level = "debug", skip(ledger, config))]
fn load_catalogue(ledger: &mut Ledger, path: &Path, config: &Config) -> anyhow::Result<()> {
    let report = ledger.load_from_path(path, config.delimiter())?;

    for skipped in report.skipped() {
        eprintln!(
            "{}",
            format!(
                "Skipped line {} of {}: {}",
                skipped.line_number,
                path.display(),
                skipped.error
            )
            .warning()
        );
    }
    Ok(())
}

/// Looks up a course, honouring `search_removes_head`.
fn search(ledger: &mut Ledger, id: &str, config: &Config) -> Option<planner::Course> {
    if config.search_removes_head {
        ledger.find_and_maybe_remove(id)
    } else {
        ledger.find(id).cloned()
    }
}
