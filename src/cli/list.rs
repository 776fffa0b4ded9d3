use std::path::PathBuf;

use clap::Parser;
use planner::{Config, Course, Ledger, Ordering};
use tracing::instrument;

use super::terminal::{Colorize, truncate_to_width};

#[derive(Debug, Parser)]
#[command(about = "Print every course in a catalogue")]
pub struct List {
    /// The catalogue file to load
    file: PathBuf,

    /// How to order the list before printing (defaults to the configured
    /// ordering)
    #[arg(long, value_enum)]
    ordering: Option<OrderingArg>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OrderingArg {
    /// A single swap-to-front pass
    Pass,
    /// A full sort by identifier
    Full,
}

impl From<OrderingArg> for Ordering {
    fn from(arg: OrderingArg) -> Self {
        match arg {
            OrderingArg::Pass => Self::Pass,
            OrderingArg::Full => Self::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut ledger = Ledger::new();
        super::load_catalogue(&mut ledger, &self.file, config)?;

        let ordering = self.ordering.map_or(config.ordering, Ordering::from);
        order(&mut ledger, ordering);

        match self.output {
            OutputFormat::Table => print_table(&ledger),
            OutputFormat::Json => print_json(&ledger)?,
        }
        Ok(())
    }
}

/// Puts the ledger in order before printing.
pub(super) fn order(ledger: &mut Ledger, ordering: Ordering) {
    match ordering {
        Ordering::Pass => {
            if let Err(e) = ledger.reorder_pass() {
                tracing::debug!("{e}");
            }
        }
        Ordering::Full => ledger.sort_by_id(),
    }
}

pub(super) fn print_table(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("{}", "No courses loaded.".dim());
        return;
    }

    for course in ledger {
        println!("{}", course_line(course));
    }
}

fn course_line(course: &Course) -> String {
    let id = course.id().as_str();
    format!("{id}, {}", truncate_to_width(course.title(), id.len() + 2))
}

fn print_json(ledger: &Ledger) -> anyhow::Result<()> {
    let courses: Vec<&Course> = ledger.iter().collect();
    println!("{}", serde_json::to_string_pretty(&courses)?);
    Ok(())
}
