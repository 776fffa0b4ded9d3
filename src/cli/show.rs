use std::{path::PathBuf, process};

use clap::Parser;
use planner::{Config, Course, Ledger};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display a course and its prerequisites")]
pub struct Show {
    /// The catalogue file to load
    file: PathBuf,

    /// The identifier of the course to display (case-sensitive)
    id: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut ledger = Ledger::new();
        super::load_catalogue(&mut ledger, &self.file, config)?;

        let Some(course) = super::search(&mut ledger, &self.id, config) else {
            eprintln!("{}", not_found(&self.id));
            process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => print_course(&course),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&course)?),
        }
        Ok(())
    }
}

pub(super) fn not_found(id: &str) -> String {
    format!("Course Id: {id} was not found.")
}

pub(super) fn print_course(course: &Course) {
    println!("{}, {}", course.id(), course.title());
    println!("{}", "Prerequisites:".dim());
    if course.has_prerequisites() {
        println!("{}", course.prerequisites().join(", "));
    } else {
        println!("No prerequisites required.");
    }
}
