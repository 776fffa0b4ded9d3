use std::path::{Path, PathBuf};

use clap::Parser;
use dialoguer::{Input, Select};
use planner::{Config, Ledger};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Load, list and search courses interactively")]
pub struct Menu {
    /// A catalogue file to offer when loading
    file: Option<PathBuf>,

    /// A course identifier to offer when searching
    id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Load,
    List,
    Show,
    Exit,
}

impl Choice {
    const ALL: [Self; 4] = [Self::Load, Self::List, Self::Show, Self::Exit];

    const fn label(self) -> &'static str {
        match self {
            Self::Load => "Load Data Structure.",
            Self::List => "Print Course List.",
            Self::Show => "Print Course.",
            Self::Exit => "Exit.",
        }
    }
}

impl Menu {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut ledger = Ledger::new();
        let labels = Choice::ALL.map(Choice::label);

        println!("Welcome to course planner.\n");
        loop {
            let selection = Select::new()
                .with_prompt("What would you like to do?")
                .items(&labels)
                .default(0)
                .interact()?;

            match Choice::ALL[selection] {
                Choice::Load => self.load(&mut ledger, config)?,
                Choice::List => {
                    super::list::order(&mut ledger, config.ordering);
                    println!("Here is a sample list:");
                    super::list::print_table(&ledger);
                }
                Choice::Show => self.show(&mut ledger, config)?,
                Choice::Exit => {
                    println!("Thank you for using the course planner!");
                    return Ok(());
                }
            }
            println!();
        }
    }

    fn load(&self, ledger: &mut Ledger, config: &Config) -> anyhow::Result<()> {
        let initial = self
            .file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();

        let file = Input::<String>::new()
            .with_prompt("Please enter file name to load")
            .with_initial_text(initial)
            .interact_text()?;

        println!("Loading file: {file}");
        if let Err(e) = super::load_catalogue(ledger, Path::new(&file), config) {
            eprintln!("{}", format!("Error loading file: {e}").warning());
            return Ok(());
        }
        println!(
            "{}",
            format!("Loaded successfully. {} course(s) held.", ledger.len()).success()
        );
        Ok(())
    }

    fn show(&self, ledger: &mut Ledger, config: &Config) -> anyhow::Result<()> {
        let id = Input::<String>::new()
            .with_prompt("What course do you want to know about?")
            .with_initial_text(self.id.clone().unwrap_or_default())
            .interact_text()?;

        let Some(course) = super::search(ledger, &id, config) else {
            println!("{}", super::show::not_found(&id));
            return Ok(());
        };
        super::show::print_course(&course);
        Ok(())
    }
}
