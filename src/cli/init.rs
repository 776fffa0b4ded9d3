use std::path::Path;

use clap::Parser;
use planner::Config;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Write a default configuration file")]
pub struct Init {
    /// The character separating fields in catalogue files
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

impl Init {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        self.write(path)?;
        println!(
            "{}",
            format!("Initialized course planner configuration in {}", path.display()).success()
        );
        Ok(())
    }

    fn write(&self, path: &Path) -> anyhow::Result<()> {
        if path.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite it)",
                path.display()
            );
        }

        let mut config = Config::default();
        config.set_delimiter(self.delimiter);
        config
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use planner::Ordering;

    use super::*;

    #[test]
    fn writes_loadable_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("planner.toml");
        let init = Init {
            delimiter: ';',
            force: false,
        };

        init.write(&path).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.delimiter(), ';');
        assert!(!config.search_removes_head);
        assert_eq!(config.ordering, Ordering::Pass);
    }

    #[test]
    fn refuses_to_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("planner.toml");
        std::fs::write(&path, "_version = \"1\"\nordering = \"full\"\n").unwrap();
        let init = Init {
            delimiter: ',',
            force: false,
        };

        assert!(init.write(&path).is_err());
        assert_eq!(Config::load(&path).unwrap().ordering, Ordering::Full);
    }

    #[test]
    fn force_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("planner.toml");
        std::fs::write(&path, "_version = \"1\"\nordering = \"full\"\n").unwrap();
        let init = Init {
            delimiter: '|',
            force: true,
        };

        init.write(&path).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.delimiter(), '|');
        assert_eq!(config.ordering, Ordering::Pass);
    }
}
