use std::path::Path;

use serde::{Deserialize, Serialize};

/// How the course list is put in order before it is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    /// A single swap-to-front pass (see [`Ledger::reorder_pass`]).
    ///
    /// [`Ledger::reorder_pass`]: crate::Ledger::reorder_pass
    #[default]
    Pass,
    /// A full sort by course identifier.
    Full,
}

/// Configuration for loading and querying a course catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The character separating fields in a catalogue file.
    delimiter: char,

    /// Whether searching for a course that sits at the front of the ledger
    /// also removes it.
    ///
    /// This mirrors the behaviour of older versions of the planner. It is off
    /// by default, in which case searching never changes the ledger.
    pub search_removes_head: bool,

    /// How the course list is ordered before printing.
    pub ordering: Ordering,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            search_removes_head: false,
            ordering: Ordering::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the field delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Sets the field delimiter.
    pub const fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }
}

const fn default_delimiter() -> char {
    ','
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_delimiter")]
        delimiter: char,

        #[serde(default)]
        search_removes_head: bool,

        #[serde(default)]
        ordering: Ordering,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                delimiter,
                search_removes_head,
                ordering,
            } => Self {
                delimiter,
                search_removes_head,
                ordering,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            delimiter: config.delimiter,
            search_removes_head: config.search_removes_head,
            ordering: config.ordering,
        }
    }
}
