//! Plain-text Course Catalogue
//!
//! Courses are read from a delimited text file, one course per line, into an
//! in-memory [`Ledger`] that can be reordered, searched and listed.

pub mod domain;
pub use domain::{Config, Course, CourseId, Ledger, LedgerError, Ordering};

/// Parsing of catalogue records and ingestion of catalogue files.
pub mod storage;
pub use storage::{IngestError, IngestReport, ParseError};
