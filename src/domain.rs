//! Domain models for the course catalogue.
//!
//! This module contains the core domain types: course identifiers, courses,
//! the [`Ledger`] that holds them, and configuration.

mod config;
pub use config::{Config, Ordering};

/// Course identifier type.
pub mod course_id;
pub use course_id::{CourseId, EmptyCourseIdError};

mod course;
pub use course::Course;

/// The ordered course container.
pub mod ledger;
pub use ledger::{Ledger, LedgerError};
