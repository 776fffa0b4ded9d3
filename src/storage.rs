/// Parsing of single catalogue records.
pub mod record;
/// Reading whole catalogue files.
pub mod source;

pub use record::{DEFAULT_DELIMITER, ParseError, parse_record};
pub use source::{IngestError, IngestReport, SkippedLine, ingest};
