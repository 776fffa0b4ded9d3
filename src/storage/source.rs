//! Ingestion of catalogue files into a [`Ledger`]
//!
//! Malformed records are skipped and reported; they never abort a load. A
//! source that cannot be opened or read to the end leaves the ledger exactly
//! as it was.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::{
    domain::{Course, Ledger},
    storage::record::{ParseError, parse_record},
};

/// A record that was skipped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number within the source.
    pub line_number: usize,
    /// Why the record was rejected.
    pub error: ParseError,
}

/// Summary of an ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    loaded: usize,
    skipped: Vec<SkippedLine>,
}

impl IngestReport {
    /// The number of courses added to the ledger.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.loaded
    }

    /// The records that were skipped, in source order.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Whether every line was loaded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Errors that can occur when ingesting a catalogue file.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The source could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    SourceUnavailable {
        /// The path that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source was opened but could not be read to the end.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Parses every record from `reader`.
///
/// Lines that fail to parse, blank lines included, are logged, recorded in
/// the returned report and otherwise skipped.
///
/// # Errors
///
/// Returns the first I/O error hit while reading. Nothing parsed before the
/// error is returned.
pub fn ingest<R: BufRead>(reader: R, delimiter: char) -> io::Result<(Vec<Course>, IngestReport)> {
    let mut courses = Vec::new();
    let mut report = IngestReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        match parse_record(&line, delimiter) {
            Ok(course) => courses.push(course),
            Err(error) => {
                tracing::warn!("skipping line {line_number}: {error}");
                report.skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    report.loaded = courses.len();
    Ok((courses, report))
}

impl Ledger {
    /// Appends every record read from `reader` to the ledger.
    ///
    /// The ledger is only changed once the whole source has been read.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the source cannot be read to the end, in which
    /// case the ledger is unchanged.
    pub fn ingest<R: BufRead>(&mut self, reader: R, delimiter: char) -> io::Result<IngestReport> {
        let (courses, report) = ingest(reader, delimiter)?;
        self.extend(courses);
        Ok(report)
    }

    /// Appends every record in the file at `path` to the ledger.
    ///
    /// Courses already in the ledger are kept; the new ones follow them.
    ///
    /// # Errors
    ///
    /// - [`IngestError::SourceUnavailable`] if the file cannot be opened
    /// - [`IngestError::Read`] if the file cannot be read to the end
    ///
    /// In both cases the ledger is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn load_from_path(
        &mut self,
        path: &Path,
        delimiter: char,
    ) -> Result<IngestReport, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let report = self
            .ingest(BufReader::new(file), delimiter)
            .map_err(|source| IngestError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            "loaded {} course(s) from {}, skipped {}",
            report.loaded(),
            path.display(),
            report.skipped().len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    const CATALOGUE: &str = "\
MATH201,Discrete Mathematics
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI350,Operating Systems,CSCI300
CSCI101,Introduction to Programming in C++,CSCI100
CSCI100,Introduction to Computer Science
CSCI301,Advanced Programming in C++,CSCI101
CSCI400,Large Software Development,CSCI301,CSCI350
CSCI200,Data Structures,CSCI101
";

    fn write_catalogue(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn ingest_keeps_source_order() {
        let (courses, report) = ingest(Cursor::new(CATALOGUE), ',').unwrap();

        assert_eq!(report.loaded(), 8);
        assert!(report.is_clean());
        let ids: Vec<_> = courses.iter().map(|c| c.id().as_str()).collect();
        assert_eq!(
            ids,
            [
                "MATH201", "CSCI300", "CSCI350", "CSCI101", "CSCI100", "CSCI301", "CSCI400",
                "CSCI200"
            ]
        );
    }

    #[test]
    fn malformed_lines_are_skipped_and_reported() {
        let source = "CSCI100,Intro\nBROKEN\nCSCI200,Data Structures,CSCI100\n,No Id\n";

        let (courses, report) = ingest(Cursor::new(source), ',').unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(report.loaded(), 2);
        assert_eq!(
            report.skipped(),
            [
                SkippedLine {
                    line_number: 2,
                    error: ParseError::TooFewFields { found: 1 },
                },
                SkippedLine {
                    line_number: 4,
                    error: ParseError::EmptyId,
                },
            ]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn blank_lines_are_reported() {
        let source = "\nCSCI100,Intro\n\nBROKEN\nCSCI200,Data Structures\n";

        let (courses, report) = ingest(Cursor::new(source), ',').unwrap();

        assert_eq!(courses.len(), 2);
        assert_eq!(report.loaded(), 2);
        let lines: Vec<_> = report.skipped().iter().map(|s| s.line_number).collect();
        assert_eq!(lines, [1, 3, 4]);
        assert!(
            report
                .skipped()
                .iter()
                .all(|s| s.error == ParseError::TooFewFields { found: 1 })
        );
    }

    #[test]
    fn trailing_newline_is_not_a_blank_line() {
        let (courses, report) = ingest(Cursor::new("CSCI100,Intro\n"), ',').unwrap();

        assert_eq!(courses.len(), 1);
        assert!(report.is_clean());
    }

    #[test]
    fn crlf_line_endings() {
        let source = "CSCI100,Intro\r\nCSCI200,Data Structures,CSCI100\r\n";

        let (courses, _) = ingest(Cursor::new(source), ',').unwrap();

        assert_eq!(courses[0].title(), "Intro");
        assert_eq!(courses[1].prerequisites(), ["CSCI100"]);
    }

    #[test]
    fn load_from_path_appends() {
        let file = write_catalogue(CATALOGUE.as_bytes());
        let mut ledger = Ledger::new();

        let report = ledger.load_from_path(file.path(), ',').unwrap();

        assert_eq!(report.loaded(), 8);
        assert_eq!(ledger.len(), 8);
        assert_eq!(
            ledger.find("CSCI400").unwrap().prerequisites(),
            ["CSCI301", "CSCI350"]
        );

        ledger.load_from_path(file.path(), ',').unwrap();
        assert_eq!(ledger.len(), 16);
    }

    #[test]
    fn missing_file_leaves_ledger_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ledger: Ledger = CATALOGUE.lines().take(2).map(|l| l.parse().unwrap()).collect();
        let before = ledger.clone();

        let error = ledger
            .load_from_path(&tmp.path().join("missing.csv"), ',')
            .unwrap_err();

        assert!(matches!(error, IngestError::SourceUnavailable { .. }));
        assert_eq!(ledger, before);
    }

    #[test]
    fn unreadable_content_leaves_ledger_unchanged() {
        let file = write_catalogue(b"CSCI100,Intro\nCSCI200,\xff\xfe\nCSCI300,Algorithms\n");
        let mut ledger = Ledger::new();

        let error = ledger.load_from_path(file.path(), ',').unwrap_err();

        assert!(matches!(error, IngestError::Read { .. }));
        assert!(ledger.is_empty());
    }
}
