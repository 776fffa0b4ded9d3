//! Parsing of single catalogue records
//!
//! A record is one line of text holding at least two fields separated by a
//! delimiter (`,` by default):
//!
//! ```text
//! CSCI300,Introduction to Algorithms,CSCI200,MATH201
//! ```
//!
//! Field 0 is the course identifier, field 1 the title, and every further
//! field a prerequisite identifier.
//!
//! There is no quoting or escaping, and no whitespace is trimmed. A delimiter
//! can therefore never appear inside a field: a title such as
//! `Algorithms, Part 1` is read as a title `Algorithms` followed by a
//! prerequisite ` Part 1`.

use std::str::FromStr;

use crate::domain::{Course, CourseId};

/// The field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = ',';

/// Errors that can occur when parsing a record.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The record has fewer than the two required fields.
    #[error("expected at least 2 fields (identifier and title), found {found}")]
    TooFewFields {
        /// The number of fields present.
        found: usize,
    },

    /// The identifier field is empty.
    #[error("course identifier is empty")]
    EmptyId,
}

/// Parses one record into a [`Course`].
///
/// The line is cut at each `delimiter` from left to right; whatever follows
/// the last delimiter is the final field, even if it is empty. A line ending
/// in a delimiter thus gains an empty trailing field.
///
/// # Errors
///
/// - [`ParseError::TooFewFields`] if the line holds no delimiter
/// - [`ParseError::EmptyId`] if the first field is empty
pub fn parse_record(line: &str, delimiter: char) -> Result<Course, ParseError> {
    let mut fields = line.split(delimiter);

    let (Some(id), Some(title)) = (fields.next(), fields.next()) else {
        return Err(ParseError::TooFewFields { found: 1 });
    };

    let id = CourseId::new(id.to_string()).map_err(|_| ParseError::EmptyId)?;
    let prerequisites = fields.map(str::to_string).collect();

    Ok(Course::new(id, title.to_string(), prerequisites))
}

impl FromStr for Course {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s, DEFAULT_DELIMITER)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn id_title_and_prerequisite() {
        let course: Course = "CS101,Intro,CS100".parse().unwrap();
        assert_eq!(course.id(), "CS101");
        assert_eq!(course.title(), "Intro");
        assert_eq!(course.prerequisites(), ["CS100"]);
    }

    #[test]
    fn no_prerequisites() {
        let course: Course = "CS101,Intro".parse().unwrap();
        assert_eq!(course.title(), "Intro");
        assert!(course.prerequisites().is_empty());
    }

    #[test]
    fn single_field_fails() {
        assert_eq!(
            "CS101".parse::<Course>(),
            Err(ParseError::TooFewFields { found: 1 })
        );
    }

    #[test]
    fn empty_line_fails() {
        assert_eq!(
            "".parse::<Course>(),
            Err(ParseError::TooFewFields { found: 1 })
        );
    }

    #[test_case("A,T", 0; "two fields")]
    #[test_case("A,T,P1", 1; "three fields")]
    #[test_case("A,T,P1,P2", 2; "four fields")]
    #[test_case("A,T,P1,P2,P3,P4,P5", 5; "seven fields")]
    fn prerequisite_count_is_fields_minus_two(line: &str, expected: usize) {
        let course: Course = line.parse().unwrap();
        assert_eq!(course.prerequisites().len(), expected);
    }

    #[test]
    fn prerequisites_keep_source_order() {
        let course: Course = "CSCI300,Algorithms,MATH201,CSCI200,CSCI101".parse().unwrap();
        assert_eq!(course.prerequisites(), ["MATH201", "CSCI200", "CSCI101"]);
    }

    #[test]
    fn empty_title_is_accepted() {
        let course: Course = "CSCI100,".parse().unwrap();
        assert_eq!(course.id(), "CSCI100");
        assert_eq!(course.title(), "");
        assert!(course.prerequisites().is_empty());
    }

    #[test]
    fn trailing_delimiter_adds_empty_prerequisite() {
        let course: Course = "CSCI200,Data Structures,CSCI101,".parse().unwrap();
        assert_eq!(course.prerequisites(), ["CSCI101", ""]);
    }

    #[test]
    fn empty_id_fails() {
        assert_eq!(",Orphan Title".parse::<Course>(), Err(ParseError::EmptyId));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let course: Course = " CSCI100 , Intro , MATH101".parse().unwrap();
        assert_eq!(course.id(), " CSCI100 ");
        assert_eq!(course.title(), " Intro ");
        assert_eq!(course.prerequisites(), [" MATH101"]);
    }

    #[test]
    fn delimiter_inside_title_splits_it() {
        let course: Course = "CSCI100,Algorithms, Part 1".parse().unwrap();
        assert_eq!(course.title(), "Algorithms");
        assert_eq!(course.prerequisites(), [" Part 1"]);
    }

    #[test]
    fn custom_delimiter() {
        let course = parse_record("MATH201;Discrete, Finite Mathematics;MATH101", ';').unwrap();
        assert_eq!(course.title(), "Discrete, Finite Mathematics");
        assert_eq!(course.prerequisites(), ["MATH101"]);

        assert_eq!(
            parse_record("MATH201,Discrete Mathematics", ';'),
            Err(ParseError::TooFewFields { found: 1 })
        );
    }
}
