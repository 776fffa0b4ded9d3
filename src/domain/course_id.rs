use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Serialize, Serializer};

/// The identifier of a course, e.g. `CSCI101`.
///
/// Identifiers are the ordering and lookup key of a
/// [`Ledger`](crate::Ledger). They compare case-sensitively and
/// lexicographically, byte by byte, so `"CSCI200" < "MATH100"` and
/// `"Z" < "a"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(NonEmptyString);

impl CourseId {
    /// Creates a new `CourseId`.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyCourseIdError`] if the string is empty.
    pub fn new(s: String) -> Result<Self, EmptyCourseIdError> {
        NonEmptyString::new(s)
            .map(Self)
            .map_err(|_| EmptyCourseIdError)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for CourseId {
    type Error = EmptyCourseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CourseId {
    type Error = EmptyCourseIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl FromStr for CourseId {
    type Err = EmptyCourseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for CourseId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl PartialEq<str> for CourseId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CourseId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CourseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Error returned when a course identifier is empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("course identifier must not be empty")]
pub struct EmptyCourseIdError;
