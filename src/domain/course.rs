use serde::Serialize;

use crate::domain::CourseId;

/// A course in the catalogue.
///
/// A course is a plain value: once built, the [`Ledger`](crate::Ledger)
/// moves it around as a whole but never edits its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Creates a course.
    ///
    /// Prerequisites are identifiers of other courses. They are kept in the
    /// order given and are not checked against any catalogue.
    #[must_use]
    pub const fn new(id: CourseId, title: String, prerequisites: Vec<String>) -> Self {
        Self {
            id,
            title,
            prerequisites,
        }
    }

    /// The course identifier.
    #[must_use]
    pub const fn id(&self) -> &CourseId {
        &self.id
    }

    /// The course title. May be empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Prerequisite course identifiers, in source order.
    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Whether the course has any prerequisites.
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
