//! In-memory ordered container of courses
//!
//! The [`Ledger`] keeps courses in the order they were appended until asked
//! to reorder them. It knows nothing about files or delimiters; see
//! [`crate::storage`] for ingestion.

use std::collections::{VecDeque, vec_deque};

use thiserror::Error;
use tracing::instrument;

use crate::domain::Course;

/// An ordered sequence of courses.
///
/// The ledger owns every course it holds. Courses are appended one at a time
/// and only leave the ledger through [`Ledger::remove`] or
/// [`Ledger::find_and_maybe_remove`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    courses: VecDeque<Course>,
}

/// Errors that can occur when reordering a ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A reorder pass needs at least two courses to compare.
    #[error("cannot reorder a ledger holding {0} course(s)")]
    TooFewToReorder(usize),
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: VecDeque::new(),
        }
    }

    /// Adds a course at the end of the sequence.
    ///
    /// No duplicate check is made: two courses may share an identifier.
    pub fn append(&mut self, course: Course) {
        self.courses.push_back(course);
    }

    /// The number of courses held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the ledger holds no courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterates over the courses front to back, without changing the ledger.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.courses.iter(),
        }
    }

    /// Runs a single swap-to-front pass over the ledger.
    ///
    /// Two cursors walk the sequence from the front. Whenever the course
    /// under the trailing cursor has a smaller identifier than the one before
    /// it, that course is moved to the very front and the scan continues
    /// from where it was, without restarting. Otherwise both cursors advance.
    ///
    /// This resolves inversions met during one left-to-right sweep, but it
    /// is not a sort: courses moved to the front land in front of everything
    /// else, so `["3", "1", "2"]` becomes `["2", "1", "3"]`. Use
    /// [`Ledger::reorder_until_stable`] or [`Ledger::sort_by_id`] when a fully
    /// ascending ledger is needed.
    ///
    /// Returns the number of courses moved to the front.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::TooFewToReorder`], leaving the ledger untouched,
    /// if it holds fewer than two courses.
    #[instrument(level = "debug", skip(self))]
    pub fn reorder_pass(&mut self) -> Result<usize, LedgerError> {
        if self.courses.len() < 2 {
            return Err(LedgerError::TooFewToReorder(self.courses.len()));
        }

        let mut moved = 0;
        let mut current = 0;

        while current + 1 < self.courses.len() {
            let next = current + 1;
            if self.courses[next].id() < self.courses[current].id() {
                tracing::trace!("moving {} to the front", self.courses[next].id());
                // `next` is in bounds (loop condition), so rotating `..=next`
                // detaches that course and reinserts it at the front
                self.courses.make_contiguous()[..=next].rotate_right(1);
                moved += 1;
            }
            // After a move, the front insertion shifts `current` one slot to
            // the right, and its new successor is whatever followed the moved
            // course. Either way the cursor ends up one index further on.
            current += 1;
        }

        tracing::debug!("reorder pass moved {moved} course(s)");
        Ok(moved)
    }

    /// Repeats [`Ledger::reorder_pass`] until a pass moves nothing.
    ///
    /// The ledger is then in ascending order by identifier. Returns the number
    /// of passes run, including the final pass that found nothing to move.
    /// A ledger with fewer than two courses is already ordered and takes zero
    /// passes.
    pub fn reorder_until_stable(&mut self) -> usize {
        let mut passes = 0;
        while let Ok(moved) = self.reorder_pass() {
            passes += 1;
            if moved == 0 {
                break;
            }
        }
        passes
    }

    /// Sorts the ledger by identifier.
    ///
    /// The sort is stable: courses sharing an identifier keep their relative
    /// order.
    pub fn sort_by_id(&mut self) {
        self.courses
            .make_contiguous()
            .sort_by(|a, b| a.id().cmp(b.id()));
    }

    /// Finds the first course with the given identifier.
    ///
    /// The ledger is not modified.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == key)
    }

    /// Removes and returns the first course with the given identifier.
    pub fn remove(&mut self, key: &str) -> Option<Course> {
        let index = self.courses.iter().position(|course| course.id() == key)?;
        self.courses.remove(index)
    }

    /// Searches for a course, dequeuing it if it sits at the front.
    ///
    /// If the first course matches `key` it is removed from the ledger and
    /// returned. If a later course matches, a copy is returned and the ledger
    /// is left as it was. Returns `None` if nothing matches.
    ///
    /// Prefer [`Ledger::find`] and [`Ledger::remove`], which keep lookup and
    /// removal apart.
    pub fn find_and_maybe_remove(&mut self, key: &str) -> Option<Course> {
        if self.courses.front().is_some_and(|course| course.id() == key) {
            tracing::debug!("{key} matched at the front, dequeuing");
            return self.courses.pop_front();
        }
        self.find(key).cloned()
    }
}

impl Extend<Course> for Ledger {
    fn extend<T: IntoIterator<Item = Course>>(&mut self, iter: T) {
        for course in iter {
            self.append(course);
        }
    }
}

impl FromIterator<Course> for Ledger {
    fn from_iter<T: IntoIterator<Item = Course>>(iter: T) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the courses of a [`Ledger`], front to back.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, Course>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}
