//! Lesson progress: which lesson is active and which have been viewed.

use std::collections::BTreeSet;

use tracing::debug;

/// Tracks the active lesson and the set of viewed lessons.
///
/// A lesson counts as completed the moment it becomes active - viewing is the
/// completion action, and there is no un-visit. The initial active lesson
/// (index 0) is completed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonProgress {
    active: usize,
    completed: BTreeSet<usize>,
    total: usize,
}

impl LessonProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        let mut completed = BTreeSet::new();
        if total > 0 {
            completed.insert(0);
        }
        Self {
            active: 0,
            completed,
            total,
        }
    }

    /// Make `index` the active lesson and mark it completed. The caller is
    /// responsible for supplying an index into the course's lesson list.
    pub fn select(&mut self, index: usize) {
        self.active = index;
        if self.completed.insert(index) {
            debug!(index, completed = self.completed.len(), "lesson viewed");
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// True once every lesson has been viewed.
    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.completed.len() == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_lesson_is_completed_at_start() {
        let progress = LessonProgress::new(4);
        assert_eq!(progress.active(), 0);
        assert!(progress.is_completed(0));
        assert_eq!(progress.completed_count(), 1);
        assert!(!progress.all_completed());
    }

    #[test]
    fn reselecting_does_not_duplicate() {
        let mut progress = LessonProgress::new(4);
        progress.select(2);
        let count = progress.completed_count();
        progress.select(2);
        assert_eq!(progress.completed_count(), count);
    }

    #[test]
    fn complete_only_after_every_lesson_viewed() {
        let mut progress = LessonProgress::new(4);
        for index in [3, 1, 2] {
            assert!(!progress.all_completed());
            progress.select(index);
        }
        assert!(progress.all_completed());
    }

    #[test]
    fn empty_course_is_trivially_complete() {
        let progress = LessonProgress::new(0);
        assert!(progress.all_completed());
        assert_eq!(progress.completed_count(), 0);
    }
}
