//! Lesson progress tracker properties

use campus_engine::LessonProgress;

#[test]
fn duplicate_selection_keeps_set_size() {
    let mut progress = LessonProgress::new(8);
    progress.select(2);
    let size = progress.completed_count();
    progress.select(2);
    assert_eq!(progress.completed_count(), size);
}

#[test]
fn complete_only_after_the_last_distinct_index() {
    // Visit all lessons in a scrambled order; completion flips only on the
    // final distinct index.
    let mut progress = LessonProgress::new(5);
    for index in [4, 2, 0, 2, 1] {
        progress.select(index);
        assert!(!progress.all_completed());
    }
    progress.select(3);
    assert!(progress.all_completed());
}

#[test]
fn active_lesson_is_always_completed() {
    let mut progress = LessonProgress::new(6);
    for index in [5, 3, 0, 4] {
        progress.select(index);
        assert!(progress.is_completed(progress.active()));
    }
}
