//! Course and lesson records.

use serde::{Deserialize, Serialize};

/// A single lesson: title, display duration, the external video identifier,
/// and the card background color as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    /// Display duration, e.g. "10:30".
    pub duration: String,
    /// External (YouTube) video identifier. Playback itself is out of scope;
    /// the id is display-only.
    pub video_id: String,
    /// Card background color, e.g. "#F3C5C5".
    pub color: String,
}

/// A course with its ordered lesson list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub category: String,
    pub lessons: Vec<Lesson>,
}

impl Course {
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}
