//! Course catalog: a pluggable data source with a built-in static catalog.

use campus_types::{Course, Lesson};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course not found: {id}")]
    CourseNotFound { id: String },
}

/// Data source for course records.
///
/// The built-in [`StaticCatalog`] serves inline data; tests supply fixtures
/// through the same seam without touching rendering logic.
pub trait CourseSource {
    fn fetch_course(&self, id: &str) -> Result<Course, CatalogError>;
}

/// Color pair cycled across lesson cards.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub lighter: &'static str,
    pub darker: &'static str,
}

pub const COLOR_SCHEMES: [ColorScheme; 4] = [
    ColorScheme {
        lighter: "#F3C5C5",
        darker: "#EF98A1",
    },
    ColorScheme {
        lighter: "#FAE0C1",
        darker: "#F8B577",
    },
    ColorScheme {
        lighter: "#D5D2FE",
        darker: "#A5A1F3",
    },
    ColorScheme {
        lighter: "#BFF0DB",
        darker: "#7FDBB6",
    },
];

/// In-memory catalog holding the platform's inline course data.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    courses: Vec<Course>,
}

impl StaticCatalog {
    /// Catalog with an explicit course list (primarily for tests).
    #[must_use]
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self {
            courses: vec![flutter_masterclass()],
        }
    }
}

impl CourseSource for StaticCatalog {
    fn fetch_course(&self, id: &str) -> Result<Course, CatalogError> {
        self.courses
            .iter()
            .find(|course| course.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::CourseNotFound { id: id.to_owned() })
    }
}

fn lesson(index: usize, title: &str, duration: &str, video_id: &str) -> Lesson {
    Lesson {
        title: title.to_owned(),
        duration: duration.to_owned(),
        video_id: video_id.to_owned(),
        color: COLOR_SCHEMES[index % COLOR_SCHEMES.len()].lighter.to_owned(),
    }
}

fn flutter_masterclass() -> Course {
    let lessons = vec![
        lesson(0, "Introduction to Flutter", "10:30", "pTJJsmejUOQ"),
        lesson(1, "Dart Fundamentals", "15:45", "Ej_Pcr4uC2Q"),
        lesson(2, "Building Your First Flutter App", "20:15", "1ukSR1GRtMU"),
        lesson(3, "Working with APIs", "18:20", "VPvVD8t02U8"),
        lesson(4, "Firebase Integration", "25:00", "sfA3NWDBPZ4"),
        lesson(5, "State Management in Flutter", "22:10", "3tm-R7ymwhc"),
        lesson(6, "Creating Custom Widgets", "18:55", "J4BVaXkwmM8"),
        lesson(7, "Animations in Flutter", "20:30", "GXIJJkq_H8g"),
    ];

    Course {
        id: "flutter-masterclass".to_owned(),
        title: "Flutter Masterclass (Dart, APIs, Firebase & More)".to_owned(),
        category: "IT & Software".to_owned(),
        lessons,
    }
}
