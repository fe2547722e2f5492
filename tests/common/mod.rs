//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use campus_engine::{CatalogError, CourseSource};
use campus_types::{Course, Lesson};

/// Build a small fixture course with `lessons` numbered lessons.
pub fn fixture_course(lessons: usize) -> Course {
    let lessons = (0..lessons)
        .map(|index| Lesson {
            title: format!("Lesson {index}"),
            duration: "05:00".to_owned(),
            video_id: format!("video-{index}"),
            color: "#F3C5C5".to_owned(),
        })
        .collect();

    Course {
        id: "fixture".to_owned(),
        title: "Fixture Course".to_owned(),
        category: "Testing".to_owned(),
        lessons,
    }
}

/// A course source serving exactly one fixture course.
pub struct FixtureSource(pub Course);

impl CourseSource for FixtureSource {
    fn fetch_course(&self, id: &str) -> Result<Course, CatalogError> {
        if self.0.id == id {
            Ok(self.0.clone())
        } else {
            Err(CatalogError::CourseNotFound { id: id.to_owned() })
        }
    }
}
