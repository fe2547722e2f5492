//! Course catalog and app wiring

use std::time::Duration;

use campus_engine::{App, CampusConfig, CatalogError, CourseSource, SizePreset, StaticCatalog};

use crate::common::{FixtureSource, fixture_course};

#[test]
fn static_catalog_serves_the_inline_course() {
    let catalog = StaticCatalog::default();
    let course = catalog.fetch_course("flutter-masterclass").unwrap();
    assert_eq!(
        course.title,
        "Flutter Masterclass (Dart, APIs, Firebase & More)"
    );
    assert_eq!(course.lesson_count(), 8);
    assert_eq!(course.lessons[0].video_id, "pTJJsmejUOQ");
}

#[test]
fn unknown_course_id_is_an_error() {
    let catalog = StaticCatalog::default();
    assert!(matches!(
        catalog.fetch_course("nope"),
        Err(CatalogError::CourseNotFound { .. })
    ));
}

#[test]
fn app_refuses_a_missing_course() {
    let source = FixtureSource(fixture_course(3));
    // Default config points at the flutter course, which this source lacks.
    let result = App::new(&source, &CampusConfig::default());
    assert!(result.is_err());
}

#[test]
fn app_completes_a_fixture_course() {
    let mut course = fixture_course(2);
    course.id = "flutter-masterclass".to_owned();
    let source = FixtureSource(course);

    let mut app = App::new(&source, &CampusConfig::default()).unwrap();
    assert!(!app.all_lessons_completed());

    app.select_lesson(1);
    assert!(app.all_lessons_completed());

    // The completion flourish settles on the certificate call-out.
    app.advance(Duration::from_secs(1));
    assert_eq!(app.island().size(), SizePreset::CompactLong);
}
