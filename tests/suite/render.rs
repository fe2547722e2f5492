//! Render smoke tests over ratatui's test backend

use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use campus_engine::{App, CampusConfig, SizePreset, StaticCatalog};
use campus_tui::draw;

fn test_app() -> App {
    App::new(&StaticCatalog::default(), &CampusConfig::default()).unwrap()
}

fn rendered(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    format!("{:?}", terminal.backend().buffer())
}

#[test]
fn dashboard_shows_brand_and_course() {
    let mut app = test_app();
    app.set_viewport_cols(160);
    let screen = rendered(&mut app, 160, 45);

    assert!(screen.contains("Certify Blocks"));
    assert!(screen.contains("Flutter Masterclass"));
    assert!(screen.contains("Introduction to Flutter"));
}

#[test]
fn completion_banner_appears_when_done() {
    let mut app = test_app();
    app.set_viewport_cols(160);
    for index in 0..app.course().lesson_count() {
        app.select_lesson(index);
    }
    // Park the island out of the way so the banner row is unobstructed.
    app.set_island_size(SizePreset::Empty);
    app.advance(Duration::from_secs(1));
    let screen = rendered(&mut app, 160, 45);

    assert!(screen.contains("Congratulations"));
}

#[test]
fn certificate_screen_renders() {
    let mut app = test_app();
    app.set_viewport_cols(160);
    for index in 0..app.course().lesson_count() {
        app.select_lesson(index);
    }
    app.open_certificate();
    let screen = rendered(&mut app, 120, 30);

    assert!(screen.contains("Certificate of Completion"));
}

#[test]
fn menu_overlay_lists_items() {
    let mut app = test_app();
    app.set_viewport_cols(160);
    app.toggle_menu();
    let screen = rendered(&mut app, 160, 45);

    assert!(screen.contains("Address"));
    assert!(screen.contains("Logout"));
}

#[test]
fn courses_screen_shows_the_footer() {
    let mut app = test_app();
    app.set_viewport_cols(160);
    app.back_to_courses();
    let screen = rendered(&mut app, 160, 45);

    assert!(screen.contains("Swayam and Vivek"));
}
