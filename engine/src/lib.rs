//! Core engine for Campus - application state without TUI dependencies.
//!
//! The engine owns one [`App`] per run: the course being played, the lesson
//! progress tracker, the island size machine, and the view state the tui
//! layer reads each frame.

mod app;
mod catalog;
mod config;
mod progress;

pub use app::{App, CELL_PIXEL_WIDTH, Focus, GRID_COLUMNS, NAV_MENU_ITEMS, NavMenu, Route};
pub use catalog::{COLOR_SCHEMES, CatalogError, ColorScheme, CourseSource, StaticCatalog};
pub use config::{AppSection, CampusConfig, ConfigError, IslandSection};
pub use progress::LessonProgress;

// Re-export the domain types views need alongside the engine API.
pub use campus_types::ui::{IslandConfig, IslandState, MorphEffect, UiOptions, ViewState};
pub use campus_types::{
    AnimationStep, Course, Dimensions, Lesson, SizePreset, ViewportClass, derive_dimensions,
};
