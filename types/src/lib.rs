//! Core domain types for Campus.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod animation;
mod course;
mod preset;
mod viewport;

pub mod ui;

pub use animation::AnimationStep;
pub use course::{Course, Lesson};
pub use preset::{PresetSpec, SizePreset};
pub use viewport::{
    Dimensions, MAX_CONTENT_WIDTH, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH, ViewportClass,
    derive_dimensions,
};
