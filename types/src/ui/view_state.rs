//! View state for rendering.
//!
//! Groups the state that only matters for drawing frames, separating it from
//! the application logic the engine drives.

use std::time::Instant;

use crate::viewport::ViewportClass;

use super::MorphEffect;

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

/// State related to rendering and UI display.
#[derive(Debug)]
pub struct ViewState {
    /// Current viewport bucket, reclassified on every resize.
    pub viewport: ViewportClass,
    /// Approximate pixel width backing the current classification.
    pub viewport_px: u16,
    /// In-flight island footprint interpolation, if any.
    pub morph: Option<MorphEffect>,
    /// UI options (glyphs, contrast, motion).
    pub ui_options: UiOptions,
    /// Timestamp of last frame (for animation timing).
    pub last_frame: Instant,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            viewport: ViewportClass::default(),
            viewport_px: 0,
            morph: None,
            ui_options: UiOptions::default(),
            last_frame: Instant::now(),
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self {
            ui_options,
            ..Self::default()
        }
    }
}
