//! Viewport classification and pixel dimension derivation for the island.

use serde::{Deserialize, Serialize};

use crate::preset::SizePreset;

/// Widths at or below this are classified as mobile.
pub const MOBILE_MAX_WIDTH: u16 = 640;
/// Widths at or below this (and above mobile) are classified as tablet.
pub const TABLET_MAX_WIDTH: u16 = 1024;

/// The island never renders wider than this, whatever the preset says.
pub const MAX_CONTENT_WIDTH: f32 = 691.0;

const MOBILE_FIXED_WIDTH: f32 = 350.0;
const MAX_HEIGHT_MOBILE_ULTRA: f32 = 400.0;
const MAX_HEIGHT_MOBILE_MASSIVE: f32 = 700.0;

/// Mobile/tablet/desktop bucket derived from viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width in pixels.
    #[must_use]
    pub const fn from_width(px: u16) -> Self {
        if px <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if px <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Concrete pixel footprint for rendering, derived from a preset and a
/// viewport class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

/// Pure dimension derivation.
///
/// The two oversized presets get a fixed footprint on mobile; everything else
/// clamps width to [`MAX_CONTENT_WIDTH`] and takes its height from the aspect
/// ratio, falling back to the preset's explicit height when the ratio is zero.
#[must_use]
pub fn derive_dimensions(preset: SizePreset, viewport: ViewportClass) -> Dimensions {
    let spec = preset.spec();

    match (preset, viewport) {
        (SizePreset::Massive, ViewportClass::Mobile) => Dimensions {
            width: MOBILE_FIXED_WIDTH,
            height: MAX_HEIGHT_MOBILE_MASSIVE,
            corner_radius: spec.corner_radius,
        },
        (SizePreset::Ultra, ViewportClass::Mobile) => Dimensions {
            width: MOBILE_FIXED_WIDTH,
            height: MAX_HEIGHT_MOBILE_ULTRA,
            corner_radius: spec.corner_radius,
        },
        _ => {
            let width = spec.width.min(MAX_CONTENT_WIDTH);
            let height = if spec.aspect_ratio == 0.0 {
                spec.height.unwrap_or(0.0)
            } else {
                spec.aspect_ratio * width
            };
            Dimensions {
                width,
                height,
                corner_radius: spec.corner_radius,
            }
        }
    }
}
