//! Named size presets for the dynamic island widget.
//!
//! Every preset maps to a fixed shape through [`SizePreset::spec`]. The table
//! is an exhaustive `match`, so a preset without a shape cannot exist.

use serde::{Deserialize, Serialize};

/// The shape a preset resolves to: nominal width, aspect ratio (height/width),
/// an optional explicit height for presets that don't scale by ratio, and a
/// corner radius. All values are in CSS-style pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSpec {
    pub width: f32,
    /// Height as a fraction of width. Zero means "use `height` instead".
    pub aspect_ratio: f32,
    pub height: Option<f32>,
    pub corner_radius: f32,
}

/// Enumerated size tags for the island widget.
///
/// Tags serialize to the platform's camelCase identifiers (`"compactLong"`,
/// `"minimalLeading"`, ...), which is what config files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SizePreset {
    Reset,
    Empty,
    Default,
    Compact,
    Connected,
    CompactLong,
    Large,
    Long,
    MinimalLeading,
    MinimalTrailing,
    CompactMedium,
    Medium,
    Tall,
    Ultra,
    Massive,
}

impl Default for SizePreset {
    fn default() -> Self {
        Self::Default
    }
}

impl SizePreset {
    /// All presets, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Reset,
        Self::Empty,
        Self::Default,
        Self::Compact,
        Self::Connected,
        Self::CompactLong,
        Self::Large,
        Self::Long,
        Self::MinimalLeading,
        Self::MinimalTrailing,
        Self::CompactMedium,
        Self::Medium,
        Self::Tall,
        Self::Ultra,
        Self::Massive,
    ];

    /// The camelCase tag used in serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Empty => "empty",
            Self::Default => "default",
            Self::Compact => "compact",
            Self::Connected => "connected",
            Self::CompactLong => "compactLong",
            Self::Large => "large",
            Self::Long => "long",
            Self::MinimalLeading => "minimalLeading",
            Self::MinimalTrailing => "minimalTrailing",
            Self::CompactMedium => "compactMedium",
            Self::Medium => "medium",
            Self::Tall => "tall",
            Self::Ultra => "ultra",
            Self::Massive => "massive",
        }
    }

    /// The static shape table.
    #[must_use]
    pub const fn spec(self) -> PresetSpec {
        match self {
            Self::Reset => PresetSpec {
                width: 150.0,
                aspect_ratio: 1.0,
                height: None,
                corner_radius: 20.0,
            },
            Self::Empty => PresetSpec {
                width: 0.0,
                aspect_ratio: 0.0,
                height: None,
                corner_radius: 0.0,
            },
            Self::Default => PresetSpec {
                width: 150.0,
                aspect_ratio: 44.0 / 150.0,
                height: None,
                corner_radius: 46.0,
            },
            Self::MinimalLeading | Self::MinimalTrailing => PresetSpec {
                width: 52.33,
                aspect_ratio: 44.0 / 52.33,
                height: None,
                corner_radius: 22.0,
            },
            Self::Compact => PresetSpec {
                width: 235.0,
                aspect_ratio: 44.0 / 235.0,
                height: None,
                corner_radius: 46.0,
            },
            Self::Connected => PresetSpec {
                width: 200.0,
                aspect_ratio: 44.0 / 235.0,
                height: None,
                corner_radius: 46.0,
            },
            Self::CompactLong => PresetSpec {
                width: 300.0,
                aspect_ratio: 44.0 / 235.0,
                height: None,
                corner_radius: 46.0,
            },
            Self::CompactMedium => PresetSpec {
                width: 351.0,
                aspect_ratio: 64.0 / 371.0,
                height: None,
                corner_radius: 44.0,
            },
            Self::Long => PresetSpec {
                width: 371.0,
                aspect_ratio: 84.0 / 371.0,
                height: None,
                corner_radius: 42.0,
            },
            Self::Medium => PresetSpec {
                width: 371.0,
                aspect_ratio: 210.0 / 371.0,
                height: None,
                corner_radius: 22.0,
            },
            Self::Large => PresetSpec {
                width: 371.0,
                aspect_ratio: 84.0 / 371.0,
                height: None,
                corner_radius: 42.0,
            },
            Self::Tall => PresetSpec {
                width: 371.0,
                aspect_ratio: 210.0 / 371.0,
                height: None,
                corner_radius: 42.0,
            },
            Self::Ultra => PresetSpec {
                width: 630.0,
                aspect_ratio: 630.0 / 800.0,
                height: None,
                corner_radius: 42.0,
            },
            Self::Massive => PresetSpec {
                width: 891.0,
                aspect_ratio: 1.0,
                height: Some(1900.0),
                corner_radius: 42.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_shape() {
        let spec = SizePreset::Default.spec();
        assert!((spec.width - 150.0).abs() < f32::EPSILON);
        assert!((spec.aspect_ratio - 44.0 / 150.0).abs() < f32::EPSILON);
        assert!((spec.corner_radius - 46.0).abs() < f32::EPSILON);
        assert!(spec.height.is_none());
    }

    #[test]
    fn empty_preset_is_zero_sized() {
        let spec = SizePreset::Empty.spec();
        assert!(spec.width.abs() < f32::EPSILON);
        assert!(spec.aspect_ratio.abs() < f32::EPSILON);
    }

    #[test]
    fn massive_carries_explicit_height() {
        let spec = SizePreset::Massive.spec();
        assert_eq!(spec.height, Some(1900.0));
    }

    #[test]
    fn tags_round_trip_through_serde() {
        for preset in SizePreset::ALL {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(json, format!("\"{}\"", preset.as_str()));
            let back: SizePreset = serde_json::from_str(&json).unwrap();
            assert_eq!(back, preset);
        }
    }

    #[test]
    fn minimal_variants_share_a_shape() {
        assert_eq!(
            SizePreset::MinimalLeading.spec(),
            SizePreset::MinimalTrailing.spec()
        );
    }
}
