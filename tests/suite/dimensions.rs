//! Viewport classification and dimension derivation properties

use campus_types::{
    MAX_CONTENT_WIDTH, SizePreset, ViewportClass, derive_dimensions,
};

#[test]
fn viewport_classification_boundaries() {
    assert_eq!(ViewportClass::from_width(640), ViewportClass::Mobile);
    assert_eq!(ViewportClass::from_width(641), ViewportClass::Tablet);
    assert_eq!(ViewportClass::from_width(1024), ViewportClass::Tablet);
    assert_eq!(ViewportClass::from_width(1025), ViewportClass::Desktop);
}

#[test]
fn non_mobile_width_is_clamped_nominal_width() {
    for preset in SizePreset::ALL {
        for viewport in [ViewportClass::Tablet, ViewportClass::Desktop] {
            let spec = preset.spec();
            let dim = derive_dimensions(preset, viewport);
            assert!(
                (dim.width - spec.width.min(MAX_CONTENT_WIDTH)).abs() < f32::EPSILON,
                "width mismatch for {preset:?} on {viewport:?}"
            );
            if spec.aspect_ratio != 0.0 {
                assert!(
                    (dim.height - spec.aspect_ratio * dim.width).abs() < f32::EPSILON,
                    "height mismatch for {preset:?} on {viewport:?}"
                );
            }
        }
    }
}

#[test]
fn mobile_overrides_only_apply_to_oversized_presets() {
    for preset in SizePreset::ALL {
        let mobile = derive_dimensions(preset, ViewportClass::Mobile);
        let desktop = derive_dimensions(preset, ViewportClass::Desktop);
        match preset {
            SizePreset::Massive => {
                assert!((mobile.width - 350.0).abs() < f32::EPSILON);
                assert!((mobile.height - 700.0).abs() < f32::EPSILON);
            }
            SizePreset::Ultra => {
                assert!((mobile.width - 350.0).abs() < f32::EPSILON);
                assert!((mobile.height - 400.0).abs() < f32::EPSILON);
            }
            _ => {
                assert!((mobile.width - desktop.width).abs() < f32::EPSILON);
                assert!((mobile.height - desktop.height).abs() < f32::EPSILON);
            }
        }
    }
}

#[test]
fn corner_radius_passes_through_from_the_preset() {
    for preset in SizePreset::ALL {
        for viewport in [
            ViewportClass::Mobile,
            ViewportClass::Tablet,
            ViewportClass::Desktop,
        ] {
            let dim = derive_dimensions(preset, viewport);
            assert!((dim.corner_radius - preset.spec().corner_radius).abs() < f32::EPSILON);
        }
    }
}
