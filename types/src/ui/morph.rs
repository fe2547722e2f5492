//! Render-side interpolation between island footprints.

use std::time::Duration;

use crate::preset::SizePreset;

/// Eases the rendered island between its previous and current footprint.
///
/// Restarted by the engine whenever the current size tag changes; the tui
/// layer samples [`MorphEffect::progress`] each frame and interpolates the
/// derived dimensions. Purely cosmetic - the machine's state is already at
/// the target while the morph runs.
#[derive(Debug, Clone)]
pub struct MorphEffect {
    from: SizePreset,
    to: SizePreset,
    elapsed: Duration,
    duration: Duration,
}

impl MorphEffect {
    #[must_use]
    pub fn new(from: SizePreset, to: SizePreset, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Linear progress in `[0, 1]`. A zero-duration morph is already done.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn source_size(&self) -> SizePreset {
        self.from
    }

    #[must_use]
    pub fn target_size(&self) -> SizePreset {
        self.to
    }
}
