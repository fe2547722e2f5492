//! Animation steps for scheduled island size transitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::preset::SizePreset;

/// One step of a scheduled transition: a target preset and the delay to wait
/// before applying it. Delays are sequential, each measured from the moment
/// the previous step applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub size: SizePreset,
    /// Milliseconds to wait before this step applies. Absent in serialized
    /// form means apply immediately.
    #[serde(default)]
    pub delay_ms: u64,
}

impl AnimationStep {
    #[must_use]
    pub const fn new(size: SizePreset, delay_ms: u64) -> Self {
        Self { size, delay_ms }
    }

    /// A step with no delay.
    #[must_use]
    pub const fn immediate(size: SizePreset) -> Self {
        Self::new(size, 0)
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
