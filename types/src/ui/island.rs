//! Size-transition state machine for the dynamic island widget.
//!
//! The machine owns a current and previous size tag, an ordered queue of
//! [`AnimationStep`]s, and an animating flag. The queue is drained by
//! [`IslandState::advance`], called once per frame with the elapsed time, so
//! every transition runs under `&mut self` and is atomic with respect to the
//! drain. Scheduling while a drain is in flight replaces the queue and
//! restarts the step clock (cancel-and-replace).

use std::collections::VecDeque;
use std::time::Duration;

use crate::animation::AnimationStep;
use crate::preset::SizePreset;

/// Configuration for a new island instance: the starting size and an optional
/// transition sequence that begins draining immediately.
#[derive(Debug, Clone, Default)]
pub struct IslandConfig {
    pub initial_size: SizePreset,
    pub initial_animation: Vec<AnimationStep>,
}

/// The island size-transition state machine.
///
/// One instance exists per lesson-player session, owned by the `App`; views
/// read it through shared references and mutate it only through the named
/// transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct IslandState {
    size: SizePreset,
    previous_size: SizePreset,
    queue: VecDeque<AnimationStep>,
    is_animating: bool,
    /// Time accumulated toward the head step's delay.
    step_elapsed: Duration,
}

impl IslandState {
    #[must_use]
    pub fn new(config: IslandConfig) -> Self {
        let is_animating = !config.initial_animation.is_empty();
        Self {
            size: config.initial_size,
            previous_size: SizePreset::Empty,
            queue: config.initial_animation.into(),
            is_animating,
            step_elapsed: Duration::ZERO,
        }
    }

    /// Reset to a fresh size. The previous size is forced to `Empty` no matter
    /// what was held before; any pending queue is left in place but inert.
    pub fn initialize(&mut self, size: SizePreset) {
        self.size = size;
        self.previous_size = SizePreset::Empty;
        self.is_animating = false;
        self.step_elapsed = Duration::ZERO;
    }

    /// Direct, synchronous size assignment. Shifts the current size into
    /// `previous_size` and stops any in-flight drain (queue membership is not
    /// cleared; a later [`Self::schedule_animation`] replaces it wholesale).
    pub fn set_size(&mut self, size: SizePreset) {
        self.previous_size = self.size;
        self.size = size;
        self.is_animating = false;
        self.step_elapsed = Duration::ZERO;
    }

    /// Schedule an ordered transition sequence. An empty sequence is a silent
    /// no-op. A non-empty one replaces whatever was queued before, restarts
    /// the step clock, and marks the machine animating, delay-0 steps
    /// included.
    pub fn schedule_animation<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = AnimationStep>,
    {
        let queue: VecDeque<AnimationStep> = steps.into_iter().collect();
        if queue.is_empty() {
            return;
        }
        self.queue = queue;
        self.step_elapsed = Duration::ZERO;
        self.is_animating = true;
    }

    /// Drive the drain by `delta` of elapsed time.
    ///
    /// Applies every step whose sequential delay has been reached, in order,
    /// using the same previous/current shift as [`Self::set_size`]. When the
    /// last step lands, the queue empties and the animating flag clears.
    pub fn advance(&mut self, delta: Duration) {
        if !self.is_animating {
            return;
        }
        self.step_elapsed = self.step_elapsed.saturating_add(delta);

        while let Some(step) = self.queue.front().copied() {
            let delay = step.delay();
            if self.step_elapsed < delay {
                return;
            }
            // Surplus time carries into the next step's delay.
            self.step_elapsed -= delay;
            self.queue.pop_front();
            self.previous_size = self.size;
            self.size = step.size;
        }

        self.is_animating = false;
        self.step_elapsed = Duration::ZERO;
    }

    #[must_use]
    pub fn size(&self) -> SizePreset {
        self.size
    }

    #[must_use]
    pub fn previous_size(&self) -> SizePreset {
        self.previous_size
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// Steps still waiting in the queue.
    #[must_use]
    pub fn pending_steps(&self) -> usize {
        self.queue.len()
    }
}

impl Default for IslandState {
    fn default() -> Self {
        Self::new(IslandConfig::default())
    }
}
