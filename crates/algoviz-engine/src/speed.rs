//! Playback speed and the delay policy derived from it.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay at speed zero, before any speed-proportional reduction.
const BASE_DELAY_US: u64 = 500_000;

/// Delay shaved off per unit of speed.
const DELAY_PER_SPEED_US: u64 = 4_900;

/// Shortest suspension a step ever gets, so a renderer is never starved.
pub const MIN_STEP_DELAY: Duration = Duration::from_millis(10);

/// Playback speed on a 1-100 scale. Higher is faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Speed(u8);

impl Speed {
    /// Slowest speed.
    pub const MIN: Speed = Speed(1);
    /// Fastest speed.
    pub const MAX: Speed = Speed(100);
    /// Speed a fresh visualizer starts at.
    pub const DEFAULT: Speed = Speed(50);

    /// Create a speed, clamping into `1..=100`.
    pub fn new(value: u8) -> Self {
        Speed(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Raw speed value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Suspension for one step at this speed.
    pub fn delay(self) -> Duration {
        step_delay(self)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Speed {
    fn from(value: u8) -> Self {
        Speed::new(value)
    }
}

/// Map a speed to the suspension applied after each step.
///
/// Linear from 500ms at speed 0 down to the [`MIN_STEP_DELAY`] floor, which
/// speed 100 reaches exactly.
pub fn step_delay(speed: Speed) -> Duration {
    let reduction = u64::from(speed.value()) * DELAY_PER_SPEED_US;
    Duration::from_micros(BASE_DELAY_US.saturating_sub(reduction)).max(MIN_STEP_DELAY)
}

/// Live, shareable speed setting.
///
/// Writes are visible to the next step that computes its delay; a step
/// already suspended keeps the delay it computed.
#[derive(Debug, Clone)]
pub struct SpeedControl(Arc<AtomicU8>);

impl SpeedControl {
    /// Create a control starting at `speed`.
    pub fn new(speed: Speed) -> Self {
        Self(Arc::new(AtomicU8::new(speed.value())))
    }

    /// Current speed.
    pub fn get(&self) -> Speed {
        Speed(self.0.load(Ordering::Relaxed))
    }

    /// Change the speed.
    pub fn set(&self, speed: Speed) {
        self.0.store(speed.value(), Ordering::Relaxed);
    }

    /// Delay the next step should use.
    pub fn delay(&self) -> Duration {
        step_delay(self.get())
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new(Speed::DEFAULT)
    }
}
