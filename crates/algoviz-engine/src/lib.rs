//! Algoviz Playback Engine
//!
//! Turns algorithms into interruptible, speed-controlled sequences of
//! observable state mutations.
//!
//! # Architecture
//!
//! - **Speed**: maps a 1-100 speed to the suspension after each step
//! - **RunToken**: cancellation flag owned by exactly one run
//! - **Stepper**: the step protocol (check token, mutate, suspend)
//! - **Family**: the seam an algorithm family plugs into
//! - **Controller**: single-flight start/stop/reset for one visualizer,
//!   publishing a [`Board`] through a watch channel
//!
//! # Usage
//!
//! ```ignore
//! let ctl = Controller::<Sorting>::new(vec![5, 3, 8, 1], Speed::new(80));
//! let mut frames = ctl.subscribe();
//! let run = ctl.start_named("Bubble Sort").unwrap();
//! // ... render frames as they arrive, call ctl.stop() to interrupt ...
//! run.finished().await;
//! ```

mod board;
mod config;
mod controller;
mod error;
mod family;
mod speed;
mod step;
mod token;

pub use board::{Board, RunOutcome, RunPhase};
pub use config::{EngineConfig, SEED_VAR, SPEED_VAR};
pub use controller::{Controller, RunHandle};
pub use error::{Error, Result};
pub use family::{Family, FamilyBoard};
pub use speed::{step_delay, Speed, SpeedControl, MIN_STEP_DELAY};
pub use step::{Cancelled, StepResult, Stepper};
pub use token::RunToken;
