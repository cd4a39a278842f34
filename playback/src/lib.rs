#[macro_use]
extern crate log;

mod driver;
mod scheduler;
mod state;

pub use driver::{AnimationDriver, Phase, MIN_DURATION_MS, MIN_SPEED_MULTIPLIER, SIMULATION_SCALE};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use state::PlaybackState;
