pub mod core;
pub mod error;

pub use crate::core::ballistics::{
    DEFAULT_TIME_STEP_S, EARTH_GRAVITY_MPS2, LaunchParameters, MAX_SAMPLES, TrajectoryResult,
    TrajectorySample, simulate, simulate_with_step,
};
pub use crate::core::scenario::{GeoPoint, LaunchSite, Missile};
pub use crate::error::SimError;
