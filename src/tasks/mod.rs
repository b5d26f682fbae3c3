//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiration sweep: removes expired cache entries on a fixed interval

mod sweep;

pub use sweep::{spawn_sweep_task, SweepHandle, DEFAULT_SWEEP_INTERVAL, MIN_SWEEP_INTERVAL};
