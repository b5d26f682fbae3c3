//! Country Search - country metadata lookup service
//!
//! Looks up country name, capital, currency and population from the REST
//! Countries API and keeps results in an in-memory expiring cache.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;

pub use api::AppState;
pub use cache::ExpiringCache;
pub use config::Config;
pub use tasks::{spawn_sweep_task, SweepHandle};
