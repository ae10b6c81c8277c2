//! Keep-alive pinger
//!
//! Probes a configured list of Supabase-style REST endpoints on demand so they
//! are not suspended for inactivity, and reports per-target health.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use controllers::configure;
pub use errors::{PingerError, Result};
pub use models::report::{ProbeReport, ProbeResult};
pub use models::target::ProbeTarget;
pub use state::AppState;
