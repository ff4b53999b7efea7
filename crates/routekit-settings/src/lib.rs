//! RouteKit Settings Crate
//!
//! Routing engine configuration: grid resolution, clutter avoidance, search
//! budget, smoothing strategy and interactive hit-test thresholds, with
//! validation and JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{
    Config, HitTestSettings, RoutingSettings, SmoothingMode, SmoothingSettings,
    MAX_INFLUENCE_RADIUS_CELLS,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
