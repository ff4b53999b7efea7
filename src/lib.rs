//! # RouteKit
//!
//! Automatic connector routing for interactive diagram editors.
//!
//! Given two placed rectangles on a plane cluttered with other rectangles,
//! RouteKit computes a walkable polyline between them that avoids blocked
//! regions, optionally keeps away from clutter, and smooths the result.
//!
//! ## Architecture
//!
//! RouteKit is organized as a workspace with multiple crates:
//!
//! 1. **routekit-core** - Points, rectangles, collision primitives, scene model, errors
//! 2. **routekit-settings** - Routing, smoothing and hit-test configuration
//! 3. **routekit-router** - Grid rasterizer, A*, simplifier, smoother, route sessions
//! 4. **routekit** - This crate: logging setup, re-exports and the `routekit` binary
//!
//! ## Features
//!
//! - **Grid A***: 8-directional search without corner cutting, bounded by an expansion budget
//! - **Clutter Avoidance**: Optional proximity penalty near obstacles
//! - **Simplification**: Distance thinning and line-of-sight shortcutting
//! - **Smoothing**: Rounded corners or Catmull-Rom splines
//! - **Interactive Helpers**: Path and rectangle hit-testing, endpoint-drag checks

pub mod cli;

pub use routekit_core::{
    Entity, EntityId, EntityKind, Error, NoRouteReason, Point, Rect, Result, RouteError, Scene,
    ZoneKind,
};

pub use routekit_router::{
    check_endpoint_drag, finish_freehand, hit_threshold, nearest_path, path_hit, rect_hit,
    EndpointCheck, HitTester, RoutePlan, RouteSession, RoutedPath, Router,
};

pub use routekit_settings::{
    Config, HitTestSettings, RoutingSettings, SettingsError, SmoothingMode, SmoothingSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr (stdout carries command output)
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging with one JSON object per event on stderr
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .json();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}
