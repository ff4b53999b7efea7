//! Configuration and settings management for RouteKit
//!
//! Configuration is organized into logical sections:
//! - Routing settings (grid resolution, clearance, clutter avoidance, search budget)
//! - Smoothing settings (strategy and its parameters, freehand thinning)
//! - Hit-test settings (click thresholds for the interactive layer)
//!
//! Every value here is a tunable default; none of them is part of a
//! behavioral contract. Files may be JSON or TOML, chosen by extension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Post-processing applied to a simplified route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SmoothingMode {
    /// Keep the simplified polyline as is
    None,
    /// Cut each corner with two shrink points
    Rounded,
    /// Interpolate a Catmull-Rom spline through the vertices
    CatmullRom,
}

impl Default for SmoothingMode {
    fn default() -> Self {
        Self::Rounded
    }
}

impl fmt::Display for SmoothingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Rounded => write!(f, "rounded"),
            Self::CatmullRom => write!(f, "catmullRom"),
        }
    }
}

impl FromStr for SmoothingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "none" | "off" => Ok(Self::None),
            "rounded" | "round" => Ok(Self::Rounded),
            "catmullrom" | "spline" => Ok(Self::CatmullRom),
            other => Err(format!("Unknown smoothing mode: {}", other)),
        }
    }
}

/// Largest accepted `routing.influence_radius_cells`
pub const MAX_INFLUENCE_RADIUS_CELLS: usize = 64;

/// Grid construction and search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingSettings {
    /// World units per grid cell
    pub cell_size: f64,
    /// Extra room around the query bounds so routes can pass edge obstacles
    pub padding: f64,
    /// Clearance added around every blocking rectangle
    pub safety_margin: f64,
    /// Weight of the clutter penalty (0 disables the proximity field)
    pub proximity_weight: f64,
    /// Reach of the clutter penalty, in cells
    pub influence_radius_cells: usize,
    /// Node expansions before the search gives up
    pub max_expansions: usize,
    /// Minimum spacing kept by the thinning pass on grid output
    pub simplify_tolerance: f64,
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            padding: 40.0,
            safety_margin: 6.0,
            proximity_weight: 0.0,
            influence_radius_cells: 4,
            max_expansions: 20_000,
            simplify_tolerance: 4.0,
        }
    }
}

impl RoutingSettings {
    /// Enable clutter avoidance with the given weight
    pub fn with_proximity_weight(mut self, weight: f64) -> Self {
        self.proximity_weight = weight;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SettingsError::invalid("routing.cell_size", "must be > 0"));
        }
        non_negative("routing.padding", self.padding)?;
        non_negative("routing.safety_margin", self.safety_margin)?;
        non_negative("routing.proximity_weight", self.proximity_weight)?;
        non_negative("routing.simplify_tolerance", self.simplify_tolerance)?;
        if self.influence_radius_cells > MAX_INFLUENCE_RADIUS_CELLS {
            return Err(ConfigError::ValueOutOfRange {
                key: "routing.influence_radius_cells".to_string(),
                value: self.influence_radius_cells.to_string(),
            }
            .into());
        }
        if self.max_expansions == 0 {
            return Err(SettingsError::invalid(
                "routing.max_expansions",
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Smoothing strategy and parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingSettings {
    pub mode: SmoothingMode,
    /// Largest distance a rounded corner is cut back from its vertex
    pub corner_radius: f64,
    /// Samples per Catmull-Rom span
    pub spline_substeps: usize,
    /// Spline samples closer than this to the previous sample are dropped
    pub min_sample_spacing: f64,
    /// Thinning tolerance for freehand-drawn paths
    pub freehand_tolerance: f64,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            mode: SmoothingMode::default(),
            corner_radius: 12.0,
            spline_substeps: 10,
            min_sample_spacing: 1.0,
            freehand_tolerance: 4.0,
        }
    }
}

impl SmoothingSettings {
    pub fn with_mode(mut self, mode: SmoothingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> SettingsResult<()> {
        non_negative("smoothing.corner_radius", self.corner_radius)?;
        non_negative("smoothing.min_sample_spacing", self.min_sample_spacing)?;
        non_negative("smoothing.freehand_tolerance", self.freehand_tolerance)?;
        if self.spline_substeps == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "smoothing.spline_substeps".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Thresholds for clicks on paths and rectangles, in screen pixels at zoom 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestSettings {
    pub path_threshold_px: f64,
    pub rect_tolerance_px: f64,
}

impl Default for HitTestSettings {
    fn default() -> Self {
        Self {
            path_threshold_px: 5.0,
            rect_tolerance_px: 0.0,
        }
    }
}

impl HitTestSettings {
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.path_threshold_px.is_finite() && self.path_threshold_px > 0.0) {
            return Err(SettingsError::invalid(
                "hit_test.path_threshold_px",
                "must be > 0",
            ));
        }
        non_negative("hit_test.rect_tolerance_px", self.rect_tolerance_px)
    }
}

/// Complete routing configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub routing: RoutingSettings,
    pub smoothing: SmoothingSettings,
    pub hit_test: HitTestSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded routing config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.routing.validate()?;
        self.smoothing.validate()?;
        self.hit_test.validate()
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}

fn non_negative(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(key, "must be >= 0"))
    }
}
