//! Command implementations behind the `routekit` binary.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use routekit_core::{EntityId, Scene};
use routekit_router::{RoutedPath, Router};
use routekit_settings::{Config, SmoothingMode};

/// Arguments of `routekit route`.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub scene: PathBuf,
    pub from: EntityId,
    pub to: EntityId,
    pub config: Option<PathBuf>,
    pub smoothing: Option<SmoothingMode>,
}

/// Load the scene and configuration and route between the requested entities.
pub fn route_scene_file(request: &RouteRequest) -> Result<RoutedPath> {
    let json = std::fs::read_to_string(&request.scene)
        .with_context(|| format!("reading scene {}", request.scene.display()))?;
    let scene = Scene::from_json(&json)
        .with_context(|| format!("parsing scene {}", request.scene.display()))?;

    let config = match &request.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    let mut router = Router::from_config(&config);
    if let Some(mode) = request.smoothing {
        router.set_smoothing_mode(mode);
    }

    let path = router
        .route(&scene, request.from, request.to)
        .with_context(|| format!("routing {} -> {}", request.from, request.to))?;
    info!(
        points = path.len(),
        length = path.length(),
        "routed {} -> {}",
        request.from,
        request.to
    );
    Ok(path)
}

/// Render a routed path as pretty JSON for stdout.
pub fn path_to_json(path: &RoutedPath) -> Result<String> {
    Ok(serde_json::to_string_pretty(path)?)
}

/// Write the default configuration; the format follows the file extension.
pub fn write_default_config(output: &Path) -> Result<()> {
    Config::default()
        .save_to_file(output)
        .with_context(|| format!("writing config {}", output.display()))?;
    info!(path = %output.display(), "wrote default config");
    Ok(())
}
