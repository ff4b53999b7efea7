//! Routing pipeline.
//!
//! One call runs the whole pipeline on freshly allocated state:
//!
//! ```text
//! validate -> rasterize -> proximity field (weight > 0) -> A*
//!          -> cell centers -> pin ends -> simplify -> line of sight
//!          -> smooth -> pin ends
//! ```
//!
//! Nothing outlives the call, so a `Router` is plain data and can be cloned
//! into as many threads as the caller likes.

use routekit_core::{Cell, EntityId, Point, Rect, RouteError, Scene};
use routekit_settings::{
    Config, ConfigError, RoutingSettings, SettingsError, SmoothingMode, SmoothingSettings,
};
use tracing::{debug, trace, warn};

use crate::astar::{GridSearch, SearchConfig};
use crate::grid::Grid;
use crate::path::{pin_endpoints, RoutedPath};
use crate::proximity::ProximityField;
use crate::simplify::{line_of_sight_reduce, simplify};
use crate::smoothing::smooth;

/// Everything one routing run produced, for inspection and debugging.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// Grid after the search; start and end cells may have been cleared.
    pub grid: Grid,
    /// Raw search result, start and end cells included.
    pub cells: Vec<Cell>,
    /// Polyline after thinning and line-of-sight reduction, before smoothing.
    pub simplified: Vec<Point>,
    /// Final smoothed route.
    pub path: RoutedPath,
    /// Nodes the search expanded.
    pub expansions: usize,
}

/// Obstacle-avoiding router between rectangular entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Router {
    routing: RoutingSettings,
    smoothing: SmoothingSettings,
}

impl Router {
    pub fn new(routing: RoutingSettings, smoothing: SmoothingSettings) -> Self {
        Self { routing, smoothing }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.routing.clone(), config.smoothing.clone())
    }

    pub fn routing(&self) -> &RoutingSettings {
        &self.routing
    }

    pub fn smoothing(&self) -> &SmoothingSettings {
        &self.smoothing
    }

    pub fn set_smoothing_mode(&mut self, mode: SmoothingMode) {
        self.smoothing.mode = mode;
    }

    /// Route between two entities of `scene`.
    ///
    /// Every other blocking entity of the scene is an obstacle; the two
    /// endpoints themselves never are.
    pub fn route(
        &self,
        scene: &Scene,
        start_id: EntityId,
        end_id: EntityId,
    ) -> Result<RoutedPath, RouteError> {
        if start_id == end_id {
            return Err(RouteError::degenerate(format!(
                "start and end are the same entity {}",
                start_id
            )));
        }
        let start = scene
            .get(start_id)
            .ok_or(RouteError::UnknownEntity(start_id))?;
        let end = scene.get(end_id).ok_or(RouteError::UnknownEntity(end_id))?;

        let blocking = scene.blocking_rects(&[start_id, end_id]);
        debug!(
            "[Router] route {} -> {} with {} obstacles",
            start_id,
            end_id,
            blocking.len()
        );
        self.route_between(&start.rect, &end.rect, &blocking)
    }

    /// Route from the center of `start` to the center of `end` around `blocking`.
    pub fn route_between(
        &self,
        start: &Rect,
        end: &Rect,
        blocking: &[Rect],
    ) -> Result<RoutedPath, RouteError> {
        self.plan(start, end, blocking).map(|plan| plan.path)
    }

    /// Run the pipeline and keep the intermediate results.
    pub fn plan(
        &self,
        start: &Rect,
        end: &Rect,
        blocking: &[Rect],
    ) -> Result<RoutePlan, RouteError> {
        self.validate()?;

        let mut grid = Grid::rasterize(blocking, start, end, &self.routing)?;
        let field = (self.routing.proximity_weight > 0.0)
            .then(|| ProximityField::build(&grid, self.routing.influence_radius_cells));

        let start_point = start.center();
        let end_point = end.center();
        let start_cell = grid.cell_at(&start_point);
        let end_cell = grid.cell_at(&end_point);
        debug!(
            "[Router] grid {}x{} ({} blocked), start=({},{}) end=({},{})",
            grid.rows(),
            grid.cols(),
            grid.blocked_count(),
            start_cell.row,
            start_cell.col,
            end_cell.row,
            end_cell.col
        );

        let (found, expansions) = {
            let mut search = GridSearch::new(
                &mut grid,
                field.as_ref(),
                SearchConfig::from(&self.routing),
            );
            let found = search.find_path(start_cell, end_cell);
            (found, search.expansions())
        };
        let cells = found.map_err(|reason| {
            debug!("[Router] no route after {} expansions: {}", expansions, reason);
            RouteError::from(reason)
        })?;

        let mut points: Vec<Point> = cells.iter().map(|&c| grid.cell_center(c)).collect();
        pin_endpoints(&mut points, start_point, end_point);

        // Thinning below half a cell never drops a grid vertex.
        let tolerance = self
            .routing
            .simplify_tolerance
            .min(self.routing.cell_size / 2.0);
        let thinned = simplify(&points, tolerance);
        let simplified = line_of_sight_reduce(&thinned, &grid);
        trace!(
            "[Router] {} cells -> {} thinned -> {} after line of sight",
            cells.len(),
            thinned.len(),
            simplified.len()
        );

        let path = RoutedPath::pinned(
            smooth(&simplified, &self.smoothing),
            start_point,
            end_point,
        );
        debug!(
            "[Router] routed {} points, length {:.1}, {} expansions",
            path.len(),
            path.length(),
            expansions
        );

        Ok(RoutePlan {
            grid,
            cells,
            simplified,
            path,
            expansions,
        })
    }

    fn validate(&self) -> Result<(), RouteError> {
        self.routing
            .validate()
            .and_then(|_| self.smoothing.validate())
            .map_err(|err| {
                warn!("[Router] rejecting configuration: {}", err);
                config_error(err)
            })
    }
}

fn config_error(err: SettingsError) -> RouteError {
    match err {
        SettingsError::InvalidSetting { key, reason } => RouteError::invalid_config(key, reason),
        SettingsError::Config(ConfigError::ValueOutOfRange { key, value }) => {
            RouteError::invalid_config(key, format!("value {} out of range", value))
        }
        other => RouteError::invalid_config("config", other.to_string()),
    }
}
