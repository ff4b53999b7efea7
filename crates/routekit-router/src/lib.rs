//! # RouteKit Router
//!
//! Automatic connector routing for the diagram editor. Given two placed
//! rectangles on a plane cluttered with other rectangles, computes a walkable
//! polyline between their centers and post-processes it into a smooth route.
//!
//! ## Pipeline
//!
//! ```text
//! Scene / rects
//!   └── Grid (rasterized blocking rects + safety margin)
//!         ├── ProximityField (optional clutter penalty)
//!         └── A* (8-directional, no corner cutting)
//!               └── simplify + line of sight
//!                     └── smoothing (rounded corners | Catmull-Rom)
//!                           └── RoutedPath
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use routekit_router::{RouteSession, Router};
//!
//! let mut session = RouteSession::new(Router::default());
//! session.begin_route(first);
//! let path = session.complete_route(&scene, second)?;
//! ```

pub mod astar;
pub mod freehand;
pub mod grid;
pub mod path;
pub mod proximity;
pub mod router;
pub mod session;
pub mod simplify;
pub mod smoothing;

pub use astar::{find_path, GridSearch, SearchConfig};
pub use freehand::finish_freehand;
pub use grid::{Grid, MAX_GRID_CELLS};
pub use hit_test::{
    check_endpoint_drag, hit_threshold, nearest_path, path_hit, rect_hit, rect_hit_within,
    EndpointCheck, HitTester,
};
pub use path::RoutedPath;
pub use proximity::ProximityField;
pub use router::{RoutePlan, Router};
pub use session::RouteSession;
pub use simplify::{line_of_sight_reduce, segment_is_clear, simplify};
pub use smoothing::{catmull_rom, round_corners, smooth};

pub use routekit_core::{Point, Rect, RouteError};
pub use routekit_settings::{SmoothingMode, SmoothingSettings};
