//! A* search on the routing grid.
//!
//! 8-directional movement with unit orthogonal and √2 diagonal steps, an
//! optional proximity penalty on the entered cell, and a Chebyshev-distance
//! heuristic. Diagonals never cut the corner of a blocked cell.
//!
//! The open set is a binary heap ordered by `f`, ties broken by the order in
//! which nodes were first discovered. Nodes live in an arena and refer to
//! their parent by index.
//!
//! ```rust,ignore
//! use routekit_router::astar::{find_path, SearchConfig};
//!
//! let cells = find_path(&mut grid, None, start, end, &SearchConfig::default())?;
//! ```

mod search;
mod types;

pub use search::{find_path, GridSearch};
pub use types::SearchConfig;
