//! Error handling for RouteKit
//!
//! Provides the error types for every layer of the routing engine:
//! - Route errors (no route, degenerate query, bad configuration)
//! - Smoothing errors (not enough control points)
//!
//! Expected "no path" outcomes are ordinary values of [`RouteError`]; only an
//! invalid configuration is a hard failure. All error types use `thiserror`.

use thiserror::Error;

use crate::scene::EntityId;

/// Why a search finished without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRouteReason {
    /// The open set emptied before the goal was expanded.
    OpenSetExhausted,
    /// The expansion budget ran out.
    ExpansionCapReached {
        /// The configured expansion cap.
        cap: usize,
    },
    /// The start or end cell lies outside the grid.
    OutOfBounds,
}

impl std::fmt::Display for NoRouteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenSetExhausted => write!(f, "no walkable connection"),
            Self::ExpansionCapReached { cap } => {
                write!(f, "search budget of {} expansions exhausted", cap)
            }
            Self::OutOfBounds => write!(f, "endpoint outside the routing grid"),
        }
    }
}

/// Route error type
///
/// Represents the outcome of a routing request that did not produce a path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    /// The search finished without reaching the goal
    #[error("No route found: {reason}")]
    NoRouteFound {
        /// Why the search stopped.
        reason: NoRouteReason,
    },

    /// The query cannot be turned into a usable grid
    #[error("Degenerate routing query: {reason}")]
    DegenerateQuery {
        /// What made the query degenerate.
        reason: String,
    },

    /// A routing parameter is out of range
    #[error("Invalid routing configuration '{key}': {reason}")]
    InvalidConfig {
        /// The offending setting.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The scene has no entity with this id
    #[error("Unknown entity {0}")]
    UnknownEntity(EntityId),

    /// `complete_route` was called before `begin_route`
    #[error("No route in progress")]
    NoPendingRoute,
}

impl RouteError {
    /// Create a degenerate-query error from a message
    pub fn degenerate(reason: impl Into<String>) -> Self {
        RouteError::DegenerateQuery {
            reason: reason.into(),
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_config(key: impl Into<String>, reason: impl Into<String>) -> Self {
        RouteError::InvalidConfig {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller should present this as "no route".
    ///
    /// Degenerate queries are reported to the user the same way as a failed
    /// search.
    pub fn is_no_route(&self) -> bool {
        matches!(
            self,
            RouteError::NoRouteFound { .. } | RouteError::DegenerateQuery { .. }
        )
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, RouteError::InvalidConfig { .. })
    }
}

impl From<NoRouteReason> for RouteError {
    fn from(reason: NoRouteReason) -> Self {
        RouteError::NoRouteFound { reason }
    }
}

/// Smoothing error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothError {
    /// Catmull-Rom interpolation needs at least three points
    #[error("Catmull-Rom smoothing needs at least 3 points, got {got}")]
    InsufficientSplinePoints {
        /// Number of points supplied.
        got: usize,
    },
}

/// Main error type for RouteKit
///
/// A unified error type used by the outer layers (file loading, CLI).
#[derive(Error, Debug)]
pub enum Error {
    /// Routing error
    #[error(transparent)]
    Route(#[from] RouteError),

    /// Smoothing error
    #[error(transparent)]
    Smooth(#[from] SmoothError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene or path (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a "no route" outcome
    pub fn is_no_route(&self) -> bool {
        matches!(self, Error::Route(e) if e.is_no_route())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
