//! # RouteKit Core
//!
//! Core types and utilities shared by the RouteKit crates.
//! Provides the world-space value types, the geometric collision primitives
//! used by both the router and the editor's interactive layer, the scene
//! model the router reads from, and the error taxonomy.

pub mod error;
pub mod geometry;
pub mod scene;

pub use error::{Error, NoRouteReason, Result, RouteError, SmoothError};

pub use geometry::{
    bounding_rect, point_in_rect, point_segment_distance, polyline_length,
    segment_intersects_rect, segments_intersect, Cell, Point, Rect,
};

pub use scene::{Entity, EntityId, EntityKind, Scene, ZoneKind};
