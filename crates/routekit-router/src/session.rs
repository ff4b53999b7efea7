//! Two-phase routing for the interactive "connect" gesture.
//!
//! The editor calls [`RouteSession::begin_route`] when the user picks the
//! first entity and [`RouteSession::complete_route`] when they pick the
//! second. Debouncing repeated clicks is left to the caller.

use routekit_core::{EntityId, RouteError, Scene};
use tracing::debug;

use crate::path::RoutedPath;
use crate::router::Router;

/// Holds the pending start entity between the two clicks of a route gesture.
#[derive(Debug, Clone, Default)]
pub struct RouteSession {
    router: Router,
    pending: Option<EntityId>,
}

impl RouteSession {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            pending: None,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Remember `start` as the first endpoint, replacing any earlier one.
    pub fn begin_route(&mut self, start: EntityId) {
        if let Some(previous) = self.pending.replace(start) {
            debug!("[Session] replacing pending start {} with {}", previous, start);
        } else {
            debug!("[Session] begin route at {}", start);
        }
    }

    pub fn pending_start(&self) -> Option<EntityId> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending start, returning it if there was one.
    pub fn cancel(&mut self) -> Option<EntityId> {
        self.pending.take()
    }

    /// Route from the pending start to `end`.
    ///
    /// The pending start is consumed whether or not routing succeeds.
    pub fn complete_route(
        &mut self,
        scene: &Scene,
        end: EntityId,
    ) -> Result<RoutedPath, RouteError> {
        let start = self.pending.take().ok_or(RouteError::NoPendingRoute)?;
        self.router.route(scene, start, end)
    }
}
