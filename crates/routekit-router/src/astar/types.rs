//! A* search types.

use routekit_core::Cell;
use routekit_settings::RoutingSettings;
use std::cmp::Ordering;

/// A node in the search arena. `parent` indexes the same arena.
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub cell: Cell,
    pub g_cost: f64,
    pub f_cost: f64,
    pub parent: Option<usize>,
    /// Discovery order, used to break ties between equal `f_cost`.
    pub seq: usize,
}

/// Open-set entry. Entries become stale when their node is relaxed; the
/// search skips them by comparing `g_cost` with the arena.
#[derive(Clone, Copy, Debug)]
pub(super) struct OpenEntry {
    pub node: usize,
    pub g_cost: f64,
    pub f_cost: f64,
    pub seq: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest f first, then earliest discovery
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search parameters
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Multiplier of the proximity score added to each step (0 disables it)
    pub proximity_weight: f64,
    /// Maximum number of nodes to expand before giving up
    pub max_expansions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&RoutingSettings::default())
    }
}

impl From<&RoutingSettings> for SearchConfig {
    fn from(settings: &RoutingSettings) -> Self {
        Self {
            proximity_weight: settings.proximity_weight,
            max_expansions: settings.max_expansions,
        }
    }
}

impl SearchConfig {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    pub fn with_proximity_weight(mut self, weight: f64) -> Self {
        self.proximity_weight = weight;
        self
    }
}
