//! Scene model the router reads from.
//!
//! A scene is the editor's snapshot of placed entities: objects that routes
//! connect, fixed obstacles, and zones. The router only borrows a scene for the
//! duration of one query.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::geometry::{Point, Rect};

/// Stable identifier of an entity within a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a zone may be crossed by routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    Traversable,
    Restricted,
}

/// What an entity represents on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A placed object; routes start and end on objects.
    Object,
    /// A fixed obstacle.
    Obstacle,
    /// An area; only restricted zones block routes.
    Zone(ZoneKind),
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Obstacle => write!(f, "obstacle"),
            Self::Zone(ZoneKind::Traversable) => write!(f, "traversable zone"),
            Self::Zone(ZoneKind::Restricted) => write!(f, "restricted zone"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub rect: Rect,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, rect: Rect) -> Self {
        Self { id, kind, rect }
    }

    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Whether routes that do not start or end here must avoid this entity.
    pub fn blocks_routes(&self) -> bool {
        !matches!(self.kind, EntityKind::Zone(ZoneKind::Traversable))
    }
}

/// Ordered collection of entities; later entities are drawn on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, replacing any existing entity with the same id.
    pub fn insert(&mut self, entity: Entity) {
        if let Some(existing) = self.entities.iter_mut().find(|e| e.id == entity.id) {
            debug!("replacing entity {} ({} -> {})", entity.id, existing.kind, entity.kind);
            *existing = entity;
        } else {
            self.entities.push(entity);
        }
    }

    /// Add an entity under a fresh id and return that id.
    pub fn add(&mut self, kind: EntityKind, rect: Rect) -> EntityId {
        let id = self.next_id();
        self.entities.push(Entity::new(id, kind, rect));
        id
    }

    pub fn add_object(&mut self, rect: Rect) -> EntityId {
        self.add(EntityKind::Object, rect)
    }

    pub fn add_obstacle(&mut self, rect: Rect) -> EntityId {
        self.add(EntityKind::Obstacle, rect)
    }

    pub fn add_zone(&mut self, kind: ZoneKind, rect: Rect) -> EntityId {
        self.add(EntityKind::Zone(kind), rect)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Rectangles a route must avoid, leaving out the entities in `excluding`.
    ///
    /// Objects are excluded only when listed (they are the route's own
    /// endpoints); obstacles and restricted zones always block.
    pub fn blocking_rects(&self, excluding: &[EntityId]) -> Vec<Rect> {
        self.entities
            .iter()
            .filter(|e| e.blocks_routes())
            .filter(|e| !excluding.contains(&e.id))
            .map(|e| e.rect)
            .collect()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scene: Self = serde_json::from_str(json)?;
        debug!("loaded scene with {} entities", scene.len());
        Ok(scene)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One past the largest id in use, or the smallest free id once that
    /// would overflow.
    fn next_id(&self) -> EntityId {
        let largest = self.entities.iter().map(|e| e.id.0).max().unwrap_or(0);
        match largest.checked_add(1) {
            Some(next) => EntityId(next),
            None => (1..u64::MAX)
                .map(EntityId)
                .find(|&id| self.get(id).is_none())
                .unwrap_or(EntityId(0)),
        }
    }
}
