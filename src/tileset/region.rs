// Named collision and sensor regions

use glam::Vec2;

use crate::geometry::{Aabb, Shape};

/// Collision behavior tag on a region.
///
/// Interpreted by the external physics collaborator: `Static` regions
/// are immovable geometry, `Dynamic` regions move with the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionClass {
    Static,
    Dynamic,
}

impl RegionClass {
    /// Parse an authored tag; returns None for anything unrecognized
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            t if t.eq_ignore_ascii_case("static") => Some(Self::Static),
            t if t.eq_ignore_ascii_case("dynamic") => Some(Self::Dynamic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Dynamic => "Dynamic",
        }
    }
}

/// A tagged hitbox shape attached to one animation frame.
///
/// Names are not unique within a frame; queries must tolerate zero or
/// more matches. Ids are unique within a frame (enforced when the frame
/// is built).
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Object id from the authoring tool, unique within the frame
    pub id: u32,

    /// Optional name ("Ground", "Sensor", "TopRight", ...)
    pub name: Option<String>,

    /// Optional collision behavior tag
    pub class: Option<RegionClass>,

    /// Offset of the shape's anchor in frame-local pixels
    pub offset: Vec2,

    /// The shape, local to `offset`
    pub shape: Shape,
}

impl Region {
    pub fn new(
        id: u32,
        name: Option<String>,
        class: Option<RegionClass>,
        offset: Vec2,
        shape: Shape,
    ) -> Self {
        Self {
            id,
            name,
            class,
            offset,
            shape,
        }
    }

    /// Whether this region participates in collision tests
    pub fn is_solid(&self) -> bool {
        self.shape.is_solid()
    }

    /// Geometric center in frame-local space.
    ///
    /// For ellipses and rectangles this is the offset plus half the
    /// extent; for outlines it is the center of the point bounds.
    pub fn center(&self) -> Vec2 {
        self.offset + self.shape.aabb().center()
    }

    /// Bounding box in frame-local space
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb().translated(self.offset)
    }

    /// Test a frame-local point against this region.
    ///
    /// Polyline regions never contain a point.
    pub fn contains(&self, frame_point: Vec2) -> bool {
        self.shape.contains(frame_point - self.offset)
    }

    /// Test a world-space point, given the owning entity's origin
    pub fn contains_world(&self, origin: Vec2, world_point: Vec2) -> bool {
        self.contains(world_point - origin)
    }
}
