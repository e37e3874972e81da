// Hitbox geometry primitives
//
// Shapes are plain data validated for structural completeness only.
// Geometric sanity (self-intersecting outlines and the like) is accepted
// as authored; downstream collision behavior is whatever the containment
// rules below produce for it.

mod hit;
mod shape;

pub use hit::{point_in_ellipse, point_in_polygon};
pub use shape::{Aabb, Shape};

/// Structural shape validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("polygon needs at least 3 points, got {0}")]
    DegeneratePolygon(usize),

    #[error("polyline needs at least 2 points, got {0}")]
    DegeneratePolyline(usize),

    #[error("shape extent must be positive, got {width}x{height}")]
    NonPositiveExtent { width: f32, height: f32 },
}
