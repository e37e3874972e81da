// Hitbox shape variants

use glam::Vec2;

use super::hit::{point_in_ellipse, point_in_polygon};
use super::ShapeError;

/// Axis-aligned bounding box in frame-local pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a bounding box from an arbitrary point set
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);

        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }

        if points.is_empty() {
            return Self {
                min: Vec2::ZERO,
                max: Vec2::ZERO,
            };
        }

        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Grow the box by a translation of both corners
    pub fn translated(&self, by: Vec2) -> Self {
        Self {
            min: self.min + by,
            max: self.max + by,
        }
    }
}

/// A collision or sensor shape, local to its owning region's offset.
///
/// Polygon and polyline points are authored relative to the region offset
/// and may be negative. Ellipses and rectangles span from the offset
/// (their top-left corner) to offset + (width, height), matching the
/// authoring tool's convention.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Vec<Vec2>),
    Polyline(Vec<Vec2>),
    Ellipse { width: f32, height: f32 },
    Rectangle { width: f32, height: f32 },
}

impl Shape {
    /// Check structural completeness.
    ///
    /// Polygons need at least 3 points, polylines at least 2, and sized
    /// shapes a positive extent. Nothing further is checked; degenerate
    /// geometry that passes here is kept verbatim.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Polygon(points) if points.len() < 3 => {
                Err(ShapeError::DegeneratePolygon(points.len()))
            }
            Shape::Polyline(points) if points.len() < 2 => {
                Err(ShapeError::DegeneratePolyline(points.len()))
            }
            Shape::Ellipse { width, height } | Shape::Rectangle { width, height }
                if *width <= 0.0 || *height <= 0.0 =>
            {
                Err(ShapeError::NonPositiveExtent {
                    width: *width,
                    height: *height,
                })
            }
            _ => Ok(()),
        }
    }

    /// Whether this shape participates in collision tests.
    ///
    /// Polylines are measurement/anchor geometry and never act as a solid
    /// region.
    pub fn is_solid(&self) -> bool {
        !matches!(self, Shape::Polyline(_))
    }

    /// Point containment in shape-local space.
    ///
    /// The origin is the owning region's offset; polylines always report
    /// false.
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Shape::Polygon(points) => point_in_polygon(points, p),
            Shape::Polyline(_) => false,
            Shape::Ellipse { width, height } => {
                let half = Vec2::new(width * 0.5, height * 0.5);
                point_in_ellipse(half, half, p)
            }
            Shape::Rectangle { width, height } => {
                p.x >= 0.0 && p.x <= *width && p.y >= 0.0 && p.y <= *height
            }
        }
    }

    /// Bounding box in shape-local space
    pub fn aabb(&self) -> Aabb {
        match self {
            Shape::Polygon(points) | Shape::Polyline(points) => Aabb::from_points(points),
            Shape::Ellipse { width, height } | Shape::Rectangle { width, height } => Aabb {
                min: Vec2::ZERO,
                max: Vec2::new(*width, *height),
            },
        }
    }
}
