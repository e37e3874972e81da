// Point containment tests for hitbox shapes

use glam::Vec2;

/// Test a point against a polygon outline using the even-odd rule.
///
/// Casts a ray from the point toward +X and counts edge crossings; an odd
/// count means inside. Points exactly on an edge may resolve to either
/// side, so callers must not rely on boundary behavior.
pub fn point_in_polygon(points: &[Vec2], p: Vec2) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;

    for i in 0..points.len() {
        let a = points[i];
        let b = points[j];

        if (a.y > p.y) != (b.y > p.y) {
            let t = (p.y - a.y) / (b.y - a.y);
            if p.x < a.x + t * (b.x - a.x) {
                inside = !inside;
            }
        }

        j = i;
    }

    inside
}

/// Test a point against an axis-aligned ellipse.
///
/// Standard normalized-distance check: the point is inside when
/// `((px-cx)/rx)^2 + ((py-cy)/ry)^2 <= 1`.
pub fn point_in_ellipse(center: Vec2, half_extents: Vec2, p: Vec2) -> bool {
    if half_extents.x <= 0.0 || half_extents.y <= 0.0 {
        return false;
    }

    let d = (p - center) / half_extents;
    d.length_squared() <= 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_polygon_inside_outside() {
        let points = square();

        assert!(point_in_polygon(&points, Vec2::new(5.0, 5.0)));
        assert!(point_in_polygon(&points, Vec2::new(1.0, 9.0)));
        assert!(!point_in_polygon(&points, Vec2::new(15.0, 5.0)));
        assert!(!point_in_polygon(&points, Vec2::new(-1.0, 5.0)));
        assert!(!point_in_polygon(&points, Vec2::new(5.0, 11.0)));
    }

    #[test]
    fn test_polygon_concave() {
        // L-shaped outline; the notch must test outside
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 4.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(4.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];

        assert!(point_in_polygon(&points, Vec2::new(2.0, 2.0)));
        assert!(point_in_polygon(&points, Vec2::new(2.0, 8.0)));
        assert!(!point_in_polygon(&points, Vec2::new(8.0, 8.0)));
    }

    #[test]
    fn test_polygon_negative_coordinates() {
        // Outlines authored relative to an anchor can dip negative
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(-6.0, 5.0),
            Vec2::new(-4.0, 12.0),
            Vec2::new(8.0, 12.0),
            Vec2::new(8.0, 2.0),
        ];

        assert!(point_in_polygon(&points, Vec2::new(0.0, 6.0)));
        assert!(!point_in_polygon(&points, Vec2::new(-6.0, 0.0)));
    }

    #[test]
    fn test_polygon_degenerate() {
        assert!(!point_in_polygon(&[], Vec2::ZERO));
        assert!(!point_in_polygon(
            &[Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0)],
            Vec2::new(2.0, 2.0)
        ));
    }

    #[test]
    fn test_ellipse_center_and_edge() {
        let center = Vec2::new(43.5, 106.5);
        let half = Vec2::new(3.5, 3.5);

        assert!(point_in_ellipse(center, half, center));
        assert!(point_in_ellipse(center, half, center + Vec2::new(3.5, 0.0)));
        assert!(!point_in_ellipse(center, half, center + Vec2::new(3.6, 0.0)));
        assert!(!point_in_ellipse(center, half, center + Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_ellipse_eccentric() {
        let center = Vec2::new(0.0, 0.0);
        let half = Vec2::new(10.0, 2.0);

        assert!(point_in_ellipse(center, half, Vec2::new(9.0, 0.0)));
        assert!(!point_in_ellipse(center, half, Vec2::new(9.0, 1.5)));
        assert!(point_in_ellipse(center, half, Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn test_ellipse_zero_extent() {
        assert!(!point_in_ellipse(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO));
    }
}
