// Region queries over a frame
//
// The collision step asks "which named regions of the active frame
// matter here"; these helpers answer without assuming names are unique.

use glam::Vec2;

use crate::tileset::{Frame, Region, RegionClass};

/// All regions of a frame matching a name; zero or more.
///
/// Names repeat across authored data, so this never assumes uniqueness.
pub fn query_by_name<'a>(frame: &'a Frame, name: &str) -> impl Iterator<Item = &'a Region> {
    let name = name.to_string();
    frame
        .regions()
        .iter()
        .filter(move |r| r.name.as_deref() == Some(name.as_str()))
}

/// All regions of a frame carrying a class tag
pub fn query_by_class(frame: &Frame, class: RegionClass) -> impl Iterator<Item = &Region> {
    frame
        .regions()
        .iter()
        .filter(move |r| r.class == Some(class))
}

/// All solid regions of a frame containing a frame-local point.
///
/// Polyline regions never match.
pub fn query_at_point(frame: &Frame, point: Vec2) -> impl Iterator<Item = &Region> {
    frame.regions().iter().filter(move |r| r.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use crate::tileset::{Frame, ImageRef};

    fn probe(id: u32, name: &str, x: f32, y: f32) -> Region {
        Region::new(
            id,
            Some(name.to_string()),
            Some(RegionClass::Dynamic),
            Vec2::new(x, y),
            Shape::Ellipse {
                width: 7.0,
                height: 7.0,
            },
        )
    }

    fn walk_frame() -> Frame {
        // Trimmed copy of the authored walk frame: a sensor outline plus
        // directional probes
        let sensor = Region::new(
            2,
            Some("Sensor".to_string()),
            Some(RegionClass::Dynamic),
            Vec2::new(20.0, 54.0),
            Shape::Polygon(vec![
                Vec2::new(5.0, 13.0),
                Vec2::new(14.0, 3.0),
                Vec2::new(32.0, 4.0),
                Vec2::new(43.0, 15.0),
                Vec2::new(42.0, 33.0),
                Vec2::new(34.0, 53.0),
                Vec2::new(12.0, 53.0),
                Vec2::new(9.0, 50.0),
            ]),
        );

        Frame::new(
            2,
            ImageRef::new("walk2.png", 128, 128),
            vec![
                sensor,
                probe(4, "Ground", 40.0, 103.0),
                probe(6, "BottomRight", 51.0, 96.0),
                probe(7, "Front", 56.0, 75.0),
            ],
            Some(170.0),
        )
        .unwrap()
    }

    #[test]
    fn test_query_by_name_single_match() {
        let frame = walk_frame();

        let hits: Vec<_> = query_by_name(&frame, "Ground").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].center(), Vec2::new(43.5, 106.5));
    }

    #[test]
    fn test_query_by_name_no_match() {
        let frame = walk_frame();

        assert_eq!(query_by_name(&frame, "Top").count(), 0);
    }

    #[test]
    fn test_query_by_name_duplicates() {
        let frame = Frame::new(
            0,
            ImageRef::new("coin0_rotating000.png", 32, 32),
            vec![probe(1, "Edge", 4.0, 12.0), probe(2, "Edge", 9.0, 13.0)],
            None,
        )
        .unwrap();

        assert_eq!(query_by_name(&frame, "Edge").count(), 2);
    }

    #[test]
    fn test_query_by_class() {
        let frame = walk_frame();

        assert_eq!(query_by_class(&frame, RegionClass::Dynamic).count(), 4);
        assert_eq!(query_by_class(&frame, RegionClass::Static).count(), 0);
    }

    #[test]
    fn test_query_at_point() {
        let frame = walk_frame();

        // The ground probe sits inside the body sensor, so its center
        // hits both, in draw order
        let hits: Vec<_> = query_at_point(&frame, Vec2::new(43.5, 106.5)).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name.as_deref(), Some("Sensor"));
        assert_eq!(hits[1].name.as_deref(), Some("Ground"));

        // Just below the sensor outline only the probe matches
        let hits: Vec<_> = query_at_point(&frame, Vec2::new(43.5, 108.0)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_deref(), Some("Ground"));

        // Inside the sensor outline only
        let hits: Vec<_> = query_at_point(&frame, Vec2::new(45.0, 70.0)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_deref(), Some("Sensor"));

        // Far outside everything
        assert_eq!(query_at_point(&frame, Vec2::new(-50.0, -50.0)).count(), 0);
    }
}
