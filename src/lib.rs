//! A 2D sprite animation and hitbox-region engine.
//!
//! Tileset documents authored in a map editor are compiled into
//! immutable definitions (frames, named hitbox regions, clips, per-class
//! animation sets), shared read-only by any number of per-entity
//! [`Playback`] instances. Each simulation tick advances a playback
//! cursor and exposes the active frame's regions for collision queries;
//! rendering and physics stay external.
//!
//! ```
//! use std::sync::Arc;
//! use glam::Vec2;
//! use hitframe::geometry::Shape;
//! use hitframe::playback::{query_by_name, Playback};
//! use hitframe::tileset::{Clip, Frame, ImageRef, IterationMode, Region};
//!
//! let ground = Region::new(
//!     4,
//!     Some("Ground".to_string()),
//!     None,
//!     Vec2::new(40.0, 103.0),
//!     Shape::Ellipse { width: 7.0, height: 7.0 },
//! );
//! let frame = Arc::new(
//!     Frame::new(2, ImageRef::new("walk2.png", 128, 128), vec![ground], Some(170.0)).unwrap(),
//! );
//! let clip = Arc::new(Clip::new(vec![frame], IterationMode::LoopFromStart, 1.0).unwrap());
//!
//! let mut playback = Playback::start(clip).unwrap();
//! playback.advance(16.7);
//!
//! let probe = query_by_name(playback.current_frame(), "Ground").next().unwrap();
//! assert!(probe.contains(Vec2::new(43.5, 106.5)));
//! ```

pub mod geometry;
pub mod loader;
pub mod playback;
pub mod tileset;

pub use geometry::{Aabb, Shape, ShapeError};
pub use loader::{LoadError, TilesetDocument, TilesetLoader};
pub use playback::{Playback, PlaybackError};
pub use tileset::{
    AnimationName, Clip, ColliderLayers, EntityAnimationSet, EntityClass, Frame, ImageRef,
    IterationMode, Region, RegionClass, TilesetDefinitions, TilesetError, TilesetLibrary,
};
