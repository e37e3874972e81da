// Animation frames and their image references

use std::path::PathBuf;

use super::{Region, TilesetError};

/// Reference to the source image backing a frame
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    /// Path as authored, relative to the tileset document
    pub source: PathBuf,

    /// Intrinsic pixel width
    pub width: u32,

    /// Intrinsic pixel height
    pub height: u32,
}

impl ImageRef {
    pub fn new<P: Into<PathBuf>>(source: P, width: u32, height: u32) -> Self {
        Self {
            source: source.into(),
            width,
            height,
        }
    }
}

/// One animation frame: an image plus its named hitbox regions.
///
/// Region order is the authored draw order; queries do not depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    tile_id: u32,
    image: ImageRef,
    regions: Vec<Region>,
    duration_ms: Option<f32>,
}

impl Frame {
    /// Build a frame, rejecting duplicate region ids and non-positive
    /// durations
    pub fn new(
        tile_id: u32,
        image: ImageRef,
        regions: Vec<Region>,
        duration_ms: Option<f32>,
    ) -> Result<Self, TilesetError> {
        for (i, region) in regions.iter().enumerate() {
            if regions[..i].iter().any(|other| other.id == region.id) {
                return Err(TilesetError::DuplicateRegionId {
                    tile_id,
                    id: region.id,
                });
            }
        }

        if let Some(ms) = duration_ms {
            if ms <= 0.0 {
                return Err(TilesetError::NonPositiveDuration(ms));
            }
        }

        Ok(Self {
            tile_id,
            image,
            regions,
            duration_ms,
        })
    }

    pub fn tile_id(&self) -> u32 {
        self.tile_id
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// All regions in authored draw order; empty is valid
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_by_id(&self, id: u32) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Explicit display duration, when the clip's timing table set one
    pub fn duration_ms(&self) -> Option<f32> {
        self.duration_ms
    }

    /// Copy of this frame carrying an explicit duration.
    ///
    /// Used when a clip's timing table assigns a time to a shared tile.
    pub fn with_duration(&self, ms: f32) -> Result<Self, TilesetError> {
        if ms <= 0.0 {
            return Err(TilesetError::NonPositiveDuration(ms));
        }

        let mut frame = self.clone();
        frame.duration_ms = Some(ms);
        Ok(frame)
    }
}
