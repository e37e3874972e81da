// Loading tileset documents into the definition model
//
// The playback core depends only on the in-memory model; this module is
// the swappable parsing front end. It consumes the JSON export of the
// authoring tool's tileset format and fails fast on anything structurally
// incomplete rather than dropping it silently.

mod compile;
mod document;
mod files;

pub use compile::compile;
pub use document::{
    FrameDocument, ObjectDocument, ObjectGroupDocument, PointDocument, PropertyDocument,
    TileDocument, TilesetDocument,
};
pub use files::TilesetLoader;

use crate::geometry::ShapeError;
use crate::tileset::TilesetError;

/// Errors produced while turning a source document into definitions
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse tileset document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("malformed region geometry on tile {tile_id}, object {object_id}: {source}")]
    MalformedRegion {
        tile_id: u32,
        object_id: u32,
        source: ShapeError,
    },

    #[error("unknown entity class {0:?}")]
    UnknownEntityClass(String),

    #[error("unknown animation name {0:?}")]
    UnknownAnimationName(String),

    #[error("unknown iteration mode {0:?}")]
    UnknownIterationMode(String),

    #[error("tile {tile_id} has animation parameters but no entity class")]
    MissingEntityClass { tile_id: u32 },

    #[error("animation on tile {tile_id} references missing tile {frame_tile_id}")]
    DanglingFrame { tile_id: u32, frame_tile_id: u32 },

    #[error("tile {0} has no image")]
    MissingImage(u32),

    #[error(transparent)]
    Definition(#[from] TilesetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
