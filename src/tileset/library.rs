// Registry of loaded tileset definitions
//
// Each source document is an independently namespaced definition set.
// Observed data reuses tile and object ids across sibling documents with
// materially different geometry, so definitions are never merged by id;
// a lookup always names the document it wants.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};

use super::{AnimationName, Clip, ColliderLayers, EntityAnimationSet, EntityClass, TilesetError};

/// Tileset-level metadata shared by all frames of one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TilesetMeta {
    /// Document name; doubles as the namespace in the library
    pub name: String,

    /// Optional document class tag ("Characters", ...)
    pub class: Option<String>,

    /// Nominal tile width in pixels
    pub tile_width: u32,

    /// Nominal tile height in pixels
    pub tile_height: u32,

    /// Authored base path for frame textures
    pub texture_path: Option<PathBuf>,

    /// Authored base path for sound effects
    pub fx_path: Option<PathBuf>,

    /// Collision layers this document's entities belong to
    pub collider_layers: Option<ColliderLayers>,
}

/// Everything compiled from a single source document
#[derive(Debug, Clone)]
pub struct TilesetDefinitions {
    pub meta: TilesetMeta,
    pub sets: HashMap<EntityClass, Arc<EntityAnimationSet>>,
}

impl TilesetDefinitions {
    /// The library namespace this document registers under
    pub fn namespace(&self) -> &str {
        &self.meta.name
    }
}

/// Shared read-only registry of all loaded definitions
#[derive(Debug, Default)]
pub struct TilesetLibrary {
    documents: HashMap<String, TilesetDefinitions>,
}

impl TilesetLibrary {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Register a compiled document under its own namespace.
    ///
    /// Re-inserting a namespace replaces the previous definitions.
    pub fn insert(&mut self, definitions: TilesetDefinitions) {
        let namespace = definitions.namespace().to_string();

        if self.documents.contains_key(&namespace) {
            warn!("replacing tileset definitions {:?}", namespace);
        } else {
            info!(
                "registered tileset {:?} with {} entity class(es)",
                namespace,
                definitions.sets.len()
            );
        }

        self.documents.insert(namespace, definitions);
    }

    pub fn definitions(&self, namespace: &str) -> Option<&TilesetDefinitions> {
        self.documents.get(namespace)
    }

    /// Look up one entity class's animation set
    pub fn set(
        &self,
        namespace: &str,
        class: EntityClass,
    ) -> Result<&Arc<EntityAnimationSet>, TilesetError> {
        self.documents
            .get(namespace)
            .and_then(|defs| defs.sets.get(&class))
            .ok_or_else(|| TilesetError::UnknownSet {
                namespace: namespace.to_string(),
                class,
            })
    }

    /// Look up a single clip through namespace, class and name
    pub fn clip(
        &self,
        namespace: &str,
        class: EntityClass,
        name: AnimationName,
    ) -> Result<&Arc<Clip>, TilesetError> {
        self.set(namespace, class)?.clip(name)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            document_count: self.documents.len(),
            set_count: self.documents.values().map(|d| d.sets.len()).sum(),
            clip_count: self
                .documents
                .values()
                .flat_map(|d| d.sets.values())
                .map(|s| s.len())
                .sum(),
        }
    }
}

/// Statistics about loaded definitions
#[derive(Debug, Clone, Copy)]
pub struct LibraryStats {
    pub document_count: usize,
    pub set_count: usize,
    pub clip_count: usize,
}
