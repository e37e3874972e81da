// Per-entity-class animation sets

use std::collections::HashMap;
use std::sync::Arc;

use super::{AnimationName, Clip, EntityClass, TilesetError};

/// Mapping from animation name to clip for one entity class.
///
/// Built once at load time; lookups of names the set does not carry are
/// the recoverable [`TilesetError::UnknownAnimation`] — callers fall back
/// to a default clip rather than failing the entity.
#[derive(Debug, Clone)]
pub struct EntityAnimationSet {
    class: EntityClass,
    clips: HashMap<AnimationName, Arc<Clip>>,
}

impl EntityAnimationSet {
    pub fn new(class: EntityClass) -> Self {
        Self {
            class,
            clips: HashMap::new(),
        }
    }

    pub fn class(&self) -> EntityClass {
        self.class
    }

    /// Register a clip; each name may appear once per set
    pub fn insert(&mut self, name: AnimationName, clip: Arc<Clip>) -> Result<(), TilesetError> {
        if self.clips.contains_key(&name) {
            return Err(TilesetError::DuplicateAnimation(name));
        }

        self.clips.insert(name, clip);
        Ok(())
    }

    /// Look up a clip, reporting absence as an error
    pub fn clip(&self, name: AnimationName) -> Result<&Arc<Clip>, TilesetError> {
        self.clips
            .get(&name)
            .ok_or(TilesetError::UnknownAnimation(name))
    }

    /// Look up a clip without an error channel
    pub fn get(&self, name: AnimationName) -> Option<&Arc<Clip>> {
        self.clips.get(&name)
    }

    pub fn names(&self) -> impl Iterator<Item = AnimationName> + '_ {
        self.clips.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
