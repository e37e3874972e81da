// Tileset file loading

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;

use crate::tileset::{TilesetDefinitions, TilesetLibrary};

use super::compile::compile;
use super::document::TilesetDocument;
use super::LoadError;

/// Directory under the asset root holding tileset documents
const TILESET_DIRECTORY: &str = "tilesets";

/// Supported document extensions (JSON exports of the authoring tool)
const EXTENSIONS: &[&str] = &["tsj", "json"];

/// Loader responsible for finding and reading tileset documents
pub struct TilesetLoader {
    base_path: PathBuf,
}

impl TilesetLoader {
    /// Create a new loader with the given asset base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a tileset document
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(TILESET_DIRECTORY).join(name)
    }

    /// Check if a tileset document exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).exists()
    }

    /// List all tileset documents under the asset root
    pub fn list_tilesets(&self) -> Result<Vec<String>> {
        let dir = self.base_path.join(TILESET_DIRECTORY);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut tilesets = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if EXTENSIONS.contains(&ext.to_string_lossy().as_ref()) {
                        if let Some(name) = path.file_name() {
                            tilesets.push(name.to_string_lossy().to_string());
                        }
                    }
                }
            }
        }

        tilesets.sort();
        Ok(tilesets)
    }

    /// Read and parse one document, without compiling it
    pub fn load_document(&self, name: &str) -> Result<TilesetDocument> {
        let path = self.resolve_path(name);
        let text = std::fs::read_to_string(&path).map_err(LoadError::Io)?;

        Ok(TilesetDocument::from_json(&text)?)
    }

    /// Read, parse and compile one document into definitions
    pub fn load_definitions(&self, name: &str) -> Result<TilesetDefinitions> {
        let document = self.load_document(name)?;
        let definitions = compile(&document)?;

        info!(
            "loaded tileset {:?} ({} entity class(es))",
            definitions.namespace(),
            definitions.sets.len()
        );
        Ok(definitions)
    }

    /// Load every document under the asset root into a library.
    ///
    /// Returns how many documents were registered. A single malformed
    /// document fails the whole call; partially loaded definitions stay
    /// in the library.
    pub fn load_all(&self, library: &mut TilesetLibrary) -> Result<usize> {
        let names = self.list_tilesets()?;
        let count = names.len();

        for name in &names {
            library.insert(self.load_definitions(name)?);
        }

        Ok(count)
    }

    /// Get the asset base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_path_resolution() {
        let loader = TilesetLoader::new("/game/assets");
        let path = loader.resolve_path("EntitiesHitbox.tsj");

        assert_eq!(
            path.to_str().unwrap(),
            "/game/assets/tilesets/EntitiesHitbox.tsj"
        );
    }

    #[test]
    fn test_loader_exists() {
        let loader = TilesetLoader::new(".");
        assert!(!loader.exists("nonexistent.tsj"));
    }

    #[test]
    fn test_loader_list_missing_directory() {
        let loader = TilesetLoader::new("/definitely/not/a/real/path");
        assert!(loader.list_tilesets().unwrap().is_empty());
    }

    #[test]
    fn test_loader_missing_document_is_io_error() {
        let loader = TilesetLoader::new(".");
        let err = loader.load_document("nonexistent.tsj").unwrap_err();

        assert!(err.downcast_ref::<LoadError>().is_some());
    }
}
