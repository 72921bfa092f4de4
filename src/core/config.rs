//! Travis configuration file management.
//!
//! Load and save for `.travis.yml`, with one placement applied in between.

use std::path::Path;

use tracing::debug;

use crate::core::document::Mapping;
use crate::core::placement::Placement;
use crate::core::yaml;
use crate::error::Result;

/// An in-memory `.travis.yml` document.
///
/// Built fresh per run and discarded after a single placement has been
/// rendered out. Pre-existing keys keep the order they had on disk;
/// placements only update values in place or append new keys at the end.
#[derive(Debug, Default, PartialEq)]
pub struct TravisConfig {
    document: Mapping,
}

impl TravisConfig {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse existing file text. `None` (no file) yields an empty document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` variants for unparseable or uneditable text.
    pub fn from_source(source: Option<&str>) -> Result<Self> {
        let document = match source {
            Some(text) => yaml::decode(text)?,
            None => Mapping::new(),
        };
        Ok(Self { document })
    }

    /// Load from `path`, treating a missing file as empty.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading travis config");

        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_source(Some(&contents))?;

        debug!(keys = config.document.len(), "travis config loaded");
        Ok(config)
    }

    /// Apply one placement to the document.
    ///
    /// # Errors
    ///
    /// Returns `ConflictError` when the target slot holds an incompatible
    /// shape; the document on disk is not affected.
    pub fn place(&mut self, placement: &Placement) -> Result<()> {
        placement.apply(&mut self.document)?;
        Ok(())
    }

    /// Render the document as block-style YAML.
    pub fn render(&self) -> Result<String> {
        Ok(yaml::encode(&self.document)?)
    }

    /// Render and write to `path`.
    ///
    /// Rendering happens in full before the file is opened, so a render
    /// failure can never truncate existing content.
    ///
    /// # Errors
    ///
    /// Returns error if rendering or the file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.render()?;
        std::fs::write(path, contents)?;

        debug!(path = %path.display(), "travis config written");
        Ok(())
    }

    /// The underlying ordered document.
    pub fn document(&self) -> &Mapping {
        &self.document
    }
}
