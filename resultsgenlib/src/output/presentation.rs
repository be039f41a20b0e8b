//! Presentation resources: field labels and link icons.
//!
//! Both tables live in a versioned TOML document so labels can change
//! without a code change. The Portuguese table ships with the crate.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ResultsgenError;
use crate::Result;

/// Presentation config embedded at compile time
const DEFAULT_PRESENTATION: &str = include_str!("../../presentation/pt.toml");

/// Field → label and link type → icon lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Revision of the resource
    pub version: u32,
    /// Display label per field name
    #[serde(default)]
    pub labels: IndexMap<String, String>,
    /// CSS classes of the icon per link type
    #[serde(default)]
    pub icons: IndexMap<String, String>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::parse(DEFAULT_PRESENTATION, Path::new("<embedded>"))
            .expect("embedded presentation config is valid TOML")
    }
}

impl Presentation {
    /// Load a presentation config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ResultsgenError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let presentation = Self::parse(&content, path)?;
        debug!(
            path = %path.display(),
            version = presentation.version,
            labels = presentation.labels.len(),
            icons = presentation.icons.len(),
            "loaded presentation config"
        );
        Ok(presentation)
    }

    /// Parse a presentation config; `origin` names it in errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| ResultsgenError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Display label for a field.
    pub fn label(&self, field: &str) -> Option<&str> {
        self.labels.get(field).map(String::as_str)
    }

    /// Icon classes for a link type.
    pub fn icon(&self, link_type: &str) -> Option<&str> {
        self.icons.get(link_type).map(String::as_str)
    }
}
