//! File-backed template repository.
//!
//! Templates live in a single JSON document with a top-level `template`
//! array:
//!
//! ```json
//! {
//!   "template": [
//!     {
//!       "name": "Orders",
//!       "description": "Order export",
//!       "headerRow": 1,
//!       "data": [
//!         {"name": "Order ID", "value": "A", "type": "string"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! The repository is read-only: it is constructed once at startup and passed
//! by parameter wherever a lookup is needed. Nothing in the core consults
//! ambient global template state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use retab_model::Template;

use crate::registry::find_template;

/// On-disk template collection shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateFile {
    pub template: Vec<Template>,
}

/// An immutable, preloaded collection of named templates.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    templates: Vec<Template>,
    source: Option<PathBuf>,
}

impl TemplateRepository {
    /// Loads a template collection from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse as a template
    /// collection.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read templates from {}", path.display()))?;
        let file: TemplateFile = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse templates from {}", path.display()))?;
        Ok(Self {
            templates: file.template,
            source: Some(path),
        })
    }

    /// Wraps an already-built template collection.
    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self {
            templates,
            source: None,
        }
    }

    /// The file this collection was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Looks up a template by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        find_template(&self.templates, name)
    }

    /// Template names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.templates
            .iter()
            .map(|template| template.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
