//! User variable catalog persistence
//!
//! Offices extend the builtin catalog with their own variables in
//! `~/.config/stencil/variables.yaml`:
//!
//! ```yaml
//! variables:
//!   - key: brokerageLicense
//!     label: Brokerage License
//!     example: "DRE #01234567"
//!     category: Office
//! ```
//!
//! A missing or unreadable file degrades to the builtin catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::{Registry, Variable};

/// On-disk form of the user catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub variables: Vec<Variable>,
}

impl CatalogFile {
    /// Load the user catalog, or an empty one if missing or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::catalog_file() else {
            tracing::debug!("No config directory available, using builtin catalog only");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "No user catalog at {}, using builtin catalog only",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(catalog) => {
                tracing::info!(
                    "Loaded {} user variables from {}",
                    catalog.variables.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                tracing::warn!("Failed to load user catalog at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load a catalog from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read catalog at {}: {}", path.display(), e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse catalog at {}: {}", path.display(), e))
    }
}

/// Runtime registry: builtin catalog merged with the user catalog file
pub fn load_registry() -> Registry {
    Registry::with_custom(CatalogFile::load().variables)
}
