//! Server configuration read from the environment.
use roi_catalog::{Catalog, CatalogError};
use std::sync::Arc;

/// Default listen address
pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `ROI_ADDR`
    pub addr: String,
    /// `ROI_CATALOG`, a catalog YAML used instead of the built-in one
    pub catalog_path: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            catalog_path: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        Self {
            addr: lookup("ROI_ADDR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            catalog_path: lookup("ROI_CATALOG").filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn load_catalog(&self) -> Result<Arc<Catalog>, CatalogError> {
        match &self.catalog_path {
            Some(path) => Ok(Arc::new(Catalog::load(path)?)),
            None => Ok(Arc::new(Catalog::builtin().clone())),
        }
    }
}
