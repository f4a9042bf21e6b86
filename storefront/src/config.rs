use std::env;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("STOREFRONT_CATALOG")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Catalog from the configured file, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => {
                tracing::debug!("No catalog file configured, using built-in catalog");
                Ok(Catalog::default())
            }
        }
    }
}
