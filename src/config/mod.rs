#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, SelectionArgs};
pub use toml_config::TomlConfig;

use crate::core::catalog::Catalog;
use crate::core::ConfigProvider;
use crate::utils::error::Result;

/// Loads the configured catalog, falling back to the bundled one.
pub fn load_catalog<C: ConfigProvider>(config: &C) -> Result<Catalog> {
    match config.catalog_path() {
        Some(path) => Catalog::from_file(path),
        None => {
            tracing::debug!("No catalog path configured, using the built-in catalog");
            Catalog::builtin()
        }
    }
}
