//! Configuration loading for the CLI

use anyhow::{Context, Result};
use schemabind_core::GeneratorConfig;
use std::path::Path;

/// Load and validate the configuration at `path`, or the defaults when no
/// path is given.
pub fn load(path: Option<&Path>) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}
