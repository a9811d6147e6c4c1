//! `check` and `strategies` commands

use crate::config;
use anyhow::{Context, Result};
use schemabind_conflict::StrategyRegistry;
use schemabind_core::GeneratorConfig;
use std::path::Path;

/// Build the registry a configuration describes.
pub fn registry(config: &GeneratorConfig) -> Result<StrategyRegistry> {
    StrategyRegistry::new(Some(&config.conflict_strategies))
        .context("failed to build the conflict strategy registry")
}

pub fn run(path: &Path) -> Result<()> {
    println!("Checking configuration: {}", path.display());

    let config = config::load(Some(path))?;
    let registry = registry(&config)?;
    registry
        .lookup(&config.conflict_strategy)
        .with_context(|| {
            format!(
                "conflict strategy '{}' is not registered (available: {})",
                config.conflict_strategy,
                registry.names().join(", ")
            )
        })?;

    let package = if config.package.is_empty() {
        "(default package)"
    } else {
        config.package.as_str()
    };
    println!("✓ Package: {package}");
    println!("✓ Collection policy: {}", config.collection_policy);
    println!("✓ Strategies: {}", registry.names().join(", "));
    println!("✓ Selected strategy: {}", config.conflict_strategy);
    println!("\nConfiguration is valid!");

    Ok(())
}

pub fn list_strategies(config: &GeneratorConfig) -> Result<()> {
    let registry = registry(config)?;
    if registry.is_empty() {
        println!("No conflict strategies registered.");
    }
    for name in registry.names() {
        let marker = if name == config.conflict_strategy { " (selected)" } else { "" };
        println!("{name}{marker}");
    }
    Ok(())
}
