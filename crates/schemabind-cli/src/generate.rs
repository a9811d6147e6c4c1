//! `generate` command: type model in, Java sources out

use anyhow::{Context, Result};
use schemabind_codegen::{JavaWriter, SourceGenerator};
use schemabind_conflict::{ConflictContext, ConsoleDialog};
use schemabind_core::{BindError, BindResult, ClassConstruct, GeneratorConfig, TypeModel};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::check;

pub struct GenerateOptions<'a> {
    pub model: &'a Path,
    pub output: &'a Path,
    /// Overwrite existing files without asking the strategy.
    pub force: bool,
}

/// What a run produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub types: usize,
    pub written: Vec<PathBuf>,
    pub kept: Vec<PathBuf>,
    pub aborted: Vec<String>,
}

impl GenerateSummary {
    pub fn print(&self, output: &Path) {
        println!(
            "✓ Generated {} type(s), wrote {} file(s) to {}",
            self.types,
            self.written.len(),
            output.display()
        );
        for path in &self.kept {
            println!("  kept existing {}", path.display());
        }
        for name in &self.aborted {
            println!("  skipped {name}");
        }
    }
}

/// Parse a type model document: a single type or an array of types.
pub fn parse_model(text: &str) -> BindResult<Vec<TypeModel>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

pub fn load_model(path: &Path) -> Result<Vec<TypeModel>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read type model {}", path.display()))?;
    parse_model(&text).with_context(|| format!("invalid type model in {}", path.display()))
}

pub fn run(
    options: &GenerateOptions<'_>,
    config: GeneratorConfig,
    dialog: &mut dyn ConsoleDialog,
) -> Result<GenerateSummary> {
    let types = load_model(options.model)?;
    let registry = check::registry(&config)?;
    let mut generator = SourceGenerator::from_registry(config, &registry)
        .context("failed to select the conflict strategy")?;
    let strategy = Arc::clone(generator.strategy());
    let writer = JavaWriter::new();

    tracing::info!(
        types = types.len(),
        strategy = %strategy.name(),
        output = %options.output.display(),
        "generation started"
    );

    let mut summary = GenerateSummary::default();
    for ty in &types {
        let mut ctx = ConflictContext::with_dialog(&mut *dialog);
        let constructs = match generator.generate(ty, &mut ctx) {
            Ok(constructs) => constructs,
            Err(err @ BindError::GenerationAborted { .. }) => {
                tracing::warn!(type_name = %ty.name, "{err}");
                summary.aborted.push(ty.name.clone());
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to generate '{}'", ty.name));
            }
        };
        summary.types += 1;

        for construct in &constructs {
            let path = options.output.join(JavaWriter::relative_path(construct));
            if path.exists() && !options.force {
                let filename = path.display().to_string();
                if !strategy.resolve_file_overwrite(&filename, &mut ctx) {
                    tracing::info!(%filename, "existing file kept");
                    summary.kept.push(path);
                    continue;
                }
            }
            write_source(&path, &writer, construct)?;
            summary.written.push(path);
        }
    }

    Ok(summary)
}

fn write_source(path: &Path, writer: &JavaWriter, construct: &ClassConstruct) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, writer.render(construct))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "source written");
    Ok(())
}
