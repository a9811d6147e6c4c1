//! Strategy that reports conflicts through the log and always overwrites

use crate::strategy::{ClassNameConflictStrategy, ConflictContext, conflict_message};
use schemabind_core::{ClassConstruct, GenerationState, TypeModel};

/// Logs every conflict and never blocks generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct InformViaLogStrategy;

impl InformViaLogStrategy {
    /// Name the strategy registers under.
    pub const NAME: &'static str = "informViaLog";

    /// Identifier used in the strategy configuration string.
    pub const IDENTIFIER: &'static str = "schemabind_conflict::InformViaLogStrategy";

    pub fn new() -> Self {
        Self
    }
}

impl ClassNameConflictStrategy for InformViaLogStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn resolve_class_name_conflict(
        &self,
        state: GenerationState,
        candidate: &TypeModel,
        conflicting: &ClassConstruct,
        _ctx: &mut ConflictContext<'_>,
    ) -> GenerationState {
        tracing::warn!(
            class_name = %conflicting.name(),
            "{}",
            conflict_message(candidate, conflicting)
        );
        state
    }

    fn resolve_file_overwrite(&self, filename: &str, _ctx: &mut ConflictContext<'_>) -> bool {
        tracing::info!(%filename, "{filename} already exists, but will be overwritten");
        true
    }
}
