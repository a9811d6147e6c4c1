//! Strategy that asks the user through a console dialog

use crate::strategy::{ClassNameConflictStrategy, ConflictContext, conflict_message};
use schemabind_core::{ClassConstruct, GenerationState, TypeModel};

/// Asks before overwriting files and before continuing past a name conflict.
///
/// The dialog is supplied per call through [`ConflictContext`]. Without one
/// the strategy cannot ask, so it denies overwrites and leaves the state as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct WarnViaConsoleDialogStrategy;

impl WarnViaConsoleDialogStrategy {
    /// Name the strategy registers under.
    pub const NAME: &'static str = "warnViaConsoleDialog";

    /// Identifier used in the strategy configuration string.
    pub const IDENTIFIER: &'static str = "schemabind_conflict::WarnViaConsoleDialogStrategy";

    const OVERWRITE_RESPONSES: &'static str = "yna";
    const OVERWRITE_LEGEND: &'static str = "y = yes, n = no, a = all";
    const CONTINUE_RESPONSES: &'static str = "yn";
    const CONTINUE_LEGEND: &'static str = "y = yes, n = no";

    pub fn new() -> Self {
        Self
    }
}

impl ClassNameConflictStrategy for WarnViaConsoleDialogStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn resolve_class_name_conflict(
        &self,
        mut state: GenerationState,
        candidate: &TypeModel,
        conflicting: &ClassConstruct,
        ctx: &mut ConflictContext<'_>,
    ) -> GenerationState {
        let message = conflict_message(candidate, conflicting);

        let Some(dialog) = ctx.dialog() else {
            tracing::warn!(class_name = %conflicting.name(), "{message} (no console dialog to ask)");
            return state;
        };

        let prompt = format!("Warning: {message} Continue anyway [not recommended]");
        let answer = dialog.confirm(&prompt, Self::CONTINUE_RESPONSES, Self::CONTINUE_LEGEND);
        if answer == 'n' {
            tracing::info!(class_name = %conflicting.name(), "generation stopped on user request");
            state.request_stop();
        }
        state
    }

    fn resolve_file_overwrite(&self, filename: &str, ctx: &mut ConflictContext<'_>) -> bool {
        let Some(dialog) = ctx.dialog() else {
            tracing::warn!(%filename, "no console dialog to confirm overwrite, keeping existing file");
            return false;
        };

        let prompt = format!("{filename} already exists. overwrite");
        let answer = dialog.confirm(&prompt, Self::OVERWRITE_RESPONSES, Self::OVERWRITE_LEGEND);
        tracing::debug!(%filename, %answer, "overwrite prompt answered");

        answer == 'y'
    }
}
