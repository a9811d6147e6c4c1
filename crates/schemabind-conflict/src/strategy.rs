//! Conflict strategy trait and the collaborators passed to it

use schemabind_core::{ClassConstruct, GenerationState, TypeModel};

/// Interactive yes/no style prompt.
///
/// Implementations block until the user picks one of `valid_responses`
/// (a set of characters such as `"yna"`); `legend` explains each choice.
pub trait ConsoleDialog {
    fn confirm(&mut self, message: &str, valid_responses: &str, legend: &str) -> char;
}

/// Collaborators available to a strategy for one call.
///
/// Owned by the caller; strategies only borrow what they are handed.
#[derive(Default)]
pub struct ConflictContext<'a> {
    dialog: Option<&'a mut dyn ConsoleDialog>,
}

impl<'a> ConflictContext<'a> {
    /// A context without any collaborator.
    pub fn new() -> Self {
        Self { dialog: None }
    }

    /// A context backed by an interactive dialog.
    pub fn with_dialog(dialog: &'a mut dyn ConsoleDialog) -> Self {
        Self {
            dialog: Some(dialog),
        }
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dialog(&mut self) -> Option<&mut (dyn ConsoleDialog + 'a)> {
        self.dialog.as_deref_mut()
    }
}

/// Policy consulted when generated identifiers collide.
///
/// Strategies are created once per registry and shared for the whole run,
/// so they hold no per-call state.
///
/// # Example
///
/// ```
/// use schemabind_conflict::{ClassNameConflictStrategy, ConflictContext};
///
/// struct NeverOverwrite;
///
/// impl ClassNameConflictStrategy for NeverOverwrite {
///     fn name(&self) -> &str {
///         "neverOverwrite"
///     }
///
///     fn resolve_file_overwrite(&self, _filename: &str, _ctx: &mut ConflictContext<'_>) -> bool {
///         false
///     }
/// }
///
/// assert!(!NeverOverwrite.resolve_file_overwrite("Order.java", &mut ConflictContext::new()));
/// ```
pub trait ClassNameConflictStrategy: Send + Sync + 'static {
    /// Unique name this strategy is registered and looked up under.
    fn name(&self) -> &str;

    /// Called when `candidate` would produce a class whose name is already
    /// taken by `conflicting`.
    ///
    /// Returns the state to continue with; the default leaves it unchanged.
    fn resolve_class_name_conflict(
        &self,
        state: GenerationState,
        candidate: &TypeModel,
        conflicting: &ClassConstruct,
        ctx: &mut ConflictContext<'_>,
    ) -> GenerationState {
        let _ = (candidate, conflicting, ctx);
        state
    }

    /// Called before an existing output file is replaced; `true` allows it.
    fn resolve_file_overwrite(&self, filename: &str, ctx: &mut ConflictContext<'_>) -> bool;
}

/// Message shared by the built-in strategies on class name conflicts.
pub(crate) fn conflict_message(candidate: &TypeModel, conflicting: &ClassConstruct) -> String {
    format!(
        "A class name generation conflict has occurred between '{}' and the already generated class '{}'. \
         Please use a binding file to solve this problem.",
        candidate.name,
        conflicting.name()
    )
}

#[cfg(test)]
#[path = "strategy/strategy_tests.rs"]
mod strategy_tests;
