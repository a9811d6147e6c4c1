//! schemabind-conflict - Conflict resolution strategies
//!
//! When two schema types map to the same class name, or a generated file
//! already exists on disk, the generator asks a [`ClassNameConflictStrategy`]
//! what to do. Strategies are selected by name from a [`StrategyRegistry`]
//! built once per run from the configured identifier list.
//!
//! Built-in strategies:
//! - [`InformViaLogStrategy`] (`informViaLog`): logs and carries on
//! - [`WarnViaConsoleDialogStrategy`] (`warnViaConsoleDialog`): asks the user

mod inform_via_log;
mod registry;
mod strategy;
mod warn_via_dialog;

pub use inform_via_log::InformViaLogStrategy;
pub use registry::{LoadError, StrategyCatalog, StrategyRegistry, split_identifiers};
pub use strategy::{ClassNameConflictStrategy, ConflictContext, ConsoleDialog};
pub use warn_via_dialog::WarnViaConsoleDialogStrategy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassNameConflictStrategy, ConflictContext, ConsoleDialog, StrategyCatalog,
        StrategyRegistry,
    };
}
