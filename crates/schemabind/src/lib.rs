//! # schemabind
//!
//! Generates Java data-binding classes and their marshalling descriptors from
//! a bound type model.
//!
//! schemabind takes the types a schema front end produced and emits:
//! - One bound class per type, with accessors for single-valued and
//!   collection fields
//! - An XML class descriptor per type, read by the binding runtime
//! - Optionally a JDO descriptor carrying relational mapping metadata
//!
//! Name collisions and existing output files are settled by a pluggable
//! conflict strategy selected by name from configuration.
//!
//! ## Quick Start
//!
//! ```
//! use schemabind::prelude::*;
//!
//! let config = GeneratorConfig {
//!     package: "org.example".into(),
//!     ..GeneratorConfig::default()
//! };
//! let registry = StrategyRegistry::new(Some(&config.conflict_strategies))?;
//! let mut generator = SourceGenerator::from_registry(config, &registry)?;
//!
//! let order = TypeModel::new("Order")
//!     .with_field(FieldModel::new("_id", ContentType::Int, "Id"))
//!     .with_field(FieldModel::collection("_lines", ContentType::String, "Line", 0));
//!
//! let constructs = generator.generate(&order, &mut ConflictContext::new())?;
//! let source = JavaWriter::new().render(&constructs[0]);
//!
//! assert!(source.contains("public class Order"));
//! assert!(source.contains("public void addLine(final String vLine)"));
//! # Ok::<(), schemabind::BindError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`schemabind_core`] - Type model, class constructs, configuration, errors
//! - [`schemabind_conflict`] - Conflict strategies and the strategy registry
//! - [`schemabind_codegen`] - Accessor factories, descriptor emitters, Java rendering

// Re-export core types
pub use schemabind_core::{
    AccessMode, BindError, BindResult, ClassConstruct, CollectionPolicy, ContentType,
    DescriptorModel, FieldModel, GenerationState, GenerationStatus, GeneratorConfig,
    Multiplicity, NodeType, RuntimeNames, SourceBuffer, TypeModel,
};

// Re-export conflict handling
pub use schemabind_conflict::{
    ClassNameConflictStrategy, ConflictContext, ConsoleDialog, InformViaLogStrategy,
    StrategyCatalog, StrategyRegistry, WarnViaConsoleDialogStrategy,
};

// Re-export generators
pub use schemabind_codegen::{
    CollectionFactory, DescriptorEmitter, FieldFactory, JavaWriter, JdoDescriptorEmitter,
    SourceGenerator,
};

// Re-export common dependencies
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use schemabind::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Model: `TypeModel`, `FieldModel`, `ContentType`, `GeneratorConfig`
/// - Conflicts: `ClassNameConflictStrategy`, `ConflictContext`, `StrategyRegistry`
/// - Generation: `SourceGenerator`, `JavaWriter`
pub mod prelude {
    pub use crate::{
        BindError, BindResult, ClassConstruct, ClassNameConflictStrategy, CollectionPolicy,
        ConflictContext, ContentType, FieldModel, GeneratorConfig, JavaWriter, SourceGenerator,
        StrategyRegistry, TypeModel,
    };
}
