//! schemabind-core - Data model, errors, and configuration
//!
//! This crate provides the types shared by every schemabind generator:
//! - [`TypeModel`] and [`FieldModel`], the input handed over by the schema front end
//! - [`ClassConstruct`], the class under construction
//! - [`GenerationState`] threaded through conflict resolution
//! - [`BindError`] for error handling
//! - [`GeneratorConfig`] for generator configuration
//! - [`annotations`] for turning schema documentation into comments

pub mod annotations;
mod config;
mod construct;
mod error;
mod model;
mod state;

pub use annotations::{Annotated, Annotation, Documentation, extract_comments, normalize};
pub use config::{DEFAULT_CONFLICT_STRATEGIES, GeneratorConfig, RuntimeNames};
pub use construct::{
    ClassConstruct, INDENT_WIDTH, JavaConstructor, JavaField, JavaMethod, JavaParameter,
    Modifiers, SourceBuffer, Visibility,
};
pub use error::{BindError, BindResult};
pub use model::{
    AccessMode, CollectionPolicy, ContentType, DescriptorModel, FieldModel, Multiplicity,
    NodeType, TypeModel,
};
pub use state::{GenerationState, GenerationStatus};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BindError, BindResult, ClassConstruct, CollectionPolicy, ContentType, FieldModel,
        GenerationState, GeneratorConfig, JavaMethod, SourceBuffer, TypeModel,
    };
}
