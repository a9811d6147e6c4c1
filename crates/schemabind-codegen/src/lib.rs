//! schemabind-codegen - Java source generation for bound types
//!
//! Turns a [`TypeModel`](schemabind_core::TypeModel) into Java classes:
//! - [`FieldFactory`] and [`CollectionFactory`] emit members and accessors
//! - [`DescriptorEmitter`] and [`JdoDescriptorEmitter`] emit the companion
//!   descriptor classes read by the binding runtime
//! - [`SourceGenerator`] ties them together per type and consults the
//!   conflict strategy when a class name is generated twice
//! - [`JavaWriter`] renders the resulting constructs as source text

mod collection;
mod descriptor;
mod field;
mod java;
pub mod jdo;
pub mod jvm_types;
pub mod naming;
pub mod property_change;
mod source;

pub use collection::CollectionFactory;
pub use descriptor::DescriptorEmitter;
pub use field::{FieldFactory, has_flag_name};
pub use java::JavaWriter;
pub use jdo::JdoDescriptorEmitter;
pub use jvm_types::{JvmType, map_content_type};
pub use source::SourceGenerator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CollectionFactory, DescriptorEmitter, FieldFactory, JavaWriter, JdoDescriptorEmitter,
        SourceGenerator,
    };
}
