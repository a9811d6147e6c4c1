//! Accessor generation for single-valued fields.
//!
//! Primitive fields get a companion `_has_<name>` flag so that "never set"
//! can be told apart from the type's zero value.

use crate::jvm_types::map_content_type;
use crate::naming::capitalize;
use crate::property_change::{add_notify_call, add_property_change_support};
use schemabind_core::{
    ClassConstruct, ContentType, FieldModel, JavaField, JavaMethod, SourceBuffer, extract_comments,
};

/// Emits members, initializers and accessors for single-valued fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldFactory;

/// Name of the flag tracking whether a primitive field was set.
pub fn has_flag_name(field: &FieldModel) -> String {
    format!("_has_{}", field.property_name())
}

impl FieldFactory {
    pub fn new() -> Self {
        Self
    }

    /// Declare the member of `field`, plus its has-flag for primitives.
    pub fn create_member(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let jvm = map_content_type(&field.content_type);
        jvm.import_into(class);

        let mut member = JavaField::new(jvm.java_type(false), &field.name);
        if let Some(comment) = extract_comments(field).filter(|c| !c.is_empty()) {
            member = member.with_comment(comment);
        }
        class.add_field(member);

        if jvm.is_primitive {
            class.add_field(
                JavaField::new("boolean", has_flag_name(field))
                    .with_comment(format!("Keeps track of whether '{}' has been set.", field.name)),
            );
        }
    }

    /// Emit getter, setter and the type-specific extras for `field`.
    pub fn create_access_methods(&self, field: &FieldModel, class: &mut ClassConstruct) {
        tracing::trace!(class = %class.name(), field = %field.name, "creating field accessors");

        self.create_get_method(field, class);
        self.create_set_method(field, class);

        if field.content_type == ContentType::Boolean {
            self.create_is_method(field, class);
        }
        if map_content_type(&field.content_type).is_primitive {
            self.create_has_and_delete_methods(field, class);
        }
        if field.bound {
            add_property_change_support(class);
        }
    }

    pub fn create_get_method(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let jvm = map_content_type(&field.content_type);
        let mut method = JavaMethod::new(field.read_method_name())
            .returning(jvm.java_type(false))
            .with_comment(format!("Returns the value of field '{}'.", field.property_name()));
        method.body.add(format!("return this.{};", field.name));
        class.add_method(method);
    }

    /// Boolean fields also get `is<X>()`.
    pub fn create_is_method(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let mut method = JavaMethod::new(format!("is{}", field.method_suffix))
            .returning("boolean")
            .with_comment(format!("Returns the value of field '{}'.", field.property_name()));
        method.body.add(format!("return this.{};", field.name));
        class.add_method(method);
    }

    /// `set<X>(value)`; bound fields notify with the old and the new value.
    pub fn create_set_method(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let jvm = map_content_type(&field.content_type);
        let param = field.property_name().to_string();
        let old = format!("old{}", capitalize(&param));

        let mut method = JavaMethod::new(field.write_method_name())
            .with_parameter(jvm.java_type(false), &param)
            .with_comment(format!("Sets the value of field '{}'.", field.property_name()));
        if field.bound {
            method.body.add(format!(
                "Object {old} = {};",
                jvm.to_object(&format!("this.{}", field.name))
            ));
        }
        method.body.add(format!("this.{} = {param};", field.name));
        if jvm.is_primitive {
            method.body.add(format!("this.{} = true;", has_flag_name(field)));
        }
        if field.bound {
            add_notify_call(field, &old, &mut method.body);
        }
        class.add_method(method);
    }

    /// `has<X>()` and `delete<X>()` backed by the has-flag.
    pub fn create_has_and_delete_methods(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let flag = has_flag_name(field);

        let mut has = JavaMethod::new(format!("has{}", field.method_suffix))
            .returning("boolean")
            .with_comment(format!("Returns true if field '{}' has been set.", field.property_name()));
        has.body.add(format!("return this.{flag};"));
        class.add_method(has);

        let mut delete = JavaMethod::new(format!("delete{}", field.method_suffix))
            .with_comment(format!("Marks field '{}' as unset.", field.property_name()));
        delete.body.add(format!("this.{flag} = false;"));
        class.add_method(delete);
    }

    /// Emit the assignment of the declared default, if any.
    pub fn generate_initializer_code(&self, field: &FieldModel, source: &mut SourceBuffer) {
        if let Some(default) = field.effective_default() {
            let jvm = map_content_type(&field.content_type);
            source.add(format!("this.{} = {};", field.name, jvm.literal(default)));
        }
    }
}

#[cfg(test)]
#[path = "field/field_tests.rs"]
mod field_tests;
