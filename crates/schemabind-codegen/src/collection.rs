//! Accessor generation for collection-valued fields.
//!
//! One [`CollectionFactory`] serves every [`CollectionPolicy`]. Operations
//! shared by all policies are written once; the policy decides the backing
//! types and switches the few operations that differ:
//!
//! | Policy | Member type | Index operations | Enumeration |
//! |--------|-------------|------------------|-------------|
//! | `LegacyIndexed` | `Vector` | emitted | `elements()` |
//! | `ModernIndexed` | `List` / `ArrayList` | emitted | `Collections.enumeration` |
//! | `NoIndex` | `Set` / `HashSet` | suppressed | `Collections.enumeration` |
//! | `ExternalStoreBacked` | store array type | emitted | drained into a `Vector` |
//!
//! With `modern_mode` set, collection types carry generics and element
//! values use the boxed type; otherwise values are boxed and cast by hand.

use crate::jvm_types::{JvmType, map_content_type, use_type};
use crate::naming::local_name;
use crate::property_change::{add_notify_call, add_property_change_support};
use schemabind_core::{
    BindError, BindResult, ClassConstruct, CollectionPolicy, FieldModel, GeneratorConfig,
    JavaField, JavaMethod, SourceBuffer, extract_comments,
};

const INDEX_OUT_OF_BOUNDS: &str = "IndexOutOfBoundsException";

/// Emits members, initializers and accessors for collection fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFactory {
    policy: CollectionPolicy,
    store_factory: String,
    store_type: String,
}

/// Types and names derived from one field under one policy.
struct Shape {
    element: JvmType,
    /// Element type as written in signatures.
    value_type: String,
    /// Declared member type.
    member_type: String,
    /// Expression constructing an empty collection.
    new_collection: String,
    member: String,
    generic: bool,
    /// Qualified types the generated code refers to.
    imports: Vec<String>,
}

impl Shape {
    /// Expression turning a value parameter into a collection element.
    fn to_element(&self, expr: &str) -> String {
        if self.generic {
            expr.to_string()
        } else {
            self.element.to_object(expr)
        }
    }

    /// Expression turning a collection element back into a value.
    fn from_element(&self, expr: &str) -> String {
        if self.generic {
            expr.to_string()
        } else {
            self.element.from_object(expr)
        }
    }

    fn parameterized(&self, raw: &str) -> String {
        if self.generic {
            format!("{raw}<{}>", self.value_type)
        } else {
            raw.to_string()
        }
    }
}

impl CollectionFactory {
    /// A factory using the default external store runtime names.
    pub fn new(policy: CollectionPolicy) -> Self {
        let runtime = schemabind_core::RuntimeNames::default();
        Self {
            policy,
            store_factory: runtime.external_store_factory,
            store_type: runtime.external_store_type,
        }
    }

    /// A factory for the configured policy and runtime names.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            policy: config.collection_policy,
            store_factory: config.runtime.external_store_factory.clone(),
            store_type: config.runtime.external_store_type.clone(),
        }
    }

    pub fn policy(&self) -> CollectionPolicy {
        self.policy
    }

    fn is_indexed(&self) -> bool {
        self.policy != CollectionPolicy::NoIndex
    }

    /// Derive the types used for `field` without touching any class.
    fn shape(&self, field: &FieldModel, modern_mode: bool) -> Shape {
        let element = map_content_type(&field.content_type);
        let generic = modern_mode && self.policy != CollectionPolicy::ExternalStoreBacked;
        let value_type = element.java_type(modern_mode).to_string();

        let (interface, implementation) = match self.policy {
            CollectionPolicy::LegacyIndexed => ("java.util.Vector", Some("java.util.Vector")),
            CollectionPolicy::ModernIndexed => ("java.util.List", Some("java.util.ArrayList")),
            CollectionPolicy::NoIndex => ("java.util.Set", Some("java.util.HashSet")),
            CollectionPolicy::ExternalStoreBacked => (self.store_type.as_str(), None),
        };

        let mut imports = vec![interface.to_string()];
        if !element.is_primitive {
            imports.push(element.boxed.clone());
        }

        let mut shape = Shape {
            element,
            value_type,
            member_type: String::new(),
            new_collection: String::new(),
            member: format!("this.{}", field.name),
            generic,
            imports: Vec::new(),
        };
        shape.member_type = shape.parameterized(local_name(interface));
        shape.new_collection = match implementation {
            Some(implementation) => {
                imports.push(implementation.to_string());
                format!("new {}()", shape.parameterized(local_name(implementation)))
            }
            None => self.store_factory.clone(),
        };
        shape.imports = imports;
        shape
    }

    /// Derive the types used for `field` and import them into `class`.
    fn shape_in(&self, field: &FieldModel, class: &mut ClassConstruct, modern_mode: bool) -> Shape {
        let shape = self.shape(field, modern_mode);
        for import in &shape.imports {
            class.add_import(import.clone());
        }
        shape
    }

    /// Declare the backing member of `field`.
    pub fn create_member(&self, field: &FieldModel, class: &mut ClassConstruct, modern_mode: bool) {
        let shape = self.shape_in(field, class, modern_mode);
        let mut member = JavaField::new(&shape.member_type, &field.name);
        if let Some(comment) = extract_comments(field).filter(|c| !c.is_empty()) {
            member = member.with_comment(comment);
        }
        class.add_field(member);
    }

    /// Emit the full accessor suite for `field`.
    ///
    /// Fails without touching `class` when the field is not a collection.
    pub fn create_access_methods(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
        extra_annotations: &[String],
    ) -> BindResult<()> {
        if !field.is_collection() {
            return Err(BindError::NotACollection {
                field: field.name.clone(),
            });
        }

        tracing::debug!(
            class = %class.name(),
            field = %field.name,
            policy = %self.policy,
            modern_mode,
            "creating collection accessors"
        );

        self.create_add_method(field, class, modern_mode);
        self.create_add_by_index_method(field, class, modern_mode);
        self.create_collection_iteration_methods(field, class, modern_mode);
        self.create_get_by_index_method(field, class, modern_mode);
        self.create_get_array_method(field, class, modern_mode, extra_annotations);
        self.create_get_count_method(field, class);
        self.create_remove_all_method(field, class);
        self.create_remove_object_method(field, class, modern_mode);
        self.create_remove_by_index_method(field, class, modern_mode);
        self.create_set_by_index_method(field, class, modern_mode);
        self.create_set_array_method(field, class, modern_mode);

        if field.extra_methods {
            self.create_get_as_reference_method(field, class, modern_mode);
            self.create_set_copy_method(field, class, modern_mode);
            self.create_set_as_reference_method(field, class, modern_mode);
        }

        if field.bound {
            add_property_change_support(class);
        }

        Ok(())
    }

    /// `add<X>(value)`, guarded by the maximum size when one is declared.
    pub fn create_add_method(&self, field: &FieldModel, class: &mut ClassConstruct, modern_mode: bool) {
        let shape = self.shape_in(field, class, modern_mode);
        let name = format!("add{}", field.method_suffix);
        let param = field.parameter_name();

        let mut method = JavaMethod::new(&name)
            .with_parameter(&shape.value_type, &param)
            .with_exception(INDEX_OUT_OF_BOUNDS)
            .with_comment(format!("Adds a value to the '{}' collection.", field.property_name()));
        Self::add_max_size_check(field, &name, &mut method.body);
        method
            .body
            .add(format!("{}.add({});", shape.member, shape.to_element(&param)));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// `add<X>(index, value)`; suppressed under the no-index policy.
    pub fn create_add_by_index_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        if !self.is_indexed() {
            return;
        }
        let shape = self.shape_in(field, class, modern_mode);
        let name = format!("add{}", field.method_suffix);
        let param = field.parameter_name();

        let mut method = JavaMethod::new(&name)
            .with_parameter("int", "index")
            .with_parameter(&shape.value_type, &param)
            .with_exception(INDEX_OUT_OF_BOUNDS)
            .with_comment(format!(
                "Inserts a value into the '{}' collection at the given position.",
                field.property_name()
            ));
        Self::add_max_size_check(field, &name, &mut method.body);
        method.body.add(format!(
            "{}.add(index, {});",
            shape.member,
            shape.to_element(&param)
        ));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// `get<X>(index)`; suppressed under the no-index policy.
    pub fn create_get_by_index_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        if !self.is_indexed() {
            return;
        }
        let shape = self.shape_in(field, class, modern_mode);
        let name = format!("get{}", field.method_suffix);

        let mut method = JavaMethod::new(&name)
            .returning(&shape.value_type)
            .with_parameter("int", "index")
            .with_exception(INDEX_OUT_OF_BOUNDS)
            .with_comment(format!(
                "Returns the value at the given position of the '{}' collection.",
                field.property_name()
            ));
        Self::add_index_check(&shape, &name, &mut method.body);
        let element = format!("{}.get(index)", shape.member);
        method
            .body
            .add(format!("return {};", shape.from_element(&element)));
        class.add_method(method);
    }

    /// `set<X>(index, value)`; suppressed under the no-index policy.
    pub fn create_set_by_index_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        if !self.is_indexed() {
            return;
        }
        let shape = self.shape_in(field, class, modern_mode);
        let name = format!("set{}", field.method_suffix);
        let param = field.parameter_name();

        let mut method = JavaMethod::new(&name)
            .with_parameter("int", "index")
            .with_parameter(&shape.value_type, &param)
            .with_exception(INDEX_OUT_OF_BOUNDS)
            .with_comment(format!(
                "Replaces the value at the given position of the '{}' collection.",
                field.property_name()
            ));
        Self::add_index_check(&shape, &name, &mut method.body);
        method.body.add("");
        method.body.add(format!(
            "{}.set(index, {});",
            shape.member,
            shape.to_element(&param)
        ));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// `remove<X>At(index)`; suppressed under the no-index policy.
    pub fn create_remove_by_index_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        if !self.is_indexed() {
            return;
        }
        let shape = self.shape_in(field, class, modern_mode);

        let mut method = JavaMethod::new(format!("remove{}At", field.method_suffix))
            .returning(&shape.value_type)
            .with_parameter("int", "index")
            .with_comment(format!(
                "Removes and returns the value at the given position of the '{}' collection.",
                field.property_name()
            ));
        let holder = if shape.generic { shape.value_type.as_str() } else { "Object" };
        method
            .body
            .add(format!("{holder} obj = {}.remove(index);", shape.member));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        method
            .body
            .add(format!("return {};", shape.from_element("obj")));
        class.add_method(method);
    }

    /// `enumerate<X>()`, a snapshot-style enumeration of the collection.
    pub fn create_enumerate_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let enumeration = use_type(class, "java.util.Enumeration");
        let return_type = if modern_mode {
            format!("{enumeration}<{}>", shape.value_type)
        } else {
            enumeration
        };

        let mut method = JavaMethod::new(format!("enumerate{}", field.method_suffix))
            .returning(return_type)
            .with_comment(format!(
                "Returns an enumeration over the '{}' collection.",
                field.property_name()
            ));

        match self.policy {
            CollectionPolicy::LegacyIndexed => {
                method.body.add(format!("return {}.elements();", shape.member));
            }
            CollectionPolicy::ModernIndexed | CollectionPolicy::NoIndex => {
                let collections = use_type(class, "java.util.Collections");
                method
                    .body
                    .add(format!("return {collections}.enumeration({});", shape.member));
            }
            CollectionPolicy::ExternalStoreBacked => {
                let vector = use_type(class, "java.util.Vector");
                let iterator = use_type(class, "java.util.Iterator");
                let (buffer_type, next) = if modern_mode {
                    (
                        format!("{vector}<{}>", shape.value_type),
                        format!("({}) iterator.next()", shape.value_type),
                    )
                } else {
                    (vector, "iterator.next()".to_string())
                };
                method
                    .body
                    .add(format!("{buffer_type} v = new {buffer_type}();"))
                    .add(format!("{iterator} iterator = {}.iterator();", shape.member))
                    .add("")
                    .add("while (iterator.hasNext()) {")
                    .add_indented(format!("v.add({next});"))
                    .add("}")
                    .add("")
                    .add("return v.elements();");
            }
        }
        class.add_method(method);
    }

    /// `iterate<X>()`, typed under modern mode and raw otherwise.
    pub fn create_iterator_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let iterator = use_type(class, "java.util.Iterator");
        let return_type = if modern_mode {
            format!("{iterator}<{}>", shape.value_type)
        } else {
            iterator
        };

        let mut method = JavaMethod::new(format!("iterate{}", field.method_suffix))
            .returning(return_type)
            .with_comment(format!(
                "Returns an iterator over the '{}' collection.",
                field.property_name()
            ));
        method.body.add(format!("return {}.iterator();", shape.member));
        class.add_method(method);
    }

    /// The enumerate method, plus the iterator method under modern mode.
    pub fn create_collection_iteration_methods(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        self.create_enumerate_method(field, class, modern_mode);
        if modern_mode {
            self.create_iterator_method(field, class, modern_mode);
        }
    }

    /// `get<X>()` returning the contents as an array.
    pub fn create_get_array_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
        extra_annotations: &[String],
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let array_type = format!("{}[]", shape.value_type);

        let mut method = JavaMethod::new(format!("get{}", field.method_suffix))
            .returning(&array_type)
            .with_annotations(extra_annotations)
            .with_comment(format!(
                "Returns the contents of the '{}' collection as an array.",
                field.property_name()
            ));

        if shape.generic {
            method.body.add(format!(
                "{array_type} array = new {}[0];",
                shape.value_type
            ));
            method
                .body
                .add(format!("return {}.toArray(array);", shape.member));
        } else {
            let iterator = use_type(class, "java.util.Iterator");
            method
                .body
                .add(format!("int size = {}.size();", shape.member))
                .add(format!("{array_type} array = new {}[size];", shape.value_type))
                .add(format!("{iterator} iter = {}.iterator();", shape.member))
                .add("for (int index = 0; index < size; index++) {")
                .add_indented(format!(
                    "array[index] = {};",
                    shape.element.from_object("iter.next()")
                ))
                .add("}")
                .add("return array;");
        }
        class.add_method(method);
    }

    /// `get<X>Count()`.
    pub fn create_get_count_method(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let mut method = JavaMethod::new(format!("get{}Count", field.method_suffix))
            .returning("int")
            .with_comment(format!(
                "Returns the size of the '{}' collection.",
                field.property_name()
            ));
        method
            .body
            .add(format!("return this.{}.size();", field.name));
        class.add_method(method);
    }

    /// `removeAll<X>()`.
    pub fn create_remove_all_method(&self, field: &FieldModel, class: &mut ClassConstruct) {
        let mut method = JavaMethod::new(format!("removeAll{}", field.method_suffix))
            .with_comment(format!(
                "Removes every value from the '{}' collection.",
                field.property_name()
            ));
        method.body.add(format!("this.{}.clear();", field.name));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// `remove<X>(value)`, reporting whether the value was present.
    pub fn create_remove_object_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let param = field.parameter_name();

        let mut method = JavaMethod::new(format!("remove{}", field.method_suffix))
            .returning("boolean")
            .with_parameter(&shape.value_type, &param)
            .with_comment(format!(
                "Removes a value from the '{}' collection.",
                field.property_name()
            ));
        method.body.add(format!(
            "boolean removed = {}.remove({});",
            shape.member,
            shape.to_element(&param)
        ));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        method.body.add("return removed;");
        class.add_method(method);
    }

    /// `set<X>(array)`, replacing the contents with a copy of the array.
    pub fn create_set_array_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let param = format!("{}Array", field.parameter_name());

        let mut method = JavaMethod::new(format!("set{}", field.method_suffix))
            .with_parameter(format!("{}[]", shape.value_type), &param)
            .with_comment(format!(
                "Replaces the contents of the '{}' collection with the given values.",
                field.property_name()
            ));
        method
            .body
            .add("//-- copy array")
            .add(format!("{}.clear();", shape.member))
            .add("")
            .add(format!("for (int i = 0; i < {param}.length; i++) {{"))
            .add_indented(format!(
                "{}.add({});",
                shape.member,
                shape.to_element(&format!("{param}[i]"))
            ))
            .add("}");
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// `get<X>AsReference()`, exposing the live collection.
    pub fn create_get_as_reference_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let mut method = JavaMethod::new(format!("get{}AsReference", field.method_suffix))
            .returning(&shape.member_type)
            .with_comment(format!(
                "Returns a reference to the '{}' collection; changes to it are not checked.",
                field.property_name()
            ));
        method.body.add(format!("return {};", shape.member));
        class.add_method(method);
    }

    /// `set<X>(collection)`, replacing the contents with a copy.
    pub fn create_set_copy_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let param = format!("{}List", field.parameter_name());

        let mut method = JavaMethod::new(format!("set{}", field.method_suffix))
            .with_parameter(&shape.member_type, &param)
            .with_comment(format!(
                "Replaces the contents of the '{}' collection with a copy of the given one.",
                field.property_name()
            ));
        method
            .body
            .add("// copy collection")
            .add(format!("{}.clear();", shape.member))
            .add("")
            .add(format!("{}.addAll({param});", shape.member));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// `set<X>AsReference(collection)`, adopting the given collection.
    pub fn create_set_as_reference_method(
        &self,
        field: &FieldModel,
        class: &mut ClassConstruct,
        modern_mode: bool,
    ) {
        let shape = self.shape_in(field, class, modern_mode);
        let param = format!("{}Collection", field.property_name());

        let mut method = JavaMethod::new(format!("set{}AsReference", field.method_suffix))
            .with_parameter(&shape.member_type, &param)
            .with_comment(format!(
                "Makes the given collection the backing store of '{}'.",
                field.property_name()
            ));
        method.body.add(format!("{} = {param};", shape.member));
        if field.bound {
            Self::create_bound_property_code(field, &mut method.body);
        }
        class.add_method(method);
    }

    /// Emit the construction-time initializer of `field` into `source`.
    ///
    /// A declared, non-empty default value is added right after construction.
    pub fn generate_initializer_code(
        &self,
        field: &FieldModel,
        source: &mut SourceBuffer,
        modern_mode: bool,
    ) {
        let shape = self.shape(field, modern_mode);
        source.add(format!("{} = {};", shape.member, shape.new_collection));

        if let Some(default) = field.effective_default() {
            let literal = shape.element.literal(default);
            source.add(format!("{}.add({});", shape.member, shape.to_element(&literal)));
        }
    }

    /// Emit the change notification fired after a mutation of `field`.
    pub fn create_bound_property_code(field: &FieldModel, source: &mut SourceBuffer) {
        add_notify_call(field, "null", source);
    }

    /// Emit a guard rejecting insertion once the declared maximum is reached.
    ///
    /// Emits nothing for a maximum of zero or below.
    pub fn add_max_size_check(field: &FieldModel, method_name: &str, source: &mut SourceBuffer) {
        let max = field.max_size();
        if max <= 0 {
            return;
        }

        source
            .add("// check for the maximum size")
            .add(format!("if (this.{}.size() >= {max}) {{", field.name))
            .add_indented(format!(
                "throw new {INDEX_OUT_OF_BOUNDS}(\"{method_name} has a maximum of {max}\");"
            ))
            .add("}")
            .add("");
    }

    fn add_index_check(shape: &Shape, method_name: &str, source: &mut SourceBuffer) {
        source
            .add("// check bounds for index")
            .add(format!(
                "if (index < 0 || index >= {}.size()) {{",
                shape.member
            ))
            .add_indented(format!(
                "throw new {INDEX_OUT_OF_BOUNDS}(\"{method_name}: Index value '\" + index + \"' not in range [0..\" + ({}.size() - 1) + \"]\");",
                shape.member
            ))
            .add("}")
            .add("");
    }
}

#[cfg(test)]
#[path = "collection/collection_tests.rs"]
mod collection_tests;
