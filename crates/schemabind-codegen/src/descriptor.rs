//! XML class descriptor generation.
//!
//! For every bound class `X` a companion `XDescriptor` is generated. The
//! marshalling runtime reads it to learn the element name, namespace,
//! identity field and per-field handlers of `X` without reflection.
//!
//! A descriptor always declares exactly five members (`_elementDefinition`,
//! `_nsPrefix`, `_nsURI`, `_xmlName`, `_identity`) and the eight accessors
//! the runtime calls.

use crate::jvm_types::{map_content_type, use_type};
use crate::naming::{local_name, optional_string_literal, string_literal};
use schemabind_core::{
    ClassConstruct, DescriptorModel, FieldModel, GeneratorConfig, JavaField, JavaMethod,
    SourceBuffer, TypeModel,
};

/// Builds XML descriptor classes.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> DescriptorEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Qualified descriptor name for a bound class.
    pub fn descriptor_name(&self, bound_class: &str) -> String {
        format!("{bound_class}{}", self.config.descriptor_suffix)
    }

    /// Whether the descriptor of `ty` extends its parent's descriptor.
    ///
    /// A parent equal to the configured global superclass does not count.
    pub fn extends_parent(&self, ty: &TypeModel) -> bool {
        match &ty.parent {
            None => false,
            Some(parent) => self.config.super_class.as_deref() != Some(parent.as_str()),
        }
    }

    /// Build the descriptor class `descriptor_name` for `ty`.
    pub fn emit(&self, descriptor_name: &str, ty: &TypeModel) -> ClassConstruct {
        let model = ty.descriptor_model();
        let runtime = &self.config.runtime;
        let mut class = ClassConstruct::new(descriptor_name);

        let superclass = match ty.parent.as_deref() {
            Some(parent) if self.extends_parent(ty) => self.descriptor_name(parent),
            _ => runtime.xml_descriptor_base.clone(),
        };
        let superclass = use_type(&mut class, &superclass);
        class.set_superclass(superclass);
        class.set_comment(format!("Class {}.", local_name(descriptor_name)));

        let field_descriptor = use_type(&mut class, &runtime.field_descriptor);
        class.add_field(JavaField::new("boolean", "_elementDefinition"));
        class.add_field(JavaField::new("String", "_nsPrefix"));
        class.add_field(JavaField::new("String", "_nsURI"));
        class.add_field(JavaField::new("String", "_xmlName"));
        class.add_field(
            JavaField::new(&field_descriptor, "_identity")
                .with_comment("Identity field descriptor, if any."),
        );

        self.add_constructor(&mut class, &model, ty);
        self.add_methods(&mut class, &model, &field_descriptor, self.extends_parent(ty));

        tracing::debug!(
            descriptor = %class.name(),
            fields = model.fields.len(),
            "xml descriptor built"
        );
        class
    }

    fn add_methods(
        &self,
        class: &mut ClassConstruct,
        model: &DescriptorModel,
        field_descriptor: &str,
        extends_parent: bool,
    ) {
        let runtime = &self.config.runtime;

        let mut method = JavaMethod::new("isElementDefinition")
            .returning("boolean")
            .with_comment("Returns true if XML schema definition of this class is an element.");
        method.body.add("return this._elementDefinition;");
        class.add_method(method);

        let mut method = JavaMethod::new("getNameSpacePrefix")
            .returning("String")
            .with_comment("Returns the namespace prefix to use when marshaling as XML.");
        method.body.add("return this._nsPrefix;");
        class.add_method(method);

        let mut method = JavaMethod::new("getNameSpaceURI")
            .returning("String")
            .with_comment("Returns the namespace URI used when marshaling and unmarshaling as XML.");
        method.body.add("return this._nsURI;");
        class.add_method(method);

        let type_validator = use_type(class, &runtime.type_validator);
        let mut method = JavaMethod::new("getValidator")
            .returning(type_validator)
            .with_comment("Returns a specific validator for the class described by this descriptor.");
        match &model.validator {
            Some(validator) => {
                let validator = use_type(class, validator);
                method.body.add(format!("return new {validator}();"));
            }
            None => {
                method.body.add("return this;");
            }
        }
        class.add_method(method);

        let mut method = JavaMethod::new("getXMLName")
            .returning("String")
            .with_comment("Returns the XML name for the class described by this descriptor.");
        method.body.add("return this._xmlName;");
        class.add_method(method);

        let access_mode = use_type(class, &runtime.access_mode);
        let mut method = JavaMethod::new("getAccessMode")
            .returning(&access_mode)
            .with_comment("Returns the access mode specified for this class.");
        match model.access_mode {
            Some(mode) => {
                method
                    .body
                    .add(format!("return {access_mode}.valueOf(\"{mode}\");"));
            }
            None => {
                method.body.add("return null;");
            }
        }
        class.add_method(method);

        let mut method = JavaMethod::new("getIdentity")
            .returning(field_descriptor)
            .with_comment("Returns the identity field, or null if this class has no identity.");
        if extends_parent {
            method
                .body
                .add("if (this._identity == null) {")
                .add_indented("return super.getIdentity();")
                .add("}");
        }
        method.body.add("return this._identity;");
        class.add_method(method);

        let bound_class = use_type(class, &model.bound_class);
        let mut method = JavaMethod::new("getJavaClass")
            .returning("Class")
            .with_comment("Returns the Java class represented by this descriptor.");
        method.body.add(format!("return {bound_class}.class;"));
        class.add_method(method);
    }

    fn add_constructor(&self, class: &mut ClassConstruct, model: &DescriptorModel, ty: &TypeModel) {
        let runtime = &self.config.runtime;
        let descriptor_impl = use_type(class, &runtime.xml_field_descriptor_impl);
        let handler = use_type(class, &runtime.xml_field_handler);
        let validator = use_type(class, &runtime.field_validator);
        let node_type = use_type(class, &runtime.node_type);
        let bound_class = use_type(class, &model.bound_class);

        let mut body = SourceBuffer::new();
        body.add("super();");
        if let Some(parent) = ty.parent.as_deref().filter(|_| self.extends_parent(ty)) {
            let parent_descriptor = use_type(class, &self.descriptor_name(parent));
            body.add(format!("setExtendsWithoutFlatten(new {parent_descriptor}());"));
        }
        body.add(format!(
            "this._nsURI = {};",
            optional_string_literal(model.namespace_uri.as_deref())
        ));
        body.add(format!(
            "this._nsPrefix = {};",
            optional_string_literal(model.namespace_prefix.as_deref())
        ));
        body.add(format!("this._xmlName = {};", string_literal(&model.xml_name)));
        body.add(format!("this._elementDefinition = {};", model.element_definition));

        if !model.fields.is_empty() {
            body.add("")
                .add(format!("{descriptor_impl} desc = null;"))
                .add(format!("{handler} handler = null;"))
                .add(format!("{validator} fieldValidator = null;"));
        }

        let names = FieldDescriptorNames {
            descriptor_impl: &descriptor_impl,
            handler: &handler,
            validator: &validator,
            node_type: &node_type,
            bound_class: &bound_class,
            modern_mode: self.config.modern_mode,
        };
        for field in &model.fields {
            map_content_type(&field.content_type).import_into(class);
            body.add("");
            add_field_descriptor(&mut body, field, model.is_identity(field), &names);
        }

        class.default_constructor_mut().body = body;
    }
}

/// Local type names used by per-field descriptor code.
struct FieldDescriptorNames<'n> {
    descriptor_impl: &'n str,
    handler: &'n str,
    validator: &'n str,
    node_type: &'n str,
    bound_class: &'n str,
    modern_mode: bool,
}

fn add_field_descriptor(
    body: &mut SourceBuffer,
    field: &FieldModel,
    is_identity: bool,
    names: &FieldDescriptorNames<'_>,
) {
    let jvm = map_content_type(&field.content_type);
    let bound_class = names.bound_class;
    let collection = field.is_collection();

    // Collections accept boxed values in modern mode and primitives otherwise.
    let set_value = if collection && names.modern_mode {
        format!("({}) value", jvm.java_type(true))
    } else {
        jvm.from_object("value")
    };
    let getter = format!("target.{}()", field.read_method_name());
    let get_value = if collection { getter } else { jvm.to_object(&getter) };
    let mutator = if collection {
        format!("add{}", field.method_suffix)
    } else {
        field.write_method_name()
    };

    body.add(format!("//-- {}", field.name));
    body.add(format!(
        "desc = new {}({}, \"{}\", \"{}\", {}.{});",
        names.descriptor_impl,
        jvm.class_literal(),
        field.name,
        field.xml_name(),
        names.node_type,
        field.node_type.runtime_name()
    ));

    body.add(format!("handler = new {}() {{", names.handler));
    body.indent();
    body.add("@Override")
        .add("public Object getValue(Object object) throws IllegalStateException {")
        .add_indented(format!("{bound_class} target = ({bound_class}) object;"))
        .add_indented(format!("return {get_value};"))
        .add("}")
        .add("");
    body.add("@Override")
        .add("public void setValue(Object object, Object value) throws IllegalStateException, IllegalArgumentException {");
    add_guarded(body, &[
        format!("{bound_class} target = ({bound_class}) object;"),
        format!("target.{mutator}({set_value});"),
    ]);
    body.add("}").add("");
    if collection {
        body.add("@Override")
            .add("public void resetValue(Object object) throws IllegalStateException, IllegalArgumentException {");
        add_guarded(body, &[
            format!("{bound_class} target = ({bound_class}) object;"),
            format!("target.removeAll{}();", field.method_suffix),
        ]);
        body.add("}").add("");
    }
    body.add("@Override")
        .add("public Object newInstance(Object parent) {")
        .add_indented("return null;")
        .add("}");
    body.unindent();
    body.add("};");

    body.add("desc.setHandler(handler);");
    if field.required {
        body.add("desc.setRequired(true);");
    }
    body.add(format!("desc.setMultivalued({collection});"));
    body.add("addFieldDescriptor(desc);");
    if is_identity {
        body.add("this._identity = desc;");
    }

    body.add("")
        .add(format!("//-- validation code for: {}", field.name))
        .add(format!("fieldValidator = new {}();", names.validator));
    if field.required {
        body.add("fieldValidator.setMinOccurs(1);");
    }
    if field.max_size() > 0 {
        body.add(format!("fieldValidator.setMaxOccurs({});", field.max_size()));
    }
    body.add("desc.setValidator(fieldValidator);");
}

/// Wrap `lines` in a try block rethrowing as `IllegalStateException`.
fn add_guarded(body: &mut SourceBuffer, lines: &[String]) {
    body.indent();
    body.add("try {");
    for line in lines {
        body.add_indented(line.as_str());
    }
    body.add("} catch (Exception ex) {")
        .add_indented("throw new IllegalStateException(ex.toString());")
        .add("}");
    body.unindent();
}
