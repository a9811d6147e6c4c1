//! Relational (JDO) class descriptor generation.
//!
//! The JDO descriptor rebuilds the mapping metadata a relational persistence
//! runtime needs (class mapping, per-field handlers, SQL names and types) as
//! constructor code. It always extends the runtime's JDO descriptor base,
//! whatever the bound type's own parent chain.

use crate::jvm_types::{map_content_type, use_type};
use crate::naming::{local_name, string_literal};
use schemabind_core::{
    BindError, BindResult, ClassConstruct, ContentType, DescriptorModel, FieldModel,
    GeneratorConfig, SourceBuffer, TypeModel,
};

/// Mapping types every JDO descriptor refers to.
pub const JDO_IMPORTS: [&str; 13] = [
    "org.exolab.castor.mapping.xml.ClassMapping",
    "org.exolab.castor.mapping.xml.ClassChoice",
    "org.exolab.castor.mapping.xml.MapTo",
    "org.exolab.castor.mapping.xml.FieldMapping",
    "org.exolab.castor.mapping.xml.Sql",
    "org.exolab.castor.mapping.loader.FieldDescriptorImpl",
    "org.exolab.castor.mapping.loader.FieldHandlerImpl",
    "org.exolab.castor.mapping.loader.TypeInfo",
    "org.exolab.castor.mapping.FieldDescriptor",
    "org.exolab.castor.mapping.MappingException",
    "org.exolab.castor.jdo.engine.nature.ClassDescriptorJDONature",
    "org.exolab.castor.jdo.engine.nature.FieldDescriptorJDONature",
    "java.lang.reflect.Method",
];

/// Join `<name>FieldDescr` for every name, comma separated.
///
/// # Examples
///
/// ```
/// use schemabind_codegen::jdo::field_descr_list;
///
/// let names = vec!["title".to_string(), "price".to_string()];
/// assert_eq!(field_descr_list(&names), "titleFieldDescr,priceFieldDescr");
/// ```
pub fn field_descr_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("{name}FieldDescr"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Join `<name>FieldDescr` for every identity, comma separated.
///
/// No identities yields an empty string.
///
/// # Examples
///
/// ```
/// use schemabind_codegen::jdo::identities_as_string;
///
/// let identities = vec!["id".to_string(), "version".to_string()];
/// assert_eq!(identities_as_string(&identities), "idFieldDescr,versionFieldDescr");
/// assert_eq!(identities_as_string(&[]), "");
/// ```
pub fn identities_as_string(identities: &[String]) -> String {
    field_descr_list(identities)
}

/// Builds JDO descriptor classes.
#[derive(Debug, Clone, Copy)]
pub struct JdoDescriptorEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> JdoDescriptorEmitter<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Qualified JDO descriptor name for a bound class.
    pub fn descriptor_name(&self, bound_class: &str) -> String {
        format!("{bound_class}{}", self.config.jdo_descriptor_suffix)
    }

    /// Build the JDO descriptor class `descriptor_name` for `ty`.
    ///
    /// Fails with [`BindError::InvalidModel`] when an identity names a field
    /// that has no column mapping.
    pub fn emit(&self, descriptor_name: &str, ty: &TypeModel) -> BindResult<ClassConstruct> {
        let model = ty.descriptor_model();
        let identities = Self::ordered_identities(&model)?;
        let mut class = ClassConstruct::new(descriptor_name);

        let base = use_type(&mut class, &self.config.runtime.jdo_descriptor_base);
        class.set_superclass(base);
        class.set_comment(format!("Class {}.", local_name(descriptor_name)));
        for import in JDO_IMPORTS {
            class.add_import(import);
        }
        let access_mode = use_type(&mut class, &self.config.runtime.access_mode);
        let bound_class = use_type(&mut class, &model.bound_class);

        let mut body = SourceBuffer::new();
        body.add("super();");
        body.add("ClassMapping mapping = new ClassMapping();")
            .add("ClassChoice choice = new ClassChoice();")
            .add("MapTo mapTo = new MapTo();")
            .add("");

        let table = model
            .table_name
            .clone()
            .unwrap_or_else(|| model.xml_name.clone());
        let mode = model.access_mode.unwrap_or_default();
        body.add("addNature(ClassDescriptorJDONature.class.getName());")
            .add("ClassDescriptorJDONature jdoNature = new ClassDescriptorJDONature(this);")
            .add(format!("jdoNature.setTableName({});", string_literal(&table)))
            .add(format!("setJavaClass({bound_class}.class);"))
            .add(format!("jdoNature.setAccessMode({access_mode}.valueOf(\"{mode}\"));"))
            .add(format!(
                "jdoNature.addCacheParam(\"name\", {});",
                string_literal(&model.bound_class)
            ))
            .add("")
            .add("mapping.setAutoCreate(true);")
            .add(format!("mapping.setName({});", string_literal(&model.bound_class)))
            .add("mapping.setClassChoice(choice);")
            .add(format!("mapTo.setTable({});", string_literal(&table)))
            .add("mapping.setMapTo(mapTo);")
            .add("setMapping(mapping);");

        let mut mapped = Vec::new();
        for field in &model.fields {
            if !is_mappable(field) {
                tracing::debug!(
                    descriptor = %descriptor_name,
                    field = %field.name,
                    "field has no column mapping, skipped"
                );
                continue;
            }
            map_content_type(&field.content_type).import_into(&mut class);
            body.add("");
            let is_identity = model.is_identity(field);
            add_field_mapping(&mut body, field, is_identity, &bound_class);
            if !is_identity {
                mapped.push(field.property_name().to_string());
            }
        }

        body.add("")
            .add(format!(
                "setFields(new FieldDescriptor[] {{{}}});",
                field_descr_list(&mapped)
            ))
            .add(format!(
                "setIdentities(new FieldDescriptor[] {{{}}});",
                identities_as_string(&identities)
            ));

        class.default_constructor_mut().body = body;

        tracing::debug!(
            descriptor = %class.name(),
            identities = identities.len(),
            "jdo descriptor built"
        );
        Ok(class)
    }

    /// Identity property names in declared key order, each backed by a mapped field.
    fn ordered_identities(model: &DescriptorModel) -> BindResult<Vec<String>> {
        let mut ordered: Vec<String> = Vec::with_capacity(model.identities.len());
        for id in &model.identities {
            let field = model
                .fields
                .iter()
                .find(|f| &f.name == id || f.property_name() == id)
                .ok_or_else(|| {
                    BindError::InvalidModel(format!(
                        "identity '{id}' of '{}' is not a declared field",
                        model.bound_class
                    ))
                })?;
            if !is_mappable(field) {
                return Err(BindError::InvalidModel(format!(
                    "identity '{id}' of '{}' has no column mapping",
                    model.bound_class
                )));
            }
            let name = field.property_name();
            if !ordered.iter().any(|o| o == name) {
                ordered.push(name.to_string());
            }
        }
        Ok(ordered)
    }
}

/// Single-valued fields of a simple content type map onto one column.
fn is_mappable(field: &FieldModel) -> bool {
    !field.is_collection() && !matches!(field.content_type, ContentType::Class(_))
}

fn add_field_mapping(body: &mut SourceBuffer, field: &FieldModel, is_identity: bool, bound_class: &str) {
    let jvm = map_content_type(&field.content_type);
    let name = field.property_name();
    let getter = field.read_method_name();
    let setter = field.write_method_name();
    let required = field.required || is_identity;

    body.add(format!("//{name} field"))
        .add(format!("String {name}FieldName = {};", string_literal(name)))
        .add(format!("String {name}SqlName = {};", string_literal(field.sql_name())))
        .add(format!("FieldDescriptorImpl {name}FieldDescr;"))
        .add(format!("FieldMapping {name}FM = new FieldMapping();"))
        .add(format!("TypeInfo {name}Type = new TypeInfo({}.class);", jvm.java_type(true)))
        .add("// Set columns required (= not null)")
        .add(format!("{name}Type.setRequired({required});"))
        .add("")
        .add(format!("FieldHandlerImpl {name}Handler;"))
        .add("try {")
        .add_indented(format!(
            "Method {name}GetMethod = {bound_class}.class.getMethod(\"{getter}\");"
        ))
        .add_indented(format!(
            "Method {name}SetMethod = {bound_class}.class.getMethod(\"{setter}\", {});",
            jvm.class_literal()
        ))
        .add_indented(format!(
            "{name}Handler = new FieldHandlerImpl({name}FieldName, null, null, {name}GetMethod, {name}SetMethod, {name}Type);"
        ))
        .add("} catch (SecurityException e1) {")
        .add_indented("throw new RuntimeException(e1.getMessage());")
        .add("} catch (MappingException e1) {")
        .add_indented("throw new RuntimeException(e1.getMessage());")
        .add("} catch (NoSuchMethodException e1) {")
        .add_indented("throw new RuntimeException(e1.getMessage());")
        .add("}")
        .add("")
        .add(format!("// Instantiate {name} field descriptor"))
        .add(format!(
            "{name}FieldDescr = new FieldDescriptorImpl({name}FieldName, {name}Type, {name}Handler, false);"
        ))
        .add(format!("{name}FieldDescr.addNature(FieldDescriptorJDONature.class.getName());"))
        .add(format!(
            "FieldDescriptorJDONature {name}FieldJdoNature = new FieldDescriptorJDONature({name}FieldDescr);"
        ))
        .add(format!("{name}FieldJdoNature.setSQLName(new String[] {{ {name}SqlName }});"))
        .add(format!(
            "{name}FieldJdoNature.setSQLType(new int[] {{ {} }});",
            jvm.sql_type_constant()
        ))
        .add(format!("{name}FieldJdoNature.setManyTable(null);"))
        .add(format!("{name}FieldJdoNature.setManyKey(new String[] {{}});"))
        .add(format!("{name}FieldJdoNature.setDirtyCheck(false);"))
        .add(format!("{name}FieldJdoNature.setReadOnly(false);"))
        .add("")
        .add(format!("{name}FieldDescr.setContainingClassDescriptor(this);"))
        .add(format!("{name}FieldDescr.setIdentity({is_identity});"))
        .add(format!("{name}FM.setIdentity({is_identity});"))
        .add(format!("{name}FM.setDirect(false);"))
        .add(format!("{name}FM.setName(\"{name}\");"))
        .add(format!("{name}FM.setRequired({required});"))
        .add(format!("{name}FM.setSetMethod(\"{setter}\");"))
        .add(format!("{name}FM.setGetMethod(\"{getter}\");"))
        .add(format!("Sql {name}Sql = new Sql();"))
        .add(format!("{name}Sql.addName({});", string_literal(field.sql_name())))
        .add(format!("{name}Sql.setType(\"{}\");", jvm.sql_type))
        .add(format!("{name}FM.setSql({name}Sql);"))
        .add(format!("{name}FM.setType(\"{}\");", jvm.sql_type))
        .add(format!("choice.addFieldMapping({name}FM);"));
}
