//! Field and type model handed over by the schema front end.
//!
//! The front end (XML Schema / DTD reader) is not part of this workspace; it
//! produces [`TypeModel`] values, usually serialized as JSON, that the
//! generators consume. Nothing here re-parses schema source.
//!
//! # Structure
//!
//! - [`TypeModel`]: one bound type (becomes one generated class)
//! - [`FieldModel`]: one data member of a bound type
//! - [`ContentType`]: simplified content type of a field
//! - [`DescriptorModel`]: binding metadata derived from a [`TypeModel`]

use crate::annotations::{Annotated, Annotation};
use crate::error::{BindError, BindResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Java keywords and literals; none may serve as a property name.
const JAVA_KEYWORDS: [&str; 53] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
];

/// Simplified content type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    String,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    Decimal,
    Date,

    /// Another bound type, by qualified class name.
    Class(String),
}

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Multiplicity {
    #[default]
    Single,

    /// A collection. `max` of zero or below means unbounded.
    Many { max: i32 },
}

/// Representation a field takes in the external (XML) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    #[default]
    Element,
    Attribute,
    Text,
}

impl NodeType {
    /// Name of the matching runtime constant.
    pub fn runtime_name(&self) -> &'static str {
        match self {
            NodeType::Element => "Element",
            NodeType::Attribute => "Attribute",
            NodeType::Text => "Text",
        }
    }
}

/// Locking mode used by the relational mapping runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    #[default]
    Shared,
    Exclusive,
    DbLocked,
    ReadOnly,
}

impl AccessMode {
    /// The name understood by the runtime's `AccessMode.valueOf`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessMode::Shared => "shared",
            AccessMode::Exclusive => "exclusive",
            AccessMode::DbLocked => "db-locked",
            AccessMode::ReadOnly => "read-only",
        }
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accessor shape and backing implementation chosen for collection fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionPolicy {
    /// Ordered, index-addressable, enumerator-style iteration.
    LegacyIndexed,
    /// Index access plus iterator-style iteration.
    #[default]
    ModernIndexed,
    /// Index-addressed operations are suppressed entirely.
    NoIndex,
    /// Backing collection comes from an external store factory.
    ExternalStoreBacked,
}

impl std::fmt::Display for CollectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionPolicy::LegacyIndexed => write!(f, "legacy_indexed"),
            CollectionPolicy::ModernIndexed => write!(f, "modern_indexed"),
            CollectionPolicy::NoIndex => write!(f, "no_index"),
            CollectionPolicy::ExternalStoreBacked => write!(f, "external_store_backed"),
        }
    }
}

/// One data member of a bound type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldModel {
    /// Member name as declared in the generated class (e.g. `_itemList`).
    pub name: String,

    /// Type of the field's values (element type for collections).
    pub content_type: ContentType,

    /// Suffix used to build accessor names (e.g. `Item` in `addItem`).
    pub method_suffix: String,

    /// Whether mutations fire property-change notifications.
    #[serde(default)]
    pub bound: bool,

    #[serde(default)]
    pub multiplicity: Multiplicity,

    #[serde(default)]
    pub default_value: Option<String>,

    /// Whether supplementary convenience accessors are wanted.
    #[serde(default)]
    pub extra_methods: bool,

    /// External name; derived from `name` when absent.
    #[serde(default)]
    pub xml_name: Option<String>,

    #[serde(default)]
    pub node_type: NodeType,

    #[serde(default)]
    pub required: bool,

    /// Column name for relational mapping; derived from the xml name when absent.
    #[serde(default)]
    pub sql_name: Option<String>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl FieldModel {
    /// Create a single-valued field.
    pub fn new(
        name: impl Into<String>,
        content_type: ContentType,
        method_suffix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type,
            method_suffix: method_suffix.into(),
            bound: false,
            multiplicity: Multiplicity::Single,
            default_value: None,
            extra_methods: false,
            xml_name: None,
            node_type: NodeType::Element,
            required: false,
            sql_name: None,
            annotations: Vec::new(),
        }
    }

    /// Create a collection field with the given maximum (zero or below is unbounded).
    pub fn collection(
        name: impl Into<String>,
        content_type: ContentType,
        method_suffix: impl Into<String>,
        max: i32,
    ) -> Self {
        Self::new(name, content_type, method_suffix).with_multiplicity(Multiplicity::Many { max })
    }

    pub fn with_multiplicity(mut self, multiplicity: Multiplicity) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    pub fn with_bound(mut self, bound: bool) -> Self {
        self.bound = bound;
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_extra_methods(mut self, extra: bool) -> Self {
        self.extra_methods = extra;
        self
    }

    pub fn with_node_type(mut self, node_type: NodeType) -> Self {
        self.node_type = node_type;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_xml_name(mut self, xml_name: impl Into<String>) -> Self {
        self.xml_name = Some(xml_name.into());
        self
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.multiplicity, Multiplicity::Many { .. })
    }

    /// Declared maximum cardinality; zero for single-valued fields.
    pub fn max_size(&self) -> i32 {
        match self.multiplicity {
            Multiplicity::Single => 0,
            Multiplicity::Many { max } => max,
        }
    }

    /// The name with a single leading underscore removed.
    ///
    /// `_items` becomes `items`, `__items` becomes `_items`.
    pub fn property_name(&self) -> &str {
        self.name.strip_prefix('_').unwrap_or(&self.name)
    }

    pub fn xml_name(&self) -> &str {
        self.xml_name.as_deref().unwrap_or_else(|| self.property_name())
    }

    pub fn sql_name(&self) -> &str {
        self.sql_name.as_deref().unwrap_or_else(|| self.xml_name())
    }

    /// Default value if declared and non-empty.
    pub fn effective_default(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }

    /// Reject defaults that have no Java literal for the content type.
    ///
    /// Date defaults are refused; char defaults must be exactly one character.
    fn validate_default(&self, type_name: &str) -> BindResult<()> {
        let Some(value) = self.effective_default() else {
            return Ok(());
        };
        match self.content_type {
            ContentType::Date => Err(BindError::InvalidModel(format!(
                "date field '{}' of '{}' cannot declare a default value",
                self.name, type_name
            ))),
            ContentType::Char if value.chars().count() != 1 => {
                Err(BindError::InvalidModel(format!(
                    "char field '{}' of '{}' has default '{}', expected one character",
                    self.name, type_name, value
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn read_method_name(&self) -> String {
        format!("get{}", self.method_suffix)
    }

    pub fn write_method_name(&self) -> String {
        format!("set{}", self.method_suffix)
    }

    /// Parameter name used by generated mutators (`vItem`).
    pub fn parameter_name(&self) -> String {
        format!("v{}", self.method_suffix)
    }
}

impl Annotated for FieldModel {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

fn default_true() -> bool {
    true
}

/// One bound type: becomes a generated class plus its descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeModel {
    /// Qualified class name (e.g. `org.example.Order`).
    pub name: String,

    /// Qualified name of the parent bound type, if any.
    #[serde(default)]
    pub parent: Option<String>,

    #[serde(default = "default_true")]
    pub element_definition: bool,

    #[serde(default)]
    pub namespace_prefix: Option<String>,

    #[serde(default)]
    pub namespace_uri: Option<String>,

    #[serde(default)]
    pub xml_name: Option<String>,

    /// Names of identity fields, in key order.
    #[serde(default)]
    pub identities: Vec<String>,

    #[serde(default)]
    pub access_mode: Option<AccessMode>,

    /// Qualified name of a custom validator class.
    #[serde(default)]
    pub validator: Option<String>,

    #[serde(default)]
    pub table_name: Option<String>,

    #[serde(default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub annotations: Vec<Annotation>,

    #[serde(default)]
    pub fields: Vec<FieldModel>,
}

impl TypeModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            element_definition: true,
            namespace_prefix: None,
            namespace_uri: None,
            xml_name: None,
            identities: Vec::new(),
            access_mode: None,
            validator: None,
            table_name: None,
            is_abstract: false,
            annotations: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_field(mut self, field: FieldModel) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_identity(mut self, field_name: impl Into<String>) -> Self {
        self.identities.push(field_name.into());
        self
    }

    pub fn with_namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespace_prefix = Some(prefix.into());
        self.namespace_uri = Some(uri.into());
        self
    }

    /// Package part of the qualified name (empty for the default package).
    pub fn package(&self) -> &str {
        self.name.rsplit_once('.').map(|(pkg, _)| pkg).unwrap_or("")
    }

    /// Unqualified class name.
    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    /// External name; the unqualified class name with a lowercase first letter when absent.
    pub fn xml_name(&self) -> String {
        if let Some(name) = &self.xml_name {
            return name.clone();
        }
        let simple = self.simple_name();
        let mut chars = simple.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_lowercase().chain(chars).collect(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check the model for inconsistencies the generators cannot recover from.
    pub fn validate(&self) -> BindResult<()> {
        if self.name.trim().is_empty() {
            return Err(BindError::InvalidModel("type name cannot be empty".into()));
        }

        let mut seen = HashSet::new();
        let mut properties = HashMap::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(BindError::InvalidModel(format!(
                    "type '{}' has a field without a name",
                    self.name
                )));
            }
            if field.method_suffix.is_empty() {
                return Err(BindError::InvalidModel(format!(
                    "field '{}' of '{}' has no method suffix",
                    field.name, self.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(BindError::InvalidModel(format!(
                    "type '{}' declares field '{}' twice",
                    self.name, field.name
                )));
            }
            let property = field.property_name();
            if let Some(other) = properties.insert(property, field.name.as_str()) {
                return Err(BindError::InvalidModel(format!(
                    "fields '{}' and '{}' of '{}' share the property name '{}'",
                    other, field.name, self.name, property
                )));
            }
            if JAVA_KEYWORDS.contains(&property) {
                return Err(BindError::InvalidModel(format!(
                    "field '{}' of '{}' has the reserved property name '{}'",
                    field.name, self.name, property
                )));
            }
            field.validate_default(&self.name)?;
        }

        for identity in &self.identities {
            let known = self
                .fields
                .iter()
                .any(|f| &f.name == identity || f.property_name() == identity);
            if !known {
                return Err(BindError::InvalidModel(format!(
                    "identity '{}' of '{}' is not a declared field",
                    identity, self.name
                )));
            }
        }

        Ok(())
    }

    /// Derive the binding metadata for this type.
    pub fn descriptor_model(&self) -> DescriptorModel {
        DescriptorModel {
            element_definition: self.element_definition,
            namespace_prefix: self.namespace_prefix.clone(),
            namespace_uri: self.namespace_uri.clone(),
            xml_name: self.xml_name(),
            identities: self.identities.clone(),
            access_mode: self.access_mode,
            bound_class: self.name.clone(),
            parent_class: self.parent.clone(),
            validator: self.validator.clone(),
            table_name: self.table_name.clone(),
            fields: self.fields.clone(),
        }
    }
}

impl Annotated for TypeModel {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Binding metadata mirrored by a generated descriptor.
///
/// Built fresh for each generation run from the owning [`TypeModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorModel {
    pub element_definition: bool,
    pub namespace_prefix: Option<String>,
    pub namespace_uri: Option<String>,
    pub xml_name: String,
    pub identities: Vec<String>,
    pub access_mode: Option<AccessMode>,
    /// Qualified name of the bound runtime class.
    pub bound_class: String,
    pub parent_class: Option<String>,
    pub validator: Option<String>,
    pub table_name: Option<String>,
    pub fields: Vec<FieldModel>,
}

impl DescriptorModel {
    /// Whether `field` is one of the identity fields.
    pub fn is_identity(&self, field: &FieldModel) -> bool {
        self.identities
            .iter()
            .any(|id| id == &field.name || id == field.property_name())
    }
}
