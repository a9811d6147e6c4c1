//! Generator configuration

use crate::error::{BindError, BindResult};
use crate::model::CollectionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Built-in strategies, in the form accepted by the strategy registry.
pub const DEFAULT_CONFLICT_STRATEGIES: &str =
    "schemabind_conflict::InformViaLogStrategy, schemabind_conflict::WarnViaConsoleDialogStrategy";

/// Generator configuration, usually loaded from `schemabind.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Package for generated classes whose type model is unqualified
    #[serde(default)]
    pub package: String,

    /// Accessor shape for collection fields
    #[serde(default)]
    pub collection_policy: CollectionPolicy,

    /// Emit generics and iterator-style traversal
    #[serde(default = "default_true")]
    pub modern_mode: bool,

    /// Treat every field as bound regardless of the type model
    #[serde(default)]
    pub bound_properties: bool,

    /// Emit convenience collection accessors regardless of the type model
    #[serde(default)]
    pub extra_collection_methods: bool,

    /// Comma/whitespace separated strategy identifiers to load
    #[serde(default = "default_conflict_strategies")]
    pub conflict_strategies: String,

    /// Name of the strategy consulted during this run
    #[serde(default = "default_conflict_strategy")]
    pub conflict_strategy: String,

    #[serde(default = "default_descriptor_suffix")]
    pub descriptor_suffix: String,

    #[serde(default = "default_jdo_descriptor_suffix")]
    pub jdo_descriptor_suffix: String,

    /// Superclass applied to every generated class
    ///
    /// A bound type whose parent equals this class counts as having no
    /// explicit parent when its descriptor superclass is chosen.
    #[serde(default)]
    pub super_class: Option<String>,

    #[serde(default = "default_true")]
    pub generate_descriptors: bool,

    #[serde(default)]
    pub generate_jdo_descriptors: bool,

    /// Annotation lines attached to generated collection array getters
    #[serde(default)]
    pub extra_annotations: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub runtime: RuntimeNames,
}

fn default_true() -> bool {
    true
}

fn default_conflict_strategies() -> String {
    DEFAULT_CONFLICT_STRATEGIES.to_string()
}

fn default_conflict_strategy() -> String {
    "warnViaConsoleDialog".to_string()
}

fn default_descriptor_suffix() -> String {
    "Descriptor".to_string()
}

fn default_jdo_descriptor_suffix() -> String {
    "JDODescriptor".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: String::new(),
            collection_policy: CollectionPolicy::default(),
            modern_mode: true,
            bound_properties: false,
            extra_collection_methods: false,
            conflict_strategies: default_conflict_strategies(),
            conflict_strategy: default_conflict_strategy(),
            descriptor_suffix: default_descriptor_suffix(),
            jdo_descriptor_suffix: default_jdo_descriptor_suffix(),
            super_class: None,
            generate_descriptors: true,
            generate_jdo_descriptors: false,
            extra_annotations: Vec::new(),
            log_level: default_log_level(),
            runtime: RuntimeNames::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text; empty text yields the defaults
    pub fn from_toml_str(content: &str) -> BindResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> BindResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BindError::InvalidConfiguration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> BindResult<()> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(BindError::InvalidConfiguration(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }

        if self.descriptor_suffix.is_empty() || self.jdo_descriptor_suffix.is_empty() {
            return Err(BindError::InvalidConfiguration(
                "descriptor suffixes cannot be empty".into(),
            ));
        }

        if self.descriptor_suffix == self.jdo_descriptor_suffix {
            return Err(BindError::InvalidConfiguration(format!(
                "descriptor and JDO descriptor suffix are both '{}'",
                self.descriptor_suffix
            )));
        }

        if self.conflict_strategy.trim().is_empty() {
            return Err(BindError::UnknownStrategy(String::new()));
        }

        if !self.package.is_empty() && !is_valid_package(&self.package) {
            return Err(BindError::InvalidConfiguration(format!(
                "'{}' is not a valid package name",
                self.package
            )));
        }

        Ok(())
    }

    /// Qualify `name` with the configured package unless it already is qualified
    pub fn qualify(&self, name: &str) -> String {
        if name.contains('.') || self.package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.package, name)
        }
    }
}

/// Check that every dot-separated segment is a Java identifier
fn is_valid_package(package: &str) -> bool {
    package.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    })
}

/// Runtime classes referenced from generated descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeNames {
    #[serde(default = "default_xml_descriptor_base")]
    pub xml_descriptor_base: String,

    #[serde(default = "default_jdo_descriptor_base")]
    pub jdo_descriptor_base: String,

    #[serde(default = "default_field_descriptor")]
    pub field_descriptor: String,

    #[serde(default = "default_xml_field_descriptor_impl")]
    pub xml_field_descriptor_impl: String,

    #[serde(default = "default_xml_field_handler")]
    pub xml_field_handler: String,

    #[serde(default = "default_field_validator")]
    pub field_validator: String,

    #[serde(default = "default_type_validator")]
    pub type_validator: String,

    #[serde(default = "default_node_type")]
    pub node_type: String,

    #[serde(default = "default_access_mode")]
    pub access_mode: String,

    /// Factory expression producing an external-store array
    #[serde(default = "default_external_store_factory")]
    pub external_store_factory: String,

    #[serde(default = "default_external_store_type")]
    pub external_store_type: String,
}

fn default_xml_descriptor_base() -> String {
    "org.exolab.castor.xml.util.XMLClassDescriptorImpl".to_string()
}

fn default_jdo_descriptor_base() -> String {
    "org.exolab.castor.mapping.loader.ClassDescriptorImpl".to_string()
}

fn default_field_descriptor() -> String {
    "org.exolab.castor.xml.XMLFieldDescriptor".to_string()
}

fn default_xml_field_descriptor_impl() -> String {
    "org.exolab.castor.xml.util.XMLFieldDescriptorImpl".to_string()
}

fn default_xml_field_handler() -> String {
    "org.exolab.castor.xml.XMLFieldHandler".to_string()
}

fn default_field_validator() -> String {
    "org.exolab.castor.xml.FieldValidator".to_string()
}

fn default_type_validator() -> String {
    "org.exolab.castor.xml.TypeValidator".to_string()
}

fn default_node_type() -> String {
    "org.exolab.castor.xml.NodeType".to_string()
}

fn default_access_mode() -> String {
    "org.exolab.castor.mapping.AccessMode".to_string()
}

fn default_external_store_factory() -> String {
    "org.odmg.ODMG.getImplementation().newDArray()".to_string()
}

fn default_external_store_type() -> String {
    "org.odmg.DArray".to_string()
}

impl Default for RuntimeNames {
    fn default() -> Self {
        Self {
            xml_descriptor_base: default_xml_descriptor_base(),
            jdo_descriptor_base: default_jdo_descriptor_base(),
            field_descriptor: default_field_descriptor(),
            xml_field_descriptor_impl: default_xml_field_descriptor_impl(),
            xml_field_handler: default_xml_field_handler(),
            field_validator: default_field_validator(),
            type_validator: default_type_validator(),
            node_type: default_node_type(),
            access_mode: default_access_mode(),
            external_store_factory: default_external_store_factory(),
            external_store_type: default_external_store_type(),
        }
    }
}
