//! JVM type mappings for field content types.
//!
//! # Type Mappings
//!
//! | Content type | Primitive | Boxed | SQL |
//! |--------------|-----------|-------|-----|
//! | `string` | `String` | `String` | `varchar` |
//! | `boolean` | `boolean` | `Boolean` | `bit` |
//! | `int` | `int` | `Integer` | `integer` |
//! | `long` | `long` | `Long` | `bigint` |
//! | `double` | `double` | `Double` | `double` |
//! | `decimal` | `java.math.BigDecimal` | same | `numeric` |
//! | `date` | `java.util.Date` | same | `timestamp` |
//! | `class(X)` | `X` | `X` | `varchar` |

use crate::naming::{char_literal, local_name, string_literal};
use schemabind_core::{ClassConstruct, ContentType};

/// A JVM type with both primitive and boxed forms.
///
/// Reference types are kept fully qualified; callers import them through
/// [`JvmType::import_into`] and write the local name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmType {
    /// The primitive type name (e.g. `int`) or qualified reference type name.
    pub primitive: String,
    /// The boxed type name (e.g. `Integer`) or qualified reference type name.
    pub boxed: String,
    pub is_primitive: bool,
    /// Column type name used in relational mappings.
    pub sql_type: &'static str,
}

impl JvmType {
    /// A reference type, identical in primitive and boxed form.
    pub fn reference(name: &str, sql_type: &'static str) -> Self {
        Self {
            primitive: name.to_string(),
            boxed: name.to_string(),
            is_primitive: false,
            sql_type,
        }
    }

    pub fn primitive(primitive: &str, boxed: &str, sql_type: &'static str) -> Self {
        Self {
            primitive: primitive.to_string(),
            boxed: boxed.to_string(),
            is_primitive: true,
            sql_type,
        }
    }

    /// Java type as written in source: boxed when `boxed` is set, local names.
    pub fn java_type(&self, boxed: bool) -> &str {
        if boxed {
            local_name(&self.boxed)
        } else {
            local_name(&self.primitive)
        }
    }

    /// Import the type into `class` if it is a qualified reference type.
    pub fn import_into(&self, class: &mut ClassConstruct) {
        if !self.is_primitive {
            class.add_import(self.boxed.clone());
        }
    }

    /// `<type>.class` for reflective lookups; primitives use their own class literal.
    pub fn class_literal(&self) -> String {
        format!("{}.class", self.java_type(false))
    }

    /// Expression converting a value of the primitive form to an object.
    pub fn to_object(&self, expr: &str) -> String {
        if self.is_primitive {
            format!("{}.valueOf({expr})", self.boxed)
        } else {
            expr.to_string()
        }
    }

    /// Expression converting an `Object` back to the primitive form.
    pub fn from_object(&self, expr: &str) -> String {
        if self.is_primitive {
            format!("(({}) {expr}).{}Value()", self.boxed, self.primitive)
        } else {
            format!("({}) {expr}", self.java_type(false))
        }
    }

    /// Java literal for a declared default value.
    pub fn literal(&self, value: &str) -> String {
        match self.primitive.as_str() {
            "String" => string_literal(value),
            "char" => char_literal(value),
            "byte" | "short" => format!("({}) {value}", self.primitive),
            "long" => format!("{value}L"),
            "float" => format!("{value}f"),
            "java.math.BigDecimal" => format!("new BigDecimal({})", string_literal(value)),
            _ => value.to_string(),
        }
    }

    /// Name of the matching `java.sql.Types` constant.
    pub fn sql_type_constant(&self) -> String {
        format!("java.sql.Types.{}", self.sql_type.to_ascii_uppercase())
    }
}

/// Map a content type to a JVM type.
pub fn map_content_type(content_type: &ContentType) -> JvmType {
    match content_type {
        ContentType::String => JvmType::reference("String", "varchar"),
        ContentType::Boolean => JvmType::primitive("boolean", "Boolean", "bit"),
        ContentType::Byte => JvmType::primitive("byte", "Byte", "tinyint"),
        ContentType::Short => JvmType::primitive("short", "Short", "smallint"),
        ContentType::Int => JvmType::primitive("int", "Integer", "integer"),
        ContentType::Long => JvmType::primitive("long", "Long", "bigint"),
        ContentType::Float => JvmType::primitive("float", "Float", "real"),
        ContentType::Double => JvmType::primitive("double", "Double", "double"),
        ContentType::Char => JvmType::primitive("char", "Character", "char"),
        ContentType::Decimal => JvmType::reference("java.math.BigDecimal", "numeric"),
        ContentType::Date => JvmType::reference("java.util.Date", "timestamp"),
        ContentType::Class(name) => JvmType::reference(name, "varchar"),
    }
}

/// Import `qualified` into `class` and return the name to write in source.
pub fn use_type(class: &mut ClassConstruct, qualified: &str) -> String {
    class.add_import(qualified);
    local_name(qualified).to_string()
}

#[cfg(test)]
#[path = "jvm_types/jvm_types_tests.rs"]
mod jvm_types_tests;
