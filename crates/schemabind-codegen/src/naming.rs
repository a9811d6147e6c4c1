//! Naming helpers for generated Java identifiers.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `org.example.Order` | [`local_name`] | `Order` |
//! | `org.example.Order` | [`package_name`] | `org.example` |
//! | `word` | [`capitalize`] | `Word` |
//! | `Word` | [`decapitalize`] | `word` |
//! | `item_list` | [`to_camel_case`] | `itemList` |

/// Strip everything up to and including the last `.`.
///
/// Names without a separator (including primitive type names) come back
/// unchanged.
///
/// # Examples
///
/// ```
/// use schemabind_codegen::naming::local_name;
///
/// assert_eq!(local_name("org.example.MyClass"), "MyClass");
/// assert_eq!(local_name("MyClass"), "MyClass");
/// assert_eq!(local_name("int"), "int");
/// ```
pub fn local_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(_, local)| local)
        .unwrap_or(qualified)
}

/// Everything before the last `.`, or an empty string for unqualified names.
pub fn package_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(package, _)| package)
        .unwrap_or("")
}

/// Capitalize the first letter of a string.
///
/// Only the first character changes; a leading non-letter is left as is.
///
/// # Examples
///
/// ```
/// use schemabind_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("Hello"), "Hello");
/// assert_eq!(capitalize("_field"), "_field");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Convert snake_case or kebab-case to camelCase.
///
/// # Examples
///
/// ```
/// use schemabind_codegen::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("item_list"), "itemList");
/// assert_eq!(to_camel_case("order-line"), "orderLine");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Quote `value` as a Java string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Java char literal for the first character of `value`, escaped.
///
/// # Examples
///
/// ```
/// use schemabind_codegen::naming::char_literal;
///
/// assert_eq!(char_literal("x"), "'x'");
/// assert_eq!(char_literal("'"), "'\\''");
/// ```
pub fn char_literal(value: &str) -> String {
    let escaped = match value.chars().next() {
        Some('\'') => "\\'".to_string(),
        Some('\\') => "\\\\".to_string(),
        Some('\n') => "\\n".to_string(),
        Some('\r') => "\\r".to_string(),
        Some('\t') => "\\t".to_string(),
        Some(other) => other.to_string(),
        None => "\\0".to_string(),
    };
    format!("'{escaped}'")
}

/// Java literal for an optional string: quoted, or `null`.
pub fn optional_string_literal(value: Option<&str>) -> String {
    value.map_or_else(|| "null".to_string(), string_literal)
}
