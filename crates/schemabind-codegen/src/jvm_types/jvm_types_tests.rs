#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn jvm_type___reference___same_primitive_and_boxed() {
    let ty = JvmType::reference("String", "varchar");

    assert_eq!(ty.primitive, "String");
    assert_eq!(ty.boxed, "String");
    assert!(!ty.is_primitive);
}

#[test]
fn jvm_type___java_type___primitive_or_boxed() {
    let ty = JvmType::primitive("int", "Integer", "integer");

    assert_eq!(ty.java_type(false), "int");
    assert_eq!(ty.java_type(true), "Integer");
}

#[test]
fn jvm_type___java_type___qualified_reference_uses_local_name() {
    let ty = map_content_type(&ContentType::Decimal);

    assert_eq!(ty.java_type(false), "BigDecimal");
    assert_eq!(ty.java_type(true), "BigDecimal");
}

#[test]
fn jvm_type___import_into___adds_qualified_references_only() {
    let mut class = ClassConstruct::new("org.example.Order");

    map_content_type(&ContentType::Date).import_into(&mut class);
    map_content_type(&ContentType::Int).import_into(&mut class);
    map_content_type(&ContentType::String).import_into(&mut class);

    assert_eq!(class.imports(), ["java.util.Date".to_string()]);
}

#[test_case(ContentType::Int, "vItem", "Integer.valueOf(vItem)" ; "primitive is boxed")]
#[test_case(ContentType::String, "vItem", "vItem" ; "reference unchanged")]
fn jvm_type___to_object___boxes_primitives(content_type: ContentType, expr: &str, expected: &str) {
    assert_eq!(map_content_type(&content_type).to_object(expr), expected);
}

#[test_case(ContentType::Int, "((Integer) value).intValue()" ; "primitive unboxed")]
#[test_case(ContentType::Boolean, "((Boolean) value).booleanValue()" ; "boolean unboxed")]
#[test_case(ContentType::String, "(String) value" ; "reference cast")]
#[test_case(ContentType::Class("org.example.Item".into()), "(Item) value" ; "class cast uses local name")]
fn jvm_type___from_object___casts_back(content_type: ContentType, expected: &str) {
    assert_eq!(map_content_type(&content_type).from_object("value"), expected);
}

#[test_case(ContentType::String, "abc", "\"abc\"" ; "string quoted")]
#[test_case(ContentType::Char, "x", "'x'" ; "char quoted")]
#[test_case(ContentType::Char, "'", "'\\''" ; "char quote escaped")]
#[test_case(ContentType::Char, "\\", "'\\\\'" ; "char backslash escaped")]
#[test_case(ContentType::Byte, "5", "(byte) 5" ; "byte cast")]
#[test_case(ContentType::Short, "-3", "(short) -3" ; "short cast")]
#[test_case(ContentType::Long, "5", "5L" ; "long suffixed")]
#[test_case(ContentType::Float, "1.5", "1.5f" ; "float suffixed")]
#[test_case(ContentType::Int, "42", "42" ; "int verbatim")]
#[test_case(ContentType::Decimal, "1.0", "new BigDecimal(\"1.0\")" ; "decimal constructed")]
fn jvm_type___literal___matches_java_syntax(content_type: ContentType, value: &str, expected: &str) {
    assert_eq!(map_content_type(&content_type).literal(value), expected);
}

#[test]
fn jvm_type___class_literal___uses_primitive_form() {
    assert_eq!(map_content_type(&ContentType::Int).class_literal(), "int.class");
    assert_eq!(map_content_type(&ContentType::String).class_literal(), "String.class");
}

#[test]
fn jvm_type___sql_type_constant___uppercases_type() {
    assert_eq!(
        map_content_type(&ContentType::Int).sql_type_constant(),
        "java.sql.Types.INTEGER"
    );
}

#[test]
fn use_type___imports_and_returns_local_name() {
    let mut class = ClassConstruct::new("org.example.Order");

    let name = use_type(&mut class, "java.util.ArrayList");

    assert_eq!(name, "ArrayList");
    assert!(class.imports().contains(&"java.util.ArrayList".to_string()));
}
