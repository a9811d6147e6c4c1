#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn new_class() -> ClassConstruct {
    ClassConstruct::new("org.example.Order")
}

#[test]
fn FieldFactory___string_member___has_no_flag() {
    let field = FieldModel::new("_name", ContentType::String, "Name");
    let mut class = new_class();

    FieldFactory::new().create_member(&field, &mut class);

    assert_eq!(class.fields().len(), 1);
    assert_eq!(class.fields()[0].ty, "String");
}

#[test]
fn FieldFactory___primitive_member___adds_has_flag() {
    let field = FieldModel::new("_count", ContentType::Int, "Count");
    let mut class = new_class();

    FieldFactory::new().create_member(&field, &mut class);

    assert_eq!(class.fields().len(), 2);
    let flag = class.field("_has_count").unwrap();
    assert_eq!(flag.ty, "boolean");
}

#[test]
fn FieldFactory___date_member___imports_type() {
    let field = FieldModel::new("_created", ContentType::Date, "Created");
    let mut class = new_class();

    FieldFactory::new().create_member(&field, &mut class);

    assert_eq!(class.fields()[0].ty, "Date");
    assert!(class.imports().contains(&"java.util.Date".to_string()));
}

#[test_case(ContentType::String, &["getName", "setName"] ; "reference")]
#[test_case(ContentType::Int, &["getName", "setName", "hasName", "deleteName"] ; "primitive")]
#[test_case(ContentType::Boolean, &["getName", "setName", "isName", "hasName", "deleteName"] ; "boolean")]
fn FieldFactory___access_methods___depend_on_type(content_type: ContentType, expected: &[&str]) {
    let field = FieldModel::new("_name", content_type, "Name");
    let mut class = new_class();

    FieldFactory::new().create_access_methods(&field, &mut class);

    let names: Vec<&str> = class.methods().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn FieldFactory___primitive_setter___marks_flag() {
    let field = FieldModel::new("_count", ContentType::Int, "Count");
    let mut class = new_class();

    FieldFactory::new().create_set_method(&field, &mut class);

    let setter = class.method("setCount").unwrap();
    assert_eq!(setter.parameters[0].ty, "int");
    assert_eq!(setter.parameters[0].name, "count");
    assert!(setter.body.contains("this._count = count;"));
    assert!(setter.body.contains("this._has_count = true;"));
}

#[test]
fn FieldFactory___bound_setter___notifies_old_and_new_value() {
    let field = FieldModel::new("_count", ContentType::Int, "Count").with_bound(true);
    let mut class = new_class();

    FieldFactory::new().create_access_methods(&field, &mut class);

    let setter = class.method("setCount").unwrap();
    assert!(setter.body.contains("Object oldCount = Integer.valueOf(this._count);"));
    assert!(setter.body.contains("notifyPropertyChangeListeners(\"count\", oldCount, this._count);"));
    assert!(class.has_method("addPropertyChangeListener"));
}

#[test_case(ContentType::String, "abc", "this._value = \"abc\";" ; "string quoted")]
#[test_case(ContentType::Int, "7", "this._value = 7;" ; "int verbatim")]
#[test_case(ContentType::Long, "7", "this._value = 7L;" ; "long suffixed")]
fn FieldFactory___initializer___assigns_default(content_type: ContentType, default: &str, expected: &str) {
    let field = FieldModel::new("_value", content_type, "Value").with_default_value(default);
    let mut source = SourceBuffer::new();

    FieldFactory::new().generate_initializer_code(&field, &mut source);

    assert_eq!(source.lines().collect::<Vec<_>>(), vec![expected]);
}

#[test]
fn FieldFactory___initializer_without_default___emits_nothing() {
    let field = FieldModel::new("_value", ContentType::String, "Value");
    let mut source = SourceBuffer::new();

    FieldFactory::new().generate_initializer_code(&field, &mut source);

    assert!(source.is_empty());
}
