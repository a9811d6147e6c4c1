#![allow(non_snake_case)]

use super::*;

// SourceBuffer tests

#[test]
fn SourceBuffer___add_and_indent___renders_nested_lines() {
    let mut code = SourceBuffer::new();
    code.add("if (x) {");
    code.indent();
    code.add("y();");
    code.unindent();
    code.add("}");

    assert_eq!(code.to_string(), "if (x) {\n    y();\n}\n");
}

#[test]
fn SourceBuffer___append___extends_last_line() {
    let mut code = SourceBuffer::new();
    code.add("return ").append("this._items").append(";");

    assert_eq!(code.line_count(), 1);
    assert_eq!(code.to_string(), "return this._items;\n");
}

#[test]
fn SourceBuffer___append_on_empty___starts_line() {
    let mut code = SourceBuffer::new();
    code.append("x();");

    assert_eq!(code.to_string(), "x();\n");
}

#[test]
fn SourceBuffer___add_indented___does_not_change_level() {
    let mut code = SourceBuffer::new();
    code.add("if (x)");
    code.add_indented("y();");
    code.add("z();");

    assert_eq!(code.to_string(), "if (x)\n    y();\nz();\n");
}

#[test]
fn SourceBuffer___unindent_at_zero___saturates() {
    let mut code = SourceBuffer::new();
    code.unindent();
    code.add("x();");

    assert_eq!(code.to_string(), "x();\n");
}

#[test]
fn SourceBuffer___render_with_base___shifts_all_lines() {
    let mut code = SourceBuffer::new();
    code.add("a();");
    code.add("");

    assert_eq!(code.render(2), "        a();\n\n");
}

#[test]
fn SourceBuffer___extend___nests_other_buffer() {
    let mut inner = SourceBuffer::new();
    inner.add("b();");
    let mut outer = SourceBuffer::new();
    outer.add("{");
    outer.indent();
    outer.extend(&inner);

    assert_eq!(outer.to_string(), "{\n    b();\n");
    assert!(outer.contains("b()"));
}

// Modifiers tests

#[test]
fn Modifiers___declaration_prefix___orders_keywords() {
    let modifiers = Modifiers::private().with_static().with_final();

    assert_eq!(modifiers.declaration_prefix(), "private static final ");
}

#[test]
fn Modifiers___package_visibility___has_empty_prefix() {
    let modifiers = Modifiers {
        visibility: Visibility::Package,
        ..Modifiers::default()
    };

    assert_eq!(modifiers.declaration_prefix(), "");
}

// ClassConstruct tests

#[test]
fn ClassConstruct___names___split_qualified_name() {
    let class = ClassConstruct::new("org.example.Order");

    assert_eq!(class.name(), "org.example.Order");
    assert_eq!(class.package(), "org.example");
    assert_eq!(class.local_name(), "Order");
}

#[test]
fn ClassConstruct___add_import___skips_redundant_imports() {
    let mut class = ClassConstruct::new("org.example.Order");

    class.add_import("java.util.List");
    class.add_import("java.util.List");
    class.add_import("java.lang.String");
    class.add_import("org.example.Item");
    class.add_import("int");

    assert_eq!(class.imports(), &["java.util.List".to_string()]);
}

#[test]
fn ClassConstruct___add_field___rejects_duplicate_name() {
    let mut class = ClassConstruct::new("a.B");

    assert!(class.add_field(JavaField::new("int", "_x")));
    assert!(!class.add_field(JavaField::new("long", "_x")));
    assert_eq!(class.fields().len(), 1);
    assert_eq!(class.field("_x").unwrap().ty, "int");
}

#[test]
fn ClassConstruct___add_method___keeps_overloads_but_rejects_same_signature() {
    let mut class = ClassConstruct::new("a.B");

    assert!(class.add_method(JavaMethod::new("setItem").with_parameter("int", "index")));
    assert!(class.add_method(JavaMethod::new("setItem").with_parameter("String[]", "array")));
    assert!(!class.add_method(JavaMethod::new("setItem").with_parameter("int", "other")));

    assert_eq!(class.methods_named("setItem").count(), 2);
}

#[test]
fn ClassConstruct___default_constructor_mut___creates_once() {
    let mut class = ClassConstruct::new("a.B");

    class.default_constructor_mut().body.add("super();");
    class.default_constructor_mut().body.add("init();");

    assert_eq!(class.constructors().len(), 1);
    assert_eq!(class.constructors()[0].body.line_count(), 2);
}

#[test]
fn JavaMethod___signature___lists_parameter_types() {
    let method = JavaMethod::new("addItem")
        .with_parameter("int", "index")
        .with_parameter("String", "vItem");

    assert_eq!(method.signature(), "addItem(int,String)");
}
