//! Java source rendering for class constructs.

use crate::naming::local_name;
use schemabind_core::{ClassConstruct, JavaParameter, SourceBuffer};
use std::path::PathBuf;

/// Renders a [`ClassConstruct`] as a Java compilation unit.
///
/// Output order: package, sorted imports, class javadoc, declaration,
/// fields, constructors, methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaWriter;

impl JavaWriter {
    pub fn new() -> Self {
        Self
    }

    /// Path of the source file relative to the output root (`org/example/Order.java`).
    pub fn relative_path(class: &ClassConstruct) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in class.package().split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.java", class.local_name()));
        path
    }

    /// Render `class` to Java source text.
    pub fn render(&self, class: &ClassConstruct) -> String {
        let mut out = SourceBuffer::new();

        if !class.package().is_empty() {
            out.add(format!("package {};", class.package())).add("");
        }

        let mut imports: Vec<&str> = class.imports().iter().map(String::as_str).collect();
        imports.sort_unstable();
        imports.dedup();
        for import in &imports {
            out.add(format!("import {import};"));
        }
        if !imports.is_empty() {
            out.add("");
        }

        if let Some(comment) = class.comment() {
            add_javadoc(&mut out, comment);
        }
        out.add(declaration(class));
        out.indent();

        for field in class.fields() {
            out.add("");
            if let Some(comment) = &field.comment {
                add_javadoc(&mut out, comment);
            }
            let initializer = field
                .initializer
                .as_deref()
                .map(|init| format!(" = {init}"))
                .unwrap_or_default();
            out.add(format!(
                "{}{} {}{initializer};",
                field.modifiers.declaration_prefix(),
                field.ty,
                field.name
            ));
        }

        for constructor in class.constructors() {
            out.add("");
            if let Some(comment) = &constructor.comment {
                add_javadoc(&mut out, comment);
            }
            out.add(format!(
                "{}{}({}) {{",
                constructor.modifiers.declaration_prefix(),
                class.local_name(),
                parameter_list(&constructor.parameters)
            ));
            add_body(&mut out, &constructor.body);
            out.add("}");
        }

        for method in class.methods() {
            out.add("");
            if let Some(comment) = &method.comment {
                add_javadoc(&mut out, comment);
            }
            for annotation in &method.annotations {
                out.add(annotation.as_str());
            }
            let signature = format!(
                "{}{} {}({})",
                method.modifiers.declaration_prefix(),
                method.return_type.as_deref().unwrap_or("void"),
                method.name,
                parameter_list(&method.parameters)
            );
            if method.exceptions.is_empty() {
                out.add(format!("{signature} {{"));
            } else {
                out.add(signature);
                out.add_indented(format!("throws {} {{", method.exceptions.join(", ")));
            }
            add_body(&mut out, &method.body);
            out.add("}");
        }

        out.unindent();
        out.add("}");

        tracing::trace!(class = %class.name(), lines = out.line_count(), "class rendered");
        out.render(0)
    }
}

fn add_body(out: &mut SourceBuffer, body: &SourceBuffer) {
    out.indent();
    out.extend(body);
    out.unindent();
}

fn declaration(class: &ClassConstruct) -> String {
    let mut decl = String::from("public ");
    if class.is_abstract() {
        decl.push_str("abstract ");
    }
    decl.push_str("class ");
    decl.push_str(class.local_name());
    if let Some(superclass) = class.superclass() {
        decl.push_str(" extends ");
        decl.push_str(local_name(superclass));
    }
    if !class.interfaces().is_empty() {
        let interfaces: Vec<&str> = class.interfaces().iter().map(|i| local_name(i)).collect();
        decl.push_str(" implements ");
        decl.push_str(&interfaces.join(", "));
    }
    decl.push_str(" {");
    decl
}

fn parameter_list(parameters: &[JavaParameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("final {} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn add_javadoc(out: &mut SourceBuffer, comment: &str) {
    out.add("/**");
    out.add(format!(" * {comment}"));
    out.add(" */");
}
