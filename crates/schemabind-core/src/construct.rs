//! The class under construction.
//!
//! A [`ClassConstruct`] is a language-level description of one generated Java
//! class: members, methods, constructors and imports. Factories and emitters
//! populate it; the text emitter turns it into source. Method and constructor
//! bodies are kept as [`SourceBuffer`]s, i.e. indented lines of Java.

use std::fmt;

/// Number of spaces per indentation level when rendering a [`SourceBuffer`].
pub const INDENT_WIDTH: usize = 4;

/// Indented lines of generated source.
///
/// Lines are added at the current indentation level; [`append`](Self::append)
/// extends the last line instead of starting a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<(usize, String)>,
    level: usize,
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new line at the current indentation level.
    pub fn add(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push((self.level, line.into()));
        self
    }

    /// Start a new line one level deeper than the current one.
    pub fn add_indented(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push((self.level + 1, line.into()));
        self
    }

    /// Extend the last line, or start one if the buffer is empty.
    pub fn append(&mut self, text: &str) -> &mut Self {
        match self.lines.last_mut() {
            Some((_, last)) => last.push_str(text),
            None => self.lines.push((self.level, text.to_string())),
        }
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    pub fn unindent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Append every line of `other`, nested under the current level.
    pub fn extend(&mut self, other: &SourceBuffer) -> &mut Self {
        for (level, line) in &other.lines {
            self.lines.push((self.level + level, line.clone()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(_, line)| line.as_str())
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, line)| line.contains(needle))
    }

    /// Render with every line shifted right by `base_level` levels.
    pub fn render(&self, base_level: usize) -> String {
        let mut out = String::new();
        for (level, line) in &self.lines {
            if !line.is_empty() {
                let width = (base_level + level) * INDENT_WIDTH;
                out.push_str(&" ".repeat(width));
                out.push_str(line);
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(0))
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    Package,
}

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
            Visibility::Package => "",
        }
    }
}

/// Modifiers applicable to fields and methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_final: bool,
    pub is_abstract: bool,
}

impl Modifiers {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn private() -> Self {
        Self {
            visibility: Visibility::Private,
            ..Self::default()
        }
    }

    pub fn protected() -> Self {
        Self {
            visibility: Visibility::Protected,
            ..Self::default()
        }
    }

    pub fn with_final(mut self) -> Self {
        self.is_final = true;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Keywords in declaration order, followed by a space when non-empty.
    pub fn declaration_prefix(&self) -> String {
        let mut words: Vec<&str> = Vec::new();
        if !self.visibility.keyword().is_empty() {
            words.push(self.visibility.keyword());
        }
        if self.is_abstract {
            words.push("abstract");
        }
        if self.is_static {
            words.push("static");
        }
        if self.is_final {
            words.push("final");
        }
        if words.is_empty() {
            String::new()
        } else {
            format!("{} ", words.join(" "))
        }
    }
}

/// A member field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaField {
    pub name: String,
    pub ty: String,
    pub modifiers: Modifiers,
    pub initializer: Option<String>,
    pub comment: Option<String>,
}

impl JavaField {
    /// A private field with no initializer.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: Modifiers::private(),
            initializer: None,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_initializer(mut self, initializer: impl Into<String>) -> Self {
        self.initializer = Some(initializer.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaParameter {
    pub ty: String,
    pub name: String,
}

impl JavaParameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// A method specification with its generated body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    pub name: String,
    /// `None` for `void`.
    pub return_type: Option<String>,
    pub parameters: Vec<JavaParameter>,
    pub modifiers: Modifiers,
    pub exceptions: Vec<String>,
    pub annotations: Vec<String>,
    pub comment: Option<String>,
    pub body: SourceBuffer,
}

impl JavaMethod {
    /// A public `void` method without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            parameters: Vec::new(),
            modifiers: Modifiers::public(),
            exceptions: Vec::new(),
            annotations: Vec::new(),
            comment: None,
            body: SourceBuffer::new(),
        }
    }

    pub fn returning(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn with_parameter(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(JavaParameter::new(ty, name));
        self
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exceptions.push(exception.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_annotations(mut self, annotations: &[String]) -> Self {
        self.annotations.extend(annotations.iter().cloned());
        self
    }

    /// Parameter types joined by commas, used to tell overloads apart.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.parameters.iter().map(|p| p.ty.as_str()).collect();
        format!("{}({})", self.name, types.join(","))
    }
}

/// A constructor with its generated body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JavaConstructor {
    pub parameters: Vec<JavaParameter>,
    pub modifiers: Modifiers,
    pub comment: Option<String>,
    pub body: SourceBuffer,
}

impl JavaConstructor {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A class under construction.
///
/// Owned by the generation pass that creates it and handed to the text
/// emitter once complete. Fields and methods keep insertion order; imports
/// are de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassConstruct {
    name: String,
    superclass: Option<String>,
    interfaces: Vec<String>,
    imports: Vec<String>,
    fields: Vec<JavaField>,
    methods: Vec<JavaMethod>,
    constructors: Vec<JavaConstructor>,
    comment: Option<String>,
    is_abstract: bool,
}

impl ClassConstruct {
    /// Create an empty class with the given qualified name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            interfaces: Vec::new(),
            imports: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
            comment: None,
            is_abstract: false,
        }
    }

    /// Qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package part of the qualified name (empty for the default package).
    pub fn package(&self) -> &str {
        self.name.rsplit_once('.').map(|(pkg, _)| pkg).unwrap_or("")
    }

    /// Unqualified name.
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn set_superclass(&mut self, superclass: impl Into<String>) {
        self.superclass = Some(superclass.into());
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn add_interface(&mut self, interface: impl Into<String>) {
        let interface = interface.into();
        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn set_abstract(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Add an import unless it is redundant.
    ///
    /// Unqualified names, `java.lang` types and classes of this class's own
    /// package are skipped, as are duplicates.
    pub fn add_import(&mut self, import: impl Into<String>) {
        let import = import.into();
        let Some((package, _)) = import.rsplit_once('.') else {
            return;
        };
        if package == "java.lang" || package == self.package() {
            return;
        }
        if !self.imports.contains(&import) {
            self.imports.push(import);
        }
    }

    pub fn fields(&self) -> &[JavaField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&JavaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Add a field; returns `false` and leaves the class unchanged if one
    /// with the same name already exists.
    pub fn add_field(&mut self, field: JavaField) -> bool {
        if self.field(&field.name).is_some() {
            tracing::debug!(class = %self.name, field = %field.name, "field already present");
            return false;
        }
        self.fields.push(field);
        true
    }

    pub fn methods(&self) -> &[JavaMethod] {
        &self.methods
    }

    /// First method with the given name.
    pub fn method(&self, name: &str) -> Option<&JavaMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// All overloads with the given name.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a JavaMethod> {
        self.methods.iter().filter(move |m| m.name == name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Add a method; an existing method with the same signature is kept and
    /// the new one dropped.
    pub fn add_method(&mut self, method: JavaMethod) -> bool {
        let signature = method.signature();
        if self.methods.iter().any(|m| m.signature() == signature) {
            tracing::debug!(class = %self.name, %signature, "method already present");
            return false;
        }
        tracing::trace!(class = %self.name, %signature, "method added");
        self.methods.push(method);
        true
    }

    pub fn constructors(&self) -> &[JavaConstructor] {
        &self.constructors
    }

    pub fn add_constructor(&mut self, constructor: JavaConstructor) {
        self.constructors.push(constructor);
    }

    /// The no-argument constructor, created on first use.
    pub fn default_constructor_mut(&mut self) -> &mut JavaConstructor {
        let index = match self.constructors.iter().position(|c| c.parameters.is_empty()) {
            Some(index) => index,
            None => {
                self.constructors.push(JavaConstructor::new());
                self.constructors.len() - 1
            }
        };
        &mut self.constructors[index]
    }
}

#[cfg(test)]
#[path = "construct/construct_tests.rs"]
mod construct_tests;
