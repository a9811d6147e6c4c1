#![allow(non_snake_case)]

use super::*;
use schemabind_conflict::{ConsoleDialog, InformViaLogStrategy, WarnViaConsoleDialogStrategy};
use schemabind_core::{Annotation, ContentType, Documentation, FieldModel};

/// Answers every prompt with the same character and counts prompts.
struct ScriptedDialog {
    answer: char,
    prompts: usize,
}

impl ConsoleDialog for ScriptedDialog {
    fn confirm(&mut self, _message: &str, _valid_responses: &str, _legend: &str) -> char {
        self.prompts += 1;
        self.answer
    }
}

fn order() -> TypeModel {
    TypeModel::new("Order")
        .with_field(FieldModel::new("_id", ContentType::Int, "Id"))
        .with_field(FieldModel::new("_status", ContentType::String, "Status").with_default_value("open"))
        .with_field(FieldModel::collection("_lines", ContentType::String, "Line", 0))
        .with_identity("id")
}

fn config() -> GeneratorConfig {
    GeneratorConfig {
        package: "org.example".into(),
        ..GeneratorConfig::default()
    }
}

fn generator(config: GeneratorConfig) -> SourceGenerator {
    SourceGenerator::new(config, Arc::new(InformViaLogStrategy))
}

// from_registry tests

#[test]
fn SourceGenerator___from_registry___uses_configured_strategy() {
    let config = config();
    let registry = StrategyRegistry::new(Some(&config.conflict_strategies)).unwrap();

    let generator = SourceGenerator::from_registry(config, &registry).unwrap();

    assert_eq!(generator.strategy().name(), "warnViaConsoleDialog");
}

#[test]
fn SourceGenerator___from_registry_unknown_name___fails() {
    let mut config = config();
    config.conflict_strategy = "unknown".into();
    let registry = StrategyRegistry::new(Some(&config.conflict_strategies)).unwrap();

    let result = SourceGenerator::from_registry(config, &registry);

    assert!(matches!(result, Err(BindError::UnknownStrategy(name)) if name == "unknown"));
}

// build_class tests

#[test]
fn SourceGenerator___build_class___members_and_accessors() {
    let generator = generator(config());

    let class = generator.build_class(&order()).unwrap();

    assert!(class.field("_id").is_some());
    assert!(class.field("_has_id").is_some());
    assert!(class.field("_lines").is_some());
    assert!(class.has_method("getId"));
    assert!(class.has_method("setStatus"));
    assert!(class.has_method("addLine"));
    assert!(class.has_method("getLineCount"));
    assert!(class.has_method("removeAllLine"));
}

#[test]
fn SourceGenerator___build_class___constructor_runs_initializers_after_super() {
    let generator = generator(config());

    let class = generator.build_class(&order()).unwrap();

    let body = &class.constructors()[0].body;
    assert_eq!(body.lines().next(), Some("super();"));
    assert!(body.contains("this._status = \"open\";"));
    assert!(body.contains("this._lines = new ArrayList<String>();"));
}

#[test]
fn SourceGenerator___build_class___documentation_becomes_class_comment() {
    let generator = generator(config());
    let mut ty = order();
    ty.annotations = vec![Annotation::new(vec![Documentation::new("A customer order.")])];

    let class = generator.build_class(&ty).unwrap();

    assert_eq!(class.comment(), Some("A customer order."));
}

#[test]
fn SourceGenerator___build_class_without_documentation___default_comment() {
    let generator = generator(config());

    let class = generator.build_class(&TypeModel::new("org.example.Order")).unwrap();

    assert_eq!(class.comment(), Some("Class Order."));
}

#[test]
fn SourceGenerator___build_class___global_superclass_when_no_parent() {
    let mut config = config();
    config.super_class = Some("org.example.support.Entity".into());
    let generator = generator(config);

    let class = generator.build_class(&TypeModel::new("org.example.Order")).unwrap();

    assert_eq!(class.superclass(), Some("Entity"));
    assert!(class.imports().contains(&"org.example.support.Entity".to_string()));
}

#[test]
fn SourceGenerator___build_class___bound_properties_forced_by_config() {
    let mut config = config();
    config.bound_properties = true;
    let generator = generator(config);

    let class = generator.build_class(&order()).unwrap();

    assert!(class.field("propertyChangeSupport").is_some());
    assert!(class.has_method("addPropertyChangeListener"));
}

#[test]
fn SourceGenerator___build_class___extra_methods_forced_by_config() {
    let mut config = config();
    config.extra_collection_methods = true;
    let generator = generator(config);

    let class = generator.build_class(&order()).unwrap();

    assert!(class.has_method("getLineAsReference"));
    assert!(class.has_method("setLineAsReference"));
}

#[test]
fn SourceGenerator___build_class_invalid_model___fails() {
    let generator = generator(config());
    let ty = TypeModel::new("org.example.Order").with_identity("missing");

    let result = generator.build_class(&ty);

    assert!(matches!(result, Err(BindError::InvalidModel(_))));
}

// generate tests

#[test]
fn SourceGenerator___generate___class_then_descriptor() {
    let mut generator = generator(config());

    let constructs = generator.generate(&order(), &mut ConflictContext::new()).unwrap();

    let names: Vec<&str> = constructs.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["org.example.Order", "org.example.OrderDescriptor"]);
    assert!(generator.state().is_processed("org.example.Order"));
    assert!(generator.state().is_processed("org.example.OrderDescriptor"));
}

#[test]
fn SourceGenerator___generate_with_jdo___adds_jdo_descriptor() {
    let mut config = config();
    config.generate_jdo_descriptors = true;
    let mut generator = generator(config);

    let constructs = generator.generate(&order(), &mut ConflictContext::new()).unwrap();

    assert_eq!(constructs.len(), 3);
    assert_eq!(constructs[2].name(), "org.example.OrderJDODescriptor");
}

#[test]
fn SourceGenerator___generate_with_jdo_and_collection_identity___fails_without_recording() {
    let mut config = config();
    config.generate_jdo_descriptors = true;
    let mut generator = generator(config);
    let ty = order().with_identity("lines");

    let err = generator.generate(&ty, &mut ConflictContext::new()).unwrap_err();

    assert!(matches!(err, BindError::InvalidModel(_)));
    assert!(!generator.state().is_processed("org.example.Order"));
}

#[test]
fn SourceGenerator___generate_without_descriptors___class_only() {
    let mut config = config();
    config.generate_descriptors = false;
    let mut generator = generator(config);

    let constructs = generator.generate(&order(), &mut ConflictContext::new()).unwrap();

    assert_eq!(constructs.len(), 1);
}

#[test]
fn SourceGenerator___generate_parent___qualified_with_package() {
    let mut generator = generator(config());
    let ty = TypeModel::new("Sub").with_parent("Base");

    let constructs = generator.generate(&ty, &mut ConflictContext::new()).unwrap();

    assert_eq!(constructs[0].name(), "org.example.Sub");
    assert_eq!(constructs[0].superclass(), Some("Base"));
    assert_eq!(constructs[1].superclass(), Some("BaseDescriptor"));
}

#[test]
fn SourceGenerator___name_conflict_with_informing_strategy___generates_again() {
    let mut generator = generator(config());
    let mut ctx = ConflictContext::new();
    generator.generate(&order(), &mut ctx).unwrap();

    let constructs = generator.generate(&order(), &mut ctx).unwrap();

    assert_eq!(constructs[0].name(), "org.example.Order");
    assert!(!generator.state().is_stopped());
}

#[test]
fn SourceGenerator___name_conflict_declined___aborts_type() {
    let mut generator = SourceGenerator::new(config(), Arc::new(WarnViaConsoleDialogStrategy));
    let mut dialog = ScriptedDialog {
        answer: 'n',
        prompts: 0,
    };
    generator
        .generate(&order(), &mut ConflictContext::with_dialog(&mut dialog))
        .unwrap();

    let result = generator.generate(&order(), &mut ConflictContext::with_dialog(&mut dialog));

    assert!(matches!(
        result,
        Err(BindError::GenerationAborted { type_name, .. }) if type_name == "org.example.Order"
    ));
    assert_eq!(dialog.prompts, 1);
    assert!(!generator.state().is_stopped());
}

#[test]
fn SourceGenerator___name_conflict_accepted___generates_again() {
    let mut generator = SourceGenerator::new(config(), Arc::new(WarnViaConsoleDialogStrategy));
    let mut dialog = ScriptedDialog {
        answer: 'y',
        prompts: 0,
    };
    generator
        .generate(&order(), &mut ConflictContext::with_dialog(&mut dialog))
        .unwrap();

    let result = generator.generate(&order(), &mut ConflictContext::with_dialog(&mut dialog));

    assert!(result.is_ok());
    assert_eq!(dialog.prompts, 1);
}

#[test]
fn SourceGenerator___distinct_types___strategy_not_consulted() {
    let mut generator = SourceGenerator::new(config(), Arc::new(WarnViaConsoleDialogStrategy));
    let mut dialog = ScriptedDialog {
        answer: 'n',
        prompts: 0,
    };

    generator
        .generate(&order(), &mut ConflictContext::with_dialog(&mut dialog))
        .unwrap();
    generator
        .generate(
            &TypeModel::new("Invoice"),
            &mut ConflictContext::with_dialog(&mut dialog),
        )
        .unwrap();

    assert_eq!(dialog.prompts, 0);
}
