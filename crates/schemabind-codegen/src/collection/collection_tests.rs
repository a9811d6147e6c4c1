#![allow(non_snake_case)]

use super::*;
use schemabind_core::ContentType;
use test_case::test_case;

fn items(max: i32) -> FieldModel {
    FieldModel::collection("_items", ContentType::String, "Item", max)
}

fn new_class() -> ClassConstruct {
    ClassConstruct::new("org.example.Order")
}

fn method_names(class: &ClassConstruct) -> Vec<&str> {
    class.methods().iter().map(|m| m.name.as_str()).collect()
}

// create_access_methods tests

#[test]
fn CollectionFactory___access_methods_on_scalar___fails_without_changes() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let field = FieldModel::new("_name", ContentType::String, "Name");
    let mut class = new_class();

    let err = factory
        .create_access_methods(&field, &mut class, true, &[])
        .unwrap_err();

    assert!(matches!(err, BindError::NotACollection { field } if field == "_name"));
    assert!(class.methods().is_empty());
    assert!(class.imports().is_empty());
}

#[test_case(CollectionPolicy::LegacyIndexed ; "legacy indexed")]
#[test_case(CollectionPolicy::ModernIndexed ; "modern indexed")]
#[test_case(CollectionPolicy::NoIndex ; "no index")]
#[test_case(CollectionPolicy::ExternalStoreBacked ; "external store")]
fn CollectionFactory___bound_with_extras___adds_at_least_seven_methods(policy: CollectionPolicy) {
    let factory = CollectionFactory::new(policy);
    let field = items(0).with_bound(true).with_extra_methods(true);
    let mut class = new_class();

    factory
        .create_access_methods(&field, &mut class, true, &[])
        .unwrap();

    assert!(class.methods().len() >= 7);
    assert!(class.has_method("notifyPropertyChangeListeners"));
    assert!(class.has_method("getItemAsReference"));
    assert!(class.has_method("setItemAsReference"));
}

#[test]
fn CollectionFactory___modern_indexed_suite___emits_every_accessor() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let mut class = new_class();

    factory
        .create_access_methods(&items(0), &mut class, true, &[])
        .unwrap();

    let names = method_names(&class);
    for expected in [
        "addItem",
        "enumerateItem",
        "iterateItem",
        "getItem",
        "getItemCount",
        "removeAllItem",
        "removeItem",
        "removeItemAt",
        "setItem",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    assert_eq!(class.methods_named("addItem").count(), 2);
    assert_eq!(class.methods_named("getItem").count(), 2);
    assert_eq!(class.methods_named("setItem").count(), 2);
    assert!(!class.has_method("getItemAsReference"));
    assert!(!class.has_method("notifyPropertyChangeListeners"));
}

#[test]
fn CollectionFactory___no_index_suite___omits_index_accessors() {
    let factory = CollectionFactory::new(CollectionPolicy::NoIndex);
    let mut class = new_class();

    factory
        .create_access_methods(&items(0), &mut class, true, &[])
        .unwrap();

    assert_eq!(class.methods_named("addItem").count(), 1);
    assert_eq!(class.methods_named("getItem").count(), 1);
    assert_eq!(class.methods_named("setItem").count(), 1);
    assert!(!class.has_method("removeItemAt"));
    assert!(class.has_method("getItemCount"));
}

#[test]
fn CollectionFactory___extra_annotations___attached_to_array_getter() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let annotations = vec!["@SuppressWarnings(\"unchecked\")".to_string()];
    let mut class = new_class();

    factory
        .create_access_methods(&items(0), &mut class, true, &annotations)
        .unwrap();

    let getter = class
        .methods_named("getItem")
        .find(|m| m.parameters.is_empty())
        .unwrap();
    assert_eq!(getter.annotations, annotations);
    assert_eq!(getter.return_type.as_deref(), Some("String[]"));
}

// NoIndex tests

#[test]
fn CollectionFactory___no_index_operations___never_add_methods() {
    let factory = CollectionFactory::new(CollectionPolicy::NoIndex);
    let field = items(3).with_bound(true);
    let mut class = new_class();

    factory.create_add_by_index_method(&field, &mut class, true);
    factory.create_get_by_index_method(&field, &mut class, true);
    factory.create_set_by_index_method(&field, &mut class, false);
    factory.create_remove_by_index_method(&field, &mut class, false);

    assert!(class.methods().is_empty());
    assert!(class.imports().is_empty());
}

#[test]
fn CollectionFactory___no_index_on_scalar_field___is_still_a_no_op() {
    let factory = CollectionFactory::new(CollectionPolicy::NoIndex);
    let field = FieldModel::new("", ContentType::Int, "");
    let mut class = ClassConstruct::new("");

    factory.create_get_by_index_method(&field, &mut class, true);
    factory.create_remove_by_index_method(&field, &mut class, true);

    assert!(class.methods().is_empty());
}

// createAddMethod / addMaxSizeCheck tests

#[test]
fn CollectionFactory___add_with_maximum___guards_size() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let mut class = new_class();

    factory.create_add_method(&items(5), &mut class, true);

    let add = class.method("addItem").unwrap();
    assert!(add.body.contains("if (this._items.size() >= 5) {"));
    assert!(add.body.contains("addItem has a maximum of 5"));
    assert!(add.body.contains("this._items.add(vItem);"));
    assert_eq!(add.exceptions, vec!["IndexOutOfBoundsException".to_string()]);
}

#[test_case(0 ; "zero")]
#[test_case(-1 ; "negative")]
fn CollectionFactory___add_max_size_check_unbounded___emits_nothing(max: i32) {
    let mut source = SourceBuffer::new();

    CollectionFactory::add_max_size_check(&items(max), "addItem", &mut source);

    assert!(source.is_empty());
}

#[test]
fn CollectionFactory___add_max_size_check_bounded___names_method_and_maximum() {
    let mut source = SourceBuffer::new();

    CollectionFactory::add_max_size_check(&items(12), "addLine", &mut source);

    assert!(source.contains("12"));
    assert!(source.contains("addLine"));
}

#[test]
fn CollectionFactory___bound_add___notifies_with_property_name() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let mut class = new_class();

    factory.create_add_method(&items(0).with_bound(true), &mut class, true);

    let add = class.method("addItem").unwrap();
    assert!(add.body.contains("notifyPropertyChangeListeners(\"items\", null, this._items);"));
}

// legacy mode tests

#[test]
fn CollectionFactory___legacy_mode_primitive___boxes_and_unboxes() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let field = FieldModel::collection("_counts", ContentType::Int, "Count", 0);
    let mut class = new_class();

    factory.create_add_method(&field, &mut class, false);
    factory.create_get_by_index_method(&field, &mut class, false);

    let add = class.methods_named("addCount").next().unwrap();
    assert_eq!(add.parameters[0].ty, "int");
    assert!(add.body.contains("this._counts.add(Integer.valueOf(vCount));"));

    let get = class.methods_named("getCount").next().unwrap();
    assert_eq!(get.return_type.as_deref(), Some("int"));
    assert!(get.body.contains("return ((Integer) this._counts.get(index)).intValue();"));
}

#[test]
fn CollectionFactory___modern_mode_primitive___uses_boxed_generics() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let field = FieldModel::collection("_counts", ContentType::Int, "Count", 0);
    let mut class = new_class();

    factory.create_member(&field, &mut class, true);

    assert_eq!(class.fields()[0].ty, "List<Integer>");
}

// enumeration and iteration tests

#[test]
fn CollectionFactory___legacy_enumerate___wraps_elements() {
    let factory = CollectionFactory::new(CollectionPolicy::LegacyIndexed);
    let mut class = new_class();

    factory.create_enumerate_method(&items(0), &mut class, false);

    let method = class.method("enumerateItem").unwrap();
    assert_eq!(method.return_type.as_deref(), Some("Enumeration"));
    assert!(method.body.contains("return this._items.elements();"));
}

#[test]
fn CollectionFactory___modern_enumerate___uses_collections_helper() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let mut class = new_class();

    factory.create_enumerate_method(&items(0), &mut class, true);

    let method = class.method("enumerateItem").unwrap();
    assert_eq!(method.return_type.as_deref(), Some("Enumeration<String>"));
    assert!(method.body.contains("Collections.enumeration(this._items)"));
    assert!(class.imports().contains(&"java.util.Collections".to_string()));
}

#[test]
fn CollectionFactory___external_store_enumerate___drains_iterator() {
    let factory = CollectionFactory::new(CollectionPolicy::ExternalStoreBacked);
    let mut class = new_class();

    factory.create_enumerate_method(&items(0), &mut class, true);

    let method = class.method("enumerateItem").unwrap();
    assert!(method.body.contains("Iterator iterator = this._items.iterator();"));
    assert!(method.body.contains("while (iterator.hasNext()) {"));
    assert!(method.body.contains("return v.elements();"));
}

#[test]
fn CollectionFactory___iterator___typed_only_in_modern_mode() {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let mut modern = new_class();
    let mut legacy = new_class();

    factory.create_iterator_method(&items(0), &mut modern, true);
    factory.create_iterator_method(&items(0), &mut legacy, false);

    assert_eq!(
        modern.method("iterateItem").unwrap().return_type.as_deref(),
        Some("Iterator<String>")
    );
    assert_eq!(
        legacy.method("iterateItem").unwrap().return_type.as_deref(),
        Some("Iterator")
    );
}

#[test_case(true, 2 ; "modern mode adds iterator")]
#[test_case(false, 1 ; "legacy mode enumerates only")]
fn CollectionFactory___iteration_methods___count_depends_on_mode(modern_mode: bool, expected: usize) {
    let factory = CollectionFactory::new(CollectionPolicy::ModernIndexed);
    let mut class = new_class();

    factory.create_collection_iteration_methods(&items(0), &mut class, modern_mode);

    assert_eq!(class.methods().len(), expected);
    assert!(class.has_method("enumerateItem"));
}

// generateInitializerCode tests

#[test_case(CollectionPolicy::LegacyIndexed, "this._items = new Vector<String>();" ; "legacy indexed")]
#[test_case(CollectionPolicy::ModernIndexed, "this._items = new ArrayList<String>();" ; "modern indexed")]
#[test_case(CollectionPolicy::NoIndex, "this._items = new HashSet<String>();" ; "no index")]
#[test_case(CollectionPolicy::ExternalStoreBacked, "this._items = org.odmg.ODMG.getImplementation().newDArray();" ; "external store")]
fn CollectionFactory___initializer___constructs_policy_collection(
    policy: CollectionPolicy,
    expected: &str,
) {
    let mut source = SourceBuffer::new();

    CollectionFactory::new(policy).generate_initializer_code(&items(0), &mut source, true);

    assert_eq!(source.lines().collect::<Vec<_>>(), vec![expected]);
}

#[test]
fn CollectionFactory___initializer_with_default___adds_default_after_construction() {
    let field = items(0).with_default_value("first");
    let mut source = SourceBuffer::new();

    CollectionFactory::new(CollectionPolicy::ModernIndexed)
        .generate_initializer_code(&field, &mut source, true);

    let lines: Vec<&str> = source.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "this._items.add(\"first\");");
}

#[test_case(ContentType::Byte, "5", true, "this._values.add((byte) 5);" ; "byte modern")]
#[test_case(ContentType::Byte, "5", false, "this._values.add(Byte.valueOf((byte) 5));" ; "byte legacy")]
#[test_case(ContentType::Short, "7", true, "this._values.add((short) 7);" ; "short modern")]
#[test_case(ContentType::Short, "7", false, "this._values.add(Short.valueOf((short) 7));" ; "short legacy")]
#[test_case(ContentType::Char, "'", true, "this._values.add('\\'');" ; "char quote escaped")]
#[test_case(ContentType::Char, "x", false, "this._values.add(Character.valueOf('x'));" ; "char legacy")]
fn CollectionFactory___initializer_with_typed_default___emits_typed_literal(
    content_type: ContentType,
    default: &str,
    modern_mode: bool,
    expected: &str,
) {
    let field =
        FieldModel::collection("_values", content_type, "Value", 0).with_default_value(default);
    let mut source = SourceBuffer::new();

    CollectionFactory::new(CollectionPolicy::LegacyIndexed)
        .generate_initializer_code(&field, &mut source, modern_mode);

    assert_eq!(source.lines().nth(1), Some(expected));
}

#[test]
fn CollectionFactory___initializer_with_empty_default___only_constructs() {
    let field = items(0).with_default_value("");
    let mut source = SourceBuffer::new();

    CollectionFactory::new(CollectionPolicy::ModernIndexed)
        .generate_initializer_code(&field, &mut source, true);

    assert_eq!(source.line_count(), 1);
    assert!(!source.contains(".add("));
}

#[test]
fn CollectionFactory___from_config___uses_runtime_store_names() {
    let mut config = GeneratorConfig::default();
    config.collection_policy = CollectionPolicy::ExternalStoreBacked;
    config.runtime.external_store_factory = "Store.newArray()".into();
    config.runtime.external_store_type = "com.acme.StoreArray".into();
    let factory = CollectionFactory::from_config(&config);
    let mut class = new_class();
    let mut source = SourceBuffer::new();

    factory.create_member(&items(0), &mut class, true);
    factory.generate_initializer_code(&items(0), &mut source, true);

    assert_eq!(factory.policy(), CollectionPolicy::ExternalStoreBacked);
    assert_eq!(class.fields()[0].ty, "StoreArray");
    assert!(class.imports().contains(&"com.acme.StoreArray".to_string()));
    assert!(source.contains("this._items = Store.newArray();"));
}
