//! Change notification support for bound fields.
//!
//! A class with at least one bound field carries a `propertyChangeSupport`
//! member plus listener registration methods. Mutators of bound fields call
//! `notifyPropertyChangeListeners` after changing the value.

use crate::jvm_types::use_type;
use schemabind_core::{ClassConstruct, FieldModel, JavaField, JavaMethod, Modifiers, SourceBuffer};

pub const SUPPORT_FIELD: &str = "propertyChangeSupport";
pub const NOTIFY_METHOD: &str = "notifyPropertyChangeListeners";

const SUPPORT_TYPE: &str = "java.beans.PropertyChangeSupport";
const LISTENER_TYPE: &str = "java.beans.PropertyChangeListener";

/// Emit the notification call for a mutation of `field`.
///
/// The key is the field name without its leading underscore; the old value
/// is passed as `old_value` (a Java expression), the new one read back from
/// the member.
pub fn add_notify_call(field: &FieldModel, old_value: &str, source: &mut SourceBuffer) {
    source.add("");
    source.add("// notify listeners");
    source.add(format!(
        "{NOTIFY_METHOD}(\"{}\", {old_value}, this.{});",
        field.property_name(),
        field.name
    ));
}

/// Add the support member and listener methods unless already present.
pub fn add_property_change_support(class: &mut ClassConstruct) {
    if class.field(SUPPORT_FIELD).is_some() {
        return;
    }

    let support = use_type(class, SUPPORT_TYPE);
    let listener = use_type(class, LISTENER_TYPE);

    class.add_field(
        JavaField::new(&support, SUPPORT_FIELD)
            .with_comment("Property change support, created on first listener registration."),
    );

    let mut notify = JavaMethod::new(NOTIFY_METHOD)
        .with_modifiers(Modifiers::protected())
        .with_parameter("String", "fieldName")
        .with_parameter("Object", "oldValue")
        .with_parameter("Object", "newValue")
        .with_comment("Notifies all registered listeners of a changed field.");
    notify
        .body
        .add(format!("if (this.{SUPPORT_FIELD} == null) {{"))
        .add_indented("return;")
        .add("}")
        .add(format!(
            "this.{SUPPORT_FIELD}.firePropertyChange(fieldName, oldValue, newValue);"
        ));
    class.add_method(notify);

    let mut add = JavaMethod::new("addPropertyChangeListener")
        .with_parameter(&listener, "pcl")
        .with_comment("Registers a listener notified when a bound field changes.");
    add.body
        .add(format!("if (this.{SUPPORT_FIELD} == null) {{"))
        .add_indented(format!("this.{SUPPORT_FIELD} = new {support}(this);"))
        .add("}")
        .add(format!("this.{SUPPORT_FIELD}.addPropertyChangeListener(pcl);"));
    class.add_method(add);

    let mut remove = JavaMethod::new("removePropertyChangeListener")
        .returning("boolean")
        .with_parameter(&listener, "pcl")
        .with_comment("Removes a listener; returns false when none was ever registered.");
    remove
        .body
        .add(format!("if (this.{SUPPORT_FIELD} == null) {{"))
        .add_indented("return false;")
        .add("}")
        .add(format!("this.{SUPPORT_FIELD}.removePropertyChangeListener(pcl);"))
        .add("return true;");
    class.add_method(remove);

    tracing::debug!(class = %class.name(), "property change support added");
}
