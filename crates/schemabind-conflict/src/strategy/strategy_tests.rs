#![allow(non_snake_case)]

use super::*;

struct Minimal;

impl ClassNameConflictStrategy for Minimal {
    fn name(&self) -> &str {
        "minimal"
    }

    fn resolve_file_overwrite(&self, _filename: &str, _ctx: &mut ConflictContext<'_>) -> bool {
        true
    }
}

struct FixedDialog(char);

impl ConsoleDialog for FixedDialog {
    fn confirm(&mut self, _message: &str, _valid: &str, _legend: &str) -> char {
        self.0
    }
}

#[test]
fn ClassNameConflictStrategy___default_conflict_resolution___returns_state_unchanged() {
    let mut state = GenerationState::new();
    state.mark_processed("a.B");
    let expected = state.clone();

    let result = Minimal.resolve_class_name_conflict(
        state,
        &TypeModel::new("a.B"),
        &ClassConstruct::new("a.B"),
        &mut ConflictContext::new(),
    );

    assert_eq!(result, expected);
}

#[test]
fn ConflictContext___new___has_no_dialog() {
    let mut ctx = ConflictContext::new();

    assert!(!ctx.has_dialog());
    assert!(ctx.dialog().is_none());
}

#[test]
fn ConflictContext___with_dialog___exposes_dialog() {
    let mut dialog = FixedDialog('y');
    let mut ctx = ConflictContext::with_dialog(&mut dialog);

    assert!(ctx.has_dialog());
    let answer = ctx.dialog().map(|d| d.confirm("?", "yn", ""));

    assert_eq!(answer, Some('y'));
}

#[test]
fn conflict_message___names_both_classes() {
    let message = conflict_message(
        &TypeModel::new("org.example.Item"),
        &ClassConstruct::new("org.example.Item"),
    );

    assert!(message.contains("'org.example.Item'"));
    assert!(message.contains("binding file"));
}
