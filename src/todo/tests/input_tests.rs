//! Tests for task input validation.

use crate::todo::services::{DESCRIPTION_REQUIRED, IMPORTANT_NOT_BOOLEAN, TodoInput};
use rstest::rstest;

#[rstest]
fn valid_input_is_accepted() {
    let input = TodoInput::new()
        .with_description("Buy milk")
        .with_important(" TRUE ");
    let valid = input.validate().expect("input should validate");
    assert_eq!(valid.description.as_str(), "Buy milk");
    assert!(valid.important);
}

#[rstest]
fn malformed_importance_is_reported() {
    let input = TodoInput::new()
        .with_description("Buy milk")
        .with_important("maybe");
    let err = input.validate().expect_err("input should be rejected");
    let violations = err.violations();

    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations.get("important"),
        Some(&vec![IMPORTANT_NOT_BOOLEAN.to_owned()])
    );
}

#[rstest]
fn missing_fields_are_all_reported() {
    let err = TodoInput::new()
        .validate()
        .expect_err("empty input should be rejected");
    let violations = err.into_violations();

    assert_eq!(
        violations.get("description"),
        Some(&vec![DESCRIPTION_REQUIRED.to_owned()])
    );
    assert_eq!(
        violations.get("important"),
        Some(&vec![IMPORTANT_NOT_BOOLEAN.to_owned()])
    );
}

#[rstest]
fn blank_description_is_reported() {
    let err = TodoInput::new()
        .with_description("  ")
        .with_important("false")
        .validate()
        .expect_err("blank description should be rejected");
    assert!(err.violations().contains_key("description"));
    assert!(!err.violations().contains_key("important"));
}
