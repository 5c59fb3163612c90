/// Unit tests for InjectError and InjectResult types
use lazy_di::{InjectError, InjectResult};
use std::error::Error;

#[test]
fn test_error_display_scope_missing() {
    let error = InjectError::ScopeMissing;
    let display_str = format!("{}", error);
    assert_eq!(display_str, "No active resolver scope for this invocation");
}

#[test]
fn test_error_display_not_found() {
    let error = InjectError::NotFound("myapp::Widget");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Dependency not found: myapp::Widget");
    assert!(display_str.contains("myapp::Widget"));
}

#[test]
fn test_error_display_type_mismatch() {
    let error = InjectError::TypeMismatch("alloc::string::String");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Type mismatch for: alloc::string::String");
}

#[test]
fn test_error_display_duplicate_parameter() {
    let error = InjectError::DuplicateParameter("count");
    let display_str = format!("{}", error);
    assert_eq!(display_str, "Duplicate parameter: count");
}

#[test]
fn test_error_display_misplaced_positional_only() {
    let error = InjectError::PositionalOnlyAfterOther("target");
    let display_str = format!("{}", error);
    assert_eq!(
        display_str,
        "Positional-only parameter declared after keyword-capable parameters: target"
    );
}

#[test]
fn test_error_implements_std_error() {
    let error = InjectError::ScopeMissing;
    let as_dyn: &dyn Error = &error;
    assert!(!as_dyn.to_string().is_empty());
    assert!(as_dyn.source().is_none());
}

#[test]
fn test_errors_are_comparable_and_cloneable() {
    let error = InjectError::NotFound("Widget");
    let cloned = error.clone();
    assert_eq!(error, cloned);

    // Misconfiguration and missing registration stay distinguishable.
    assert_ne!(InjectError::ScopeMissing, InjectError::NotFound("Widget"));
}

#[test]
fn test_inject_result_round_trip() {
    fn produce(fail: bool) -> InjectResult<u32> {
        if fail {
            Err(InjectError::NotFound("u32"))
        } else {
            Ok(7)
        }
    }

    assert_eq!(produce(false).unwrap(), 7);
    assert_eq!(produce(true).unwrap_err(), InjectError::NotFound("u32"));
}
