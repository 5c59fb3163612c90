//! Error types for the injection shim.

use std::fmt;

/// Injection errors
///
/// Represents the failure surface of the shim: host misconfiguration,
/// resolution failures reported while gathering dependency values, and
/// rejected signature declarations. Errors raised by the wrapped handler
/// itself are not part of this taxonomy; the wrapper is generic over the
/// handler's output type, so a handler's own `Result` passes through
/// untouched.
///
/// A missing scope and an unregistered type are deliberately distinct
/// variants so callers can tell a host setup defect apart from a gap in the
/// resolver's registrations.
///
/// # Examples
///
/// ```rust
/// use lazy_di::InjectError;
///
/// let no_scope = InjectError::ScopeMissing;
/// let not_found = InjectError::NotFound("myapp::Widget");
/// let mismatch = InjectError::TypeMismatch("alloc::string::String");
/// let duplicate = InjectError::DuplicateParameter("count");
///
/// // All errors implement Display
/// println!("Error: {}", no_scope);
/// println!("Error: {}", not_found);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectError {
    /// No resolver scope active for the current invocation
    ScopeMissing,
    /// No provider registered for the requested type, or no argument
    /// stored under the requested name
    NotFound(&'static str),
    /// A resolved or stored value failed to downcast
    TypeMismatch(&'static str),
    /// A signature declared the same parameter name twice
    DuplicateParameter(&'static str),
    /// A positional-only parameter was declared after a keyword-capable one
    PositionalOnlyAfterOther(&'static str),
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::ScopeMissing => {
                write!(f, "No active resolver scope for this invocation")
            }
            InjectError::NotFound(name) => write!(f, "Dependency not found: {}", name),
            InjectError::TypeMismatch(name) => write!(f, "Type mismatch for: {}", name),
            InjectError::DuplicateParameter(name) => {
                write!(f, "Duplicate parameter: {}", name)
            }
            InjectError::PositionalOnlyAfterOther(name) => {
                write!(f, "Positional-only parameter declared after keyword-capable parameters: {}", name)
            }
        }
    }
}

impl std::error::Error for InjectError {}

/// Result type for injection operations
///
/// A convenience alias for `Result<T, InjectError>` used throughout the
/// crate.
///
/// # Examples
///
/// ```rust
/// use lazy_di::{InjectError, InjectResult};
///
/// fn lookup() -> InjectResult<u32> {
///     Err(InjectError::NotFound("u32"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type InjectResult<T> = Result<T, InjectError>;
