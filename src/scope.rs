//! Per-call resolver scopes.

use std::fmt;
use std::sync::Arc;

use crate::error::{InjectError, InjectResult};
use crate::resolver::Resolver;

/// Carrier for the resolver active during one logical call.
///
/// The scope is passed explicitly to every wrapper invocation instead of
/// living in ambient task state; each logical call (request, dispatched
/// command, task) holds its own value, which is what keeps concurrent
/// invocations isolated from each other. The host is responsible for
/// constructing one scope per logical call and for populating it before any
/// wrapped handler runs.
///
/// An empty scope is a valid state meaning "injection not configured";
/// using it for an injecting call fails with
/// [`InjectError::ScopeMissing`]. The scope is never mutated after
/// construction and is cheap to clone.
///
/// # Examples
///
/// ```rust
/// use lazy_di::ResolverScope;
///
/// let scope = ResolverScope::empty();
/// assert!(!scope.is_active());
/// assert!(scope.resolver().is_err());
/// ```
#[derive(Clone, Default)]
pub struct ResolverScope {
    resolver: Option<Arc<dyn Resolver>>,
}

impl ResolverScope {
    /// Creates a scope with an active resolver.
    pub fn new(resolver: Arc<dyn Resolver>) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    /// Creates a scope with no resolver configured.
    pub fn empty() -> Self {
        Self { resolver: None }
    }

    /// Whether a resolver is configured.
    pub fn is_active(&self) -> bool {
        self.resolver.is_some()
    }

    /// The active resolver, or [`InjectError::ScopeMissing`].
    pub fn resolver(&self) -> InjectResult<&Arc<dyn Resolver>> {
        self.resolver.as_ref().ok_or(InjectError::ScopeMissing)
    }
}

impl fmt::Debug for ResolverScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverScope")
            .field("active", &self.is_active())
            .finish()
    }
}
