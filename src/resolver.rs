//! Resolver contract for dependency lookup.
//!
//! The shim never implements a container itself. The host supplies
//! something that satisfies [`Resolver`] and the wrapper only ever reads
//! from it; thread safety under whatever concurrency the host permits is
//! the host's responsibility.

use std::sync::Arc;

use async_trait::async_trait;

use crate::args::AnyArc;
use crate::error::{InjectError, InjectResult};
use crate::key::Key;

/// Asynchronous provider of dependency values, looked up by type.
///
/// Each lookup is a suspension point. The wrapper issues lookups strictly
/// one after another, so implementations may rely on earlier resolutions
/// within the same invocation having completed.
///
/// # Examples
///
/// A minimal map-backed resolver:
///
/// ```rust
/// use lazy_di::{AnyArc, InjectError, InjectResult, Key, Resolver};
/// use async_trait::async_trait;
/// use std::any::TypeId;
/// use std::collections::HashMap;
///
/// struct StaticResolver {
///     values: HashMap<TypeId, AnyArc>,
/// }
///
/// #[async_trait]
/// impl Resolver for StaticResolver {
///     async fn resolve_any(&self, key: &Key) -> InjectResult<AnyArc> {
///         self.values
///             .get(&key.type_id())
///             .cloned()
///             .ok_or(InjectError::NotFound(key.display_name()))
///     }
/// }
/// ```
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolves a value for the given key.
    ///
    /// Fails with [`InjectError::NotFound`] when no provider is registered
    /// for the key's type; provider failures surface however the
    /// implementation chooses to report them.
    async fn resolve_any(&self, key: &Key) -> InjectResult<AnyArc>;
}

/// Typed convenience layer over [`Resolver`].
///
/// Blanket-implemented, including for `dyn Resolver`, so any resolver can
/// be queried with a concrete type:
///
/// ```rust
/// # use lazy_di::{AnyArc, InjectError, InjectResult, Key, Resolver, ResolverExt};
/// # use async_trait::async_trait;
/// # struct One;
/// # #[async_trait]
/// # impl Resolver for One {
/// #     async fn resolve_any(&self, _key: &Key) -> InjectResult<AnyArc> {
/// #         Ok(std::sync::Arc::new(1u32))
/// #     }
/// # }
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> InjectResult<()> {
/// let resolver = One;
/// let value = resolver.get::<u32>().await?;
/// assert_eq!(*value, 1);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ResolverExt: Resolver {
    /// Resolves a `T` and downcasts the erased result.
    async fn get<T: Send + Sync + 'static>(&self) -> InjectResult<Arc<T>> {
        let value = self.resolve_any(&Key::of::<T>()).await?;
        value
            .downcast::<T>()
            .map_err(|_| InjectError::TypeMismatch(std::any::type_name::<T>()))
    }
}

impl<R: Resolver + ?Sized> ResolverExt for R {}
