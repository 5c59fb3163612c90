//! # lazy-di
//!
//! Lazy dependency injection for asynchronous command handlers: declare a
//! handler's parameters once, and a wrapper resolves the missing ones from a
//! call-scoped resolver at invocation time.
//!
//! ## How it fits together
//!
//! - **Declared signatures**: a [`Signature`] lists a handler's parameters
//!   (name, type, default-ness, positional-only-ness). A parameter is
//!   eligible for injection iff it has a declared type, no default, is not
//!   positional-only, and was not already supplied by the caller.
//! - **Call-time resolution**: an [`InjectedHandler`] computes the eligible
//!   set fresh per call, resolves each entry sequentially from the
//!   [`Resolver`] carried by the caller's [`ResolverScope`], merges the
//!   values into the keyword arguments, and delegates.
//! - **Explicit scope**: the resolver travels in an explicit per-call
//!   [`ResolverScope`] value. An empty scope means injection is not
//!   configured and fails the call before the handler runs.
//! - **Startup switch**: [`InjectionMode::from_env`] reads a single
//!   environment flag once; a disabled [`Injector`] produces pass-through
//!   wrappers that never contact a resolver.
//!
//! The resolver itself is supplied by the host; this crate defines the
//! contract, not a container.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazy_di::{
//!     erased, AnyArc, CallArgs, InjectError, InjectResult, Injector, InjectionMode, Key,
//!     Kwargs, Resolver, ResolverScope, Signature,
//! };
//! use async_trait::async_trait;
//! use std::any::TypeId;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! struct Pool {
//!     dsn: String,
//! }
//!
//! // A stub resolver; real hosts plug their container in here.
//! struct StaticResolver {
//!     values: HashMap<TypeId, AnyArc>,
//! }
//!
//! #[async_trait]
//! impl Resolver for StaticResolver {
//!     async fn resolve_any(&self, key: &Key) -> InjectResult<AnyArc> {
//!         self.values
//!             .get(&key.type_id())
//!             .cloned()
//!             .ok_or(InjectError::NotFound(key.display_name()))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> InjectResult<()> {
//! let injector = Injector::new(InjectionMode::Enabled);
//! let greet = injector.wrap(
//!     Signature::builder()
//!         .required::<i64>("id")
//!         .required::<Pool>("pool")
//!         .build()?,
//!     |args: CallArgs| async move {
//!         let id = args.kwarg::<i64>("id")?;
//!         let pool = args.kwarg::<Pool>("pool")?;
//!         Ok::<_, InjectError>(format!("user {} via {}", id, pool.dsn))
//!     },
//! );
//!
//! // Host-side setup: one scope per logical call.
//! let mut values = HashMap::new();
//! values.insert(
//!     TypeId::of::<Pool>(),
//!     erased(Pool { dsn: "postgres://localhost".to_string() }),
//! );
//! let scope = ResolverScope::new(Arc::new(StaticResolver { values }));
//!
//! let mut kwargs = Kwargs::new();
//! kwargs.insert("id", 7i64);
//!
//! // "pool" was not supplied, so it is resolved; "id" passes through.
//! let greeting = greet.call(&scope, vec![], kwargs).await??;
//! assert_eq!(greeting, "user 7 via postgres://localhost");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! The wrapper introduces no threads and no locking. Within one invocation
//! dependency lookups are awaited strictly one after another, in
//! declaration order. Across invocations, isolation comes from each call
//! carrying its own `ResolverScope`; sharing one resolver safely under
//! concurrency is the host's contract.

// Module declarations
pub mod args;
pub mod config;
pub mod error;
pub mod key;
pub mod observer;
pub mod resolver;
pub mod scope;
pub mod signature;
pub mod wrapper;

// Re-export core types
pub use args::{erased, AnyArc, CallArgs, Kwargs};
pub use config::{InjectionMode, DISABLE_ENV_VAR};
pub use error::{InjectError, InjectResult};
pub use key::Key;
pub use observer::{InjectionObserver, LoggingObserver};
pub use resolver::{Resolver, ResolverExt};
pub use scope::ResolverScope;
pub use signature::{Parameter, Signature, SignatureBuilder};
pub use wrapper::{Handler, InjectedHandler, Injector};
