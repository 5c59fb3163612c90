//! Injecting wrappers for asynchronous handlers.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::args::{AnyArc, CallArgs, Kwargs};
use crate::config::InjectionMode;
use crate::error::InjectResult;
use crate::observer::InjectionObserver;
use crate::scope::ResolverScope;
use crate::signature::Signature;

/// An asynchronous callable that can be wrapped for injection.
///
/// `O` is the handler's own output type. Handlers that can fail make `O` a
/// `Result`; the wrapper is transparent to it either way.
///
/// Blanket-implemented for async closures taking [`CallArgs`], so most
/// handlers are written inline:
///
/// ```rust
/// use lazy_di::{CallArgs, InjectError};
///
/// let handler = |args: CallArgs| async move {
///     let count = args.kwarg::<u32>("count")?;
///     Ok::<_, InjectError>(*count * 2)
/// };
/// # let _ = handler;
/// ```
#[async_trait]
pub trait Handler<O: Send + 'static>: Send + Sync {
    /// Runs the handler with the assembled arguments.
    async fn invoke(&self, args: CallArgs) -> O;
}

#[async_trait]
impl<O, F, Fut> Handler<O> for F
where
    O: Send + 'static,
    F: Fn(CallArgs) -> Fut + Send + Sync,
    Fut: std::future::Future<Output = O> + Send,
{
    async fn invoke(&self, args: CallArgs) -> O {
        self(args).await
    }
}

/// Wrapper that resolves missing keyword arguments before delegating.
///
/// Owns the wrapped handler, its declared [`Signature`], and optionally a
/// bound receiver; all of it is fixed at construction. Produced by
/// [`Injector::wrap`]; one wrapper instance is safely shared across
/// concurrent invocations because each call carries its own
/// [`ResolverScope`].
///
/// # Receiver binding
///
/// A wrapper declared for a method is an unbound template. Binding it to a
/// receiver is an explicit second step, typically done while constructing
/// the owning object:
///
/// ```rust
/// use lazy_di::{Injector, InjectionMode, Signature};
/// use std::sync::Arc;
///
/// struct Service {
///     name: String,
/// }
///
/// # fn main() -> lazy_di::InjectResult<()> {
/// let injector = Injector::new(InjectionMode::Enabled);
/// let template = injector.wrap(
///     Signature::builder().required::<u32>("count").build()?,
///     |args: lazy_di::CallArgs| async move {
///         let service = args.arg::<Service>(0)?;
///         let count = args.kwarg::<u32>("count")?;
///         Ok::<_, lazy_di::InjectError>(format!("{}: {}", service.name, count))
///     },
/// );
///
/// let service = Arc::new(Service { name: "greeter".into() });
/// let bound = template.bind(service);
/// assert!(bound.is_bound());
/// assert!(!template.is_bound()); // the template itself is untouched
/// # Ok(())
/// # }
/// ```
pub struct InjectedHandler<O: Send + 'static> {
    handler: Arc<dyn Handler<O>>,
    signature: Arc<Signature>,
    receiver: Option<AnyArc>,
    mode: InjectionMode,
    observers: Arc<[Arc<dyn InjectionObserver>]>,
}

impl<O: Send + 'static> Clone for InjectedHandler<O> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
            signature: self.signature.clone(),
            receiver: self.receiver.clone(),
            mode: self.mode,
            observers: self.observers.clone(),
        }
    }
}

impl<O: Send + 'static> InjectedHandler<O> {
    /// Returns a new wrapper bound to `receiver`.
    ///
    /// The bound wrapper passes the receiver as the first positional
    /// argument of every delegated call and accounts for it when deciding
    /// which parameters are already supplied. The original wrapper is left
    /// unbound and can be bound again to other receivers.
    pub fn bind<R: Send + Sync + 'static>(&self, receiver: Arc<R>) -> Self {
        let receiver: AnyArc = receiver;
        let mut bound = self.clone();
        bound.receiver = Some(receiver);
        bound
    }

    /// Whether a receiver is bound.
    pub fn is_bound(&self) -> bool {
        self.receiver.is_some()
    }

    /// The declared signature of the wrapped handler.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Invokes the wrapped handler, injecting missing keyword arguments.
    ///
    /// With injection enabled the call proceeds in order: the scope is read
    /// (an empty scope fails with
    /// [`ScopeMissing`](crate::InjectError::ScopeMissing) before the handler
    /// runs), the injectable parameters are computed from the signature and
    /// the supplied arguments, each one is resolved and merged into the
    /// keyword arguments, and the handler is invoked with the result. The
    /// first failing resolution aborts the call.
    ///
    /// Resolutions are awaited strictly one at a time, in declaration
    /// order; a later resolution may rely on side effects of an earlier one
    /// being visible in the resolver, so they are never issued
    /// concurrently.
    ///
    /// With injection disabled the arguments are forwarded unchanged and
    /// the scope is never read.
    pub async fn call(
        &self,
        scope: &ResolverScope,
        args: Vec<AnyArc>,
        kwargs: Kwargs,
    ) -> InjectResult<O> {
        if self.mode.is_disabled() {
            return Ok(self.handler.invoke(self.assemble(args, kwargs)).await);
        }

        let resolver = scope.resolver()?;
        let supplied = args.len() + usize::from(self.receiver.is_some());

        let mut merged = kwargs;
        for (name, key) in self.signature.injectable(supplied, &merged) {
            for observer in self.observers.iter() {
                observer.resolving(name, &key);
            }
            let started = Instant::now();
            let value = resolver.resolve_any(&key).await?;
            for observer in self.observers.iter() {
                observer.resolved(name, &key, started.elapsed());
            }
            merged.insert_arc(name, value);
        }

        Ok(self.handler.invoke(self.assemble(args, merged)).await)
    }

    fn assemble(&self, args: Vec<AnyArc>, kwargs: Kwargs) -> CallArgs {
        let mut positional = Vec::with_capacity(args.len() + 1);
        if let Some(receiver) = &self.receiver {
            positional.push(receiver.clone());
        }
        positional.extend(args);
        CallArgs::new(positional, kwargs)
    }
}

/// Factory for injecting wrappers.
///
/// Holds the startup [`InjectionMode`] and the registered observers;
/// every wrapper produced by [`wrap`](Injector::wrap) shares them. The mode
/// is fixed per factory, so the enabled/disabled decision is made once, at
/// startup, and never revisited at call time.
///
/// # Examples
///
/// ```rust
/// use lazy_di::{Injector, InjectionMode, Signature};
///
/// # fn main() -> lazy_di::InjectResult<()> {
/// let injector = Injector::new(InjectionMode::from_env());
/// let wrapped = injector.wrap(
///     Signature::builder().required::<String>("who").build()?,
///     |args: lazy_di::CallArgs| async move {
///         args.kwarg::<String>("who").map(|who| format!("hello {}", who))
///     },
/// );
/// # let _ = wrapped;
/// # Ok(())
/// # }
/// ```
pub struct Injector {
    mode: InjectionMode,
    observers: Vec<Arc<dyn InjectionObserver>>,
}

impl Injector {
    /// Creates a factory with the given mode.
    pub fn new(mode: InjectionMode) -> Self {
        Self {
            mode,
            observers: Vec::new(),
        }
    }

    /// The mode this factory builds wrappers with.
    pub fn mode(&self) -> InjectionMode {
        self.mode
    }

    /// Registers an observer on all wrappers produced after this call.
    pub fn add_observer(&mut self, observer: Arc<dyn InjectionObserver>) {
        self.observers.push(observer);
    }

    /// Wraps `handler` so that calls resolve its injectable parameters.
    ///
    /// In [`InjectionMode::Disabled`] the produced wrapper is a pure
    /// pass-through: it forwards arguments (plus a bound receiver)
    /// unchanged, never reads the scope, and never contacts a resolver.
    pub fn wrap<O, H>(&self, signature: Signature, handler: H) -> InjectedHandler<O>
    where
        O: Send + 'static,
        H: Handler<O> + 'static,
    {
        InjectedHandler {
            handler: Arc::new(handler),
            signature: Arc::new(signature),
            receiver: None,
            mode: self.mode,
            observers: Arc::from(self.observers.clone()),
        }
    }
}

impl Default for Injector {
    fn default() -> Self {
        Self::new(InjectionMode::Enabled)
    }
}
