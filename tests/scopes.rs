use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lazy_di::{
    erased, AnyArc, CallArgs, InjectError, InjectResult, InjectionMode, Injector, Key, Kwargs,
    Resolver, ResolverScope, Signature,
};

/// Resolver that always produces the same string.
struct LabelResolver {
    label: &'static str,
}

#[async_trait]
impl Resolver for LabelResolver {
    async fn resolve_any(&self, _key: &Key) -> InjectResult<AnyArc> {
        Ok(erased(self.label.to_string()))
    }
}

#[tokio::test]
async fn test_empty_scope_fails_before_handler_runs() {
    let invoked = Arc::new(AtomicBool::new(false));
    let invoked_in_handler = invoked.clone();

    let injector = Injector::new(InjectionMode::Enabled);
    let wrapped = injector.wrap(
        Signature::builder().required::<String>("label").build().unwrap(),
        move |_args: CallArgs| {
            let invoked = invoked_in_handler.clone();
            async move {
                invoked.store(true, Ordering::SeqCst);
            }
        },
    );

    let result = wrapped
        .call(&ResolverScope::empty(), vec![], Kwargs::new())
        .await;

    assert_eq!(result.unwrap_err(), InjectError::ScopeMissing);
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_concurrent_calls_read_their_own_scope() {
    let injector = Injector::new(InjectionMode::Enabled);
    let wrapped = injector.wrap(
        Signature::builder().required::<String>("label").build().unwrap(),
        |args: CallArgs| async move { args.kwarg::<String>("label").map(|l| (*l).clone()) },
    );

    let red = ResolverScope::new(Arc::new(LabelResolver { label: "red" }));
    let blue = ResolverScope::new(Arc::new(LabelResolver { label: "blue" }));

    // The same wrapper instance, two scopes, two concurrent invocations.
    let (a, b) = tokio::join!(
        wrapped.call(&red, vec![], Kwargs::new()),
        wrapped.call(&blue, vec![], Kwargs::new()),
    );

    assert_eq!(a.unwrap().unwrap(), "red");
    assert_eq!(b.unwrap().unwrap(), "blue");
}

/// Resolver that yields mid-lookup and asserts lookups never overlap.
#[derive(Default)]
struct SequencingResolver {
    in_flight: AtomicUsize,
    order: Mutex<Vec<&'static str>>,
}

#[async_trait]
impl Resolver for SequencingResolver {
    async fn resolve_any(&self, key: &Key) -> InjectResult<AnyArc> {
        let concurrent = self.in_flight.fetch_add(1, Ordering::SeqCst);
        assert_eq!(concurrent, 0, "lookups must not overlap");
        tokio::task::yield_now().await;
        self.order.lock().unwrap().push(key.display_name());
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if key == &Key::of::<u8>() {
            Ok(erased(1u8))
        } else if key == &Key::of::<u16>() {
            Ok(erased(2u16))
        } else if key == &Key::of::<u32>() {
            Ok(erased(3u32))
        } else {
            Err(InjectError::NotFound(key.display_name()))
        }
    }
}

#[tokio::test]
async fn test_resolution_is_sequential_in_declaration_order() {
    let resolver = Arc::new(SequencingResolver::default());
    let scope = ResolverScope::new(resolver.clone());

    let injector = Injector::new(InjectionMode::Enabled);
    let wrapped = injector.wrap(
        Signature::builder()
            .required::<u8>("first")
            .required::<u16>("second")
            .required::<u32>("third")
            .build()
            .unwrap(),
        |args: CallArgs| async move {
            let first = *args.kwarg::<u8>("first")? as u32;
            let second = *args.kwarg::<u16>("second")? as u32;
            let third = *args.kwarg::<u32>("third")?;
            Ok::<_, InjectError>(first + second + third)
        },
    );

    let total = wrapped.call(&scope, vec![], Kwargs::new()).await.unwrap().unwrap();
    assert_eq!(total, 6);
    assert_eq!(
        resolver.order.lock().unwrap().clone(),
        vec![
            std::any::type_name::<u8>(),
            std::any::type_name::<u16>(),
            std::any::type_name::<u32>(),
        ]
    );
}

#[tokio::test]
async fn test_scope_is_reusable_across_sequential_calls() {
    let scope = ResolverScope::new(Arc::new(LabelResolver { label: "same" }));

    let injector = Injector::new(InjectionMode::Enabled);
    let wrapped = injector.wrap(
        Signature::builder().required::<String>("label").build().unwrap(),
        |args: CallArgs| async move { args.kwarg::<String>("label").map(|l| (*l).clone()) },
    );

    for _ in 0..3 {
        let label = wrapped.call(&scope, vec![], Kwargs::new()).await.unwrap().unwrap();
        assert_eq!(label, "same");
    }
}
