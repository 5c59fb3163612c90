//! Type-erased argument carriers for wrapped handlers.
//!
//! Positional values, keyword values, and resolved dependencies all travel
//! as [`AnyArc`] and are downcast back to concrete types at the edge, inside
//! the handler body.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{InjectError, InjectResult};

/// Type-erased, shareable value.
///
/// The unit of exchange between callers, resolvers, and handlers.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Erases a value into an [`AnyArc`].
///
/// Convenience for call sites building positional argument lists:
///
/// ```rust
/// use lazy_di::{erased, AnyArc};
///
/// let args: Vec<AnyArc> = vec![erased(1u32), erased("hi".to_string())];
/// assert_eq!(args.len(), 2);
/// ```
pub fn erased<T: Send + Sync + 'static>(value: T) -> AnyArc {
    Arc::new(value)
}

/// Keyword arguments for a handler invocation.
///
/// Maps parameter names to type-erased values. The wrapper merges resolved
/// dependencies into this map before delegating; values the caller supplied
/// are never replaced.
///
/// # Examples
///
/// ```rust
/// use lazy_di::Kwargs;
///
/// let mut kwargs = Kwargs::new();
/// kwargs.insert("who", "world".to_string());
///
/// assert!(kwargs.contains("who"));
/// assert_eq!(*kwargs.get::<String>("who").unwrap(), "world");
/// assert!(kwargs.get::<u32>("who").is_err()); // wrong type
/// assert!(kwargs.get::<String>("missing").is_err());
/// ```
#[derive(Clone, Default)]
pub struct Kwargs {
    entries: HashMap<&'static str, AnyArc>,
}

impl Kwargs {
    /// Creates an empty keyword-argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, erasing its type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, name: &'static str, value: T) {
        self.entries.insert(name, Arc::new(value));
    }

    /// Stores an already-erased value under `name`.
    pub fn insert_arc(&mut self, name: &'static str, value: AnyArc) {
        self.entries.insert(name, value);
    }

    /// Fetches the value stored under `name`, downcast to `T`.
    ///
    /// Fails with [`InjectError::NotFound`] when no value is stored under
    /// `name` and [`InjectError::TypeMismatch`] when the stored value is not
    /// a `T`.
    pub fn get<T: Send + Sync + 'static>(&self, name: &'static str) -> InjectResult<Arc<T>> {
        let entry = self.entries.get(name).ok_or(InjectError::NotFound(name))?;
        entry
            .clone()
            .downcast::<T>()
            .map_err(|_| InjectError::TypeMismatch(std::any::type_name::<T>()))
    }

    /// Whether a value is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of stored arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for Kwargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.entries.keys().collect();
        names.sort();
        f.debug_struct("Kwargs").field("names", &names).finish()
    }
}

/// The full argument set delivered to a wrapped handler.
///
/// Positional values first (the bound receiver, when present, occupies
/// index 0), then the merged keyword arguments.
///
/// # Examples
///
/// ```rust
/// use lazy_di::{erased, CallArgs, Kwargs};
///
/// let mut kwargs = Kwargs::new();
/// kwargs.insert("retries", 3u32);
/// let args = CallArgs::new(vec![erased(7i64)], kwargs);
///
/// assert_eq!(args.positional_len(), 1);
/// assert_eq!(*args.arg::<i64>(0).unwrap(), 7);
/// assert_eq!(*args.kwarg::<u32>("retries").unwrap(), 3);
/// ```
#[derive(Clone)]
pub struct CallArgs {
    positional: Vec<AnyArc>,
    kwargs: Kwargs,
}

impl CallArgs {
    /// Assembles an argument set from positional values and keywords.
    pub fn new(positional: Vec<AnyArc>, kwargs: Kwargs) -> Self {
        Self { positional, kwargs }
    }

    /// Number of positional values, including a bound receiver.
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Fetches the positional value at `index`, downcast to `T`.
    pub fn arg<T: Send + Sync + 'static>(&self, index: usize) -> InjectResult<Arc<T>> {
        let value = self
            .positional
            .get(index)
            .ok_or(InjectError::NotFound(std::any::type_name::<T>()))?;
        value
            .clone()
            .downcast::<T>()
            .map_err(|_| InjectError::TypeMismatch(std::any::type_name::<T>()))
    }

    /// Fetches the keyword value stored under `name`, downcast to `T`.
    pub fn kwarg<T: Send + Sync + 'static>(&self, name: &'static str) -> InjectResult<Arc<T>> {
        self.kwargs.get(name)
    }

    /// The keyword-argument map.
    pub fn kwargs(&self) -> &Kwargs {
        &self.kwargs
    }
}
