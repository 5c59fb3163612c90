//! Dependency key types for resolution requests.

use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Key identifying a requested dependency type.
///
/// Pairs the `TypeId` used for lookup with the type name for diagnostics.
/// Equality and hashing consider the `TypeId` only; the name is carried so
/// error messages and observers can print something readable.
///
/// # Examples
///
/// ```rust
/// use lazy_di::Key;
///
/// let key = Key::of::<String>();
/// assert_eq!(key.display_name(), "alloc::string::String");
/// assert_eq!(key, Key::of::<String>());
/// assert_ne!(key, Key::of::<u32>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    /// Creates the key for `T`.
    #[inline(always)]
    pub fn of<T: 'static>() -> Key {
        Key {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The `TypeId` this key resolves by.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The type name for display
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

// TypeId-only comparison; the name exists for diagnostics and two
// instantiations of the same type always carry the same id.
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl Hash for Key {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
