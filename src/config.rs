//! Startup configuration for the injection shim.

use std::env;

/// Environment variable controlling injection disablement.
pub const DISABLE_ENV_VAR: &str = "LAZY_DI_DISABLED";

/// Whether wrappers perform injection or pass calls straight through.
///
/// The host reads the mode once at startup, typically via
/// [`from_env`](InjectionMode::from_env), and threads the value into
/// [`Injector::new`](crate::Injector::new). Behavior is fixed for the
/// lifetime of each factory; there is no runtime toggle.
///
/// # Examples
///
/// ```rust
/// use lazy_di::InjectionMode;
///
/// assert_eq!(InjectionMode::from_value("true"), InjectionMode::Disabled);
/// assert_eq!(InjectionMode::from_value("TRUE"), InjectionMode::Disabled);
/// assert_eq!(InjectionMode::from_value("false"), InjectionMode::Enabled);
/// assert_eq!(InjectionMode::from_value("1"), InjectionMode::Enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionMode {
    /// Wrappers resolve eligible parameters before delegating.
    Enabled,
    /// Wrappers delegate unchanged and never touch a resolver.
    Disabled,
}

impl InjectionMode {
    /// Reads the mode from [`DISABLE_ENV_VAR`].
    ///
    /// A case-insensitive `"true"` disables injection; any other value,
    /// including an unset variable, leaves it enabled.
    pub fn from_env() -> Self {
        match env::var(DISABLE_ENV_VAR) {
            Ok(value) => Self::from_value(&value),
            Err(_) => InjectionMode::Enabled,
        }
    }

    /// Applies the recognition rule to a raw value.
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("true") {
            InjectionMode::Disabled
        } else {
            InjectionMode::Enabled
        }
    }

    /// Whether this mode bypasses injection.
    pub fn is_disabled(self) -> bool {
        matches!(self, InjectionMode::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_true_disables() {
        assert!(InjectionMode::from_value("true").is_disabled());
        assert!(InjectionMode::from_value("True").is_disabled());
        assert!(InjectionMode::from_value("TRUE").is_disabled());

        assert!(!InjectionMode::from_value("false").is_disabled());
        assert!(!InjectionMode::from_value("yes").is_disabled());
        assert!(!InjectionMode::from_value("1").is_disabled());
        assert!(!InjectionMode::from_value("").is_disabled());
        assert!(!InjectionMode::from_value(" true ").is_disabled());
    }
}
