//! Declared handler signatures and injectable-parameter analysis.
//!
//! There is no runtime reflection to lean on, so a handler's formal
//! parameter list is declared once through [`SignatureBuilder`] and analyzed
//! per invocation to find the parameters that should be filled from the
//! active resolver.

use crate::args::Kwargs;
use crate::error::{InjectError, InjectResult};
use crate::key::Key;

/// A single declared parameter of a wrapped handler.
///
/// Records everything eligibility analysis needs: the name, the declared
/// type (absent for parameters declared without one), whether the handler
/// supplies a default for it, and whether it can only be filled
/// positionally.
#[derive(Debug, Clone, Copy)]
pub struct Parameter {
    name: &'static str,
    annotation: Option<Key>,
    has_default: bool,
    positional_only: bool,
}

impl Parameter {
    /// The parameter name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type, when one was given.
    pub fn annotation(&self) -> Option<Key> {
        self.annotation
    }

    /// Whether the handler supplies a default value for this parameter.
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    /// Whether this parameter can only be supplied positionally.
    pub fn is_positional_only(&self) -> bool {
        self.positional_only
    }
}

/// The declared formal parameter list of a wrapped handler.
///
/// Built once, at handler definition time, via [`Signature::builder`]. The
/// interesting operation is [`injectable`](Signature::injectable), which
/// computes the set of parameters the wrapper should resolve for one
/// concrete invocation.
///
/// # Examples
///
/// ```rust
/// use lazy_di::{Key, Kwargs, Signature};
///
/// struct Widget;
///
/// let signature = Signature::builder()
///     .required::<i64>("a")
///     .defaulted::<String>("b")
///     .required::<Widget>("c")
///     .build()
///     .unwrap();
///
/// // One positional argument supplied: "a" is taken, "b" has a default,
/// // leaving only "c" to be injected.
/// let injectable = signature.injectable(1, &Kwargs::new());
/// assert_eq!(injectable, vec![("c", Key::of::<Widget>())]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Signature {
    parameters: Vec<Parameter>,
}

impl Signature {
    /// Starts declaring a signature.
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder {
            parameters: Vec::new(),
        }
    }

    /// The declared parameters, in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Computes the parameters to resolve for one invocation.
    ///
    /// `supplied_positional` is the number of positional arguments the
    /// caller passed, counting a bound receiver; those parameters are
    /// already filled and are skipped outright. Of the rest, a parameter
    /// qualifies iff it has a declared type, no default, is not
    /// positional-only, and was not passed in `supplied_keywords`.
    ///
    /// The result preserves declaration order and the computation is pure:
    /// the same inputs always produce the same list.
    pub fn injectable(
        &self,
        supplied_positional: usize,
        supplied_keywords: &Kwargs,
    ) -> Vec<(&'static str, Key)> {
        let mut injectable = Vec::new();
        for parameter in self.parameters.iter().skip(supplied_positional) {
            // Injectable parameters must carry a declared type and no default.
            let Some(annotation) = parameter.annotation else {
                continue;
            };
            if parameter.has_default
                // Resolved values are merged as keywords, which a
                // positional-only parameter cannot accept.
                || parameter.positional_only
                // Never replace a keyword the caller already supplied.
                || supplied_keywords.contains(parameter.name)
            {
                continue;
            }
            injectable.push((parameter.name, annotation));
        }
        injectable
    }
}

/// Fluent builder for [`Signature`].
///
/// Parameters are declared in the order the handler expects them.
/// [`build`](SignatureBuilder::build) validates the declaration: names must
/// be unique and positional-only parameters must precede all others.
pub struct SignatureBuilder {
    parameters: Vec<Parameter>,
}

impl SignatureBuilder {
    /// Declares a typed parameter with no default. Eligible for injection.
    pub fn required<T: 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(Parameter {
            name,
            annotation: Some(Key::of::<T>()),
            has_default: false,
            positional_only: false,
        });
        self
    }

    /// Declares a typed parameter the handler has a default for.
    ///
    /// Defaults take precedence: the wrapper never resolves a value the
    /// handler can fall back to on its own.
    pub fn defaulted<T: 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(Parameter {
            name,
            annotation: Some(Key::of::<T>()),
            has_default: true,
            positional_only: false,
        });
        self
    }

    /// Declares a typed parameter that can only be supplied positionally.
    pub fn positional_only<T: 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(Parameter {
            name,
            annotation: Some(Key::of::<T>()),
            has_default: false,
            positional_only: true,
        });
        self
    }

    /// Declares a parameter without a type. Never eligible for injection.
    pub fn untyped(mut self, name: &'static str) -> Self {
        self.parameters.push(Parameter {
            name,
            annotation: None,
            has_default: false,
            positional_only: false,
        });
        self
    }

    /// Finishes the declaration, validating it.
    pub fn build(self) -> InjectResult<Signature> {
        let mut seen_keyword_capable = false;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if self.parameters[..index]
                .iter()
                .any(|earlier| earlier.name == parameter.name)
            {
                return Err(InjectError::DuplicateParameter(parameter.name));
            }
            if parameter.positional_only {
                if seen_keyword_capable {
                    return Err(InjectError::PositionalOnlyAfterOther(parameter.name));
                }
            } else {
                seen_keyword_capable = true;
            }
        }
        Ok(Signature {
            parameters: self.parameters,
        })
    }
}
