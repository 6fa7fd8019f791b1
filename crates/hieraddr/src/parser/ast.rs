//! Public syntax types for address templates.
//!
//! These types are public so hosts can assemble templates programmatically
//! instead of parsing them from strings.

use serde::{Deserialize, Serialize};

use crate::resolver::{ResolutionContext, ResolveError, resolve_template};
use crate::types::ResourceAddress;

/// One segment of an address template.
///
/// A template segment takes one of three forms:
///
/// - **token**: a fully qualified tuple without parameters, `subsystem=datasources`
/// - **value expression**: a parameterized tuple part, `subsystem={name}` or `{kind}=main`
/// - **token expression**: a reference to a full tuple, `{selected.profile}`
///
/// Tokens and token expressions are stored bare (no key); value expressions
/// carry an explicit key. Which side of a value expression is a `{name}`
/// reference is decided at resolution time, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    key: Option<String>,
    value: String,
}

impl Token {
    /// Create a value-expression token with an explicit key.
    pub fn keyed(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into(),
        }
    }

    /// Create a bare token: either a literal `k=v` pair or a `{name}`
    /// tuple reference.
    pub fn bare(value: impl Into<String>) -> Self {
        Self {
            key: None,
            value: value.into(),
        }
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{key}={}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// An ordered address pattern, e.g. `{selected.profile}/subsystem=datasources`.
///
/// Templates are read-only after construction. Resolution never mutates the
/// template, so one template can be resolved any number of times against
/// different contexts and wildcard lists, concurrently if desired.
///
/// # Example
///
/// ```
/// use hieraddr::{AddressTemplate, MapContext, address};
///
/// let template = AddressTemplate::parse("profile=default/subsystem=datasources");
/// let addr = template.resolve(&MapContext::new(), &[]).unwrap();
/// assert_eq!(addr, address![("profile", "default"), ("subsystem", "datasources")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTemplate {
    tokens: Vec<Token>,
}

impl AddressTemplate {
    /// Create a template from a caller-built token list.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parse a template from its string form. See
    /// [`parse_template`](super::parse_template).
    pub fn parse(input: &str) -> Self {
        super::template::parse_template(input)
    }

    /// The template tokens in order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resolve this template against `ctx`, starting from the root address.
    ///
    /// Equivalent to [`resolve_onto`](Self::resolve_onto) with an empty base.
    ///
    /// # Errors
    ///
    /// See [`resolve_template`] for the failure policy.
    pub fn resolve(
        &self,
        ctx: &impl ResolutionContext,
        wildcards: &[&str],
    ) -> Result<ResourceAddress, ResolveError> {
        resolve_template(self, ResourceAddress::new(), ctx, wildcards)
    }

    /// Resolve this template against `ctx`, appending to `base`.
    ///
    /// # Errors
    ///
    /// See [`resolve_template`] for the failure policy.
    pub fn resolve_onto(
        &self,
        base: ResourceAddress,
        ctx: &impl ResolutionContext,
        wildcards: &[&str],
    ) -> Result<ResourceAddress, ResolveError> {
        resolve_template(self, base, ctx, wildcards)
    }
}

impl FromIterator<Token> for AddressTemplate {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for AddressTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.tokens.is_empty() {
            return write!(f, "/");
        }
        let mut first = true;
        for token in &self.tokens {
            if !first {
                write!(f, "/")?;
            }
            write!(f, "{token}")?;
            first = false;
        }
        Ok(())
    }
}
