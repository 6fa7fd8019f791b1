//! The lookup contract a host implements to answer template references.

use std::collections::HashMap;

/// Source of concrete values for `{name}` references.
///
/// The resolver is a pure consumer of this trait: it never writes to the
/// context, and any I/O or synchronization behind these methods is the
/// implementation's own business.
///
/// # Ordering contract
///
/// Returned sequences are consumed positionally: the N-th occurrence of a
/// reference within one template takes the N-th candidate. When a name is
/// satisfiable at several scope levels, implementations MUST order candidates
/// innermost scope first. This ordering is part of the contract, not an
/// implementation detail.
pub trait ResolutionContext {
    /// All candidate values for a value-expression reference, in order.
    fn collect_values(&self, name: &str) -> Vec<String>;

    /// All candidate `(key, value)` tuples for a token-expression reference,
    /// in order.
    fn collect_tuples(&self, name: &str) -> Vec<(String, String)>;

    /// Reference names this context can answer, used for "did you mean"
    /// diagnostics. The default is empty, which disables suggestions.
    fn known_names(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<C: ResolutionContext + ?Sized> ResolutionContext for &C {
    fn collect_values(&self, name: &str) -> Vec<String> {
        (**self).collect_values(name)
    }

    fn collect_tuples(&self, name: &str) -> Vec<(String, String)> {
        (**self).collect_tuples(name)
    }

    fn known_names(&self) -> Vec<String> {
        (**self).known_names()
    }
}

/// A map-backed [`ResolutionContext`] for tests and simple hosts.
///
/// Candidates come back in insertion order, satisfying the trait's ordering
/// contract as long as values are inserted innermost scope first.
///
/// # Example
///
/// ```
/// use hieraddr::{MapContext, parse_template};
///
/// let ctx = MapContext::new()
///     .with_tuple("selected.profile", "profile", "default")
///     .with_value("name", "datasources");
///
/// let addr = parse_template("{selected.profile}/subsystem={name}")
///     .resolve(&ctx, &[])
///     .unwrap();
/// assert_eq!(addr.to_string(), "/profile=default/subsystem=datasources");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    values: HashMap<String, Vec<String>>,
    tuples: HashMap<String, Vec<(String, String)>>,
}

impl MapContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one candidate value for `name`.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.entry(name.into()).or_default().push(value.into());
        self
    }

    /// Append several candidate values for `name`, in order.
    pub fn with_values<V: Into<String>>(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        self.values
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Append one candidate tuple for `name`.
    pub fn with_tuple(
        mut self,
        name: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.tuples
            .entry(name.into())
            .or_default()
            .push((key.into(), value.into()));
        self
    }
}

impl ResolutionContext for MapContext {
    fn collect_values(&self, name: &str) -> Vec<String> {
        self.values.get(name).cloned().unwrap_or_default()
    }

    fn collect_tuples(&self, name: &str) -> Vec<(String, String)> {
        self.tuples.get(name).cloned().unwrap_or_default()
    }

    fn known_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .values
            .keys()
            .chain(self.tuples.keys())
            .cloned()
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
