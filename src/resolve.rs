//! Indirect references and their resolution.
//!
//! A graph description may name a vertex or edge directly, by id, or through a
//! deferred producer. [`Resolver`] turns any of those into a concrete value.
//! Nothing is cached: every call to [`Resolver::resolve`] re-evaluates the
//! reference, calling a deferred producer or lookup exactly once.

use std::fmt;
use std::sync::Arc;

/// Caller-supplied id lookup. `None` means the id is unknown.
pub type LookupFn<T> = dyn Fn(&str) -> Option<T> + Send + Sync;

/// Zero-argument producer evaluated on demand.
pub type DeferredFn<T> = dyn Fn() -> T + Send + Sync;

pub enum Reference<T> {
    Literal(T),
    ById(String),
    Deferred(Arc<DeferredFn<T>>),
    Missing,
}

impl<T> Reference<T> {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::ById(id.into())
    }

    pub fn deferred<F>(produce: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(produce))
    }
}

impl<T> Default for Reference<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T: Clone> Clone for Reference<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(value) => Self::Literal(value.clone()),
            Self::ById(id) => Self::ById(id.clone()),
            Self::Deferred(produce) => Self::Deferred(Arc::clone(produce)),
            Self::Missing => Self::Missing,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Reference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::ById(id) => f.debug_tuple("ById").field(id).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Missing => f.write_str("Missing"),
        }
    }
}

impl<T> From<T> for Reference<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Reference<String> {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("unable to resolve {kind} reference `{id}`: no lookup function supplied")]
    Unresolved { kind: &'static str, id: String },
    #[error("unable to resolve {kind} reference `{id}`: lookup returned nothing")]
    NotFound { kind: &'static str, id: String },
    #[error("unable to resolve {kind} reference: value is absent")]
    Missing { kind: &'static str },
}

/// Resolves references of one target type, borrowing the caller's lookup.
pub struct Resolver<'a, T> {
    kind: &'static str,
    lookup: Option<&'a LookupFn<T>>,
}

impl<'a, T: Clone> Resolver<'a, T> {
    pub fn new(kind: &'static str, lookup: Option<&'a LookupFn<T>>) -> Self {
        Self { kind, lookup }
    }

    pub fn without_lookup(kind: &'static str) -> Self {
        Self { kind, lookup: None }
    }

    /// Deferred producers win over id lookup, which wins over literal values.
    pub fn resolve(&self, reference: &Reference<T>) -> Result<T, ResolveError> {
        match reference {
            Reference::Deferred(produce) => Ok(produce()),
            Reference::ById(id) => match self.lookup {
                Some(lookup) => lookup(id).ok_or_else(|| ResolveError::NotFound {
                    kind: self.kind,
                    id: id.clone(),
                }),
                None => Err(ResolveError::Unresolved {
                    kind: self.kind,
                    id: id.clone(),
                }),
            },
            Reference::Literal(value) => Ok(value.clone()),
            Reference::Missing => Err(ResolveError::Missing { kind: self.kind }),
        }
    }
}

/// Labels never have a lookup function.
pub fn label_resolver() -> Resolver<'static, String> {
    Resolver::without_lookup("label")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn upper(id: &str) -> Option<String> {
        Some(id.to_uppercase())
    }

    #[test]
    fn literal_resolves_as_is() {
        let resolver = label_resolver();
        assert_eq!(resolver.resolve(&"hello".into()).unwrap(), "hello");
    }

    #[test]
    fn by_id_uses_lookup() {
        let resolver = Resolver::new("label", Some(&upper as &LookupFn<String>));
        assert_eq!(resolver.resolve(&Reference::by_id("abc")).unwrap(), "ABC");
    }

    #[test]
    fn deferred_takes_precedence_over_lookup() {
        let resolver = Resolver::new("label", Some(&upper as &LookupFn<String>));
        let reference = Reference::deferred(|| "X".to_string());
        assert_eq!(resolver.resolve(&reference).unwrap(), "X");
    }

    #[test]
    fn by_id_without_lookup_fails() {
        let err = label_resolver()
            .resolve(&Reference::by_id("v1"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::Unresolved {
                kind: "label",
                id: "v1".to_string()
            }
        );
        assert!(err.to_string().starts_with("unable to resolve"));
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let none = |_: &str| -> Option<String> { None };
        let resolver = Resolver::new("vertex", Some(&none as &LookupFn<String>));
        let err = resolver.resolve(&Reference::by_id("ghost")).unwrap_err();
        assert!(matches!(err, ResolveError::NotFound { id, .. } if id == "ghost"));
    }

    #[test]
    fn missing_reference_fails() {
        let err = label_resolver().resolve(&Reference::Missing).unwrap_err();
        assert_eq!(err, ResolveError::Missing { kind: "label" });
    }

    #[test]
    fn deferred_is_evaluated_once_per_call_and_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let reference = Reference::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "v".to_string()
        });
        let resolver = label_resolver();
        resolver.resolve(&reference).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        resolver.resolve(&reference.clone()).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
