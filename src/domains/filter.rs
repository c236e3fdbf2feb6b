// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Named registry of domain map filters

use std::sync::Arc;

use parking_lot::RwLock;

use super::RawDomainMap;

/// A transformation applied to a domain map before it is used
///
/// Implemented for any `Fn(RawDomainMap) -> RawDomainMap`, so closures can be
/// registered directly.
pub trait DomainFilter: Send + Sync {
    /// Transform the map; the result is validated by the resolver
    fn filter(&self, domains: RawDomainMap) -> RawDomainMap;
}

impl<F> DomainFilter for F
where
    F: Fn(RawDomainMap) -> RawDomainMap + Send + Sync,
{
    fn filter(&self, domains: RawDomainMap) -> RawDomainMap {
        self(domains)
    }
}

/// Filters run in registration order, each receiving the previous output
#[derive(Default)]
pub struct FilterRegistry {
    filters: RwLock<Vec<(String, Arc<dyn DomainFilter>)>>,
}

impl FilterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a filter under `name`
    ///
    /// Registering an existing name replaces that filter and keeps its position.
    pub fn register<F: DomainFilter + 'static>(&self, name: impl Into<String>, filter: F) {
        let name = name.into();
        let filter: Arc<dyn DomainFilter> = Arc::new(filter);
        let mut filters = self.filters.write();

        match filters.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = filter,
            None => filters.push((name, filter)),
        }
    }

    /// Remove a filter, returning whether it was registered
    pub fn remove(&self, name: &str) -> bool {
        let mut filters = self.filters.write();
        let before = filters.len();
        filters.retain(|(n, _)| n != name);
        filters.len() != before
    }

    /// Check whether a filter is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.filters.read().iter().any(|(n, _)| n == name)
    }

    /// Registered filter names, in execution order
    pub fn names(&self) -> Vec<String> {
        self.filters.read().iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.read().is_empty()
    }

    /// Run `domains` through every filter
    pub fn apply(&self, domains: RawDomainMap) -> RawDomainMap {
        // Snapshot so a filter may touch the registry without deadlocking.
        let filters: Vec<Arc<dyn DomainFilter>> =
            self.filters.read().iter().map(|(_, f)| f.clone()).collect();

        filters
            .iter()
            .fold(domains, |acc, filter| filter.filter(acc))
    }
}

impl std::fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterRegistry")
            .field("filters", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn insert(key: &'static str, host: &'static str) -> impl Fn(Value) -> Value {
        move |mut v: Value| {
            if let Some(obj) = v.as_object_mut() {
                obj.insert(key.to_string(), Value::String(host.to_string()));
            }
            v
        }
    }

    #[test]
    fn test_empty_registry_is_identity() {
        let registry = FilterRegistry::new();
        let raw = json!({"api": "api.example.com"});
        assert_eq!(registry.apply(raw.clone()), raw);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_filters_run_in_registration_order() {
        let registry = FilterRegistry::new();
        registry.register("first", insert("api", "first.example.com"));
        registry.register("second", insert("api", "second.example.com"));

        let out = registry.apply(json!({}));
        assert_eq!(out["api"], "second.example.com");
        assert_eq!(registry.names(), vec!["first", "second"]);
    }

    #[test]
    fn test_reregister_keeps_position() {
        let registry = FilterRegistry::new();
        registry.register("first", insert("api", "first.example.com"));
        registry.register("second", insert("api", "second.example.com"));
        registry.register("first", insert("downloads", "dl.example.com"));

        assert_eq!(registry.names(), vec!["first", "second"]);
        let out = registry.apply(json!({}));
        assert_eq!(out, json!({"api": "second.example.com", "downloads": "dl.example.com"}));
    }

    #[test]
    fn test_remove() {
        let registry = FilterRegistry::new();
        registry.register("clear", |_: Value| json!({}));

        assert!(registry.contains("clear"));
        assert!(registry.remove("clear"));
        assert!(!registry.remove("clear"));
        assert_eq!(registry.len(), 0);
    }

    struct Lowercase;

    impl DomainFilter for Lowercase {
        fn filter(&self, domains: RawDomainMap) -> RawDomainMap {
            match domains {
                Value::Object(obj) => Value::Object(
                    obj.into_iter()
                        .map(|(k, v)| match v {
                            Value::String(s) => (k, Value::String(s.to_lowercase())),
                            other => (k, other),
                        })
                        .collect(),
                ),
                other => other,
            }
        }
    }

    #[test]
    fn test_trait_filter() {
        let registry = FilterRegistry::new();
        registry.register("lowercase", Lowercase);
        assert_eq!(
            registry.apply(json!({"api": "API.Example.COM"})),
            json!({"api": "api.example.com"})
        );
    }
}
