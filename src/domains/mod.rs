// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Domain maps and their resolution
//!
//! A domain map associates a domain type ("api", "downloads", ...) with a
//! bare host. Maps are `BTreeMap`s so iteration is always sorted by key,
//! which keeps matching deterministic regardless of how a map was built.

mod filter;
mod resolver;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

pub use filter::{DomainFilter, FilterRegistry};
pub use resolver::DomainMapResolver;

/// Domain type -> bare host
pub type DomainMap = BTreeMap<String, String>;

/// Untyped domain map as seen by filter hooks
///
/// Hooks may return anything; only an object whose values are all strings
/// validates back into a [`DomainMap`].
pub type RawDomainMap = Value;

/// Convert a domain map into its untyped hook representation
pub fn to_raw(domains: &DomainMap) -> RawDomainMap {
    Value::Object(
        domains
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect::<Map<String, Value>>(),
    )
}

/// Validate an untyped map, returning `None` if it is not a string -> string map
pub fn validate(raw: &RawDomainMap) -> Option<DomainMap> {
    let object = raw.as_object()?;
    object
        .iter()
        .map(|(k, v)| v.as_str().map(|host| (k.clone(), host.to_string())))
        .collect()
}

/// True when every key of `a` is also a key of `b`
pub fn keys_covered(a: &DomainMap, b: &DomainMap) -> bool {
    a.keys().all(|k| b.contains_key(k))
}

/// True when both maps have exactly the same key set
pub fn same_keys(a: &DomainMap, b: &DomainMap) -> bool {
    a.len() == b.len() && keys_covered(a, b)
}

/// Replace hosts that are also a search host under a different key
///
/// Such maps chain: a rewritten URL would match the search map again.
pub fn chained_hosts<'a>(search: &'a DomainMap, replace: &'a DomainMap) -> Vec<&'a str> {
    replace
        .iter()
        .filter(|(key, host)| search.iter().any(|(k, h)| k != *key && h == *host))
        .map(|(_, host)| host.as_str())
        .collect()
}

/// Build a domain map from `(type, host)` pairs
pub fn domain_map<I, K, V>(pairs: I) -> DomainMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iteration_is_sorted() {
        let map = domain_map([
            ("downloads", "downloads.example.com"),
            ("api", "api.example.com"),
            ("planet", "planet.example.com"),
        ]);
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["api", "downloads", "planet"]);
    }

    #[test]
    fn test_validate_accepts_string_map() {
        let raw = json!({"api": "api.example.com", "downloads": "downloads.example.com"});
        let map = validate(&raw).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["api"], "api.example.com");
    }

    #[test]
    fn test_validate_rejects_non_string_value() {
        assert!(validate(&json!({"api": "api.example.com", "downloads": 42})).is_none());
        assert!(validate(&json!({"api": null})).is_none());
        assert!(validate(&json!({"api": ["api.example.com"]})).is_none());
    }

    #[test]
    fn test_validate_rejects_non_map() {
        assert!(validate(&json!(["api.example.com"])).is_none());
        assert!(validate(&json!("api.example.com")).is_none());
        assert!(validate(&Value::Null).is_none());
    }

    #[test]
    fn test_raw_round_trip_preserves_entries() {
        let map = domain_map([("api", "api.example.com")]);
        assert_eq!(validate(&to_raw(&map)), Some(map));
    }

    #[test]
    fn test_key_coverage() {
        let core = domain_map([("api", "a"), ("downloads", "d")]);
        let alt = domain_map([("api", "b"), ("downloads", "e"), ("extra", "x")]);

        assert!(keys_covered(&core, &alt));
        assert!(!keys_covered(&alt, &core));
        assert!(!same_keys(&core, &alt));
        assert!(same_keys(&core, &core));
    }

    #[test]
    fn test_chained_hosts() {
        let search = domain_map([("a", "one.example.com"), ("b", "two.example.com")]);
        let chained = domain_map([("a", "two.example.com"), ("b", "three.example.com")]);
        assert_eq!(chained_hosts(&search, &chained), vec!["two.example.com"]);

        // Mapping a type onto its own host is not a chain.
        let identity = domain_map([("a", "one.example.com"), ("b", "three.example.com")]);
        assert!(chained_hosts(&search, &identity).is_empty());
    }
}
