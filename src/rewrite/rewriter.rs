// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! URL host rewriting

use std::collections::BTreeMap;

use url::Url;

use crate::domains::{chained_hosts, same_keys, DomainMap};

/// Marker placed before a host in an absolute URL
pub const SCHEME_SEPARATOR: &str = "://";

/// Each host prefixed with [`SCHEME_SEPARATOR`]
pub fn prefix_domains(domains: &DomainMap) -> BTreeMap<String, String> {
    domains
        .iter()
        .map(|(k, host)| (k.clone(), format!("{}{}", SCHEME_SEPARATOR, host)))
        .collect()
}

/// Host component of `url`, if it parses as an absolute URL with a host
pub fn extract_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .filter(|h| !h.is_empty())
        .map(String::from)
}

/// Rewrite the host of `url` from a search domain to its replacement
///
/// Returns the input unchanged when the URL is empty, when the two maps do
/// not have exactly the same keys, when a replace host is the search host of
/// another type, or when the URL's host is not one of the search hosts.
/// Otherwise every `://<search host>` in the string becomes
/// `://<replace host>` for the same domain type.
///
/// The result is never rewritten again by the same maps: a candidate that
/// would be is refused and the input returned instead.
pub fn rewrite_url(url: &str, search: &DomainMap, replace: &DomainMap) -> String {
    if url.is_empty() {
        return url.to_string();
    }

    if !same_keys(search, replace) || !chained_hosts(search, replace).is_empty() {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = {
        let from = prefix_domains(search);
        let to = prefix_domains(replace);
        from.into_iter()
            .filter_map(|(k, needle)| to.get(&k).map(|r| (needle, r.clone())))
            .collect()
    };

    let candidate = match substitute(url, search, &pairs) {
        Some(candidate) => candidate,
        None => return url.to_string(),
    };

    match substitute(&candidate, search, &pairs) {
        Some(again) if again != candidate => {
            tracing::debug!(url, candidate = %candidate, "Rewritten URL would match again, leaving unchanged");
            url.to_string()
        }
        _ => candidate,
    }
}

/// Substitute when the URL's host is a search host, `None` otherwise
fn substitute(url: &str, search: &DomainMap, pairs: &[(String, String)]) -> Option<String> {
    let host = extract_host(url)?;
    if !search.values().any(|h| *h == host) {
        return None;
    }
    Some(replace_all(url, pairs))
}

/// Single left-to-right pass: the longest needle matching at a position wins
/// and replaced text is never scanned again.
fn replace_all(haystack: &str, pairs: &[(String, String)]) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(idx) = rest.find(SCHEME_SEPARATOR) {
        out.push_str(&rest[..idx]);
        let candidate = &rest[idx..];

        let hit = pairs
            .iter()
            .filter(|(needle, _)| candidate.starts_with(needle.as_str()))
            .max_by_key(|(needle, _)| needle.len());

        match hit {
            Some((needle, replacement)) => {
                out.push_str(replacement);
                rest = &candidate[needle.len()..];
            }
            None => {
                out.push_str(SCHEME_SEPARATOR);
                rest = &candidate[SCHEME_SEPARATOR.len()..];
            }
        }
    }

    out.push_str(rest);
    out
}
