// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Source providers
//!
//! A source is one backend for the same logical API, identified by a stable
//! key and exposing the hosts it serves per domain type. The selector holds
//! a core source (where requests are addressed) and an alternate source
//! (where they may be redirected).

mod config;

use std::sync::Arc;

use crate::domains::DomainMap;

pub use config::{SelectorConfig, SourceConfig};

/// A provider of domains for one source
pub trait SourceProvider: Send + Sync {
    /// Stable identity; two sources with the same key are interchangeable
    fn key(&self) -> &str;

    /// Hosts served by this source, keyed by domain type
    fn domains(&self) -> DomainMap;
}

/// A source whose key and domains are fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    key: String,
    domains: DomainMap,
}

impl StaticSource {
    /// Create a source with no domains
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            domains: DomainMap::new(),
        }
    }

    /// Add a domain for the given type
    pub fn domain(mut self, domain_type: impl Into<String>, host: impl Into<String>) -> Self {
        self.domains.insert(domain_type.into(), host.into());
        self
    }

    /// Replace all domains
    pub fn with_domains(mut self, domains: DomainMap) -> Self {
        self.domains = domains;
        self
    }

    /// Wrap in an `Arc` for sharing with the interceptor
    pub fn shared(self) -> Arc<dyn SourceProvider> {
        Arc::new(self)
    }
}

impl SourceProvider for StaticSource {
    fn key(&self) -> &str {
        &self.key
    }

    fn domains(&self) -> DomainMap {
        self.domains.clone()
    }
}

impl From<SourceConfig> for StaticSource {
    fn from(config: SourceConfig) -> Self {
        StaticSource::new(config.key).with_domains(config.domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("core")
            .domain("api", "api.example.com")
            .domain("downloads", "downloads.example.com");

        assert_eq!(source.key(), "core");
        assert_eq!(source.domains().len(), 2);
        assert_eq!(source.domains()["api"], "api.example.com");
    }

    #[test]
    fn test_shared_source() {
        let source = StaticSource::new("alternate")
            .domain("api", "api.alt.example.com")
            .shared();
        assert_eq!(source.key(), "alternate");
    }
}
