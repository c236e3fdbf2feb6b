// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Serializable source selection

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domains::DomainMap;
use crate::error::{Error, ErrorContext, Result};

/// One source as written in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Stable source key
    pub key: String,
    /// Domain type -> host
    #[serde(default)]
    pub domains: DomainMap,
}

impl SourceConfig {
    /// Create a source config with no domains
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
}

/// The pair of sources to switch between
///
/// ```json
/// {
///   "core": { "key": "core", "domains": { "api": "api.example.com" } },
///   "alternate": { "key": "mirror", "domains": { "api": "api.mirror.example.com" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Source requests are addressed to
    pub core: SourceConfig,
    /// Source requests are redirected to
    pub alternate: SourceConfig,
}

impl SelectorConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(&format!("reading {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check(&self) -> Result<()> {
        for (role, source) in [("core", &self.core), ("alternate", &self.alternate)] {
            if source.key.trim().is_empty() {
                return Err(Error::config(format!("{} source has an empty key", role)));
            }
        }
        Ok(())
    }
}
