// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Rewriting interceptor configuration

use crate::source::{SelectorConfig, SourceConfig};

/// Chain priority of the rewriting interceptor unless configured otherwise
pub const DEFAULT_PRIORITY: i32 = 10;

/// Rewriting interceptor configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriterConfig {
    /// Source requests are addressed to
    pub core: SourceConfig,
    /// Source requests are redirected to
    pub alternate: SourceConfig,
    /// Position in the pre-request chain (higher runs first)
    pub priority: i32,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            core: SourceConfig::new("core"),
            alternate: SourceConfig::new("alternate"),
            priority: DEFAULT_PRIORITY,
        }
    }
}

impl RewriterConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the core source
    pub fn core(mut self, source: SourceConfig) -> Self {
        self.core = source;
        self
    }

    /// Set the alternate source
    pub fn alternate(mut self, source: SourceConfig) -> Self {
        self.alternate = source;
        self
    }

    /// Set chain priority
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl From<SelectorConfig> for RewriterConfig {
    fn from(selector: SelectorConfig) -> Self {
        Self::new().core(selector.core).alternate(selector.alternate)
    }
}
