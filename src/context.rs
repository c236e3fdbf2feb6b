// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Per-execution-context state
//!
//! One `ExecutionContext` lives for one unit of work (an incoming request, a
//! CLI invocation) and is passed by `&mut` into the interceptor. It owns the
//! memoized eligibility decision and the resolved domain maps; nothing is
//! kept in statics, so concurrent contexts never observe each other.

use crate::domains::DomainMap;
use crate::rewrite::{Decision, EligibilityState};

/// Lazily populated state scoped to one execution context
#[derive(Debug, Default)]
pub struct ExecutionContext {
    /// Eligibility decision, made on the first intercepted request
    pub(crate) eligibility: EligibilityState,
    /// Resolved search domains; empty means not yet resolved
    pub(crate) search_domains: DomainMap,
    /// Resolved replace domains; empty means not yet resolved
    pub(crate) replace_domains: DomainMap,
    /// Requests re-dispatched with a rewritten URL
    pub(crate) rewrites: u64,
}

impl ExecutionContext {
    /// Create a fresh, uninitialized context
    pub fn new() -> Self {
        Self::default()
    }

    /// Current eligibility state
    pub fn eligibility(&self) -> &EligibilityState {
        &self.eligibility
    }

    /// The eligibility decision, if made
    pub fn decision(&self) -> Option<&Decision> {
        self.eligibility.decision()
    }

    /// Memoized search domains (empty until resolved)
    pub fn search_domains(&self) -> &DomainMap {
        &self.search_domains
    }

    /// Memoized replace domains (empty until resolved)
    pub fn replace_domains(&self) -> &DomainMap {
        &self.replace_domains
    }

    /// Number of requests this context re-dispatched
    pub fn rewrites(&self) -> u64 {
        self.rewrites
    }

    /// Drop all memoized state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::domain_map;

    #[test]
    fn test_new_context_is_uninitialized() {
        let ctx = ExecutionContext::new();
        assert_eq!(*ctx.eligibility(), EligibilityState::Uninitialized);
        assert!(ctx.decision().is_none());
        assert!(ctx.search_domains().is_empty());
        assert_eq!(ctx.rewrites(), 0);
    }

    #[test]
    fn test_reset() {
        let mut ctx = ExecutionContext::new();
        ctx.eligibility = EligibilityState::Decided(Decision::skip());
        ctx.search_domains = domain_map([("api", "api.example.com")]);
        ctx.rewrites = 3;

        ctx.reset();
        assert!(!ctx.eligibility().is_decided());
        assert!(ctx.search_domains().is_empty());
        assert_eq!(ctx.rewrites(), 0);
    }
}
