// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Search/replace domain resolution through the filter registries

use std::sync::Arc;

use super::{to_raw, validate, DomainMap, FilterRegistry};
use crate::context::ExecutionContext;

/// Resolves the search and replace maps for an execution context
///
/// Each map is passed through its filter registry, validated, and memoized in
/// the context. Invalid filter output resolves to the empty map. An empty map
/// is never treated as cached, so the filters run again on the next call.
#[derive(Debug, Clone, Default)]
pub struct DomainMapResolver {
    search_filters: Arc<FilterRegistry>,
    replace_filters: Arc<FilterRegistry>,
}

impl DomainMapResolver {
    /// Create a resolver with empty filter registries
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver over existing registries
    pub fn with_filters(
        search_filters: Arc<FilterRegistry>,
        replace_filters: Arc<FilterRegistry>,
    ) -> Self {
        Self {
            search_filters,
            replace_filters,
        }
    }

    /// Filters applied to the search domains
    pub fn search_filters(&self) -> &Arc<FilterRegistry> {
        &self.search_filters
    }

    /// Filters applied to the replace domains
    pub fn replace_filters(&self) -> &Arc<FilterRegistry> {
        &self.replace_filters
    }

    /// Resolve the search domains, starting from `defaults`
    pub fn resolve_search_domains(
        &self,
        ctx: &mut ExecutionContext,
        defaults: &DomainMap,
    ) -> DomainMap {
        if !ctx.search_domains.is_empty() {
            return ctx.search_domains.clone();
        }

        let resolved = resolve(&self.search_filters, defaults, "search");
        ctx.search_domains = resolved.clone();
        resolved
    }

    /// Resolve the replace domains, starting from `defaults`
    pub fn resolve_replace_domains(
        &self,
        ctx: &mut ExecutionContext,
        defaults: &DomainMap,
    ) -> DomainMap {
        if !ctx.replace_domains.is_empty() {
            return ctx.replace_domains.clone();
        }

        let resolved = resolve(&self.replace_filters, defaults, "replace");
        ctx.replace_domains = resolved.clone();
        resolved
    }
}

fn resolve(filters: &FilterRegistry, defaults: &DomainMap, kind: &'static str) -> DomainMap {
    let raw = filters.apply(to_raw(defaults));

    match validate(&raw) {
        Some(domains) => domains,
        None => {
            tracing::warn!(kind, filters = ?filters.names(), "Filtered domains are not a string map, ignoring");
            DomainMap::new()
        }
    }
}
