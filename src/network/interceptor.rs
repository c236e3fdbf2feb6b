// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Rewriting interceptor
//!
//! Moves requests addressed to the core source's hosts over to the alternate
//! source. Eligibility is decided lazily on the first intercepted request and
//! memoized in the [`ExecutionContext`]; skip hooks are consulted every time.

use std::sync::Arc;

use async_trait::async_trait;

use super::config::{RewriterConfig, DEFAULT_PRIORITY};
use super::interceptor_trait::{Dispatch, PreRequestFilter, PreemptiveResponse};
use super::skip::SkipHooks;
use crate::context::ExecutionContext;
use crate::domains::DomainMapResolver;
use crate::http::RequestArgs;
use crate::rewrite::{rewrite_url, RewriteEligibility};
use crate::source::{SourceProvider, StaticSource};

/// Interceptor that re-dispatches core-source requests to the alternate source
#[derive(Clone)]
pub struct RewriteInterceptor {
    eligibility: RewriteEligibility,
    resolver: DomainMapResolver,
    skip_hooks: Arc<SkipHooks>,
    dispatcher: Arc<dyn Dispatch>,
    priority: i32,
}

impl RewriteInterceptor {
    /// Create an interceptor switching from `core` to `alt`, dispatching via `dispatcher`
    pub fn new(
        core: Arc<dyn SourceProvider>,
        alt: Arc<dyn SourceProvider>,
        dispatcher: Arc<dyn Dispatch>,
    ) -> Self {
        Self {
            eligibility: RewriteEligibility::new(core, alt),
            resolver: DomainMapResolver::new(),
            skip_hooks: Arc::new(SkipHooks::new()),
            dispatcher,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Create an interceptor from configuration
    pub fn from_config(config: RewriterConfig, dispatcher: Arc<dyn Dispatch>) -> Self {
        Self::new(
            StaticSource::from(config.core).shared(),
            StaticSource::from(config.alternate).shared(),
            dispatcher,
        )
        .with_priority(config.priority)
    }

    /// Use an existing resolver (and its filter registries)
    pub fn with_resolver(mut self, resolver: DomainMapResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Use shared skip hooks
    pub fn with_skip_hooks(mut self, hooks: Arc<SkipHooks>) -> Self {
        self.skip_hooks = hooks;
        self
    }

    /// Set chain priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn resolver(&self) -> &DomainMapResolver {
        &self.resolver
    }

    pub fn skip_hooks(&self) -> &Arc<SkipHooks> {
        &self.skip_hooks
    }

    pub fn eligibility(&self) -> &RewriteEligibility {
        &self.eligibility
    }

    /// Initialize the context's eligibility, returning whether to skip
    ///
    /// A `skip` already requested by a hook wins and leaves the context
    /// uninitialized. Otherwise the decision is made once per context and
    /// reused, unless `force` is set.
    pub fn init(&self, ctx: &mut ExecutionContext, skip: bool, force: bool) -> bool {
        if skip {
            return true;
        }
        self.eligibility.evaluate(&mut ctx.eligibility, force).skip
    }

    /// Rewrite `url` using the context's resolved domain maps
    ///
    /// Unchanged unless the context has been initialized and is eligible.
    pub fn rewrite(&self, ctx: &mut ExecutionContext, url: &str) -> String {
        if url.is_empty() {
            return url.to_string();
        }

        let (search_defaults, replace_defaults) = match ctx.decision() {
            Some(decision) if !decision.skip => (decision.search.clone(), decision.replace.clone()),
            _ => return url.to_string(),
        };

        let search = self.resolver.resolve_search_domains(ctx, &search_defaults);
        let replace = self.resolver.resolve_replace_domains(ctx, &replace_defaults);

        rewrite_url(url, &search, &replace)
    }

    /// Answer the request with a rewritten dispatch, or pass it through
    ///
    /// Exactly one dispatch happens when the URL is rewritten; none otherwise.
    pub async fn intercept(
        &self,
        ctx: &mut ExecutionContext,
        pending: PreemptiveResponse,
        args: &RequestArgs,
        url: Option<&str>,
    ) -> PreemptiveResponse {
        if pending.is_some() {
            return pending;
        }

        let url = match url {
            Some(url) if !url.is_empty() => url,
            _ => return None,
        };

        let skip = self.skip_hooks.should_skip();
        if self.init(ctx, skip, false) {
            return None;
        }

        let new_url = self.rewrite(ctx, url);
        if new_url == url {
            return None;
        }

        tracing::info!(from = %url, to = %new_url, "Rewriting request to alternate source");
        ctx.rewrites += 1;

        let result = self.dispatcher.dispatch(&new_url, args).await;
        if let Err(ref e) = result {
            tracing::warn!(
                url = %new_url,
                error = %e,
                network = e.is_network(),
                "Rewritten request failed"
            );
        }
        Some(result)
    }
}

#[async_trait]
impl PreRequestFilter for RewriteInterceptor {
    async fn pre_request(
        &self,
        ctx: &mut ExecutionContext,
        pending: PreemptiveResponse,
        args: &RequestArgs,
        url: Option<&str>,
    ) -> PreemptiveResponse {
        self.intercept(ctx, pending, args, url).await
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
