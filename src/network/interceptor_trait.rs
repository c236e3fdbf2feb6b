// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Pre-request filter trait and chain
//!
//! Every outbound request first runs through a [`PreRequestChain`]. A filter
//! may answer the request itself (returning `Some`), in which case the normal
//! transport path is bypassed; later filters see that answer as `pending`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::ExecutionContext;
use crate::error::Result;
use crate::http::{RequestArgs, Response};

/// A response produced ahead of the normal transport path
///
/// `None` means "no opinion, proceed as usual".
pub type PreemptiveResponse = Option<Result<Response>>;

/// The underlying HTTP transport
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use source_switch::http::{RequestArgs, Response};
/// use source_switch::network::Dispatch;
/// use source_switch::Result;
///
/// struct Offline;
///
/// #[async_trait]
/// impl Dispatch for Offline {
///     async fn dispatch(&self, url: &str, _args: &RequestArgs) -> Result<Response> {
///         Err(source_switch::Error::dispatch(url, "offline"))
///     }
/// }
/// ```
#[async_trait]
pub trait Dispatch: Send + Sync {
    /// Perform the request
    async fn dispatch(&self, url: &str, args: &RequestArgs) -> Result<Response>;
}

/// Hook run before a request reaches the transport
#[async_trait]
pub trait PreRequestFilter: Send + Sync {
    /// Inspect the request and optionally answer it
    ///
    /// Filters should return `pending` untouched when it is already `Some`.
    async fn pre_request(
        &self,
        ctx: &mut ExecutionContext,
        pending: PreemptiveResponse,
        args: &RequestArgs,
        url: Option<&str>,
    ) -> PreemptiveResponse;

    /// Priority - higher priority filters run first
    fn priority(&self) -> i32 {
        0
    }
}

/// Ordered set of pre-request filters
#[derive(Default)]
pub struct PreRequestChain {
    filters: Vec<Arc<dyn PreRequestFilter>>,
}

impl PreRequestChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter
    pub fn add<F: PreRequestFilter + 'static>(&mut self, filter: F) {
        self.add_shared(Arc::new(filter));
    }

    /// Add a filter that is also held elsewhere
    pub fn add_shared(&mut self, filter: Arc<dyn PreRequestFilter>) {
        self.filters.push(filter);
        // Stable: equal priorities keep insertion order
        self.filters.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter, threading the pending response through
    pub async fn process(
        &self,
        ctx: &mut ExecutionContext,
        args: &RequestArgs,
        url: Option<&str>,
    ) -> PreemptiveResponse {
        let mut pending = None;
        for filter in &self.filters {
            pending = filter.pre_request(ctx, pending, args, url).await;
        }
        pending
    }

    /// Run the chain, falling back to `transport` when no filter answered
    pub async fn send(
        &self,
        ctx: &mut ExecutionContext,
        transport: &dyn Dispatch,
        url: &str,
        args: &RequestArgs,
    ) -> Result<Response> {
        match self.process(ctx, args, Some(url)).await {
            Some(result) => result,
            None => transport.dispatch(url, args).await,
        }
    }
}
