// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # source-switch - Outbound Request Source Switching
//!
//! Intercepts outbound HTTP requests addressed to a "core" source and, when it
//! is safe to do so, re-dispatches them to an "alternate" source serving the
//! same API from different hosts.
//!
//! ## Pipeline
//!
//! - Skip hooks: consulted on every request, can switch rewriting off
//! - Eligibility: decided once per execution context; requires distinct
//!   sources and full domain coverage (never partial rewrites)
//! - Domain resolution: search/replace maps pass through filter registries
//!   and are validated; anything malformed disables rewriting
//! - Rewriting: host-matched `://host` substitution, deterministic and
//!   idempotent
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use source_switch::{
//!     ExecutionContext, HttpClient, PreRequestChain, RequestArgs, RewriteInterceptor,
//!     StaticSource,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(HttpClient::new()?);
//!     let core = StaticSource::new("core").domain("api", "api.example.com");
//!     let alt = StaticSource::new("mirror").domain("api", "api.mirror.example.com");
//!
//!     let mut chain = PreRequestChain::new();
//!     chain.add(RewriteInterceptor::new(core.shared(), alt.shared(), client.clone()));
//!
//!     let mut ctx = ExecutionContext::new();
//!     let response = chain
//!         .send(&mut ctx, client.as_ref(), "https://api.example.com/v1/ping", &RequestArgs::get())
//!         .await?;
//!     println!("served by {}", response.url);
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod domains;
pub mod error;
pub mod http;
pub mod network;
pub mod rewrite;
pub mod source;

// Re-exports for convenience

// Context
pub use context::ExecutionContext;

// Domains
pub use domains::{DomainFilter, DomainMap, DomainMapResolver, FilterRegistry, RawDomainMap};

// Errors
pub use error::{Error, ErrorContext, Result};

// HTTP
pub use http::{HttpClient, HttpClientConfig, RequestArgs, Response};

// Network
pub use network::{
    Dispatch, PreRequestChain, PreRequestFilter, PreemptiveResponse, RewriteInterceptor,
    RewriterConfig, SkipFlag, SkipHooks,
};

// Rewriting
pub use rewrite::{decide, rewrite_url, Decision, EligibilityState, RewriteEligibility};

// Sources
pub use source::{SelectorConfig, SourceConfig, SourceProvider, StaticSource};

/// source-switch version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
