// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outbound request interception
//!
//! Requests pass through a chain of pre-request filters before reaching the
//! transport; the rewrite interceptor is one such filter.

mod config;
mod interceptor;
mod interceptor_trait;
mod skip;

pub use config::{RewriterConfig, DEFAULT_PRIORITY};
pub use interceptor::RewriteInterceptor;
pub use interceptor_trait::{Dispatch, PreRequestChain, PreRequestFilter, PreemptiveResponse};
pub use skip::{SkipFlag, SkipGuard, SkipHooks};
