// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP transport layer
//!
//! A thin reqwest-backed client that serves as the default dispatch target
//! for rewritten requests.

mod client;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use request::RequestArgs;
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("source-switch/", env!("CARGO_PKG_VERSION"));
