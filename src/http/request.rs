// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request arguments carried alongside the URL through the interceptor chain
//!
//! The URL travels separately so interceptors can rewrite it while the
//! arguments are forwarded untouched.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;

/// Everything about an outbound request except its URL
#[derive(Debug, Clone)]
pub struct RequestArgs {
    /// Request method
    pub method: Method,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
    /// Request timeout, the client's default when unset
    pub timeout: Option<Duration>,
}

impl Default for RequestArgs {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestArgs {
    /// Create arguments for an arbitrary method
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Arguments for a GET request
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// Arguments for a POST request
    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
