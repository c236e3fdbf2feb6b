// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Rewrite decision and URL rewriting

mod eligibility;
mod rewriter;

pub use self::eligibility::{decide, Decision, EligibilityState, RewriteEligibility};
pub use self::rewriter::{extract_host, prefix_domains, rewrite_url, SCHEME_SEPARATOR};
