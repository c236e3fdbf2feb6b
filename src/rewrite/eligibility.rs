// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Whether rewriting should be attempted at all

use std::sync::Arc;

use crate::domains::{chained_hosts, keys_covered, DomainMap};
use crate::source::SourceProvider;

/// Outcome of the eligibility check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    /// Rewriting must not be attempted
    pub skip: bool,
    /// Core hosts to look for
    pub search: DomainMap,
    /// Alternate hosts, with exactly the keys of `search`
    pub replace: DomainMap,
}

impl Decision {
    /// A decision that disables rewriting
    pub fn skip() -> Self {
        Self {
            skip: true,
            ..Default::default()
        }
    }
}

static SKIP: Decision = Decision {
    skip: true,
    search: DomainMap::new(),
    replace: DomainMap::new(),
};

/// Memoized eligibility for one execution context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EligibilityState {
    #[default]
    Uninitialized,
    Decided(Decision),
}

impl EligibilityState {
    pub fn is_decided(&self) -> bool {
        matches!(self, EligibilityState::Decided(_))
    }

    /// The decision, if one was made
    pub fn decision(&self) -> Option<&Decision> {
        match self {
            EligibilityState::Decided(decision) => Some(decision),
            EligibilityState::Uninitialized => None,
        }
    }
}

/// Decide whether `core` domains may be rewritten to `alt` domains
///
/// Rules, first match wins: equal identities skip; an empty map on either
/// side skips; a core key missing from `alt` skips (rewriting is
/// all-or-nothing); an alternate host that is the core host of another type
/// skips, since a rewritten URL would then match again. Otherwise the search
/// map is `core` and the replace map is `alt` restricted to the core keys.
pub fn decide(core_key: &str, alt_key: &str, core: &DomainMap, alt: &DomainMap) -> Decision {
    if core_key == alt_key {
        tracing::debug!(source = core_key, "Core and alternate sources are the same");
        return Decision::skip();
    }

    if core.is_empty() || alt.is_empty() {
        tracing::debug!(
            core_domains = core.len(),
            alt_domains = alt.len(),
            "No domains to rewrite"
        );
        return Decision::skip();
    }

    if !keys_covered(core, alt) {
        let missing: Vec<&str> = core
            .keys()
            .filter(|k| !alt.contains_key(*k))
            .map(String::as_str)
            .collect();
        tracing::debug!(?missing, alt_source = alt_key, "Alternate source does not cover all core domains");
        return Decision::skip();
    }

    let replace: DomainMap = core
        .keys()
        .filter_map(|k| alt.get(k).map(|host| (k.clone(), host.clone())))
        .collect();

    let chained = chained_hosts(core, &replace);
    if !chained.is_empty() {
        tracing::debug!(?chained, alt_source = alt_key, "Alternate hosts overlap other core domains");
        return Decision::skip();
    }

    Decision {
        skip: false,
        search: core.clone(),
        replace,
    }
}

/// Evaluates [`decide`] against a pair of source providers
#[derive(Clone)]
pub struct RewriteEligibility {
    core: Arc<dyn SourceProvider>,
    alt: Arc<dyn SourceProvider>,
}

impl RewriteEligibility {
    pub fn new(core: Arc<dyn SourceProvider>, alt: Arc<dyn SourceProvider>) -> Self {
        Self { core, alt }
    }

    /// Decide now, without memoization
    pub fn decide(&self) -> Decision {
        decide(
            self.core.key(),
            self.alt.key(),
            &self.core.domains(),
            &self.alt.domains(),
        )
    }

    /// Decide once per state; later calls reuse the decision unless `force` is set
    pub fn evaluate<'a>(&self, state: &'a mut EligibilityState, force: bool) -> &'a Decision {
        if force || !state.is_decided() {
            let decision = self.decide();
            tracing::debug!(
                core_source = self.core.key(),
                alt_source = self.alt.key(),
                skip = decision.skip,
                "Rewrite eligibility decided"
            );
            *state = EligibilityState::Decided(decision);
        }

        state.decision().unwrap_or(&SKIP)
    }

    pub fn core(&self) -> &Arc<dyn SourceProvider> {
        &self.core
    }

    pub fn alternate(&self) -> &Arc<dyn SourceProvider> {
        &self.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::domain_map;
    use crate::source::StaticSource;

    fn core_source() -> DomainMap {
        domain_map([("api", "api.example.com"), ("downloads", "downloads.example.com")])
    }

    fn alt_source() -> DomainMap {
        domain_map([
            ("api", "api.alt.example.com"),
            ("downloads", "downloads.alt.example.com"),
            ("extra", "extra.alt.example.com"),
        ])
    }

    #[test]
    fn test_same_identity_skips() {
        assert!(decide("core", "core", &core_source(), &alt_source()).skip);
        assert!(decide("core", "core", &DomainMap::new(), &DomainMap::new()).skip);
    }

    #[test]
    fn test_empty_maps_skip() {
        assert!(decide("core", "alt", &DomainMap::new(), &alt_source()).skip);
        assert!(decide("core", "alt", &core_source(), &DomainMap::new()).skip);
    }

    #[test]
    fn test_partial_coverage_skips() {
        let partial = domain_map([("api", "api.alt.example.com")]);
        let decision = decide("core", "alt", &core_source(), &partial);
        assert!(decision.skip);
        assert!(decision.search.is_empty());
        assert!(decision.replace.is_empty());
    }

    #[test]
    fn test_replace_restricted_to_core_keys() {
        let decision = decide("core", "alt", &core_source(), &alt_source());
        assert!(!decision.skip);
        assert_eq!(decision.search, core_source());
        assert_eq!(
            decision.replace,
            domain_map([
                ("api", "api.alt.example.com"),
                ("downloads", "downloads.alt.example.com"),
            ])
        );
    }

    #[test]
    fn test_evaluate_is_memoized() {
        let eligibility = RewriteEligibility::new(
            StaticSource::new("core").with_domains(core_source()).shared(),
            StaticSource::new("alt").with_domains(alt_source()).shared(),
        );
        let mut state = EligibilityState::default();
        assert!(!state.is_decided());

        assert!(!eligibility.evaluate(&mut state, false).skip);

        // A stale decision survives a non-forced evaluation.
        state = EligibilityState::Decided(Decision::skip());
        assert!(eligibility.evaluate(&mut state, false).skip);

        assert!(!eligibility.evaluate(&mut state, true).skip);
        assert_eq!(state.decision().unwrap().search, core_source());
    }

    #[test]
    fn test_chained_alternate_refused() {
        // The alternate host for "a" is the core host for "b".
        let core = domain_map([("a", "one.example.com"), ("b", "two.example.com")]);
        let alt = domain_map([("a", "two.example.com"), ("b", "three.example.com")]);
        let decision = decide("core", "alt", &core, &alt);
        assert!(decision.skip);
        assert!(decision.replace.is_empty());

        // Only keys shared with core count.
        let alt = domain_map([
            ("a", "uno.example.com"),
            ("b", "dos.example.com"),
            ("c", "one.example.com"),
        ]);
        assert!(!decide("core", "alt", &core, &alt).skip);
    }
}
