// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Hooks that can switch rewriting off
//!
//! Unlike the eligibility decision, skip hooks are consulted on every
//! intercepted request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

type SkipFn = Arc<dyn Fn(bool) -> bool + Send + Sync>;

/// Named skip hooks, folded in registration order starting from `false`
#[derive(Default)]
pub struct SkipHooks {
    hooks: RwLock<Vec<(String, SkipFn)>>,
}

impl SkipHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook; it receives the current verdict and returns the new one
    pub fn register<F>(&self, name: impl Into<String>, hook: F)
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        let hook: SkipFn = Arc::new(hook);
        let mut hooks = self.hooks.write();

        match hooks.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = hook,
            None => hooks.push((name, hook)),
        }
    }

    /// Remove a hook, returning whether it was registered
    pub fn remove(&self, name: &str) -> bool {
        let mut hooks = self.hooks.write();
        let before = hooks.len();
        hooks.retain(|(n, _)| n != name);
        hooks.len() != before
    }

    pub fn len(&self) -> usize {
        self.hooks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.read().is_empty()
    }

    /// Whether rewriting should be skipped for the current request
    pub fn should_skip(&self) -> bool {
        let hooks: Vec<SkipFn> = self.hooks.read().iter().map(|(_, h)| h.clone()).collect();
        hooks.iter().fold(false, |skip, hook| hook(skip))
    }
}

impl std::fmt::Debug for SkipHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.hooks.read().iter().map(|(n, _)| n.clone()).collect();
        f.debug_struct("SkipHooks").field("hooks", &names).finish()
    }
}

/// Shared on/off switch usable as a skip hook
///
/// Typical use is suppressing rewrites while probing a source directly:
///
/// ```rust
/// use source_switch::network::{SkipFlag, SkipHooks};
///
/// let hooks = SkipHooks::new();
/// let flag = SkipFlag::new();
/// hooks.register("status-check", flag.hook());
///
/// {
///     let _guard = flag.engage();
///     assert!(hooks.should_skip());
/// }
/// assert!(!hooks.should_skip());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkipFlag {
    flag: Arc<AtomicBool>,
}

impl SkipFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, skip: bool) {
        self.flag.store(skip, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Set the flag until the returned guard is dropped
    pub fn engage(&self) -> SkipGuard {
        let previous = self.flag.swap(true, Ordering::SeqCst);
        SkipGuard {
            flag: self.flag.clone(),
            previous,
        }
    }

    /// Hook that forces a skip while the flag is set
    pub fn hook(&self) -> impl Fn(bool) -> bool + Send + Sync + 'static {
        let flag = self.flag.clone();
        move |skip| skip || flag.load(Ordering::SeqCst)
    }
}

/// Restores the previous flag value on drop
#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct SkipGuard {
    flag: Arc<AtomicBool>,
    previous: bool,
}

impl Drop for SkipGuard {
    fn drop(&mut self) {
        self.flag.store(self.previous, Ordering::SeqCst);
    }
}
