// Common test utilities for integration tests
//
// This module provides shared fixtures for the proxy forwarding tests.
// The capability's operation is a no-op with no observable effect, so the
// tests forward to a counting implementation instead: every call that
// actually reaches the delegate is visible on an atomic counter.

#![allow(dead_code)]

use proxymark::runtime::service::nop_method_table;
use proxymark::runtime::{MethodTable, NopService};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// `NopService` implementation whose calls are observable.
#[derive(Debug, Default)]
pub struct CountingService {
    calls: AtomicUsize,
}

impl CountingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many calls have reached this delegate.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl NopService for CountingService {
    fn m(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Creates a counting delegate shared via `Arc`.
pub fn counting_delegate() -> Arc<CountingService> {
    Arc::new(CountingService::new())
}

/// Builds the capability's well-formed method table.
pub fn capability_table() -> Arc<MethodTable> {
    Arc::new(nop_method_table().expect("capability table"))
}
