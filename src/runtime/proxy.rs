//! Proxy wrappers for the no-op capability.
//!
//! This module provides the two forwarding strategies the benchmark
//! compares. Both wrap exactly one delegate, chosen at construction and
//! fixed for the wrapper's lifetime, and both are behaviorally identical to
//! calling the delegate directly; they differ only in how the call site is
//! resolved:
//!
//! - [`ReflectiveProxy`] resolves the operation on **every call**: selector
//!   lookup in the capability's method table, argument marshaling into a
//!   generic pack, indirect invocation, result unmarshaling.
//! - [`CallSiteProxy`] resolves the operation **once at construction** and
//!   stores the bound implementation pointer; each call goes straight
//!   through the precompiled site.
//!
//! # Design
//!
//! Both factories validate at construction that the supplied method table
//! registers the capability's operation. A malformed table fails there,
//! never as a silent no-op wrapper. After construction nothing can fail:
//! the table has no interior mutability, the delegate binding never
//! changes, and the operation itself is a no-op.
//!
//! # Example
//!
//! ```rust
//! use proxymark::runtime::{NopService, NopServiceImpl, ReflectiveProxy};
//! use proxymark::runtime::service::nop_method_table;
//! use std::sync::Arc;
//!
//! let delegate: Arc<dyn NopService> = Arc::new(NopServiceImpl);
//! let table = Arc::new(nop_method_table().unwrap());
//!
//! let proxy = ReflectiveProxy::new(delegate, table).unwrap();
//! proxy.m();
//! ```

use crate::debug;
use crate::error::{Error, Result};
use crate::runtime::dispatch::{self, Imp, MethodTable};
use crate::runtime::message::CallArgs;
use crate::runtime::selector::Selector;
use crate::runtime::service::{self, NopService};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Global counter naming generated wrappers in diagnostics.
static WRAPPER_ID: AtomicUsize = AtomicUsize::new(0);

/// Validates that `table` registers the capability's operation with the
/// right arity and returns its selector and method.
///
/// Both factories resolve through here, so a malformed table fails either
/// one identically, at construction time.
fn resolve_operation(
    table: &MethodTable,
) -> Result<(Selector, dispatch::Method)> {
    let selector = service::nop_selector()?;
    let method =
        table
            .lookup(selector)
            .ok_or_else(|| Error::SelectorNotFound {
                selector: selector.name().to_string(),
            })?;
    if method.arity != 0 {
        return Err(Error::ArgumentCountMismatch {
            expected: method.arity,
            got: 0,
        });
    }
    Ok((selector, method))
}

// ============================================================================
// Reflective-dispatch variant
// ============================================================================

/// Proxy that forwards every call through generic dispatch.
///
/// Each call performs the full reflective sequence against the capability's
/// method table: runtime selector lookup, marshaling into [`CallArgs`],
/// indirect invocation, unmarshaling. The overhead of that sequence,
/// relative to a direct call, is what this variant measures.
pub struct ReflectiveProxy {
    /// The delegate every call is forwarded to. Fixed for the wrapper's
    /// lifetime.
    delegate: Arc<dyn NopService>,

    /// The capability's dispatch table, consulted on every call.
    table: Arc<MethodTable>,

    /// Interned selector for the forwarded operation.
    selector: Selector,
}

impl ReflectiveProxy {
    /// Creates a reflective proxy forwarding to `delegate` through `table`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectorNotFound`] if the table does not register
    /// the capability's operation, or [`Error::ArgumentCountMismatch`] if
    /// the registered method's arity does not match the operation's.
    pub fn new(
        delegate: Arc<dyn NopService>,
        table: Arc<MethodTable>,
    ) -> Result<Self> {
        let (selector, _method) = resolve_operation(&table)?;

        let id = WRAPPER_ID.fetch_add(1, Ordering::SeqCst);
        debug!("generated ReflectiveProxy_{id} forwarding '{selector}'");

        Ok(Self {
            delegate,
            table,
            selector,
        })
    }
}

impl NopService for ReflectiveProxy {
    /// Forwards the operation via per-call generic dispatch.
    ///
    /// # Panics
    ///
    /// Panics if the send fails, which is unreachable for a constructed
    /// wrapper: construction validated the selector and its arity, and the
    /// table is immutable. Were it ever to happen, terminating the run is
    /// the correct outcome for a measurement tool.
    fn m(&self) {
        dispatch::send(
            self.delegate.as_ref(),
            &self.table,
            self.selector,
            &CallArgs::None,
        )
        .expect("generic dispatch failed for an operation validated at construction");
    }
}

// ============================================================================
// Precompiled call-site variant
// ============================================================================

/// Proxy that forwards through a call site resolved once at construction.
///
/// The implementation pointer is looked up a single time when the wrapper
/// is generated; every call afterwards is one indirect call through the
/// stored pointer, with no lookup and no marshaling validation. This is the
/// generated-forwarding counterpart to [`ReflectiveProxy`].
pub struct CallSiteProxy {
    /// The delegate every call is forwarded to. Fixed for the wrapper's
    /// lifetime.
    delegate: Arc<dyn NopService>,

    /// Implementation pointer bound at construction.
    imp: Imp,
}

impl CallSiteProxy {
    /// Creates a call-site proxy forwarding to `delegate`, resolving the
    /// operation in `table` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelectorNotFound`] if the table does not register
    /// the capability's operation, or [`Error::ArgumentCountMismatch`] if
    /// the registered method's arity does not match the operation's. Both
    /// checks happen here, at generation time, never per call.
    pub fn new(
        delegate: Arc<dyn NopService>,
        table: &MethodTable,
    ) -> Result<Self> {
        let (selector, method) = resolve_operation(table)?;

        let id = WRAPPER_ID.fetch_add(1, Ordering::SeqCst);
        debug!("generated CallSiteProxy_{id} bound to '{selector}'");

        Ok(Self {
            delegate,
            imp: method.imp,
        })
    }
}

impl NopService for CallSiteProxy {
    /// Forwards the operation through the precompiled call site.
    fn m(&self) {
        (self.imp)(self.delegate.as_ref(), &CallArgs::None);
    }
}

// ============================================================================
// Tests
// ============================================================================
