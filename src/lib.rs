//! `proxymark`: call-dispatch overhead micro-benchmarks.
//!
//! `proxymark` measures what a proxy wrapper costs per call. It wraps a
//! no-op service in two independent forwarding strategies and compares
//! each against calling the service directly:
//!
//! - **Reflective dispatch**: every call performs a runtime selector
//!   lookup in a method table, marshals its arguments into a generic pack,
//!   invokes the type-erased implementation indirectly, and unmarshals the
//!   result.
//! - **Precompiled call site**: the implementation pointer is resolved
//!   once when the wrapper is generated; every call is a single indirect
//!   call through the stored pointer.
//!
//! Both wrappers are behaviorally identical to the unwrapped service; the
//! measured difference is pure dispatch overhead. Timing, iteration
//! control, and statistical reporting belong to the benchmark driver
//! (Criterion), not to this crate.
//!
//! # Example
//!
//! ```rust
//! use proxymark::runtime::service::nop_method_table;
//! use proxymark::runtime::{CallSiteProxy, NopService, NopServiceImpl, ReflectiveProxy};
//! use std::sync::Arc;
//!
//! let delegate: Arc<dyn NopService> = Arc::new(NopServiceImpl);
//! let table = Arc::new(nop_method_table().unwrap());
//!
//! let reflective = ReflectiveProxy::new(Arc::clone(&delegate), Arc::clone(&table)).unwrap();
//! let call_site = CallSiteProxy::new(delegate, &table).unwrap();
//!
//! reflective.m();
//! call_site.m();
//! ```

pub mod diag;
pub mod error;
pub mod runtime;

// Re-export commonly used types
pub use error::{Error, Result};
pub use runtime::{
    CallArgs, CallSiteProxy, CallValue, MethodTable, NopService,
    NopServiceImpl, ReflectiveProxy, Selector,
};
