//! `proxymark` runtime module.
//!
//! This module provides the dispatch machinery the benchmark measures:
//!
//! - [`selector`]: Interned operation names
//! - [`message`]: Type-erased call arguments and return values
//! - [`dispatch`]: Method tables and generic send
//! - [`service`]: The no-op capability under measurement
//! - [`proxy`]: The two forwarding strategies being compared
//!
//! # Control flow
//!
//! Setup builds one delegate and one wrapper per strategy, exactly once,
//! before measurement starts. The benchmark driver then calls the wrapped
//! operation on each variant repeatedly and independently; nothing on the
//! measured path allocates, locks, or mutates shared state.

pub mod dispatch;
pub mod message;
pub mod proxy;
pub mod selector;
pub mod service;

pub use dispatch::{Imp, Method, MethodTable};
pub use message::{CallArgs, CallValue};
pub use proxy::{CallSiteProxy, ReflectiveProxy};
pub use selector::Selector;
pub use service::{NOP_SELECTOR_NAME, NopService, NopServiceImpl};
