//! The measured capability: a no-op service.
//!
//! The benchmark needs a fixed, minimal unit of dispatch cost, so the
//! capability exposes exactly one operation, [`NopService::m`], which takes
//! no arguments, returns nothing, and has no observable effect. Everything
//! the proxies add on top of this operation is overhead, which is the
//! quantity being measured.

use crate::error::Result;
use crate::runtime::dispatch::{Method, MethodTable};
use crate::runtime::message::{CallArgs, CallValue};
use crate::runtime::selector::Selector;
use std::str::FromStr;

/// Name of the capability's single operation.
pub const NOP_SELECTOR_NAME: &str = "m";

/// The no-op capability.
///
/// `Send + Sync` so a single delegate can be shared across wrappers and
/// across the benchmark driver's threads.
pub trait NopService: Send + Sync {
    /// The no-op operation: no arguments, no return value, no observable
    /// side effect, no failure condition.
    fn m(&self);
}

/// Stateless concrete implementation of [`NopService`].
///
/// Created once at setup and never mutated; every wrapper forwards to an
/// instance of this type (or, in tests, to an observable counting variant).
#[derive(Debug, Default, Clone, Copy)]
pub struct NopServiceImpl;

impl NopService for NopServiceImpl {
    fn m(&self) {}
}

/// Returns the interned selector for the capability's operation.
///
/// # Errors
///
/// Interning a non-empty constant name cannot fail; the `Result` is kept so
/// setup code propagates like every other construction step.
pub fn nop_selector() -> Result<Selector> {
    Selector::from_str(NOP_SELECTOR_NAME)
}

/// Type-erased implementation of the `m` operation.
fn m_imp(receiver: &dyn NopService, _args: &CallArgs) -> CallValue {
    receiver.m();
    CallValue::Void
}

/// Builds the capability's method table, registering the `m` operation.
///
/// This is the well-formed table the proxy factories expect; a table built
/// any other way (empty, or registering a different selector) fails proxy
/// construction, not invocation.
///
/// # Errors
///
/// Propagates selector interning or registration failures, neither of
/// which can occur for this fixed, single-method capability.
pub fn nop_method_table() -> Result<MethodTable> {
    let mut table = MethodTable::new();
    table.register(Method {
        selector: nop_selector()?,
        imp: m_imp,
        arity: 0,
    })?;
    Ok(table)
}
