//! Generic dispatch over a capability's method table.
//!
//! This is the machinery behind the reflective proxy variant. A capability
//! is described by a [`MethodTable`] mapping interned selectors to
//! type-erased implementations. [`send`] performs the full generic call
//! sequence: runtime selector lookup, argument-arity validation, indirect
//! invocation, and return of the type-erased result.
//!
//! A `MethodTable` has no interior mutability. Once a table is shared with
//! a wrapper it cannot change, so a selector validated at wrapper
//! construction stays resolvable for the wrapper's entire lifetime.

use crate::error::{Error, Result};
use crate::runtime::message::{CallArgs, CallValue};
use crate::runtime::selector::Selector;
use crate::runtime::service::NopService;
use fxhash::FxHashMap;

/// A type-erased method implementation.
///
/// The receiver arrives as a trait object and the arguments as a generic
/// pack; the implementation is responsible for forwarding to the real
/// operation and producing the erased result.
pub type Imp = fn(&dyn NopService, &CallArgs) -> CallValue;

/// A registered method: its selector, implementation, and arity.
#[derive(Clone, Copy, Debug)]
pub struct Method {
    /// The interned selector this method answers to.
    pub selector: Selector,
    /// The type-erased implementation.
    pub imp: Imp,
    /// Number of arguments the implementation expects (excluding the
    /// receiver). Validated against the argument pack on every send.
    pub arity: usize,
}

/// Dispatch table for one capability.
#[derive(Debug, Default)]
pub struct MethodTable {
    methods: FxHashMap<Selector, Method>,
}

impl MethodTable {
    /// Creates an empty method table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a method in the table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MethodAlreadyRegistered`] if the selector is
    /// already registered. A capability table is built once at setup, so a
    /// duplicate registration is a setup bug, not a swizzle.
    pub fn register(&mut self, method: Method) -> Result<()> {
        if self.methods.contains_key(&method.selector) {
            return Err(Error::MethodAlreadyRegistered {
                selector: method.selector.name().to_string(),
            });
        }
        self.methods.insert(method.selector, method);
        Ok(())
    }

    /// Looks up the method registered for a selector.
    #[must_use]
    pub fn lookup(&self, selector: Selector) -> Option<Method> {
        self.methods.get(&selector).copied()
    }

    /// Returns whether the table registers the given selector.
    #[must_use]
    pub fn contains(&self, selector: Selector) -> bool {
        self.methods.contains_key(&selector)
    }

    /// Returns the number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

/// Sends a generic call to `receiver` through `table`.
///
/// Performs the full reflective dispatch sequence:
///
/// 1. Runtime lookup of `selector` in the table
/// 2. Arity validation of the marshaled argument pack
/// 3. Indirect invocation of the type-erased implementation
/// 4. Return of the type-erased result
///
/// # Errors
///
/// Returns [`Error::SelectorNotFound`] if the table does not register the
/// selector, or [`Error::ArgumentCountMismatch`] if the argument pack does
/// not match the method's arity.
pub fn send(
    receiver: &dyn NopService,
    table: &MethodTable,
    selector: Selector,
    args: &CallArgs,
) -> Result<CallValue> {
    let method = table.lookup(selector).ok_or_else(|| Error::SelectorNotFound {
        selector: selector.name().to_string(),
    })?;

    if args.count() != method.arity {
        return Err(Error::ArgumentCountMismatch {
            expected: method.arity,
            got: args.count(),
        });
    }

    Ok((method.imp)(receiver, args))
}
