//! Type-erased call arguments and return values for generic dispatch.
//!
//! The reflective proxy variant marshals every call into a generic form
//! before invoking the delegate: arguments become a [`CallArgs`] pack and
//! the result comes back as a [`CallValue`]. Arguments are type-erased as
//! `usize` and validated against the method's arity at dispatch time.
//!
//! The fixed variants are stack-allocated; `Many` takes a static slice so
//! oversized packs never allocate on the measured path.
//!
//! # Example
//!
//! ```rust
//! use proxymark::runtime::CallArgs;
//!
//! let args = CallArgs::None;
//! assert_eq!(args.count(), 0);
//!
//! let args = CallArgs::one(42);
//! assert_eq!(args.as_slice(), &[42]);
//! ```

/// Arguments for a generic, type-erased call.
#[derive(Clone, Copy, Debug)]
pub enum CallArgs {
    /// No arguments (besides the receiver)
    None,

    /// One argument
    One(usize),

    /// Two arguments
    Two([usize; 2]),

    /// Variable number of arguments (3+)
    Many(&'static [usize]),
}

impl CallArgs {
    /// Creates a `CallArgs::None` variant.
    #[must_use]
    pub const fn none() -> Self {
        CallArgs::None
    }

    /// Creates a `CallArgs::One` variant.
    #[must_use]
    pub const fn one(arg: usize) -> Self {
        CallArgs::One(arg)
    }

    /// Creates a `CallArgs::Two` variant.
    #[must_use]
    pub const fn two(arg1: usize, arg2: usize) -> Self {
        CallArgs::Two([arg1, arg2])
    }

    /// Creates a `CallArgs::Many` variant from a static slice.
    #[must_use]
    pub const fn many(args: &'static [usize]) -> Self {
        CallArgs::Many(args)
    }

    /// Returns the number of arguments in this pack.
    #[must_use]
    pub const fn count(&self) -> usize {
        match self {
            CallArgs::None => 0,
            CallArgs::One(_) => 1,
            CallArgs::Two(_) => 2,
            CallArgs::Many(args) => args.len(),
        }
    }

    /// Returns the arguments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        match self {
            CallArgs::None => &[],
            CallArgs::One(arg) => std::slice::from_ref(arg),
            CallArgs::Two(args) => args,
            CallArgs::Many(args) => args,
        }
    }
}

/// Result of a generic, type-erased call.
///
/// This is the unmarshaling half of the generic call path: a no-op
/// operation comes back as `Void`, a value-returning operation as a
/// type-erased `Word`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallValue {
    /// The operation returned nothing.
    Void,

    /// The operation returned a type-erased word.
    Word(usize),
}

impl CallValue {
    /// Returns the type-erased word, or `None` for `Void`.
    #[must_use]
    pub const fn as_word(&self) -> Option<usize> {
        match self {
            CallValue::Void => None,
            CallValue::Word(word) => Some(*word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_args_counts() {
        assert_eq!(CallArgs::none().count(), 0);
        assert_eq!(CallArgs::one(42).count(), 1);
        assert_eq!(CallArgs::two(10, 20).count(), 2);

        static MANY: [usize; 4] = [1, 2, 3, 4];
        assert_eq!(CallArgs::many(&MANY).count(), 4);
    }

    #[test]
    fn test_call_args_as_slice() {
        assert_eq!(CallArgs::none().as_slice(), &[] as &[usize]);
        assert_eq!(CallArgs::one(42).as_slice(), &[42]);
        assert_eq!(CallArgs::two(10, 20).as_slice(), &[10, 20]);

        static MANY: [usize; 3] = [7, 8, 9];
        assert_eq!(CallArgs::many(&MANY).as_slice(), &[7, 8, 9]);
    }

    #[test]
    fn test_call_value_as_word() {
        assert_eq!(CallValue::Void.as_word(), None);
        assert_eq!(CallValue::Word(99).as_word(), Some(99));
    }
}
