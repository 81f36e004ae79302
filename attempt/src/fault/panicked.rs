//! Captured unwinding payloads.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic;
use std::ptr;

/// A panic caught while running a computation.
///
/// The original payload is kept as-is so callers can downcast it to whatever
/// was passed to [`std::panic::panic_any`], or re-raise it with
/// [`Panicked::resume`].
pub struct Panicked {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panicked {
    /// Wraps a payload returned by [`std::panic::catch_unwind`].
    #[must_use]
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message for `&str` and `String` payloads.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.payload
            .downcast_ref::<&'static str>()
            .copied()
            .or_else(|| self.payload.downcast_ref::<String>().map(String::as_str))
    }

    /// Borrows the payload as `P` when that is its concrete type.
    #[must_use]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Returns the original payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panicked")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "computation panicked: {message}"),
            None => f.write_str("computation panicked with a non-string payload"),
        }
    }
}

impl Error for Panicked {}

/// String payloads compare by message. Any other payload is only equal to
/// itself, since `dyn Any` offers no value comparison.
impl PartialEq for Panicked {
    fn eq(&self, other: &Self) -> bool {
        match (self.message(), other.message()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            (None, None) => ptr::addr_eq(&raw const *self.payload, &raw const *other.payload),
            _ => false,
        }
    }
}
