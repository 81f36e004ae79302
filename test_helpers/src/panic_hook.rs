//! Helpers for silencing the process panic hook in tests.
//!
//! Tests that feed deliberately panicking computations to an attempt would
//! otherwise spray the default hook's report across the test output. The
//! hook is process-global state, so every swap is serialised by a global
//! mutex held for the lifetime of the returned guard.
//!
//! # Examples
//!
//! ```
//! use test_helpers::panic_hook;
//!
//! let _quiet = panic_hook::silence();
//! let result = std::panic::catch_unwind(|| panic!("not printed"));
//! assert!(result.is_err());
//! ```

use parking_lot::{Mutex, MutexGuard};
use std::panic::{self, PanicHookInfo};
use std::sync::LazyLock;

type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

static HOOK_MUTEX: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// RAII guard that restores the previous panic hook on drop.
#[must_use = "dropping restores the previous panic hook"]
pub struct QuietPanics {
    previous: Option<Hook>,
    _lock: MutexGuard<'static, ()>,
}

impl Drop for QuietPanics {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
        }
    }
}

/// Replaces the panic hook with a no-op until the guard is dropped.
pub fn silence() -> QuietPanics {
    let lock = HOOK_MUTEX.lock();
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    QuietPanics {
        previous: Some(previous),
        _lock: lock,
    }
}
