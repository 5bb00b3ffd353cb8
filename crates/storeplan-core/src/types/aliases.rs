//! Type aliases for shared layout state.
//!
//! A layout session is owned by exactly one writer. Hosts that touch it from
//! several threads wrap it in [`ThreadSafe`], so that the "mutate +
//! recompute overlaps + recompute metrics" unit runs under one lock.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storeplan_core::types::*;
//!
//! let session: ThreadSafe<LayoutSession> = thread_safe(LayoutSession::default());
//! session.lock().add_zone(draft);
//! ```

use parking_lot::Mutex;
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Uses `parking_lot::Mutex` for better performance than `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// Creates a new `ThreadSafe<T>` from a value.
#[inline]
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}
