//! # Storeplan Core
//!
//! Core types shared by every Storeplan crate.
//! Provides the error taxonomy, the layout change events published after
//! each mutation, and the shared-state aliases used to wrap a session.

pub mod core;
pub mod error;
pub mod types;

pub use self::core::event::{EventDispatcher, LayoutEvent, LayoutEventReceiver};

pub use error::{Error, LayoutError, Result, SnapshotError};

pub use types::{thread_safe, ThreadSafe};
