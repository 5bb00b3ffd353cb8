//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type alias for the `Arc<Mutex<T>>` session wrapper.

pub mod aliases;

pub use aliases::*;
