//! Layout change notification.

pub mod event;
