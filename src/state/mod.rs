//! Shared client-side state.
//!
//! The session container is the only process-wide mutable state in the
//! client; it is constructed once in [`crate::app::App`] and handed to
//! consumers through Leptos context.

pub mod session;
