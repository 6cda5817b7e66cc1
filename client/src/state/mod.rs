//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the one piece of state shared across pages; `settings` holds
//! the closed set of settings sections. Everything else is page-local signals.

pub mod session;
pub mod settings;
