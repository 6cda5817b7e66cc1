//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session guard, service calls)
//! and delegates rendering details to `components`.

pub mod index;
pub mod login;
pub mod settings;
pub mod signin;
pub mod terminal;
