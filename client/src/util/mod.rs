//! Browser-facing helpers shared by pages and components.
//!
//! - `auth`: page session guard and sign-out navigation
//! - `config`: service settings read back from the shell's `<meta>` tags
//! - `storage`: `localStorage` JSON and raw string access
//! - `task`: abortable tasks scoped to a component
//! - `theme`: Light / Dark / Auto preference and the `.dark-mode` class
//!
//! Every helper compiles outside the browser as a no-op.

pub mod auth;
pub mod config;
pub mod storage;
pub mod task;
pub mod theme;
