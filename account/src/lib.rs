//! # account
//!
//! Session, profile, and credential flows for the portal, written against the
//! external auth + database service.
//!
//! DESIGN
//! ======
//! Nothing in this crate touches the browser. Network access, session storage
//! and wall-clock time are injected through the traits in [`http`], so the
//! whole service client and every user-facing flow runs under plain
//! `cargo test`. The `client` crate supplies the browser implementations.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod password;
pub mod profile;
pub mod route;
pub mod session;
pub mod signup;
pub mod supabase;

#[cfg(test)]
mod testing;

pub use backend::AuthBackend;
pub use config::ServiceConfig;
pub use error::AuthError;
pub use profile::{PlanType, Profile, ProfileState};
pub use route::{GuardDecision, Route};
pub use session::{Session, SessionLookup, SignUpOutcome, User};
pub use supabase::SupabaseClient;
