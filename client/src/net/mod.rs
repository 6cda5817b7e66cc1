//! Browser implementations of the service client's seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests go out through `fetch` (via `gloo-net`) and the session lives in
//! `localStorage`. During server rendering none of this runs; the transport
//! answers `AuthError::Unavailable` and storage reads as empty.

pub mod browser;
