//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page so each component depends on a small focused
//! model. Only `auth` is provided as context; page state is local.

pub mod auth;
pub mod dashboard;
pub mod setup;
