//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own session bookkeeping and backend orchestration so route
//! handlers can stay focused on protocol translation and auth plumbing.

pub mod auth;
pub mod metrics;
pub mod role_arn;
pub mod session;
pub mod user_record;
