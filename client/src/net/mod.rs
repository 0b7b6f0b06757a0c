//! REST helpers for the OptiCloud server API.

pub mod api;
