//! Route-level page components.

pub mod aws_setup;
pub mod dashboard;
pub mod landing;
