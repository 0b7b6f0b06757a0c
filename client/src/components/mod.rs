//! Reusable view components.

pub mod bar_chart;
pub mod nav_bar;
