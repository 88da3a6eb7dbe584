//! Reusable view components.

pub mod bubble_chart;
