//! Timeline chart derived from the task table.
//!
//! [`project`] is a pure transform from table rows to a [`TimelineChart`]:
//! one bar per row, grouped and coloured by area, with topics ordered by
//! total scheduled duration. [`svg`] draws the projected chart as inline SVG
//! for the dashboard page.

mod projector;
pub mod svg;

pub use projector::{ChartSeries, DateRange, TimelineBar, TimelineChart, project};

#[cfg(test)]
mod tests;
