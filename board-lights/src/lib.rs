//! Departure board lights.
//!
//! Shows the next trains between two stations on a short strip of coloured
//! lights. Each light covers a few minutes of the near future; its colour
//! is the best status of any train leaving in that window.

pub mod app;
pub mod config;
pub mod darwin;
pub mod domain;
pub mod indicator;
pub mod lights;
pub mod report;
