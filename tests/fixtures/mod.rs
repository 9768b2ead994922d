//! Test fixtures for the route planner.
//!
//! Provides realistic test data including:
//! - Real Buenos Aires delivery locations (from OpenStreetMap)
//! - A builder for test stops

pub mod buenos_aires_locations;

pub use buenos_aires_locations::*;
