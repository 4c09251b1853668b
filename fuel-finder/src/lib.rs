//! Fuel station finder.
//!
//! Finds fuel stations around a position, filtered by fuel type and search
//! radius, and publishes them ranked by price or distance.

pub mod config;
pub mod domain;
pub mod preferences;
pub mod search;
pub mod source;
pub mod web;
