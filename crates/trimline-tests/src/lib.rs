//! Integration test crate for Trimline.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every trimline library crate to verify they work together.

#[cfg(test)]
mod config;

#[cfg(test)]
mod trim;

#[cfg(test)]
mod zoom;
