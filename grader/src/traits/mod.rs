//!
//! Traits Module
//!
//! This module contains the core traits used for extensibility in the grader.
//!
//! - [`renderer`]: Defines the strategy trait for turning a render payload into a
//!   human-readable report.
//!
//! Implement these traits to extend the grader with new output formats.

pub mod renderer;
