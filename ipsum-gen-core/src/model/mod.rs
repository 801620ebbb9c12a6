//! Top-level module for the placeholder text engine.
//!
//! This module provides:
//! - A seeded linear-congruential generator and shuffle (`rng`)
//! - The static theme registry (`theme`)
//! - Generation parameters (`options`)
//! - The block composer (`generator`)

/// Seeded pseudo-random generator and deterministic shuffle.
///
/// Every generation call builds its own instances, so no state is
/// shared between calls.
pub mod rng;

/// Theme records and the process-wide read-only registry.
pub mod theme;

/// Generation options and parameters.
pub mod options;

/// Block composition producing markdown text or discrete blocks.
pub mod generator;

/// Built-in theme content.
/// This module is not exposed publicly.
mod data;
