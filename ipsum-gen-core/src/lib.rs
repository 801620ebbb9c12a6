//! Deterministic, theme-based placeholder text generation library.
//!
//! This crate provides a seeded lorem-ipsum generation system including:
//! - A linear-congruential RNG and a seed-stable shuffle
//! - A static registry of theme vocabularies
//! - Block composition with optional markdown decoration
//! - Output adapters (markdown, plain text, HTML, JSON)
//! - Boundary helpers for the HTTP API and shareable preferences
//!
//! Given identical parameters, every generation call produces
//! byte-identical output.

/// Core generation engine (RNG, themes, options, composer).
pub mod model;

/// Output format adapters.
pub mod format;

/// HTTP query validation and response bodies.
pub mod api;

/// User preferences, share URLs and the preference store.
pub mod preferences;

/// Site configuration and generation defaults.
pub mod config;

/// Error types for request validation and preference storage.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
