//! Core visualisation engine: sources, ranges, view state and the
//! controller deriving render descriptors from them.

/// Pure descriptor derivation from session state.
pub mod binding;

/// The session state machine and its mutators.
pub mod controller;

/// Construction-time error types.
pub mod error;

/// Data ranges and their aggregation across sources.
pub mod range;

/// Handle onto the external rendering engine.
pub mod scene;

/// Field data sources: geometry, samples and derived channels.
pub mod sources;

/// Render targets and descriptors.
pub mod target;

/// View configuration and channel enums.
pub mod view;
