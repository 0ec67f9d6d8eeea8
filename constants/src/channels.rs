//! Channel naming contract shared with external field-source providers.
//!
//! Providers expose named per-point and per-cell arrays derived from
//! complex samples; these are the array names the engine binds against.

pub const CHANNEL_REAL: &str = "real";
pub const CHANNEL_IMAG: &str = "imag";
pub const CHANNEL_ABS2: &str = "abs^2";

/// Component count of scalar-valued field samples.
pub const SCALAR_COMPONENT_COUNT: usize = 1;

/// Component count of vector-valued field samples.
pub const VECTOR_COMPONENT_COUNT: usize = 3;

/// Component counts a visualisation session accepts.
pub const SUPPORTED_COMPONENT_COUNTS: &[usize] =
    &[SCALAR_COMPONENT_COUNT, VECTOR_COMPONENT_COUNT];

/// Only triangular surface meshes are accepted from providers.
pub const TRIANGLE_VERTEX_COUNT: usize = 3;
