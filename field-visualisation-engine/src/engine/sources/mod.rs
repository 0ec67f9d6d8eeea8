//! Field data sources: provider geometry, complex samples and the
//! channels derived from them.

/// Immutable source wrappers binding geometry to derived channels.
pub mod field_source;

/// Raw provider geometry and its validation.
pub mod geometry;

/// Complex sample buffers and channel derivation.
pub mod samples;

#[cfg(test)]
pub mod test_support;
