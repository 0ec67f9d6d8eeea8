//! Shared constants for the field visualisation workspace.
//!
//! Channel naming and component counts are part of the contract with
//! external field-source providers; view defaults seed every new
//! visualisation session.

/// Channel names and component counts shared with field-source providers.
pub mod channels;

/// Initial view configuration defaults for new sessions.
pub mod view;
