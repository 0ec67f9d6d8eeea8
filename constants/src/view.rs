//! Initial view state for a freshly constructed visualisation session.

/// Glyph scale applied to vector arrows before any user adjustment.
pub const DEFAULT_VECTOR_SCALE: f32 = 0.1;

/// Scalar surfaces start visible.
pub const SURFACE_VISIBLE_DEFAULT: bool = true;

/// Vector glyphs start hidden until explicitly enabled.
pub const VECTORS_VISIBLE_DEFAULT: bool = false;

/// Wireframe grids stay hidden until an outline source is attached.
pub const GRID_VISIBLE_DEFAULT: bool = false;
