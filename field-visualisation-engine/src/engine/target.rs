//! Render targets and the descriptors the external renderer consumes.
//!
//! One target exists per attached source (plus one per outline). The
//! list is append-only and owned by the controller; descriptors are
//! rewritten in place after every mutation and serialise directly for
//! web front-end consumption.

use serde::{Deserialize, Serialize};

use crate::engine::range::DataRange;
use crate::engine::view::{DataMode, FieldChannel};

/// Stable handle of one render target, also used by the scene handle to
/// address attached geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(usize);

impl TargetId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// What a target draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRole {
    /// Colour-mapped surface of a data source.
    Surface,
    /// Glyph arrows following a vector channel.
    VectorGlyphs,
    /// Wireframe outline without data binding.
    Outline,
}

/// Renderer-agnostic parameter bundle derived from the current view
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    /// Channel the target colours by; None on outlines.
    pub active_channel: Option<FieldChannel>,
    pub colour_range: DataRange,
    pub visible: bool,
    pub legend_visible: bool,
    /// Whether colour lookup reads point or cell data.
    pub data_mode: DataMode,
    /// Arrow scale factor; Some on glyph targets only.
    pub glyph_scale: Option<f32>,
}

impl RenderDescriptor {
    /// Descriptor of a target nothing has been bound to yet.
    pub(crate) fn unbound() -> Self {
        Self {
            active_channel: None,
            colour_range: DataRange::collapsed(),
            visible: false,
            legend_visible: false,
            data_mode: DataMode::Point,
            glyph_scale: None,
        }
    }
}

/// Per-source slot holding the latest computed descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderTarget {
    id: TargetId,
    source_index: usize,
    role: TargetRole,
    descriptor: RenderDescriptor,
}

impl RenderTarget {
    pub(crate) fn new(id: TargetId, source_index: usize, role: TargetRole) -> Self {
        Self {
            id,
            source_index,
            role,
            descriptor: RenderDescriptor::unbound(),
        }
    }

    pub fn id(&self) -> TargetId {
        self.id
    }

    /// Index into the controller's data or outline source list,
    /// depending on the role.
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    pub fn role(&self) -> TargetRole {
        self.role
    }

    pub fn descriptor(&self) -> &RenderDescriptor {
        &self.descriptor
    }

    pub(crate) fn set_descriptor(&mut self, descriptor: RenderDescriptor) {
        self.descriptor = descriptor;
    }
}
