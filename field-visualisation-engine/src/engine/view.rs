//! View configuration state and the channel enums that drive it.
//!
//! A session is either scalar or vector; the selectable channels differ
//! per mode and both map onto the storage-level channels every source
//! actually carries.

use serde::{Deserialize, Serialize};

/// Storage-level channel identifier, one per derived array on a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldChannel {
    Real,
    Imaginary,
    SquaredMagnitude,
}

impl FieldChannel {
    /// Provider array name this channel binds against.
    pub fn array_name(self) -> &'static str {
        match self {
            FieldChannel::Real => constants::channels::CHANNEL_REAL,
            FieldChannel::Imaginary => constants::channels::CHANNEL_IMAG,
            FieldChannel::SquaredMagnitude => constants::channels::CHANNEL_ABS2,
        }
    }
}

/// Channels selectable in a scalar session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalarChannel {
    Real,
    Imaginary,
    SquaredMagnitude,
}

impl ScalarChannel {
    pub fn field_channel(self) -> FieldChannel {
        match self {
            ScalarChannel::Real => FieldChannel::Real,
            ScalarChannel::Imaginary => FieldChannel::Imaginary,
            ScalarChannel::SquaredMagnitude => FieldChannel::SquaredMagnitude,
        }
    }
}

/// Channels selectable in a vector session. Glyphs follow either the
/// real or the imaginary part of the field; the squared magnitude stays
/// pinned to the surface colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VectorChannel {
    RealField,
    ImaginaryField,
}

impl VectorChannel {
    pub fn field_channel(self) -> FieldChannel {
        match self {
            VectorChannel::RealField => FieldChannel::Real,
            VectorChannel::ImaginaryField => FieldChannel::Imaginary,
        }
    }
}

/// Mode-tagged channel selection held by the view configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelSelection {
    Scalar(ScalarChannel),
    Vector(VectorChannel),
}

impl ChannelSelection {
    pub fn field_channel(self) -> FieldChannel {
        match self {
            ChannelSelection::Scalar(channel) => channel.field_channel(),
            ChannelSelection::Vector(channel) => channel.field_channel(),
        }
    }
}

/// Session mode, fixed by the component count of the first attached
/// data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    Scalar,
    Vector,
}

impl SessionMode {
    /// Mode implied by a source component count, if supported.
    pub fn from_component_count(count: usize) -> Option<Self> {
        match count {
            constants::channels::SCALAR_COMPONENT_COUNT => Some(SessionMode::Scalar),
            constants::channels::VECTOR_COMPONENT_COUNT => Some(SessionMode::Vector),
            _ => None,
        }
    }

    /// Component count every data source in this mode must carry.
    pub fn component_count(self) -> usize {
        match self {
            SessionMode::Scalar => constants::channels::SCALAR_COMPONENT_COUNT,
            SessionMode::Vector => constants::channels::VECTOR_COMPONENT_COUNT,
        }
    }
}

/// Whether colour lookup reads per-point or per-cell data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataMode {
    Point,
    Cell,
}

/// Which legend family is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendKind {
    Scalar,
    Vector,
}

/// Actor groups whose visibility the controller toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Surface,
    Vectors,
    Grid,
}

/// Mutable view state of one visualisation session.
///
/// Mutated exclusively through the controller; every change triggers a
/// bounded descriptor recompute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfiguration {
    pub channel: ChannelSelection,
    pub data_mode: DataMode,
    pub legend_mode: LegendKind,
    pub show_surface: bool,
    pub show_vectors: bool,
    pub show_grid: bool,
    pub vector_scale: f32,
}

impl ViewConfiguration {
    /// Initial state for a session of the given mode: surface shown,
    /// vectors hidden, grid hidden, scalar legend, point data, default
    /// glyph scale.
    pub fn initial(mode: SessionMode) -> Self {
        Self {
            channel: Self::default_channel(mode),
            data_mode: DataMode::Point,
            legend_mode: LegendKind::Scalar,
            show_surface: constants::view::SURFACE_VISIBLE_DEFAULT,
            show_vectors: constants::view::VECTORS_VISIBLE_DEFAULT,
            show_grid: constants::view::GRID_VISIBLE_DEFAULT,
            vector_scale: constants::view::DEFAULT_VECTOR_SCALE,
        }
    }

    /// Channel a fresh session of the given mode starts on.
    pub fn default_channel(mode: SessionMode) -> ChannelSelection {
        match mode {
            SessionMode::Scalar => ChannelSelection::Scalar(ScalarChannel::Real),
            SessionMode::Vector => ChannelSelection::Vector(VectorChannel::RealField),
        }
    }
}
