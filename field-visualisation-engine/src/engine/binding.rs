//! Pure derivation of render descriptors from session state.
//!
//! Called by the controller after every mutation; never consulted by
//! anything else. Keeping the mapping side-effect free makes every
//! mutator a bounded recompute over the targets it affects.

use crate::engine::range::{ChannelRanges, DataRange};
use crate::engine::sources::field_source::{FieldSource, SourceKind};
use crate::engine::target::{RenderDescriptor, TargetRole};
use crate::engine::view::{
    ChannelSelection, DataMode, FieldChannel, LegendKind, SessionMode, ViewConfiguration,
};

/// Derive the descriptor for one target.
///
/// `legend_lead` marks the first target of its role in attach order;
/// only lead targets may carry a legend, keeping legend visibility
/// exclusive per kind.
pub fn bind_target(
    mode: SessionMode,
    config: &ViewConfiguration,
    source: &FieldSource,
    ranges: &ChannelRanges,
    role: TargetRole,
    legend_lead: bool,
) -> RenderDescriptor {
    match role {
        TargetRole::Outline => RenderDescriptor {
            active_channel: None,
            colour_range: DataRange::collapsed(),
            visible: config.show_grid,
            legend_visible: false,
            data_mode: DataMode::Point,
            glyph_scale: None,
        },
        TargetRole::Surface => {
            // Vector sessions keep surfaces pinned to the squared
            // magnitude; scalar sessions colour by the selected channel.
            let channel = match (mode, config.channel) {
                (SessionMode::Scalar, ChannelSelection::Scalar(selected)) => {
                    selected.field_channel()
                }
                (SessionMode::Scalar, ChannelSelection::Vector(_)) => FieldChannel::Real,
                (SessionMode::Vector, _) => FieldChannel::SquaredMagnitude,
            };
            // Structured grids carry point data only and stay in point
            // mode whatever the configuration says.
            let data_mode = match source.kind() {
                SourceKind::FieldOnMesh => config.data_mode,
                _ => DataMode::Point,
            };
            RenderDescriptor {
                active_channel: Some(channel),
                colour_range: ranges.get(channel),
                visible: config.show_surface,
                legend_visible: legend_lead && config.legend_mode == LegendKind::Scalar,
                data_mode,
                glyph_scale: None,
            }
        }
        TargetRole::VectorGlyphs => {
            let channel = match config.channel {
                ChannelSelection::Vector(selected) => selected.field_channel(),
                ChannelSelection::Scalar(_) => FieldChannel::Real,
            };
            RenderDescriptor {
                active_channel: Some(channel),
                colour_range: ranges.get(channel),
                visible: config.show_vectors,
                legend_visible: legend_lead && config.legend_mode == LegendKind::Vector,
                data_mode: DataMode::Point,
                glyph_scale: Some(config.vector_scale),
            }
        }
    }
}
