//! Immutable field data sources.
//!
//! A source wraps validated geometry plus the channels derived from the
//! provider's complex samples. Once constructed it never changes; the
//! controller only ever reads from it.

use serde::{Deserialize, Serialize};

use crate::engine::error::SessionError;
use crate::engine::sources::geometry::{RawMesh, SourceGeometry};
use crate::engine::sources::samples::{ChannelData, ChannelSet, FieldSamples};
use crate::engine::view::FieldChannel;

/// What a source contributes to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Bare mesh, drawn as a wireframe outline only.
    MeshOnly,
    /// Field sampled on a triangular surface mesh, per point and
    /// optionally per cell.
    FieldOnMesh,
    /// Field sampled on a regular point grid, per point only.
    StructuredGridField,
}

/// One immutable data source attached to a visualisation session.
#[derive(Debug, Clone)]
pub struct FieldSource {
    name: String,
    kind: SourceKind,
    geometry: SourceGeometry,
    point_data: Option<ChannelSet>,
    cell_data: Option<ChannelSet>,
}

impl FieldSource {
    /// Wireframe-only source with no bound data.
    pub fn mesh(name: &str, mesh: RawMesh) -> Result<Self, SessionError> {
        Ok(Self {
            name: name.to_string(),
            kind: SourceKind::MeshOnly,
            geometry: SourceGeometry::triangle_surface(mesh)?,
            point_data: None,
            cell_data: None,
        })
    }

    /// Field sampled on a surface mesh. Point samples are mandatory and
    /// must cover every mesh point; cell samples are optional and must
    /// cover every triangle when present.
    pub fn field_on_mesh(
        name: &str,
        mesh: RawMesh,
        point_samples: FieldSamples,
        cell_samples: Option<FieldSamples>,
    ) -> Result<Self, SessionError> {
        let geometry = SourceGeometry::triangle_surface(mesh)?;
        if point_samples.count() != geometry.point_count() {
            return Err(SessionError::InvalidPointCount {
                expected: geometry.point_count(),
                actual: point_samples.count(),
            });
        }
        if let Some(cell) = &cell_samples {
            if cell.count() != geometry.cell_count() {
                return Err(SessionError::InvalidPointCount {
                    expected: geometry.cell_count(),
                    actual: cell.count(),
                });
            }
            if cell.component_count() != point_samples.component_count() {
                return Err(SessionError::ComponentCountMismatch {
                    expected: point_samples.component_count(),
                    found: cell.component_count(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            kind: SourceKind::FieldOnMesh,
            geometry,
            point_data: Some(ChannelSet::derive(&point_samples)),
            cell_data: cell_samples.as_ref().map(ChannelSet::derive),
        })
    }

    /// Field sampled on a regular 2D grid of points.
    pub fn structured_grid(
        name: &str,
        points: Vec<bevy::math::Vec3>,
        dims: (u32, u32),
        samples: FieldSamples,
    ) -> Result<Self, SessionError> {
        let geometry = SourceGeometry::structured_points(points, dims)?;
        if samples.count() != geometry.point_count() {
            return Err(SessionError::InvalidPointCount {
                expected: geometry.point_count(),
                actual: samples.count(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            kind: SourceKind::StructuredGridField,
            geometry,
            point_data: Some(ChannelSet::derive(&samples)),
            cell_data: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn geometry(&self) -> &SourceGeometry {
        &self.geometry
    }

    /// Component count of the bound field data; None for bare meshes.
    pub fn component_count(&self) -> Option<usize> {
        self.point_data
            .as_ref()
            .or(self.cell_data.as_ref())
            .map(ChannelSet::component_count)
    }

    pub fn point_data(&self) -> Option<&ChannelSet> {
        self.point_data.as_ref()
    }

    pub fn cell_data(&self) -> Option<&ChannelSet> {
        self.cell_data.as_ref()
    }

    pub fn point_channel(&self, channel: FieldChannel) -> Option<&ChannelData> {
        self.point_data.as_ref().map(|set| set.channel(channel))
    }

    pub fn cell_channel(&self, channel: FieldChannel) -> Option<&ChannelData> {
        self.cell_data.as_ref().map(|set| set.channel(channel))
    }

    /// Largest point-wise Euclidean norm across the vector channels of
    /// this source; None for scalar and mesh-only sources.
    pub fn max_norm(&self) -> Option<f64> {
        let mut best: Option<f64> = None;
        for set in [&self.point_data, &self.cell_data].into_iter().flatten() {
            for channel in [FieldChannel::Real, FieldChannel::Imaginary] {
                if let Some(norm) = set.channel(channel).max_norm() {
                    best = Some(best.map_or(norm, |b| b.max(norm)));
                }
            }
        }
        best
    }
}
