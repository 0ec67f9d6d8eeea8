//! Geometry handed over by the numerical library.
//!
//! Two shapes are accepted: triangular surface meshes and axis-free
//! structured point grids. Everything else is refused at construction.

use bevy::math::Vec3;

use crate::engine::error::SessionError;

/// Raw element data as produced by the provider's mesh view: a point
/// list plus flat connectivity with a fixed vertex count per element.
#[derive(Debug, Clone)]
pub struct RawMesh {
    pub points: Vec<Vec3>,
    pub connectivity: Vec<u32>,
    pub vertices_per_element: usize,
}

/// Validated geometry backing one field source.
#[derive(Debug, Clone)]
pub enum SourceGeometry {
    /// Triangular surface mesh.
    TriangleSurface {
        points: Vec<Vec3>,
        triangles: Vec<[u32; 3]>,
    },
    /// Regular 2D grid of sample points; `dims.0 * dims.1` points.
    StructuredPoints {
        points: Vec<Vec3>,
        dims: (u32, u32),
    },
}

impl SourceGeometry {
    /// Accept a raw mesh as a triangular surface.
    ///
    /// Refuses non-triangular element arities, ragged connectivity and
    /// connectivity referring past the end of the point list.
    pub fn triangle_surface(mesh: RawMesh) -> Result<Self, SessionError> {
        if mesh.vertices_per_element != constants::channels::TRIANGLE_VERTEX_COUNT {
            return Err(SessionError::UnsupportedTopology {
                vertices_per_element: mesh.vertices_per_element,
            });
        }
        if mesh.connectivity.len() % 3 != 0 {
            return Err(SessionError::UnsupportedTopology {
                vertices_per_element: mesh.vertices_per_element,
            });
        }
        if let Some(max_index) = mesh.connectivity.iter().max() {
            if *max_index as usize >= mesh.points.len() {
                return Err(SessionError::InvalidPointCount {
                    expected: mesh.points.len(),
                    actual: *max_index as usize + 1,
                });
            }
        }

        let triangles = mesh
            .connectivity
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
            .collect();
        Ok(SourceGeometry::TriangleSurface {
            points: mesh.points,
            triangles,
        })
    }

    /// Accept a regular point grid whose dimensions cover the point list.
    pub fn structured_points(points: Vec<Vec3>, dims: (u32, u32)) -> Result<Self, SessionError> {
        let expected = dims.0 as usize * dims.1 as usize;
        if expected != points.len() {
            return Err(SessionError::InvalidPointCount {
                expected,
                actual: points.len(),
            });
        }
        Ok(SourceGeometry::StructuredPoints { points, dims })
    }

    pub fn point_count(&self) -> usize {
        match self {
            SourceGeometry::TriangleSurface { points, .. } => points.len(),
            SourceGeometry::StructuredPoints { points, .. } => points.len(),
        }
    }

    /// Number of data-bearing cells; structured grids carry none.
    pub fn cell_count(&self) -> usize {
        match self {
            SourceGeometry::TriangleSurface { triangles, .. } => triangles.len(),
            SourceGeometry::StructuredPoints { .. } => 0,
        }
    }

    pub fn points(&self) -> &[Vec3] {
        match self {
            SourceGeometry::TriangleSurface { points, .. } => points,
            SourceGeometry::StructuredPoints { points, .. } => points,
        }
    }
}
