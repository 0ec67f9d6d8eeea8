//! Source builders shared across the engine's test modules.

use bevy::math::Vec3;
use num_complex::Complex64;

use crate::engine::sources::field_source::FieldSource;
use crate::engine::sources::geometry::RawMesh;
use crate::engine::sources::samples::FieldSamples;

/// Single triangle in the xy plane.
pub fn unit_triangle() -> RawMesh {
    RawMesh {
        points: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
        connectivity: vec![0, 1, 2],
        vertices_per_element: 3,
    }
}

/// Triangle strip with `point_count` points fanned around point 0.
pub fn strip_mesh(point_count: usize) -> RawMesh {
    assert!(point_count >= 3);
    let points = (0..point_count)
        .map(|i| Vec3::new(i as f32, (i % 2) as f32, 0.0))
        .collect();
    let connectivity = (1..point_count as u32 - 1)
        .flat_map(|i| [0, i, i + 1])
        .collect();
    RawMesh {
        points,
        connectivity,
        vertices_per_element: 3,
    }
}

/// Scalar field-on-mesh source with the given real point values.
pub fn scalar_mesh_source(name: &str, values: &[f64]) -> FieldSource {
    let samples = FieldSamples::scalar(values.iter().map(|v| Complex64::new(*v, 0.0)).collect());
    FieldSource::field_on_mesh(name, strip_mesh(values.len()), samples, None).unwrap()
}

/// Vector field-on-mesh source with the given real component vectors.
pub fn vector_mesh_source(name: &str, vectors: &[[f64; 3]]) -> FieldSource {
    let samples = FieldSamples::vector(
        vectors
            .iter()
            .map(|v| [
                Complex64::new(v[0], 0.0),
                Complex64::new(v[1], 0.0),
                Complex64::new(v[2], 0.0),
            ])
            .collect(),
    );
    FieldSource::field_on_mesh(name, strip_mesh(vectors.len()), samples, None).unwrap()
}

/// Structured 2x2 grid source with the given real point values.
pub fn structured_source(name: &str, values: &[f64; 4]) -> FieldSource {
    let points = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
    let samples = FieldSamples::scalar(values.iter().map(|v| Complex64::new(*v, 0.0)).collect());
    FieldSource::structured_grid(name, points, (2, 2), samples).unwrap()
}

/// Bare wireframe source without data channels.
pub fn wireframe_source(name: &str) -> FieldSource {
    FieldSource::mesh(name, unit_triangle()).unwrap()
}

/// Source with an unsupported two-component field.
pub fn two_component_source(name: &str) -> FieldSource {
    let samples = FieldSamples::new(2, vec![Complex64::new(1.0, 0.0); 6]).unwrap();
    FieldSource::field_on_mesh(name, unit_triangle(), samples, None).unwrap()
}
