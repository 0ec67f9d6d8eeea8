//! Reactive controller for visualising complex-valued fields sampled on
//! meshes and structured point grids.
//!
//! The crate owns the state and data model that decides what to render:
//! it aggregates colour ranges across heterogeneous sources, holds the
//! view configuration and derives one renderer-agnostic descriptor per
//! render target whenever the configuration changes. Actually drawing
//! the geometry is the job of an external renderer reached through the
//! [`engine::scene::RenderScene`] handle.
//!
//! A typical session wraps provider data into
//! [`engine::sources::field_source::FieldSource`]s, builds a
//! [`engine::controller::VisualizationController`] over them and hands
//! the target list to the renderer:
//!
//! ```
//! use field_visualisation_engine::engine::controller::VisualizationController;
//! use field_visualisation_engine::engine::scene::NullScene;
//! use field_visualisation_engine::engine::sources::field_source::FieldSource;
//! use field_visualisation_engine::engine::sources::geometry::RawMesh;
//! use field_visualisation_engine::engine::sources::samples::FieldSamples;
//! use bevy::math::Vec3;
//! use num_complex::Complex64;
//!
//! let mesh = RawMesh {
//!     points: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
//!     connectivity: vec![0, 1, 2],
//!     vertices_per_element: 3,
//! };
//! let samples = FieldSamples::scalar(vec![Complex64::new(0.5, 0.0); 3]);
//! let source = FieldSource::field_on_mesh("pressure", mesh, samples, None)?;
//!
//! let controller = VisualizationController::single(Box::new(NullScene), source, None)?;
//! assert_eq!(controller.targets().len(), 1);
//! # Ok::<(), field_visualisation_engine::engine::error::SessionError>(())
//! ```

pub mod engine;
