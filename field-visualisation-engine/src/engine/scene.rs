//! Explicit handle onto the external rendering engine.
//!
//! The renderer stays outside this crate; the controller only tells it
//! which geometry backs which target and when to take over the event
//! loop. Descriptors are read back from the controller's target list.

use crate::engine::sources::geometry::SourceGeometry;
use crate::engine::target::{TargetId, TargetRole};

/// Scene handle passed into the controller at attach time.
pub trait RenderScene: Send + Sync {
    /// Register the geometry backing a newly created target.
    fn attach(&mut self, id: TargetId, role: TargetRole, geometry: &SourceGeometry);

    /// Release a target's geometry when the session tears down.
    fn detach(&mut self, id: TargetId);

    /// Hand control to the renderer's own event loop; blocks until the
    /// user closes the view.
    fn show(&mut self);
}

/// Scene handle that renders nothing. Useful headless: descriptor-only
/// consumers and tests.
#[derive(Debug, Default)]
pub struct NullScene;

impl RenderScene for NullScene {
    fn attach(&mut self, _id: TargetId, _role: TargetRole, _geometry: &SourceGeometry) {}

    fn detach(&mut self, _id: TargetId) {}

    fn show(&mut self) {}
}
