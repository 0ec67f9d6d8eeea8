//! The visualisation session state machine.
//!
//! One controller owns the attached sources, the aggregated channel
//! ranges, the view configuration and the render target list. Every
//! mutator runs to completion, recomputes only the targets it affects
//! and leaves the descriptors ready for the external renderer. There is
//! no observer registry: callers mutate through named methods and the
//! renderer reads the target list.

use bevy::log::{info, warn};
use bevy::prelude::Resource;

use crate::engine::binding::bind_target;
use crate::engine::error::SessionError;
use crate::engine::range::{ChannelRanges, DataRange, RangeAggregator};
use crate::engine::scene::RenderScene;
use crate::engine::sources::field_source::{FieldSource, SourceKind};
use crate::engine::target::{RenderTarget, TargetId, TargetRole};
use crate::engine::view::{
    ActorKind, ChannelSelection, DataMode, LegendKind, SessionMode, ViewConfiguration,
};

/// Reactive controller for one visualisation session.
///
/// The session mode (scalar or vector) is fixed by the component count
/// of the first attached data source; all later sources must match.
/// Sources and targets live until the controller is dropped, at which
/// point every target is detached from the scene.
#[derive(Resource)]
pub struct VisualizationController {
    scene: Box<dyn RenderScene>,
    mode: Option<SessionMode>,
    sources: Vec<FieldSource>,
    outlines: Vec<FieldSource>,
    aggregator: RangeAggregator,
    ranges: ChannelRanges,
    config: ViewConfiguration,
    targets: Vec<RenderTarget>,
}

impl VisualizationController {
    /// Build a session over the given sources.
    ///
    /// Mesh-only sources become wireframe outlines (and force the grid
    /// visible), everything else becomes a data-bound target. An
    /// explicit `override_range` pins the colour ranges instead of
    /// scanning the sources. Fails without leaving any partial session
    /// behind.
    pub fn new(
        scene: Box<dyn RenderScene>,
        sources: Vec<FieldSource>,
        override_range: Option<DataRange>,
    ) -> Result<Self, SessionError> {
        let aggregator = match override_range {
            Some(range) => RangeAggregator::from_override(range),
            None => RangeAggregator::new(),
        };
        let ranges = aggregator.resolve();
        let mut controller = Self {
            scene,
            mode: None,
            sources: Vec::new(),
            outlines: Vec::new(),
            aggregator,
            ranges,
            config: ViewConfiguration::initial(SessionMode::Scalar),
            targets: Vec::new(),
        };
        controller.attach_sources(sources)?;
        info!(
            "visualisation session ready: {} data sources, {} outlines, mode {:?}, ranges {:?}",
            controller.sources.len(),
            controller.outlines.len(),
            controller.mode,
            controller.ranges
        );
        Ok(controller)
    }

    /// Convenience wrapper for the common single-source session.
    pub fn single(
        scene: Box<dyn RenderScene>,
        source: FieldSource,
        override_range: Option<DataRange>,
    ) -> Result<Self, SessionError> {
        Self::new(scene, vec![source], override_range)
    }

    /// Attach further sources to a running session.
    ///
    /// Validation happens up front: on error the session is left
    /// byte-identical to before the call. Attached data widens the
    /// aggregated ranges (unless they are overridden) and appends
    /// targets; existing data-bound descriptors are recomputed against
    /// the widened ranges.
    pub fn attach_sources(&mut self, sources: Vec<FieldSource>) -> Result<(), SessionError> {
        let (data, outline): (Vec<_>, Vec<_>) = sources
            .into_iter()
            .partition(|source| source.kind() != SourceKind::MeshOnly);

        let expected = self.mode.map(SessionMode::component_count);
        Self::validate_component_counts(expected, &data)?;

        self.aggregator.scan(&data)?;
        self.ranges = self.aggregator.resolve();

        if self.mode.is_none() {
            if let Some(count) = data.iter().find_map(FieldSource::component_count) {
                let mode = SessionMode::from_component_count(count);
                self.mode = mode;
                if let Some(mode) = mode {
                    self.config.channel = ViewConfiguration::default_channel(mode);
                }
            }
        }

        let start = self.sources.len();
        self.sources.extend(data);
        for index in start..self.sources.len() {
            self.push_target(TargetRole::Surface, index);
            if self.mode == Some(SessionMode::Vector) {
                self.push_target(TargetRole::VectorGlyphs, index);
            }
        }
        if !outline.is_empty() {
            self.attach_outline(outline);
        }
        self.recompute_where(|role, _| role != TargetRole::Outline);
        Ok(())
    }

    /// Single-source convenience for [`attach_sources`].
    ///
    /// [`attach_sources`]: Self::attach_sources
    pub fn attach_source(&mut self, source: FieldSource) -> Result<(), SessionError> {
        self.attach_sources(vec![source])
    }

    /// Attach wireframe outline sources. Only their geometry is used;
    /// the first outline forces the grid visible.
    pub fn attach_outline(&mut self, sources: Vec<FieldSource>) {
        if sources.is_empty() {
            return;
        }
        let first_outline = self.outlines.is_empty();
        let start = self.outlines.len();
        self.outlines.extend(sources);
        for index in start..self.outlines.len() {
            self.push_target(TargetRole::Outline, index);
        }
        if first_outline {
            self.config.show_grid = true;
        }
        self.recompute_where(|role, _| role == TargetRole::Outline);
    }

    /// Rebind every affected target to the chosen channel and its
    /// aggregated range.
    ///
    /// Scalar sessions recolour their surfaces; vector sessions redirect
    /// their glyphs while surfaces stay on the squared magnitude. Point
    /// and cell bindings both follow; sources without cell data simply
    /// keep point data only. A selection whose tag contradicts the
    /// session mode is ignored.
    pub fn select_channel(&mut self, selection: ChannelSelection) {
        match (self.mode, selection) {
            (Some(SessionMode::Scalar), ChannelSelection::Scalar(_)) => {
                self.config.channel = selection;
                self.recompute_where(|role, _| role == TargetRole::Surface);
            }
            (Some(SessionMode::Vector), ChannelSelection::Vector(_)) => {
                self.config.channel = selection;
                self.recompute_where(|role, _| role == TargetRole::VectorGlyphs);
            }
            _ => {
                warn!(
                    "channel selection {:?} does not fit session mode {:?}, ignoring",
                    selection, self.mode
                );
            }
        }
    }

    /// Switch colour lookup between point and cell data.
    ///
    /// Only field-on-mesh surfaces follow; structured grids carry point
    /// data only and keep their point binding.
    pub fn set_data_mode(&mut self, mode: DataMode) {
        self.config.data_mode = mode;
        self.recompute_where(|role, kind| {
            role == TargetRole::Surface && kind == SourceKind::FieldOnMesh
        });
    }

    /// Toggle an actor group's visibility.
    ///
    /// Enabling vectors switches to the vector legend, disabling them
    /// switches back to the scalar legend. Vector toggles are only
    /// meaningful in vector sessions.
    pub fn set_visibility(&mut self, actor: ActorKind, visible: bool) {
        match actor {
            ActorKind::Surface => {
                self.config.show_surface = visible;
                self.recompute_where(|role, _| role == TargetRole::Surface);
            }
            ActorKind::Vectors => {
                if self.mode != Some(SessionMode::Vector) {
                    warn!("vector visibility toggled outside a vector session, ignoring");
                    return;
                }
                self.config.show_vectors = visible;
                self.config.legend_mode = if visible {
                    LegendKind::Vector
                } else {
                    LegendKind::Scalar
                };
                self.recompute_where(|role, _| role != TargetRole::Outline);
            }
            ActorKind::Grid => {
                self.config.show_grid = visible;
                self.recompute_where(|role, _| role == TargetRole::Outline);
            }
        }
    }

    /// Put the legend on the first target of the requested kind and
    /// hide every other legend.
    pub fn set_legend_mode(&mut self, kind: LegendKind) {
        self.config.legend_mode = kind;
        self.recompute_where(|role, _| role != TargetRole::Outline);
    }

    /// Update the glyph scale on every vector target. Non-positive
    /// factors are ignored and the previous valid scale is kept.
    pub fn set_vector_scale(&mut self, factor: f32) {
        if !(factor > 0.0) {
            warn!("ignoring non-positive vector scale {}", factor);
            return;
        }
        self.config.vector_scale = factor;
        self.recompute_where(|role, _| role == TargetRole::VectorGlyphs);
    }

    /// Hand control to the renderer until the user closes the view.
    pub fn show(&mut self) {
        info!("handing {} render targets to the scene", self.targets.len());
        self.scene.show();
    }

    pub fn mode(&self) -> Option<SessionMode> {
        self.mode
    }

    pub fn configuration(&self) -> &ViewConfiguration {
        &self.config
    }

    pub fn ranges(&self) -> &ChannelRanges {
        &self.ranges
    }

    /// The descriptor stream, one slot per target, updated in place.
    pub fn targets(&self) -> &[RenderTarget] {
        &self.targets
    }

    pub fn sources(&self) -> &[FieldSource] {
        &self.sources
    }

    pub fn outline_sources(&self) -> &[FieldSource] {
        &self.outlines
    }

    fn validate_component_counts(
        mut expected: Option<usize>,
        data: &[FieldSource],
    ) -> Result<(), SessionError> {
        for source in data {
            let Some(count) = source.component_count() else {
                continue;
            };
            if !constants::channels::SUPPORTED_COMPONENT_COUNTS.contains(&count) {
                return Err(SessionError::UnsupportedComponentCount(count));
            }
            match expected {
                Some(session_count) if session_count != count => {
                    return Err(SessionError::ComponentCountMismatch {
                        expected: session_count,
                        found: count,
                    });
                }
                None => expected = Some(count),
                _ => {}
            }
        }
        Ok(())
    }

    fn push_target(&mut self, role: TargetRole, source_index: usize) {
        let id = TargetId::new(self.targets.len());
        let geometry = match role {
            TargetRole::Outline => self.outlines[source_index].geometry(),
            _ => self.sources[source_index].geometry(),
        };
        self.scene.attach(id, role, geometry);
        self.targets.push(RenderTarget::new(id, source_index, role));
    }

    /// Recompute the descriptors of every target the predicate selects.
    fn recompute_where(&mut self, affects: impl Fn(TargetRole, SourceKind) -> bool) {
        let first_surface = self.first_of(TargetRole::Surface);
        let first_glyphs = self.first_of(TargetRole::VectorGlyphs);
        let mode = self.mode.unwrap_or(SessionMode::Scalar);

        for index in 0..self.targets.len() {
            let (id, role, source_index) = {
                let target = &self.targets[index];
                (target.id(), target.role(), target.source_index())
            };
            let source = match role {
                TargetRole::Outline => &self.outlines[source_index],
                _ => &self.sources[source_index],
            };
            if !affects(role, source.kind()) {
                continue;
            }
            let legend_lead = match role {
                TargetRole::Surface => Some(id) == first_surface,
                TargetRole::VectorGlyphs => Some(id) == first_glyphs,
                TargetRole::Outline => false,
            };
            let descriptor = bind_target(mode, &self.config, source, &self.ranges, role, legend_lead);
            self.targets[index].set_descriptor(descriptor);
        }
    }

    fn first_of(&self, role: TargetRole) -> Option<TargetId> {
        self.targets
            .iter()
            .find(|target| target.role() == role)
            .map(RenderTarget::id)
    }
}

impl Drop for VisualizationController {
    fn drop(&mut self) {
        for target in &self.targets {
            self.scene.detach(target.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::range::DataRange;
    use crate::engine::scene::NullScene;
    use crate::engine::sources::geometry::SourceGeometry;
    use crate::engine::sources::test_support::{
        scalar_mesh_source, structured_source, two_component_source, vector_mesh_source,
        wireframe_source,
    };
    use crate::engine::target::RenderDescriptor;
    use crate::engine::view::{FieldChannel, ScalarChannel, VectorChannel};
    use std::sync::{Arc, Mutex};

    /// Scene that records every call for later inspection.
    #[derive(Default)]
    struct RecordingScene {
        log: Arc<Mutex<Vec<String>>>,
    }

    impl RenderScene for RecordingScene {
        fn attach(&mut self, id: TargetId, role: TargetRole, _geometry: &SourceGeometry) {
            self.log.lock().unwrap().push(format!("attach {} {:?}", id.index(), role));
        }

        fn detach(&mut self, id: TargetId) {
            self.log.lock().unwrap().push(format!("detach {}", id.index()));
        }

        fn show(&mut self) {
            self.log.lock().unwrap().push("show".to_string());
        }
    }

    fn session(sources: Vec<FieldSource>) -> VisualizationController {
        VisualizationController::new(Box::new(NullScene), sources, None).unwrap()
    }

    fn descriptors(controller: &VisualizationController) -> Vec<RenderDescriptor> {
        controller
            .targets()
            .iter()
            .map(|target| target.descriptor().clone())
            .collect()
    }

    #[test]
    fn scalar_session_starts_on_the_real_channel() {
        let controller = session(vec![scalar_mesh_source("a", &[-1.0, 0.5, 2.0])]);
        assert_eq!(controller.mode(), Some(SessionMode::Scalar));

        let targets = controller.targets();
        assert_eq!(targets.len(), 1);
        let descriptor = targets[0].descriptor();
        assert_eq!(descriptor.active_channel, Some(FieldChannel::Real));
        assert_eq!(descriptor.colour_range, DataRange::new(-1.0, 2.0).unwrap());
        assert!(descriptor.visible);
        assert!(descriptor.legend_visible);
        assert_eq!(descriptor.data_mode, DataMode::Point);
    }

    #[test]
    fn vector_sessions_pair_each_source_with_glyphs() {
        let controller = session(vec![vector_mesh_source(
            "v",
            &[[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]],
        )]);
        assert_eq!(controller.mode(), Some(SessionMode::Vector));

        let targets = controller.targets();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].role(), TargetRole::Surface);
        assert_eq!(targets[1].role(), TargetRole::VectorGlyphs);

        let surface = targets[0].descriptor();
        assert_eq!(surface.active_channel, Some(FieldChannel::SquaredMagnitude));
        let glyphs = targets[1].descriptor();
        assert_eq!(glyphs.active_channel, Some(FieldChannel::Real));
        assert!(!glyphs.visible);
        assert_eq!(glyphs.glyph_scale, Some(0.1));
    }

    #[test]
    fn channel_selection_round_trips_to_identical_descriptors() {
        let mut controller = session(vec![
            scalar_mesh_source("a", &[-1.0, 0.5, 2.0]),
            scalar_mesh_source("b", &[0.0, 2.5, 5.0]),
        ]);
        let before = descriptors(&controller);

        controller.select_channel(ChannelSelection::Scalar(ScalarChannel::Imaginary));
        assert_ne!(descriptors(&controller), before);

        controller.select_channel(ChannelSelection::Scalar(ScalarChannel::Real));
        assert_eq!(descriptors(&controller), before);
    }

    #[test]
    fn squared_magnitude_selection_uses_the_abs2_range() {
        let mut controller = session(vec![scalar_mesh_source("a", &[-1.0, 0.5, 2.0])]);
        controller.select_channel(ChannelSelection::Scalar(ScalarChannel::SquaredMagnitude));

        let descriptor = controller.targets()[0].descriptor();
        assert_eq!(descriptor.active_channel, Some(FieldChannel::SquaredMagnitude));
        assert_eq!(descriptor.colour_range, controller.ranges().abs2);
    }

    #[test]
    fn mismatched_channel_selections_are_ignored() {
        let mut controller = session(vec![scalar_mesh_source("a", &[0.0, 1.0, 2.0])]);
        let config_before = controller.configuration().clone();
        let before = descriptors(&controller);

        controller.select_channel(ChannelSelection::Vector(VectorChannel::ImaginaryField));
        assert_eq!(controller.configuration(), &config_before);
        assert_eq!(descriptors(&controller), before);
    }

    #[test]
    fn enabling_vectors_forces_the_vector_legend() {
        let mut controller = session(vec![vector_mesh_source(
            "v",
            &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        )]);

        controller.set_visibility(ActorKind::Vectors, true);
        assert_eq!(controller.configuration().legend_mode, LegendKind::Vector);
        assert!(controller.targets()[1].descriptor().visible);
        let after_enable = descriptors(&controller);

        // Repeating the toggle is idempotent.
        controller.set_visibility(ActorKind::Vectors, true);
        assert_eq!(descriptors(&controller), after_enable);

        controller.set_visibility(ActorKind::Vectors, false);
        assert_eq!(controller.configuration().legend_mode, LegendKind::Scalar);
        let after_disable = descriptors(&controller);
        controller.set_visibility(ActorKind::Vectors, false);
        assert_eq!(descriptors(&controller), after_disable);
    }

    #[test]
    fn vector_toggles_are_ignored_in_scalar_sessions() {
        let mut controller = session(vec![scalar_mesh_source("a", &[0.0, 1.0, 2.0])]);
        let config_before = controller.configuration().clone();

        controller.set_visibility(ActorKind::Vectors, true);
        assert_eq!(controller.configuration(), &config_before);
    }

    #[test]
    fn non_positive_scales_change_nothing() {
        let mut controller = session(vec![vector_mesh_source(
            "v",
            &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        )]);
        let config_before = controller.configuration().clone();
        let before = descriptors(&controller);

        controller.set_vector_scale(0.0);
        controller.set_vector_scale(-3.0);
        controller.set_vector_scale(f32::NAN);

        assert_eq!(controller.configuration(), &config_before);
        assert_eq!(descriptors(&controller), before);
    }

    #[test]
    fn valid_scales_reach_every_glyph_descriptor() {
        let mut controller = session(vec![
            vector_mesh_source("v1", &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
            vector_mesh_source("v2", &[[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]),
        ]);
        controller.set_vector_scale(0.25);
        for target in controller.targets() {
            if target.role() == TargetRole::VectorGlyphs {
                assert_eq!(target.descriptor().glyph_scale, Some(0.25));
            }
        }
        assert_eq!(controller.configuration().vector_scale, 0.25);
    }

    #[test]
    fn exactly_one_legend_per_requested_kind() {
        let mut controller = session(vec![
            vector_mesh_source("v1", &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
            vector_mesh_source("v2", &[[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]),
        ]);

        controller.set_legend_mode(LegendKind::Vector);
        let glyph_legends: Vec<bool> = controller
            .targets()
            .iter()
            .filter(|t| t.role() == TargetRole::VectorGlyphs)
            .map(|t| t.descriptor().legend_visible)
            .collect();
        assert_eq!(glyph_legends, vec![true, false]);
        assert!(
            controller
                .targets()
                .iter()
                .filter(|t| t.role() == TargetRole::Surface)
                .all(|t| !t.descriptor().legend_visible)
        );

        controller.set_legend_mode(LegendKind::Scalar);
        let surface_legends: Vec<bool> = controller
            .targets()
            .iter()
            .filter(|t| t.role() == TargetRole::Surface)
            .map(|t| t.descriptor().legend_visible)
            .collect();
        assert_eq!(surface_legends, vec![true, false]);
    }

    #[test]
    fn unsupported_component_counts_leave_the_session_untouched() {
        let mut controller = session(vec![scalar_mesh_source("a", &[-1.0, 0.5, 2.0])]);
        let config_before = controller.configuration().clone();
        let ranges_before = *controller.ranges();
        let targets_before = descriptors(&controller);

        let err = controller.attach_source(two_component_source("bad")).unwrap_err();
        assert_eq!(err, SessionError::UnsupportedComponentCount(2));

        assert_eq!(controller.sources().len(), 1);
        assert_eq!(controller.configuration(), &config_before);
        assert_eq!(controller.ranges(), &ranges_before);
        assert_eq!(descriptors(&controller), targets_before);
    }

    #[test]
    fn sessions_refuse_mixed_component_counts() {
        let mut controller = session(vec![scalar_mesh_source("a", &[0.0, 1.0, 2.0])]);
        let err = controller
            .attach_source(vector_mesh_source(
                "v",
                &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            ))
            .unwrap_err();
        assert_eq!(err, SessionError::ComponentCountMismatch { expected: 1, found: 3 });
        assert_eq!(controller.sources().len(), 1);
    }

    #[test]
    fn attaching_sources_widens_ranges_and_recolours() {
        let mut controller = session(vec![scalar_mesh_source("a", &[-1.0, 0.5, 2.0])]);
        assert_eq!(controller.ranges().real, DataRange::new(-1.0, 2.0).unwrap());

        controller
            .attach_source(scalar_mesh_source("b", &[0.0, 2.5, 5.0]))
            .unwrap();
        assert_eq!(controller.ranges().real, DataRange::new(-1.0, 5.0).unwrap());
        for target in controller.targets() {
            assert_eq!(
                target.descriptor().colour_range,
                DataRange::new(-1.0, 5.0).unwrap()
            );
        }
    }

    #[test]
    fn first_outline_forces_the_grid_on() {
        let mut controller = session(vec![scalar_mesh_source("a", &[0.0, 1.0, 2.0])]);
        assert!(!controller.configuration().show_grid);

        controller.attach_outline(vec![wireframe_source("grid")]);
        assert!(controller.configuration().show_grid);
        let outline = controller
            .targets()
            .iter()
            .find(|t| t.role() == TargetRole::Outline)
            .unwrap();
        assert!(outline.descriptor().visible);
        assert_eq!(outline.descriptor().active_channel, None);
    }

    #[test]
    fn constructor_outlines_force_the_grid_on() {
        let controller = session(vec![
            scalar_mesh_source("a", &[0.0, 1.0, 2.0]),
            wireframe_source("grid"),
        ]);
        assert!(controller.configuration().show_grid);
        assert_eq!(controller.outline_sources().len(), 1);
    }

    #[test]
    fn cell_mode_skips_structured_grids() {
        let mut controller = session(vec![
            scalar_mesh_source("mesh", &[0.0, 1.0, 2.0]),
            structured_source("grid", &[0.0, 1.0, 2.0, 3.0]),
        ]);
        controller.set_data_mode(DataMode::Cell);

        let targets = controller.targets();
        assert_eq!(targets[0].descriptor().data_mode, DataMode::Cell);
        assert_eq!(targets[1].descriptor().data_mode, DataMode::Point);
    }

    #[test]
    fn grid_only_sessions_fix_their_mode_on_first_data_source() {
        let mut controller = session(vec![wireframe_source("grid")]);
        assert_eq!(controller.mode(), None);

        controller
            .attach_source(vector_mesh_source(
                "v",
                &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            ))
            .unwrap();
        assert_eq!(controller.mode(), Some(SessionMode::Vector));
        assert_eq!(
            controller.configuration().channel,
            ChannelSelection::Vector(VectorChannel::RealField)
        );
    }

    #[test]
    fn override_ranges_pin_every_descriptor() {
        let controller = VisualizationController::new(
            Box::new(NullScene),
            vec![scalar_mesh_source("a", &[-9.0, 0.0, 9.0])],
            Some(DataRange::new(0.0, 1.0).unwrap()),
        )
        .unwrap();
        assert_eq!(controller.ranges().real, DataRange::new(0.0, 1.0).unwrap());
        assert_eq!(
            controller.targets()[0].descriptor().colour_range,
            DataRange::new(0.0, 1.0).unwrap()
        );
    }

    #[test]
    fn teardown_detaches_every_target() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let scene = RecordingScene { log: Arc::clone(&log) };
        let mut controller = VisualizationController::new(
            Box::new(scene),
            vec![
                vector_mesh_source("v", &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
                wireframe_source("grid"),
            ],
            None,
        )
        .unwrap();
        controller.show();
        drop(controller);

        let log = log.lock().unwrap();
        let calls: Vec<&str> = log.iter().map(String::as_str).collect();
        assert_eq!(
            calls,
            [
                "attach 0 Surface",
                "attach 1 VectorGlyphs",
                "attach 2 Outline",
                "show",
                "detach 0",
                "detach 1",
                "detach 2",
            ]
        );
    }
}
