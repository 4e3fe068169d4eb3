//! Frame-driven owner of all animated state.
//!
//! A `Scene` holds the progress controller, one point group (the foliage),
//! any number of instanced groups (ornaments), the topper and the placement.
//! Hosts call `advance` on interaction and `update(dt, elapsed)` once per
//! rendered frame, then read the buffers.

use crate::color::GradientParams;
use crate::constants::MAX_FRAME_DT;
use crate::error::{Result, SceneError};
use crate::morph::{sanitize_dt, MorphFilter};
use crate::placement::Placement;
use crate::points::{compose_points, PointMotion, PointVertex};
use crate::progress::{ProgressController, Stage};
use crate::registry::{ElementKind, ElementRegistry, GroupParams};
use crate::topper::{Topper, TopperParams};
use crate::transform::{compose_instances, write_static_colors, InstanceBuffer, MotionParams};
use glam::Mat4;
use rand::prelude::*;

/// Everything needed to build a scene.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub max_steps: u32,
    pub foliage: GroupParams,
    pub ornaments: Vec<GroupParams>,
    pub topper: TopperParams,
    pub point_motion: PointMotion,
    pub instance_motion: MotionParams,
    pub gradient: GradientParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            max_steps: crate::constants::DEFAULT_MAX_STEPS,
            foliage: GroupParams::foliage(),
            ornaments: vec![GroupParams::baubles(), GroupParams::boxes()],
            topper: TopperParams::default(),
            point_motion: PointMotion::default(),
            instance_motion: MotionParams::default(),
            gradient: GradientParams::default(),
        }
    }
}

/// Derive an independent generator per group from the base seed.
fn group_rng(seed: u64, index: usize) -> StdRng {
    let mix = seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mix)
}

/// Convert a host-side (possibly negative) count.
pub fn checked_count(count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| SceneError::NegativeCount(count))
}

pub struct PointGroup {
    pub params: GroupParams,
    registry: ElementRegistry,
    morph: MorphFilter,
    vertices: Vec<PointVertex>,
    rng: StdRng,
}

impl PointGroup {
    fn new(
        params: GroupParams,
        rng: StdRng,
        motion: &PointMotion,
        gradient: &GradientParams,
    ) -> Result<Self> {
        let mut group = Self {
            morph: MorphFilter::new(params.morph_rate),
            registry: ElementRegistry::empty(params.kind),
            vertices: Vec::new(),
            params,
            rng,
        };
        group.rebuild(0.0, motion, gradient)?;
        Ok(group)
    }

    /// Replace the element set and recompose every vertex at the current
    /// morph value, so the buffer never mixes old and new elements.
    fn rebuild(
        &mut self,
        elapsed: f32,
        motion: &PointMotion,
        gradient: &GradientParams,
    ) -> Result<()> {
        self.params.validate()?;
        let mut fresh = StdRng::seed_from_u64(self.rng.gen());
        self.registry = ElementRegistry::build(&self.params, &mut fresh)?;
        compose_points(
            &self.registry,
            self.morph.eased(),
            elapsed,
            motion,
            gradient,
            &mut self.vertices,
        );
        Ok(())
    }

    #[inline]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    #[inline]
    pub fn morph(&self) -> f32 {
        self.morph.value()
    }

    #[inline]
    pub fn vertices(&self) -> &[PointVertex] {
        &self.vertices
    }
}

pub struct InstanceGroup {
    pub params: GroupParams,
    registry: ElementRegistry,
    morph: MorphFilter,
    buffer: InstanceBuffer,
    rng: StdRng,
}

impl InstanceGroup {
    fn new(params: GroupParams, rng: StdRng, motion: &MotionParams) -> Result<Self> {
        if params.kind == ElementKind::Topper {
            return Err(SceneError::TopperGroup);
        }
        let mut group = Self {
            morph: MorphFilter::new(params.morph_rate),
            registry: ElementRegistry::empty(params.kind),
            buffer: InstanceBuffer::default(),
            params,
            rng,
        };
        group.rebuild(0.0, motion)?;
        Ok(group)
    }

    /// Replace the element set as a whole, then write static colors and
    /// transforms for every slot before any frame reads the buffer.
    fn rebuild(&mut self, elapsed: f32, motion: &MotionParams) -> Result<()> {
        self.params.validate()?;
        let mut fresh = StdRng::seed_from_u64(self.rng.gen());
        self.registry = ElementRegistry::build(&self.params, &mut fresh)?;
        self.buffer.resize(self.registry.len());
        write_static_colors(&self.registry, &mut self.buffer);
        compose_instances(
            &self.registry,
            self.morph.eased(),
            elapsed,
            motion,
            &mut self.buffer,
        );
        Ok(())
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.params.kind
    }

    #[inline]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    #[inline]
    pub fn morph(&self) -> f32 {
        self.morph.value()
    }

    #[inline]
    pub fn buffer(&self) -> &InstanceBuffer {
        &self.buffer
    }
}

pub struct Scene {
    progress: ProgressController,
    foliage: PointGroup,
    ornaments: Vec<InstanceGroup>,
    topper: Topper,
    placement: Placement,
    point_motion: PointMotion,
    instance_motion: MotionParams,
    gradient: GradientParams,
    elapsed: f32,
    frames: u64,
}

impl Scene {
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self> {
        let progress = ProgressController::new(config.max_steps)?;
        let foliage = PointGroup::new(
            config.foliage,
            group_rng(seed, 0),
            &config.point_motion,
            &config.gradient,
        )?;
        let motion = &config.instance_motion;
        let ornaments = config
            .ornaments
            .into_iter()
            .enumerate()
            .map(|(i, params)| InstanceGroup::new(params, group_rng(seed, i + 1), motion))
            .collect::<Result<Vec<_>>>()?;
        log::info!(
            "[scene] built: points={} instance_groups={} max_steps={}",
            foliage.registry.len(),
            ornaments.len(),
            progress.max_steps()
        );
        Ok(Self {
            progress,
            foliage,
            ornaments,
            topper: Topper::new(config.topper),
            placement: Placement::default(),
            point_motion: config.point_motion,
            instance_motion: config.instance_motion,
            gradient: config.gradient,
            elapsed: 0.0,
            frames: 0,
        })
    }

    /// Handle one interaction event. Returns the new step.
    pub fn advance(&mut self) -> u32 {
        let step = self.progress.advance();
        log::info!(
            "[scene] step {}/{} progress={:.2}",
            step,
            self.progress.max_steps(),
            self.progress.progress()
        );
        step
    }

    /// The single per-frame pass: filter, ease, compose, write buffers.
    pub fn update(&mut self, dt: f32, elapsed: f32) {
        if dt.is_finite() && dt > MAX_FRAME_DT {
            log::warn!("[frame] dt {:.3}s clamped to {:.3}s", dt, MAX_FRAME_DT);
        }
        let dt = sanitize_dt(dt);
        let elapsed = if elapsed.is_finite() {
            elapsed
        } else {
            self.elapsed
        };
        self.elapsed = elapsed;
        let target = self.progress.progress();

        let foliage = &mut self.foliage;
        foliage.morph.update(target, dt);
        compose_points(
            &foliage.registry,
            foliage.morph.eased(),
            elapsed,
            &self.point_motion,
            &self.gradient,
            &mut foliage.vertices,
        );

        for group in &mut self.ornaments {
            group.morph.update(target, dt);
            compose_instances(
                &group.registry,
                group.morph.eased(),
                elapsed,
                &self.instance_motion,
                &mut group.buffer,
            );
        }

        self.topper.update(target, dt, elapsed);
        self.frames += 1;
    }

    pub fn set_point_count(&mut self, count: usize) -> Result<()> {
        let previous = self.foliage.params.count;
        self.foliage.params.count = count;
        let rebuilt = self
            .foliage
            .rebuild(self.elapsed, &self.point_motion, &self.gradient);
        if let Err(e) = rebuilt {
            self.foliage.params.count = previous;
            return Err(e);
        }
        log::debug!("[scene] foliage resized {} -> {}", previous, count);
        Ok(())
    }

    pub fn set_group_count(&mut self, index: usize, count: usize) -> Result<()> {
        let group = self
            .ornaments
            .get_mut(index)
            .ok_or(SceneError::UnknownGroup(index))?;
        let previous = group.params.count;
        group.params.count = count;
        if let Err(e) = group.rebuild(self.elapsed, &self.instance_motion) {
            group.params.count = previous;
            return Err(e);
        }
        log::debug!(
            "[scene] {} group {} resized {} -> {}",
            group.kind().name(),
            index,
            previous,
            count
        );
        Ok(())
    }

    /// Replace a group's parameters (palette, shape, ...) and rebuild it.
    /// On error the group keeps its previous parameters and elements.
    pub fn set_group_params(&mut self, index: usize, params: GroupParams) -> Result<()> {
        if params.kind == ElementKind::Topper {
            return Err(SceneError::TopperGroup);
        }
        let group = self
            .ornaments
            .get_mut(index)
            .ok_or(SceneError::UnknownGroup(index))?;
        let previous = std::mem::replace(&mut group.params, params);
        if let Err(e) = group.rebuild(self.elapsed, &self.instance_motion) {
            group.params = previous;
            return Err(e);
        }
        group.morph = MorphFilter::with_value(group.params.morph_rate, group.morph.value());
        Ok(())
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress.progress()
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.progress.step()
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.progress.stage()
    }

    pub fn label(&self) -> String {
        self.progress.label()
    }

    #[inline]
    pub fn controller(&self) -> &ProgressController {
        &self.progress
    }

    #[inline]
    pub fn foliage(&self) -> &PointGroup {
        &self.foliage
    }

    #[inline]
    pub fn point_vertices(&self) -> &[PointVertex] {
        self.foliage.vertices()
    }

    #[inline]
    pub fn instance_groups(&self) -> &[InstanceGroup] {
        &self.ornaments
    }

    pub fn instance_group(&self, index: usize) -> Option<&InstanceGroup> {
        self.ornaments.get(index)
    }

    #[inline]
    pub fn topper(&self) -> &Topper {
        &self.topper
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    pub fn reset_placement(&mut self) {
        self.placement.reset();
    }

    /// World matrix of the whole group at the last update's elapsed time.
    pub fn group_matrix(&self) -> Mat4 {
        self.placement.group_matrix(self.elapsed)
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total number of animated elements, topper included.
    pub fn element_count(&self) -> usize {
        self.foliage.registry.len()
            + self.ornaments.iter().map(|g| g.registry.len()).sum::<usize>()
            + 1
    }
}
