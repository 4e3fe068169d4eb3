//! Per-element immutable data, generated once per population change.

use crate::constants::*;
use crate::error::{ensure_positive, Result, SceneError};
use crate::sampling::{push_to_surface, sample_cone, sample_sphere};
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::PI;

/// Small ordered color set an element's static color is drawn from.
pub type Palette = SmallVec<[Vec3; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    Point,
    Bauble,
    Box,
    Topper,
}

impl ElementKind {
    /// Kinds that decorate the cone surface rather than filling its volume.
    #[inline]
    pub fn sits_on_surface(self) -> bool {
        matches!(self, ElementKind::Bauble | ElementKind::Box)
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Point => "point",
            ElementKind::Bauble => "bauble",
            ElementKind::Box => "box",
            ElementKind::Topper => "topper",
        }
    }
}

/// One animated element.
///
/// Fields:
/// - `assembled`: position inside (or on) the cone
/// - `scattered`: position inside the scatter sphere
/// - `phase`: uniform in `[0, 1)`, desynchronizes secondary motion
/// - `scale`: instance scale, or base point size for `Point`
/// - `base_rotation`: Euler XYZ angles, each in `[0, π]`
/// - `color`: static color picked from the group palette
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub id: u32,
    pub kind: ElementKind,
    pub assembled: Vec3,
    pub scattered: Vec3,
    pub phase: f32,
    pub scale: f32,
    pub base_rotation: Vec3,
    pub color: Vec3,
}

/// Population parameters for one group.
#[derive(Clone, Debug)]
pub struct GroupParams {
    pub kind: ElementKind,
    pub count: usize,
    pub cone_height: f32,
    pub cone_radius: f32,
    pub sphere_radius: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub palette: Palette,
    pub morph_rate: f32,
}

impl GroupParams {
    /// The diffuse point cloud forming the bulk of the tree.
    pub fn foliage() -> Self {
        Self {
            kind: ElementKind::Point,
            count: FOLIAGE_COUNT,
            cone_height: FOLIAGE_CONE_HEIGHT,
            cone_radius: FOLIAGE_CONE_RADIUS,
            sphere_radius: FOLIAGE_SPHERE_RADIUS,
            scale_min: POINT_SIZE_MIN,
            scale_max: POINT_SIZE_MAX,
            palette: SmallVec::from_slice(&[emerald()]),
            morph_rate: POINT_MORPH_RATE,
        }
    }

    pub fn baubles() -> Self {
        Self::ornaments(ElementKind::Bauble, BAUBLE_COUNT, &BAUBLE_PALETTE)
    }

    pub fn boxes() -> Self {
        Self::ornaments(ElementKind::Box, BOX_COUNT, &BOX_PALETTE)
    }

    fn ornaments(kind: ElementKind, count: usize, palette: &[[f32; 3]]) -> Self {
        Self {
            kind,
            count,
            cone_height: ORNAMENT_CONE_HEIGHT,
            cone_radius: ORNAMENT_CONE_RADIUS,
            sphere_radius: ORNAMENT_SPHERE_RADIUS,
            scale_min: ORNAMENT_SCALE_MIN,
            scale_max: ORNAMENT_SCALE_MAX,
            palette: palette.iter().copied().map(Vec3::from).collect(),
            morph_rate: INSTANCE_MORPH_RATE,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Vec3>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("cone_height", self.cone_height)?;
        ensure_positive("cone_radius", self.cone_radius)?;
        ensure_positive("sphere_radius", self.sphere_radius)?;
        ensure_positive("morph_rate", self.morph_rate)?;
        let range_ok = self.scale_min.is_finite()
            && self.scale_max.is_finite()
            && self.scale_min >= 0.0
            && self.scale_min <= self.scale_max;
        if !range_ok {
            return Err(SceneError::ScaleRange {
                min: self.scale_min,
                max: self.scale_max,
            });
        }
        if self.palette.is_empty() {
            return Err(SceneError::EmptyPalette);
        }
        Ok(())
    }
}

/// Immutable element set of one group.
///
/// Only shared access is handed out; a population change builds a new
/// registry and replaces the old one as a whole.
#[derive(Clone, Debug)]
pub struct ElementRegistry {
    kind: ElementKind,
    elements: Vec<Element>,
}

impl ElementRegistry {
    pub fn build<R: Rng + ?Sized>(params: &GroupParams, rng: &mut R) -> Result<Self> {
        params.validate()?;
        let elements = (0..params.count)
            .map(|i| build_element(i as u32, params, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[registry] built {} {} elements",
            elements.len(),
            params.kind.name()
        );
        Ok(Self {
            kind: params.kind,
            elements,
        })
    }

    pub fn empty(kind: ElementKind) -> Self {
        Self {
            kind,
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }
}

fn build_element<R: Rng + ?Sized>(id: u32, params: &GroupParams, rng: &mut R) -> Element {
    let mut assembled = sample_cone(rng, params.cone_height, params.cone_radius);
    if params.kind.sits_on_surface() {
        assembled = push_to_surface(assembled, SURFACE_PUSH_FACTOR, SURFACE_PUSH_MIN_RADIUS);
    }
    let scattered = sample_sphere(rng, params.sphere_radius);
    let scale = if params.scale_max > params.scale_min {
        rng.gen_range(params.scale_min..params.scale_max)
    } else {
        params.scale_min
    };
    let color = params
        .palette
        .choose(rng)
        .copied()
        .unwrap_or(Vec3::ONE);
    let base_rotation = Vec3::new(
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
        rng.gen::<f32>() * PI,
    );
    let phase = rng.gen::<f32>();
    Element {
        id,
        kind: params.kind,
        assembled,
        scattered,
        phase,
        scale,
        base_rotation,
        color,
    }
}
