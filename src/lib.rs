#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use arix_core::{checked_count, Scene, SceneConfig};
use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

mod host;

fn to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&format!("{:#}", e))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("arix-web starting");
    Ok(())
}

fn build_scene(seed: u64) -> anyhow::Result<Scene> {
    Scene::new(SceneConfig::default(), seed).with_context(|| format!("scene seed={seed}"))
}

/// JavaScript handle on a scene. The host owns the render loop: call `tick`
/// once per animation frame, `advance` on each interaction, then upload the
/// buffers.
#[wasm_bindgen]
pub struct ArixScene {
    scene: Scene,
}

#[wasm_bindgen]
impl ArixScene {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Result<ArixScene, JsValue> {
        let seed = host::seed_from_js(seed);
        let scene = build_scene(seed).map_err(to_js)?;
        log::info!("[scene] seed={} elements={}", seed, scene.element_count());
        Ok(ArixScene { scene })
    }

    pub fn advance(&mut self) -> u32 {
        self.scene.advance()
    }

    pub fn progress(&self) -> f32 {
        self.scene.progress()
    }

    pub fn step(&self) -> u32 {
        self.scene.step()
    }

    pub fn label(&self) -> String {
        self.scene.label()
    }

    pub fn tick(&mut self, dt: f32, elapsed: f32) {
        self.scene.update(dt, elapsed);
    }

    pub fn point_count(&self) -> usize {
        self.scene.point_vertices().len()
    }

    pub fn point_stride(&self) -> usize {
        host::POINT_STRIDE
    }

    pub fn point_buffer(&self) -> Float32Array {
        Float32Array::from(host::points_f32(self.scene.point_vertices()))
    }

    pub fn group_count(&self) -> usize {
        self.scene.instance_groups().len()
    }

    pub fn group_kind(&self, group: usize) -> Option<String> {
        self.scene
            .instance_group(group)
            .map(|g| g.kind().name().to_string())
    }

    pub fn instance_stride(&self) -> usize {
        host::INSTANCE_STRIDE
    }

    pub fn instance_buffer(&self, group: usize) -> Result<Float32Array, JsValue> {
        let g = self
            .scene
            .instance_group(group)
            .ok_or_else(|| to_js(format!("no instance group {group}")))?;
        Ok(Float32Array::from(host::instances_f32(g.buffer().as_slice())))
    }

    pub fn topper_matrix(&self) -> Float32Array {
        let m = self.scene.topper().transform().to_matrix();
        Float32Array::from(&host::matrix_f32(&m)[..])
    }

    pub fn group_matrix(&self) -> Float32Array {
        Float32Array::from(&host::matrix_f32(&self.scene.group_matrix())[..])
    }

    pub fn set_placement(&mut self, scale: f32, x: f32, y: f32) {
        self.scene.set_placement(host::placement_from_js(scale, x, y));
    }

    pub fn reset_placement(&mut self) {
        self.scene.reset_placement();
    }

    pub fn set_point_count(&mut self, count: i32) -> Result<(), JsValue> {
        let count = checked_count(count as i64).map_err(to_js)?;
        self.scene.set_point_count(count).map_err(to_js)
    }

    pub fn set_group_count(&mut self, group: usize, count: i32) -> Result<(), JsValue> {
        let count = checked_count(count as i64).map_err(to_js)?;
        self.scene.set_group_count(group, count).map_err(to_js)
    }

    /// Replace a group's palette with CSS hex colors (`#RRGGBB`).
    pub fn set_group_palette(&mut self, group: usize, palette: Vec<String>) -> Result<(), JsValue> {
        let current = self
            .scene
            .instance_group(group)
            .ok_or_else(|| to_js(format!("no instance group {group}")))?;
        let params = host::with_hex_palette(&current.params, &palette).map_err(to_js)?;
        self.scene.set_group_params(group, params).map_err(to_js)
    }
}
