use std::time::Duration;

use anyhow::Context;
use arix_core::{GroupParams, Placement, Scene, SceneConfig, Stage};
use clap::Parser;
use glam::Vec3;
use instant::Instant;

/// Headless driver: runs the scene loop on simulated time and reports how the
/// morph evolves and how long each update pass takes.
#[derive(Parser, Debug)]
#[command(name = "arix-native", version, about)]
struct Args {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 1200)]
    frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f32,

    /// Seconds between simulated interaction events (0 disables them)
    #[arg(long, default_value_t = 3.0)]
    advance_every: f32,

    /// Base seed for all population generators
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Foliage point count
    #[arg(long, default_value_t = arix_core::FOLIAGE_COUNT)]
    points: usize,

    /// Bauble count
    #[arg(long, default_value_t = arix_core::BAUBLE_COUNT)]
    baubles: usize,

    /// Gift box count
    #[arg(long, default_value_t = arix_core::BOX_COUNT)]
    boxes: usize,

    /// Interaction steps from scattered to assembled
    #[arg(long, default_value_t = arix_core::DEFAULT_MAX_STEPS)]
    max_steps: u32,

    /// Uniform placement scale
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Log a status line every N frames
    #[arg(long, default_value_t = 60)]
    report_every: u32,
}

fn build_config(args: &Args) -> SceneConfig {
    SceneConfig {
        max_steps: args.max_steps,
        foliage: GroupParams::foliage().with_count(args.points),
        ornaments: vec![
            GroupParams::baubles().with_count(args.baubles),
            GroupParams::boxes().with_count(args.boxes),
        ],
        ..SceneConfig::default()
    }
}

/// Centroid of the composed point cloud; drifts from the sphere center toward
/// the cone's center of mass as the foliage assembles.
fn foliage_centroid(scene: &Scene) -> Vec3 {
    let verts = scene.point_vertices();
    if verts.is_empty() {
        return Vec3::ZERO;
    }
    let sum = verts
        .iter()
        .fold(Vec3::ZERO, |acc, v| acc + Vec3::from(v.position));
    sum / verts.len() as f32
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("arix-native starting: {:?}", args);

    anyhow::ensure!(args.fps > 0.0, "--fps must be > 0");
    let config = build_config(&args);
    let mut scene = Scene::new(config, args.seed).context("building scene")?;
    scene.set_placement(Placement::new(args.scale, 0.0, 0.0));

    let dt = 1.0 / args.fps;
    let mut elapsed = 0.0_f32;
    let mut since_advance = 0.0_f32;
    let mut busy = Duration::ZERO;
    let mut worst = Duration::ZERO;

    for frame in 0..args.frames {
        elapsed += dt;
        since_advance += dt;
        if args.advance_every > 0.0 && since_advance >= args.advance_every {
            since_advance -= args.advance_every;
            scene.advance();
        }

        let start = Instant::now();
        scene.update(dt, elapsed);
        let cost = start.elapsed();
        busy += cost;
        worst = worst.max(cost);

        if args.report_every > 0 && frame % args.report_every == 0 {
            let morphs = scene
                .instance_groups()
                .iter()
                .map(|g| format!("{}={:.3}", g.kind().name(), g.morph()))
                .collect::<Vec<_>>()
                .join(" ");
            let c = foliage_centroid(&scene);
            log::info!(
                "[frame {:>5}] t={:>6.2}s step={} progress={:.2} foliage={:.3} {} topper_scale={:.3} centroid=({:.2},{:.2},{:.2})",
                frame,
                elapsed,
                scene.step(),
                scene.progress(),
                scene.foliage().morph(),
                morphs,
                scene.topper().applied_scale(),
                c.x,
                c.y,
                c.z
            );
        }
    }

    let frames = args.frames.max(1);
    let mean = busy / frames;
    log::info!(
        "[done] {} frames, {} elements, stage={:?}, label={:?}",
        scene.frames(),
        scene.element_count(),
        scene.stage(),
        scene.label()
    );
    log::info!(
        "[done] update cost mean={:.3}ms worst={:.3}ms (budget {:.3}ms)",
        mean.as_secs_f64() * 1e3,
        worst.as_secs_f64() * 1e3,
        dt as f64 * 1e3
    );
    if scene.stage() == Stage::Assembled {
        log::info!("[done] finished fully assembled");
    }
    Ok(())
}
