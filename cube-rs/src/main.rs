mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cube_scene::uniform::{MODEL_UNIFORM, PROJECTION_UNIFORM, VIEW_UNIFORM};
use cube_scene::{CubeScene, FrameInput, LookAtCamera, ModelRotation, RecordingBackend, Size};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::config::CubeConfiguration;

/// Renders the spinning cube headlessly and prints what would have been sent to the GPU.
#[derive(Parser, Debug)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to render, overrides the configuration
    #[arg(short, long)]
    frames: Option<u32>,

    /// Hold the rotate key for this many frames from the start
    #[arg(long, default_value_t = 0)]
    rotate_frames: u32,

    /// Press the reset key on this frame
    #[arg(long)]
    reset_at: Option<u32>,

    /// Print the recorded commands as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn input_for(&self, frame: u32) -> FrameInput {
        FrameInput {
            rotate: frame < self.rotate_frames,
            reset: self.reset_at == Some(frame),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_scene(config: &CubeConfiguration) -> cube_scene::errors::Result<CubeScene> {
    let camera = LookAtCamera::new(
        config.camera.position(),
        config.camera.target(),
        config.camera.up(),
    );

    let scene = CubeScene::new(camera, Size::new(config.window.width, config.window.height))
        .with_rotation(ModelRotation::new(config.animation.angle_delta))
        .with_clear_color(config.scene.clear_color)
        .with_color_seed(config.scene.color_seed);

    match config.scene.ortho_half_height {
        Some(half_height) => scene.with_orthographic_projection(half_height),
        None => Ok(scene),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = CubeConfiguration::load(args.config.as_deref())
        .context("Failed to load configuration")?;

    let frames = args.frames.unwrap_or(config.frames);
    info!(frames, camera = ?config.camera, "Starting headless render");

    let mut scene = build_scene(&config).context("Invalid scene configuration")?;
    let mut backend =
        RecordingBackend::with_known_uniforms([VIEW_UNIFORM, MODEL_UNIFORM, PROJECTION_UNIFORM]);

    scene
        .init(&mut backend)
        .context("Failed to initialize the scene")?;

    for frame in 0..frames {
        scene
            .render_frame(args.input_for(frame), &mut backend)
            .with_context(|| format!("Failed to render frame {frame}"))?;
    }

    let commands = backend.take_commands();
    info!(
        commands = commands.len(),
        angle = scene.get_rotation().get_angle(),
        "Done"
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&commands).context("Failed to serialize commands")?
        );
    } else {
        print!("{}", report::summarize(&commands));
    }

    Ok(())
}
