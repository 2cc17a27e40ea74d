use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spinraster::prelude::*;

/// Renders a spinning mesh without a window and records one full turn
/// about Z as numbered PNG files.
#[derive(Parser)]
#[command(name = "spinraster", version)]
struct Args {
    /// RON render config; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// OBJ mesh to render; the built-in cube when omitted
    #[arg(long)]
    mesh: Option<PathBuf>,

    /// Image to texture the mesh with; flat hue-cycling color when omitted
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Directory the frames are written to
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Stop after this many frames instead of a full turn
    #[arg(long)]
    frames: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            RenderConfig::load(path).with_context(|| format!("loading config {:?}", path))?
        }
        None => RenderConfig::default(),
    };
    let mesh = match &args.mesh {
        Some(path) => Mesh::from_obj(path).with_context(|| format!("loading mesh {:?}", path))?,
        None => Mesh::cube(),
    };
    let texture = args
        .texture
        .as_ref()
        .map(|path| {
            Texture::from_file(path).with_context(|| format!("loading texture {:?}", path))
        })
        .transpose()?;

    let mut engine = Engine::new(&config);
    let mut controller = SpinController::new(&config);
    let mut recorder = FrameRecorder::new(&args.out)
        .with_context(|| format!("creating output directory {:?}", args.out))?;
    let recording = SpinRecording::start(&controller);

    let mut totals = FrameStats::default();
    loop {
        let input = controller.advance();
        let stats = engine.render(&mesh, texture.as_ref(), &input);
        totals.culled += stats.culled;
        totals.degenerate += stats.degenerate;
        totals.pixels_written += stats.pixels_written;

        recorder.capture(engine.framebuffer())?;

        let frame_limit_hit = args
            .frames
            .is_some_and(|limit| recorder.frames_written() >= limit);
        if recording.is_complete(&controller) || frame_limit_hit {
            break;
        }
    }

    log::info!(
        "Wrote {} frames to {:?} ({} triangles culled, {} degenerate, {} pixels shaded)",
        recorder.frames_written(),
        recorder.dir(),
        totals.culled,
        totals.degenerate,
        totals.pixels_written
    );
    Ok(())
}
