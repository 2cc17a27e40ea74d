use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spinraster::prelude::*;

/// Interactive viewer: drag to rotate, wheel to zoom, R to record one full
/// turn about Z, Escape to quit.
#[derive(Parser)]
#[command(name = "spinraster-viewer", version)]
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

    /// Directory recordings are written under, one sub-directory per take
    #[arg(long, default_value = "recordings")]
    out: PathBuf,
}

struct Take {
    session: SpinRecording,
    recorder: FrameRecorder,
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

    let mut window = Window::new("spinraster", config.width, config.height)?;
    let mut engine = Engine::new(&config);
    let mut controller = SpinController::new(&config);
    let mut limiter = FrameLimiter::new(&window);

    let mut take: Option<Take> = None;
    let mut takes_started = 0;

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::MouseDown { x, y } => controller.begin_drag(x, y),
                WindowEvent::MouseUp => controller.end_drag(),
                WindowEvent::MouseMotion { x, y } => controller.drag_to(x, y),
                WindowEvent::Wheel(delta) => controller.zoom(delta),
                WindowEvent::Record if take.is_none() => {
                    let dir = args.out.join(format!("take_{:03}", takes_started));
                    takes_started += 1;
                    take = Some(Take {
                        session: SpinRecording::start(&controller),
                        recorder: FrameRecorder::new(&dir)
                            .with_context(|| format!("creating take directory {:?}", dir))?,
                    });
                    window.set_title("spinraster (recording)")?;
                }
                WindowEvent::Record => {}
            }
        }

        let input = controller.advance();
        engine.render(&mesh, texture.as_ref(), &input);

        let finished = match take.as_mut() {
            Some(take) => {
                take.recorder.capture(engine.framebuffer())?;
                take.session.is_complete(&controller)
            }
            None => false,
        };
        if finished {
            if let Some(done) = take.take() {
                log::info!(
                    "Recorded {} frames to {:?}",
                    done.recorder.frames_written(),
                    done.recorder.dir()
                );
            }
            window.set_title("spinraster")?;
        }

        window.present(engine.framebuffer().color_bytes())?;
        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
