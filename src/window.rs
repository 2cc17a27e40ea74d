//! SDL2 presentation of the frame buffer.
//!
//! The window is fixed-size and shows the color buffer through one
//! streaming texture. SDL events are translated into [`WindowEvent`]s so the
//! viewer loop never touches SDL types.

use sdl2::event::{Event, WindowEvent as SdlWindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use thiserror::Error;

pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// SDL reports its failures as strings.
#[derive(Debug, Error)]
#[error("SDL error: {0}")]
pub struct WindowError(String);

impl From<String> for WindowError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Window closed or Escape pressed.
    Quit,
    /// Left button pressed at (x, y).
    MouseDown { x: i32, y: i32 },
    /// Left button released, or the pointer left the window.
    MouseUp,
    /// Pointer moved to (x, y).
    MouseMotion { x: i32, y: i32 },
    /// Wheel scrolled; positive is away from the user.
    Wheel(i32),
    /// `R` pressed.
    Record,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    // Fields drop in declaration order: the texture must go before its creator.
    texture: sdl2::render::Texture<'static>,
    #[allow(dead_code)]
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, WindowError> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated, never replaced, and
        // outlives texture by field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        // Packed ABGR is r, g, b, a in memory on little-endian targets.
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ABGR8888, width, height)
            .map_err(|e| e.to_string())?;

        log::info!("Opened {}x{} window {:?}", width, height, title);

        Ok(Self {
            texture,
            texture_creator,
            canvas,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains SDL's queue and returns the events the viewer reacts to.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            let mapped = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } => WindowEvent::Record,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => WindowEvent::MouseDown { x, y },
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                }
                | Event::Window {
                    win_event: SdlWindowEvent::Leave,
                    ..
                } => WindowEvent::MouseUp,
                Event::MouseMotion { x, y, .. } => WindowEvent::MouseMotion { x, y },
                Event::MouseWheel { y, .. } if y != 0 => WindowEvent::Wheel(y),
                _ => continue,
            };
            events.push(mapped);
        }
        events
    }

    /// Uploads packed RGBA bytes (`width * height * 4`) and shows them.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), WindowError> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), WindowError> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
