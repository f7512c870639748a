//! rtview demo - realtime video view driven by a synthetic producer
//!
//! Opens a window, constructs a `VideoView` on it, and spawns a producer
//! thread pushing color-bar frames at ~30fps. Keys: M toggles mirroring,
//! F toggles aspect fit/fill, left/right arrows rotate in 15-degree
//! steps.

mod pattern;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use rtview_core::{DisplayMode, DisplaySettings, DrawableSize};
use rtview_view::VideoView;
use tracing::{debug, error, info, Level};
use tracing_subscriber::FmtSubscriber;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const FRAME_WIDTH: u32 = 640;
const FRAME_HEIGHT: u32 = 360;
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Re-queries the window's inner size on every draw.
struct WindowDrawable(Arc<Window>);

impl DrawableSize for WindowDrawable {
    fn drawable_size(&self) -> (u32, u32) {
        let size = self.0.inner_size();
        (size.width, size.height)
    }
}

#[derive(Default)]
struct App {
    window: Option<Arc<Window>>,
    view: Option<VideoView>,
    producer: Option<thread::JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl App {
    fn update_settings(&self, update: impl FnOnce(&mut DisplaySettings)) {
        if let (Some(view), Some(window)) = (&self.view, &self.window) {
            let mut settings = view.display_settings();
            update(&mut settings);
            view.set_display_settings(settings);
            window.request_redraw();
        }
    }

    fn spawn_producer(&mut self) {
        let (Some(view), Some(window)) = (&self.view, &self.window) else {
            return;
        };
        let handle = view.handle();
        let window = window.clone();
        let stop = self.stop.clone();

        self.producer = Some(thread::spawn(move || {
            let start = Instant::now();
            let mut sequence = 0u64;
            while !stop.load(Ordering::Relaxed) {
                let frame = pattern::color_bars(
                    FRAME_WIDTH,
                    FRAME_HEIGHT,
                    start.elapsed().as_secs_f32(),
                    sequence,
                );
                handle.set_frame(frame);
                window.request_redraw();
                sequence += 1;
                thread::sleep(FRAME_INTERVAL);
            }
        }));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes().with_title("rtview");
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let view = VideoView::new(
            window.clone(),
            Arc::new(WindowDrawable(window.clone())) as Arc<dyn DrawableSize>,
        );
        info!("active backend: {:?}", view.backend());

        self.window = Some(window);
        self.view = Some(view);
        self.spawn_producer();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.stop.store(true, Ordering::Relaxed);
                if let Some(producer) = self.producer.take() {
                    let _ = producer.join();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(view) = &mut self.view {
                    if let Err(e) = view.render_frame() {
                        // Frame-level failures drop only this frame.
                        debug!("frame dropped: {e}");
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyM) => {
                        self.update_settings(|s| s.mirror_horizontally = !s.mirror_horizontally);
                    }
                    PhysicalKey::Code(KeyCode::KeyF) => {
                        self.update_settings(|s| {
                            s.display_mode = match s.display_mode {
                                DisplayMode::AspectFit => DisplayMode::AspectFill,
                                DisplayMode::AspectFill => DisplayMode::AspectFit,
                            }
                        });
                    }
                    PhysicalKey::Code(KeyCode::ArrowLeft) => {
                        self.update_settings(|s| s.rotation_degrees -= 15.0);
                    }
                    PhysicalKey::Code(KeyCode::ArrowRight) => {
                        self.update_settings(|s| s.rotation_degrees += 15.0);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("rtview demo starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;

    Ok(())
}
