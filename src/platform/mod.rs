//! Native platform shell
//!
//! Owns the process lifecycle: window and GPU surface creation, the winit
//! event loop, input routing, frame pacing, and teardown. Everything else
//! in the crate is driven from here.

pub mod input;
pub mod time;

use std::fmt;
use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::renderer::{RenderState, frame_vertices};
use crate::sim::{GameState, update};

use self::input::{handle_key, handle_quit, map_key_code};
use self::time::FrameClock;

/// Errors raised while bringing up the window or the GPU
///
/// All of these are fatal: they abort startup before the game loop runs.
#[derive(Debug)]
pub enum PlatformError {
    EventLoop(winit::error::EventLoopError),
    CreateWindow(winit::error::OsError),
    CreateSurface(wgpu::CreateSurfaceError),
    RequestAdapter(wgpu::RequestAdapterError),
    RequestDevice(wgpu::RequestDeviceError),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(err) => write!(f, "event loop error: {err}"),
            PlatformError::CreateWindow(err) => write!(f, "failed to create window: {err}"),
            PlatformError::CreateSurface(err) => {
                write!(f, "failed to create rendering surface: {err}")
            }
            PlatformError::RequestAdapter(err) => write!(f, "no suitable GPU adapter: {err}"),
            PlatformError::RequestDevice(err) => write!(f, "failed to create GPU device: {err}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::EventLoop(err) => Some(err),
            PlatformError::CreateWindow(err) => Some(err),
            PlatformError::CreateSurface(err) => Some(err),
            PlatformError::RequestAdapter(err) => Some(err),
            PlatformError::RequestDevice(err) => Some(err),
        }
    }
}

/// Open the window and run the game until quit
///
/// Returns `Err` when window or GPU initialization fails; the caller maps
/// that to a non-zero exit. A user quit (Escape, window close) returns `Ok`.
pub fn run() -> Result<(), PlatformError> {
    let event_loop = EventLoop::new().map_err(PlatformError::EventLoop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app).map_err(PlatformError::EventLoop)?;

    // winit 0.30 hands out the window inside the running loop, so an init
    // failure surfaces here rather than before `run_app`
    match app.init_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Application state driven by the winit event loop
struct App {
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    state: GameState,
    clock: FrameClock,
    init_error: Option<PlatformError>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            render_state: None,
            state: GameState::new(),
            clock: FrameClock::new(),
            init_error: None,
        }
    }

    /// Create the window and bring up the GPU surface, adapter, and device
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = WindowAttributes::default()
            .with_title("Solo Pong")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64))
            .with_resizable(false)
            .with_decorations(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::CreateWindow)?,
        );
        center_window(&window);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(PlatformError::CreateSurface)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(PlatformError::RequestAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state =
            pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height))
                .map_err(PlatformError::RequestDevice)?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    /// One loop iteration: pacing, simulation step, draw
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.running {
            log::info!("Quit requested, leaving main loop");
            event_loop.exit();
            return;
        }

        let dt = self.clock.tick();
        update(&mut self.state, dt);

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let vertices = frame_vertices(&self.state.ball, &self.state.paddle);
        match render_state.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_graphics(event_loop) {
            log::error!("Initialization failed: {err}");
            self.init_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => handle_quit(&mut self.state),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(key) = map_key_code(code) {
                    handle_key(&mut self.state, key, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Center the window on its monitor, best effort
fn center_window(window: &Window) {
    let Some(monitor) = window.current_monitor() else {
        log::debug!("No monitor handle, leaving window position to the WM");
        return;
    };

    let monitor_size = monitor.size();
    let monitor_pos = monitor.position();
    let window_size = window.outer_size();

    let x = monitor_pos.x + (monitor_size.width.saturating_sub(window_size.width) / 2) as i32;
    let y = monitor_pos.y + (monitor_size.height.saturating_sub(window_size.height) / 2) as i32;
    window.set_outer_position(PhysicalPosition::new(x, y));
}
