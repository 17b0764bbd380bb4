use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use cubeplay::camera::Camera;
use cubeplay::cli::Cli;
use cubeplay::config::RenderConfig;
use cubeplay::frame::{FpsCounter, FrameIterator};
use cubeplay::renderer::SceneRenderer;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    cli: Cli,
    config: RenderConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    camera: Camera,
    frames: FrameIterator,
    fps: FpsCounter,
    input_grab: bool,
}

impl App {
    fn new(cli: Cli, config: RenderConfig) -> Self {
        let camera = Camera::new(
            config.camera_position(),
            config.camera_target(),
            config.camera_speed,
            config.mouse_sensitivity,
        );

        Self {
            cli,
            config,
            window: None,
            renderer: None,
            camera,
            frames: FrameIterator::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
            input_grab: false,
        }
    }

    /// Mouse-look grab toggle: lock and hide the cursor while flying, give
    /// it back for the overlay.
    fn toggle_input_grab(&mut self) {
        let Some(window) = &self.window else { return };

        self.input_grab = !self.input_grab;
        let mode = if self.input_grab {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::None
        };

        let result = window.set_cursor_grab(mode).or_else(|_| {
            // Locked grab is unsupported on some platforms.
            if self.input_grab {
                window.set_cursor_grab(CursorGrabMode::Confined)
            } else {
                Ok(())
            }
        });
        if let Err(e) = result {
            log::warn!("cursor grab failed: {e}");
            self.input_grab = false;
            return;
        }
        window.set_cursor_visible(!self.input_grab);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("cubeplay")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.config.width,
                        self.config.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                self.config,
                self.cli.cube_texture.as_deref(),
                self.cli.ground_texture.as_deref(),
                !self.cli.no_ui,
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Released,
                        physical_key: PhysicalKey::Code(KeyCode::KeyQ),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Released,
                        physical_key: PhysicalKey::Code(KeyCode::KeyE),
                        ..
                    },
                ..
            } => self.toggle_input_grab(),
            WindowEvent::KeyboardInput { event, .. } => self.camera.process_keyboard(&event),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = self.frames.advance();
                if let Some(fps) = self.fps.tick(frame.delta) {
                    log::info!("fps: {fps:.1}");
                }

                self.camera.update();

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(&self.camera, window, self.fps.fps(), &frame) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(e) => log::error!("render error: {e}"),
                    }
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        // Raw deltas only while the cursor is grabbed; otherwise the mouse
        // belongs to the overlay.
        if self.input_grab {
            if let DeviceEvent::MouseMotion { delta } = event {
                self.camera
                    .apply_mouse_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, config);

    log::info!("controls: WASD + Space/Z, E grabs the mouse, Q or Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
