//! Windowing shell: winit event loop around the orb and its renderer.
//!
//! Left-drag orbits the camera, the wheel zooms, moving the pointer repels
//! the particles, and the keys 1/2/3 switch between the named presets.

use std::sync::Arc;

use tracing::{error, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::{OrbConfig, PRESETS};
use crate::error::OrbError;
use crate::gpu::GpuState;
use crate::input::Pointer;
use crate::mesh;
use crate::orb::Orb;
use crate::time::FrameClock;

/// Run the orb application with the given starting configuration.
///
/// Blocks until the window is closed.
pub fn run(config: OrbConfig) -> Result<(), OrbError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    orb: Option<Orb>,
    clock: FrameClock,
    pointer: Pointer,
    initial: OrbConfig,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    fn new(config: OrbConfig) -> Self {
        Self {
            window: None,
            gpu: None,
            orb: None,
            clock: FrameClock::new(),
            pointer: Pointer::new(1280, 720),
            initial: config,
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    fn apply_preset(&mut self, index: usize) {
        let (Some(orb), Some(preset)) = (self.orb.as_mut(), PRESETS.get(index)) else {
            return;
        };

        let old_radius = orb.config().particle_radius;
        match orb.apply_preset(preset) {
            Ok(()) => {
                let new_radius = orb.config().particle_radius;
                if new_radius != old_radius {
                    if let Some(gpu) = self.gpu.as_mut() {
                        gpu.set_mesh(&mesh::icosahedron(new_radius));
                    }
                }
            }
            Err(err) => warn!(%err, preset = preset.name, "preset rejected"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("dustorb")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!(%err, "failed to create window");
                event_loop.exit();
                return;
            }
        };
        let size = window.inner_size();
        self.pointer.set_window_size(size.width, size.height);
        self.window = Some(window.clone());

        let body = mesh::icosahedron(self.initial.particle_radius);
        let gpu = match pollster::block_on(GpuState::new(
            window,
            &body,
            self.initial.particle_count,
        )) {
            Ok(gpu) => gpu,
            Err(err) => {
                error!(%err, "GPU initialization failed");
                event_loop.exit();
                return;
            }
        };

        let orb = match Orb::new(self.initial, gpu.max_instances()) {
            Ok(orb) => orb,
            Err(err) => {
                error!(%err, "initial configuration rejected");
                event_loop.exit();
                return;
            }
        };

        self.gpu = Some(gpu);
        self.orb = Some(orb);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.pointer.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        match code {
                            KeyCode::Digit1 => self.apply_preset(0),
                            KeyCode::Digit2 => self.apply_preset(1),
                            KeyCode::Digit3 => self.apply_preset(2),
                            _ => {}
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                    if !self.mouse_pressed {
                        self.last_mouse_pos = None;
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((last_x, last_y)) = self.last_mouse_pos {
                        let dx = position.x - last_x;
                        let dy = position.y - last_y;

                        if let Some(gpu) = &mut self.gpu {
                            gpu.camera.yaw -= dx as f32 * 0.005;
                            gpu.camera.pitch += dy as f32 * 0.005;
                            gpu.camera.pitch = gpu.camera.pitch.clamp(-1.5, 1.5);
                        }
                    }
                    self.last_mouse_pos = Some((position.x, position.y));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                if let Some(gpu) = &mut self.gpu {
                    gpu.camera.distance -= scroll * 0.3;
                    gpu.camera.distance = gpu.camera.distance.clamp(0.5, 20.0);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(orb)) = (&mut self.gpu, &mut self.orb) {
                    let (elapsed, _delta) = self.clock.update();
                    orb.set_pointer(self.pointer.ndc());
                    orb.update(elapsed, &gpu.view_proj());

                    match gpu.render(orb.instances(), orb.config(), elapsed) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
