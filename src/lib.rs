// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod render;

pub use config::{Color, GaugeConfig};
pub use controller::{DragTarget, DualArcKnobController, Layout};
pub use error::{ConfigError, GaugeError};
pub use geometry::{AngleRange, Circle, Point};
pub use render::{Canvas, DrawCommand, Scene};

// External crate imports
use pixels::{Pixels, SurfaceTexture};

// Window management imports
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, Event, MouseButton, Touch, TouchPhase, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// The dual-arc gauge in its own window.
#[derive(Debug, Clone)]
pub struct Speedometer {
    config: GaugeConfig,
    controller: DualArcKnobController,
}

impl Speedometer {
    pub fn new(config: GaugeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let controller = DualArcKnobController::new(&config);
        Ok(Self { config, controller })
    }

    pub fn controller(&self) -> &DualArcKnobController {
        &self.controller
    }

    /// Opens the window and runs the event loop until it is closed.
    pub fn show(&mut self) -> Result<(), GaugeError> {
        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width as f64,
                self.config.window_height as f64,
            ))
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let config = &self.config;
        let controller = &mut self.controller;
        controller.layout(fb_width as f64, fb_height as f64);
        log::info!("opened '{}' at {}x{}", config.title, fb_width, fb_height);

        let mut pointer = PointerTracker::default();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Wait);
            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        if new_size.width == 0 || new_size.height == 0 {
                            // minimised
                            return;
                        }
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        if let Err(e) = pixels.resize_buffer(new_size.width, new_size.height) {
                            log::error!("Failed to resize frame buffer: {}", e);
                        }
                        if let Err(e) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::error!("Failed to resize surface: {}", e);
                        }
                        controller.layout(fb_width as f64, fb_height as f64);
                        window_clone.request_redraw();
                    }
                    WindowEvent::RedrawRequested => {
                        let frame = pixels.frame_mut();
                        let mut canvas = Canvas::new(frame, fb_width, fb_height);
                        Scene::from_controller(controller, config).render(&mut canvas);
                        if let Err(e) = pixels.render() {
                            log::error!("Drawing error: {}", e);
                        }
                    }
                    other => {
                        if pointer.dispatch(&other, controller) {
                            window_clone.request_redraw();
                        }
                    }
                }
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// INPUT ADAPTER
// ============================================================================

/// Turns winit mouse and touch events into single-pointer gestures.
///
/// Mouse presses arrive without coordinates, so the last cursor position is
/// kept. Only the first finger to touch down is followed until it lifts.
#[derive(Debug, Default)]
struct PointerTracker {
    cursor: Option<Point>,
    finger: Option<u64>,
}

impl PointerTracker {
    /// Returns true when the gauge needs a redraw.
    fn dispatch(&mut self, event: &WindowEvent, controller: &mut DualArcKnobController) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let point = to_point(*position);
                self.cursor = Some(point);
                controller.on_pointer_move(point)
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                false
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                match state {
                    ElementState::Pressed => {
                        if let Some(point) = self.cursor {
                            controller.on_pointer_down(point);
                        }
                    }
                    ElementState::Released => controller.on_pointer_up(),
                }
                false
            }
            WindowEvent::Touch(Touch {
                id,
                phase,
                location,
                ..
            }) => self.touch(*id, *phase, to_point(*location), controller),
            _ => false,
        }
    }

    fn touch(
        &mut self,
        id: u64,
        phase: TouchPhase,
        point: Point,
        controller: &mut DualArcKnobController,
    ) -> bool {
        match phase {
            TouchPhase::Started if self.finger.is_none() => {
                self.finger = Some(id);
                controller.on_pointer_down(point);
                false
            }
            TouchPhase::Moved if self.finger == Some(id) => controller.on_pointer_move(point),
            TouchPhase::Ended | TouchPhase::Cancelled if self.finger == Some(id) => {
                self.finger = None;
                controller.on_pointer_up();
                false
            }
            _ => false,
        }
    }
}

fn to_point(position: PhysicalPosition<f64>) -> Point {
    Point::new(position.x, position.y)
}
