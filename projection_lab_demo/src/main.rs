//! Interactive projection demo.
//!
//! Drives the numeric core from a winit event loop and submits each
//! frame's draws to the headless backend (swap in a windowed backend
//! behind the same trait to see pixels).
//!
//! Controls:
//! - `W`/`A`/`S`/`D`/`Q`/`E`: move the camera
//! - left drag: orbit
//! - `P`: toggle projected mode
//! - `V`: perspective/orthographic sub-view (projected mode)
//! - `C`: pin/unpin the frustum wireframe
//! - `Escape`: quit

use std::time::Instant;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use projection_lab_core::lab_info;
use projection_lab_core::projlab::input::{InputFrame, Movement};
use projection_lab_core::projlab::projection::DepthRange;
use projection_lab_core::projlab::render::{RenderState, RenderStateDesc};
use projection_lab_core::projlab::renderer::{
    DrawSubmission, GraphicsBackend, HeadlessBackend, PipelineKind,
};
use projection_lab_core::projlab::resource::{ExpandedMesh, RgbaTexture, TriangleMesh};
use projection_lab_core::projlab::Result;

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 720.0;

struct DemoApp {
    window: Option<Window>,
    state: RenderState,
    mesh: ExpandedMesh,
    backend: HeadlessBackend,
    input: InputFrame,
    last_cursor: Option<Vec2>,
    last_frame: Instant,
}

impl DemoApp {
    fn new() -> Result<Self> {
        let mesh = TriangleMesh::unit_cube().expand(false)?;
        let texture = RgbaTexture::checkerboard(64, 64, 8, 0xffffffff, 0xff202020)?;
        lab_info!(
            "demo",
            "loaded cube ({} vertices) and {}x{} texture",
            mesh.positions.len(),
            texture.width(),
            texture.height()
        );

        let aspect = (WINDOW_WIDTH / WINDOW_HEIGHT) as f32;
        Ok(Self {
            window: None,
            state: RenderState::new(RenderStateDesc::new(aspect, DepthRange::NegativeOneToOne)),
            mesh,
            backend: HeadlessBackend::new(),
            input: InputFrame::default(),
            last_cursor: None,
            last_frame: Instant::now(),
        })
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool, event_loop: &ActiveEventLoop) {
        let movement = match code {
            KeyCode::KeyW => Some(Movement::FORWARD),
            KeyCode::KeyS => Some(Movement::BACKWARD),
            KeyCode::KeyA => Some(Movement::LEFT),
            KeyCode::KeyD => Some(Movement::RIGHT),
            KeyCode::KeyE => Some(Movement::UP),
            KeyCode::KeyQ => Some(Movement::DOWN),
            _ => None,
        };
        if let Some(movement) = movement {
            self.input.movement.set(movement, pressed);
            return;
        }

        // Action keys fire on press only.
        if !pressed {
            return;
        }
        match code {
            KeyCode::KeyP => self.state.toggle_mode(&self.mesh.positions),
            KeyCode::KeyV => self.state.toggle_view(),
            KeyCode::KeyC => self.state.toggle_pin(),
            KeyCode::Escape => event_loop.exit(),
            _ => {}
        }
    }

    fn render_frame(&mut self) -> Result<()> {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.state.update(&self.input, delta_time);
        self.input.clear_deltas();

        self.backend.begin_frame()?;

        let mvp = self.state.mvp_uniform();
        if self.state.mode().is_projected() {
            let projector = self.state.projector();
            self.backend.draw(&DrawSubmission {
                pipeline: PipelineKind::PerspectiveCorrect,
                positions: bytemuck::cast_slice(projector.projected()),
                uvs: Some(self.mesh.uv_bytes()),
                depth_recips: Some(bytemuck::cast_slice(projector.depth_recips())),
                indices: Some(self.mesh.index_bytes()),
                element_count: self.mesh.indices.len() as u32,
                mvp,
            })?;
        } else {
            self.backend.draw(&DrawSubmission {
                pipeline: PipelineKind::Standard,
                positions: self.mesh.position_bytes(),
                uvs: Some(self.mesh.uv_bytes()),
                depth_recips: None,
                indices: Some(self.mesh.index_bytes()),
                element_count: self.mesh.indices.len() as u32,
                mvp,
            })?;
        }

        if let Some(lines) = self.state.frustum_wireframe() {
            self.backend.draw(&DrawSubmission {
                pipeline: PipelineKind::Lines,
                positions: bytemuck::cast_slice(&lines),
                uvs: None,
                depth_recips: None,
                indices: None,
                element_count: lines.len() as u32,
                mvp,
            })?;
        }

        self.backend.end_frame()
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("projection lab")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        match event_loop.create_window(attrs) {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
                self.last_frame = Instant::now();
            }
            Err(error) => {
                projection_lab_core::lab_error!("demo", "failed to create window: {error}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code, event.state == ElementState::Pressed, event_loop);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.input.mouse_down = state == ElementState::Pressed;
                    if !self.input.mouse_down {
                        self.last_cursor = None;
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let cursor = Vec2::new(position.x as f32, position.y as f32);
                if self.input.mouse_down {
                    if let Some(last) = self.last_cursor {
                        self.input.mouse_delta += cursor - last;
                    }
                }
                self.last_cursor = Some(cursor);
            }

            WindowEvent::RedrawRequested => {
                if let Err(error) = self.render_frame() {
                    projection_lab_core::lab_error!("demo", "frame failed: {error}");
                    event_loop.exit();
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let mut app = DemoApp::new()?;

    let event_loop = EventLoop::new().map_err(|error| {
        projection_lab_core::projlab::Error::InitializationFailed(format!(
            "failed to create event loop: {error}"
        ))
    })?;
    event_loop.set_control_flow(ControlFlow::Poll);

    lab_info!("demo", "starting event loop");
    event_loop.run_app(&mut app).map_err(|error| {
        projection_lab_core::projlab::Error::InitializationFailed(format!(
            "event loop terminated with error: {error}"
        ))
    })
}
