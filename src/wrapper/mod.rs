//! Runs a [`Window`] on a real native window, using winit for windowing and
//! input and softbuffer for pixels. Everything outside this module works
//! without it, so the rest of the crate stays testable headlessly.

use std::rc::Rc;
use std::time::Instant;

use log::{debug, warn};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window as NativeWindow, WindowId};

use crate::{Area, Frame, Pos2D, Shape, Window, WindowFeature};

mod font;
mod frame;
mod surface;

pub use frame::WinitFrame;
pub use surface::SoftSurface;

/// The things that can go wrong between a scene and the screen.
#[derive(Debug, Error)]
pub enum WrapperError {
    #[error("event loop failure: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create a native window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("rendering failed: {0}")]
    Surface(String),
}

struct Scene {
    title: String,
    area: Box<dyn Area>,
    shapes: Vec<Box<dyn Shape>>,
    features: Vec<WindowFeature>,
}

struct App {
    scene: Option<Scene>,
    frame: Option<WinitFrame>,
    // Kept alive for the lifetime of the loop
    _window: Option<Window>,
    next_repaint: Option<Instant>,
    error: Option<WrapperError>,
}

impl App {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<(), WrapperError> {
        let Some(scene) = self.scene.take() else {
            return Ok(());
        };
        let native = Rc::new(
            event_loop.create_window(NativeWindow::default_attributes().with_visible(false))?,
        );
        let frame = WinitFrame::new(native)?;
        self.frame = Some(frame.clone());
        let mut window = Window::new(
            &scene.title,
            scene.area,
            scene.shapes,
            scene.features,
            move || Box::new(frame) as Box<dyn Frame>,
        );
        window.show();
        self._window = Some(window);
        debug!("native window opened");
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: WrapperError) {
        warn!("shutting down: {}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Err(error) = self.open(event_loop) {
            self.fail(event_loop, error);
        }
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            if let Some(frame) = &self.frame {
                if let Some(interval) = frame.timer_interval() {
                    frame.repaint_handle().request_redraw();
                    self.next_repaint = Some(Instant::now() + interval);
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(frame) = self.frame.clone() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                if frame.should_exit_on_close() {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(error) = frame.render() {
                    self.fail(event_loop, error);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                frame
                    .dispatcher()
                    .moved(Pos2D::new(position.x as i32, position.y as i32));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => frame.dispatcher().pressed(),
                ElementState::Released => frame.dispatcher().released(),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines.round() as i32,
                    MouseScrollDelta::PixelDelta(pixels) => pixels.y.round() as i32,
                };
                if amount != 0 {
                    frame.dispatcher().wheel(amount);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let interval = self.frame.as_ref().and_then(WinitFrame::timer_interval);
        if let Some(interval) = interval {
            let deadline = *self
                .next_repaint
                .get_or_insert_with(|| Instant::now() + interval);
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

/// Opens a native window with the given title, bounds and shapes, and runs
/// it until it is closed. This call blocks for the lifetime of the window.
pub fn run(
    title: &str,
    area: impl Area + 'static,
    shapes: Vec<Box<dyn Shape>>,
    features: Vec<WindowFeature>,
) -> Result<(), WrapperError> {
    let event_loop = EventLoop::new()?;
    let mut app = App {
        scene: Some(Scene {
            title: title.to_string(),
            area: Box::new(area),
            shapes,
            features,
        }),
        frame: None,
        _window: None,
        next_repaint: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;
    match app.error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
