use std::cell::{Cell, RefCell};
use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;

use log::trace;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::Window as NativeWindow;

use crate::{Frame, MouseListener, MouseSource, Pos, Pos2D, Redrawable, Surface};

use super::{SoftSurface, WrapperError};

/// How far (in pixels, per axis) a release may land from its press and
/// still count as a click.
const CLICK_SLACK: i32 = 3;

/// Fans native mouse events out to the registered listeners, tracking the
/// cursor position because native button events don't carry one.
pub(super) struct MouseDispatcher {
    listeners: RefCell<Vec<Box<dyn MouseListener>>>,
    cursor: Cell<Pos2D>,
    pressed_at: Cell<Option<Pos2D>>,
}

impl MouseDispatcher {
    fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            cursor: Cell::new(Pos2D::default()),
            pressed_at: Cell::new(None),
        }
    }

    pub(super) fn moved(&self, pos: Pos2D) {
        self.cursor.set(pos);
        for listener in self.listeners.borrow().iter() {
            listener.on_move(pos);
        }
    }

    pub(super) fn pressed(&self) {
        let pos = self.cursor.get();
        trace!("native press at ({}, {})", pos.get_x(), pos.get_y());
        self.pressed_at.set(Some(pos));
        for listener in self.listeners.borrow().iter() {
            listener.on_press(pos);
        }
    }

    pub(super) fn released(&self) {
        let pos = self.cursor.get();
        for listener in self.listeners.borrow().iter() {
            listener.on_release(pos);
        }
        if let Some(origin) = self.pressed_at.take() {
            let close_enough = (pos.get_x() - origin.get_x()).abs() <= CLICK_SLACK
                && (pos.get_y() - origin.get_y()).abs() <= CLICK_SLACK;
            if close_enough {
                for listener in self.listeners.borrow().iter() {
                    listener.on_click(pos);
                }
            }
        }
    }

    pub(super) fn wheel(&self, amount: i32) {
        for listener in self.listeners.borrow().iter() {
            listener.on_wheel(amount);
        }
    }
}

impl MouseSource for MouseDispatcher {
    fn register(&self, listener: Box<dyn MouseListener>) {
        self.listeners.borrow_mut().push(listener);
    }
}

struct Gpu {
    // The context must outlive the surface
    _context: softbuffer::Context<Rc<NativeWindow>>,
    surface: softbuffer::Surface<Rc<NativeWindow>, Rc<NativeWindow>>,
}

struct FrameState {
    exit_on_close: bool,
    timer: Option<Duration>,
}

/// A [`Frame`] over a native winit window, painting with softbuffer.
///
/// Cloning yields a second handle to the same native window, so that the
/// event loop keeps access to the frame it handed to a
/// [`Window`](crate::Window).
#[derive(Clone)]
pub struct WinitFrame {
    window: Rc<NativeWindow>,
    gpu: Rc<RefCell<Gpu>>,
    mouse: Rc<MouseDispatcher>,
    paint: Rc<RefCell<Option<Box<dyn FnMut(&mut dyn Surface)>>>>,
    state: Rc<RefCell<FrameState>>,
}

impl WinitFrame {
    pub fn new(window: Rc<NativeWindow>) -> Result<Self, WrapperError> {
        let context = softbuffer::Context::new(Rc::clone(&window))
            .map_err(|error| WrapperError::Surface(error.to_string()))?;
        let surface = softbuffer::Surface::new(&context, Rc::clone(&window))
            .map_err(|error| WrapperError::Surface(error.to_string()))?;
        Ok(Self {
            window,
            gpu: Rc::new(RefCell::new(Gpu {
                _context: context,
                surface,
            })),
            mouse: Rc::new(MouseDispatcher::new()),
            paint: Rc::new(RefCell::new(None)),
            state: Rc::new(RefCell::new(FrameState {
                exit_on_close: false,
                timer: None,
            })),
        })
    }

    pub(super) fn dispatcher(&self) -> &MouseDispatcher {
        &self.mouse
    }

    pub(super) fn should_exit_on_close(&self) -> bool {
        self.state.borrow().exit_on_close
    }

    pub(super) fn timer_interval(&self) -> Option<Duration> {
        self.state.borrow().timer
    }

    /// Paints the scene into the softbuffer surface and presents it.
    pub(super) fn render(&self) -> Result<(), WrapperError> {
        let size = self.window.inner_size();
        let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return Ok(());
        };
        let mut gpu = self.gpu.borrow_mut();
        gpu.surface
            .resize(width, height)
            .map_err(|error| WrapperError::Surface(error.to_string()))?;
        let mut buffer = gpu
            .surface
            .buffer_mut()
            .map_err(|error| WrapperError::Surface(error.to_string()))?;
        buffer.fill(0xFFFFFF);
        let mut target = SoftSurface::new(&mut buffer, size.width as i32, size.height as i32);
        if let Some(paint) = self.paint.borrow_mut().as_mut() {
            paint(&mut target);
        }
        buffer
            .present()
            .map_err(|error| WrapperError::Surface(error.to_string()))?;
        Ok(())
    }
}

struct WinitRepaint {
    window: Rc<NativeWindow>,
}

impl Redrawable for WinitRepaint {
    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

impl Frame for WinitFrame {
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn exit_on_close(&mut self) {
        self.state.borrow_mut().exit_on_close = true;
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.window.set_outer_position(PhysicalPosition::new(x, y));
        let _ = self
            .window
            .request_inner_size(PhysicalSize::new(width.max(1) as u32, height.max(1) as u32));
    }

    fn set_visible(&mut self, visible: bool) {
        self.window.set_visible(visible);
    }

    fn mouse(&self) -> &dyn MouseSource {
        &*self.mouse
    }

    fn set_paint(&mut self, paint: Box<dyn FnMut(&mut dyn Surface)>) {
        *self.paint.borrow_mut() = Some(paint);
    }

    fn repaint_handle(&self) -> Rc<dyn Redrawable> {
        Rc::new(WinitRepaint {
            window: Rc::clone(&self.window),
        })
    }

    fn start_repaint_timer(&mut self, interval: Duration) {
        self.state.borrow_mut().timer = Some(interval);
    }
}
