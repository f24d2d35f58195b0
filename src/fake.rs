//! Fake implementations of the traits at the edges of this crate, so that
//! scenes and their behavior can be tested without opening any window.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::{
    Color, Frame, Liveness, MouseListener, MouseSource, Pos2D, Redrawable, Shape, Surface,
    TextMetrics,
};

/// One recorded drawing operation of a [`FakeSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    SetColor(Color),
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    FillOval {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    DrawLine {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    FillPolygon {
        xs: Vec<i32>,
        ys: Vec<i32>,
    },
    SetFontSize(u32),
    DrawText {
        text: String,
        x: i32,
        y: i32,
    },
}

/// A [`Surface`] that records every drawing operation instead of painting
/// anything. Its text metrics are deterministic: every character is `size`
/// pixels wide and the ascent equals the font size.
pub struct FakeSurface {
    calls: Vec<DrawCall>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    /// Gets all operations recorded so far, in order.
    pub fn get_calls(&self) -> &[DrawCall] {
        &self.calls
    }
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for FakeSurface {
    fn set_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::FillOval {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.calls.push(DrawCall::DrawLine { x1, y1, x2, y2 });
    }

    fn fill_polygon(&mut self, xs: &[i32], ys: &[i32]) {
        self.calls.push(DrawCall::FillPolygon {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        });
    }

    fn set_font_size(&mut self, size: u32) {
        self.calls.push(DrawCall::SetFontSize(size));
    }

    fn measure_text(&self, text: &str, size: u32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as i32 * size as i32,
            ascent: size as i32,
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.calls.push(DrawCall::DrawText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

/// A [`MouseSource`] for tests, with methods to emit events to everything
/// registered on it.
pub struct FakeMouse {
    listeners: RefCell<Vec<Box<dyn MouseListener>>>,
}

impl FakeMouse {
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn press(&self, pos: Pos2D) {
        for listener in self.listeners.borrow().iter() {
            listener.on_press(pos);
        }
    }

    pub fn release(&self, pos: Pos2D) {
        for listener in self.listeners.borrow().iter() {
            listener.on_release(pos);
        }
    }

    pub fn click(&self, pos: Pos2D) {
        for listener in self.listeners.borrow().iter() {
            listener.on_click(pos);
        }
    }

    pub fn move_to(&self, pos: Pos2D) {
        for listener in self.listeners.borrow().iter() {
            listener.on_move(pos);
        }
    }

    pub fn wheel(&self, amount: i32) {
        for listener in self.listeners.borrow().iter() {
            listener.on_wheel(amount);
        }
    }

    /// Gets the number of listeners registered so far.
    pub fn get_listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for FakeMouse {
    fn default() -> Self {
        Self::new()
    }
}

impl MouseSource for FakeMouse {
    fn register(&self, listener: Box<dyn MouseListener>) {
        self.listeners.borrow_mut().push(listener);
    }
}

/// A [`Redrawable`] that counts how often a redraw was requested.
pub struct CountingRedrawable {
    count: Cell<u32>,
}

impl CountingRedrawable {
    pub fn new() -> Self {
        Self {
            count: Cell::new(0),
        }
    }

    pub fn get_count(&self) -> u32 {
        self.count.get()
    }
}

impl Default for CountingRedrawable {
    fn default() -> Self {
        Self::new()
    }
}

impl Redrawable for CountingRedrawable {
    fn request_redraw(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// A [`Shape`] for tests that counts how its methods are used, via shared
/// counters handed in by the test.
pub struct FakeShape {
    alive_for: Cell<Option<u32>>,
    draws: Option<Rc<Cell<u32>>>,
    mouse_registrations: Option<Rc<Cell<u32>>>,
    redraw_registrations: Option<Rc<Cell<u32>>>,
}

impl FakeShape {
    /// Constructs a `FakeShape` that stays alive forever.
    pub fn new() -> Self {
        Self {
            alive_for: Cell::new(None),
            draws: None,
            mouse_registrations: None,
            redraw_registrations: None,
        }
    }

    /// Constructs a `FakeShape` that reports [`Liveness::Removed`] from its
    /// `draws`th draw onwards.
    pub fn alive_for(draws: u32) -> Self {
        let shape = Self::new();
        shape.alive_for.set(Some(draws));
        shape
    }

    /// Makes this shape increment the given counter on every draw.
    pub fn track_draws(mut self, counter: &Rc<Cell<u32>>) -> Self {
        self.draws = Some(Rc::clone(counter));
        self
    }

    /// Makes this shape increment the given counter every time it is asked
    /// to install its mouse listeners.
    pub fn track_mouse_registration(mut self, counter: &Rc<Cell<u32>>) -> Self {
        self.mouse_registrations = Some(Rc::clone(counter));
        self
    }

    /// Makes this shape increment the given counter every time an
    /// invalidation sink is registered on it.
    pub fn track_redraw_registration(mut self, counter: &Rc<Cell<u32>>) -> Self {
        self.redraw_registrations = Some(Rc::clone(counter));
        self
    }
}

impl Default for FakeShape {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for FakeShape {
    fn draw(&mut self, _surface: &mut dyn Surface) -> Liveness {
        if let Some(counter) = &self.draws {
            counter.set(counter.get() + 1);
        }
        match self.alive_for.get() {
            Some(0) => Liveness::Removed,
            Some(remaining) => {
                self.alive_for.set(Some(remaining - 1));
                Liveness::Alive
            }
            None => Liveness::Alive,
        }
    }

    fn register_for(&self, _source: &dyn MouseSource) {
        if let Some(counter) = &self.mouse_registrations {
            counter.set(counter.get() + 1);
        }
    }

    fn register(&self, _redrawable: &Rc<dyn Redrawable>) {
        if let Some(counter) = &self.redraw_registrations {
            counter.set(counter.get() + 1);
        }
    }
}

/// One recorded operation of a [`FakeFrame`].
#[derive(Clone, Debug, PartialEq)]
pub enum FrameCall {
    SetTitle(String),
    ExitOnClose,
    SetBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    SetVisible(bool),
    StartTimer(Duration),
}

struct FakeFrameState {
    calls: RefCell<Vec<FrameCall>>,
    mouse: FakeMouse,
    paint: RefCell<Option<Box<dyn FnMut(&mut dyn Surface)>>>,
    repaints: Rc<CountingRedrawable>,
}

/// A [`Frame`] that records everything done to it. Cloning yields a second
/// handle to the same state, so a test can keep one handle while the window
/// under test consumes the other.
#[derive(Clone)]
pub struct FakeFrame {
    state: Rc<FakeFrameState>,
}

impl FakeFrame {
    pub fn new() -> Self {
        Self {
            state: Rc::new(FakeFrameState {
                calls: RefCell::new(Vec::new()),
                mouse: FakeMouse::new(),
                paint: RefCell::new(None),
                repaints: Rc::new(CountingRedrawable::new()),
            }),
        }
    }

    /// Gets all operations recorded so far, in order.
    pub fn get_calls(&self) -> Vec<FrameCall> {
        self.state.calls.borrow().clone()
    }

    /// Gets the mouse of this frame, for emitting test events.
    pub fn get_mouse(&self) -> &FakeMouse {
        &self.state.mouse
    }

    /// Runs the installed paint callback against the given surface, like a
    /// real frame would on every repaint.
    pub fn run_paint(&self, surface: &mut dyn Surface) {
        if let Some(paint) = self.state.paint.borrow_mut().as_mut() {
            paint(surface);
        }
    }

    /// Tells whether a paint callback has been installed.
    pub fn has_paint(&self) -> bool {
        self.state.paint.borrow().is_some()
    }

    /// Gets the number of repaint requests made through the handle this
    /// frame handed out.
    pub fn get_repaint_requests(&self) -> u32 {
        self.state.repaints.get_count()
    }
}

impl Default for FakeFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame for FakeFrame {
    fn set_title(&mut self, title: &str) {
        self.state
            .calls
            .borrow_mut()
            .push(FrameCall::SetTitle(title.to_string()));
    }

    fn exit_on_close(&mut self) {
        self.state.calls.borrow_mut().push(FrameCall::ExitOnClose);
    }

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.state.calls.borrow_mut().push(FrameCall::SetBounds {
            x,
            y,
            width,
            height,
        });
    }

    fn set_visible(&mut self, visible: bool) {
        self.state
            .calls
            .borrow_mut()
            .push(FrameCall::SetVisible(visible));
    }

    fn mouse(&self) -> &dyn MouseSource {
        &self.state.mouse
    }

    fn set_paint(&mut self, paint: Box<dyn FnMut(&mut dyn Surface)>) {
        *self.state.paint.borrow_mut() = Some(paint);
    }

    fn repaint_handle(&self) -> Rc<dyn Redrawable> {
        Rc::clone(&self.state.repaints) as Rc<dyn Redrawable>
    }

    fn start_repaint_timer(&mut self, interval: Duration) {
        self.state
            .calls
            .borrow_mut()
            .push(FrameCall::StartTimer(interval));
    }
}
