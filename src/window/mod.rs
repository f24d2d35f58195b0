use std::mem;
use std::rc::Rc;
use std::time::Duration;

use log::debug;

use crate::{Area, Liveness, MouseSource, Redrawable, Shape, Surface};

/// How often a shown window repaints itself. Animations are sampled at this
/// rate.
pub const REPAINT_INTERVAL: Duration = Duration::from_millis(25);

/// The operations a window needs from the native frame it is shown in.
///
/// A `Frame` is created lazily when the window is first shown. Rendering
/// backends implement it over their native window, and tests use a
/// recording implementation.
pub trait Frame {
    fn set_title(&mut self, title: &str);

    /// Makes closing this frame end the application.
    fn exit_on_close(&mut self);

    fn set_bounds(&mut self, x: i32, y: i32, width: i32, height: i32);

    fn set_visible(&mut self, visible: bool);

    /// Gets the mouse event source of this frame.
    fn mouse(&self) -> &dyn MouseSource;

    /// Installs the callback this frame runs on every repaint.
    fn set_paint(&mut self, paint: Box<dyn FnMut(&mut dyn Surface)>);

    /// Gets a handle that can be used to request a repaint of this frame
    /// from anywhere.
    fn repaint_handle(&self) -> Rc<dyn Redrawable>;

    /// Makes this frame repaint itself every `interval` from now on.
    fn start_repaint_timer(&mut self, interval: Duration);
}

/// A customization applied to the frame of a window when it is shown.
pub type WindowFeature = Box<dyn FnOnce(&mut dyn Frame)>;

enum WindowState {
    Pending {
        features: Vec<WindowFeature>,
        shapes: Vec<Box<dyn Shape>>,
        factory: Box<dyn FnOnce() -> Box<dyn Frame>>,
    },
    Shown(Box<dyn Frame>),
    Transitioning,
}

/// A window showing a collection of shapes, without any predefined
/// features.
///
/// Nothing native is touched until [`show`](BaseWindow::show) is called, so
/// windows can be constructed and inspected in tests that never open
/// anything on screen.
pub struct BaseWindow {
    area: Box<dyn Area>,
    state: WindowState,
}

impl BaseWindow {
    /// Constructs a `BaseWindow` at the given area, applying the given
    /// features in order when it is shown. The factory creates the native
    /// frame, which only happens on the first [`show`](BaseWindow::show).
    pub fn new(
        area: impl Area + 'static,
        features: Vec<WindowFeature>,
        shapes: Vec<Box<dyn Shape>>,
        factory: impl FnOnce() -> Box<dyn Frame> + 'static,
    ) -> Self {
        Self {
            area: Box::new(area),
            state: WindowState::Pending {
                features,
                shapes,
                factory: Box::new(factory),
            },
        }
    }

    /// Shows this window: creates the frame, wires the shapes into it,
    /// applies the features and starts the repaint timer. Calling this
    /// again after the window is shown does nothing.
    pub fn show(&mut self) {
        match mem::replace(&mut self.state, WindowState::Transitioning) {
            WindowState::Pending {
                features,
                shapes,
                factory,
            } => {
                let mut frame = factory();
                for shape in &shapes {
                    shape.register_for(frame.mouse());
                }
                let repaint = frame.repaint_handle();
                for shape in &shapes {
                    shape.register(&repaint);
                }
                let mut shapes = shapes;
                frame.set_paint(Box::new(move |surface| {
                    shapes.retain_mut(|shape| shape.draw(surface) == Liveness::Alive);
                }));
                frame.set_bounds(
                    self.area.get_x(),
                    self.area.get_y(),
                    self.area.get_width(),
                    self.area.get_height(),
                );
                for feature in features {
                    feature(frame.as_mut());
                }
                frame.set_visible(true);
                frame.start_repaint_timer(REPAINT_INTERVAL);
                debug!("window shown");
                self.state = WindowState::Shown(frame);
            }
            shown => self.state = shown,
        }
    }
}

/// A [`BaseWindow`] with the features every normal application window
/// wants: a title, and ending the application when it is closed.
pub struct Window {
    base: BaseWindow,
}

impl Window {
    pub fn new(
        title: &str,
        area: impl Area + 'static,
        shapes: Vec<Box<dyn Shape>>,
        features: Vec<WindowFeature>,
        factory: impl FnOnce() -> Box<dyn Frame> + 'static,
    ) -> Self {
        let title = title.to_string();
        let mut all_features: Vec<WindowFeature> = vec![
            Box::new(move |frame| frame.set_title(&title)),
            Box::new(|frame| frame.exit_on_close()),
        ];
        all_features.extend(features);
        Self {
            base: BaseWindow::new(area, all_features, shapes, factory),
        }
    }

    pub fn show(&mut self) {
        self.base.show();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Area2D, Button, Color, DrawCall, DualColor, FakeFrame, FakeShape, FakeSurface, FrameCall,
        Pos2D, Rect, Size2D,
    };
    use std::cell::Cell;

    fn frame_factory(frame: &FakeFrame) -> impl FnOnce() -> Box<dyn Frame> + 'static {
        let clone = frame.clone();
        move || Box::new(clone) as Box<dyn Frame>
    }

    #[test]
    fn test_show_is_lazy_and_memoized() {
        let frame = FakeFrame::new();
        let created = Rc::new(Cell::new(0));
        let created_clone = Rc::clone(&created);
        let clone = frame.clone();
        let mut window = BaseWindow::new(
            Area2D::with_size(100, 100),
            Vec::new(),
            Vec::new(),
            move || {
                created_clone.set(created_clone.get() + 1);
                Box::new(clone) as Box<dyn Frame>
            },
        );

        assert_eq!(0, created.get());
        window.show();
        assert_eq!(1, created.get());
        window.show();
        assert_eq!(1, created.get());
        // The frame operations also happened only once
        assert_eq!(
            1,
            frame
                .get_calls()
                .iter()
                .filter(|call| matches!(call, FrameCall::SetVisible(true)))
                .count()
        );
    }

    #[test]
    fn test_show_sizes_applies_features_and_starts_the_timer() {
        let frame = FakeFrame::new();
        let mut window = BaseWindow::new(
            Area2D::new(Pos2D::new(20, 30), Size2D::new(400, 300)),
            vec![Box::new(|frame: &mut dyn Frame| frame.set_title("demo")) as WindowFeature],
            Vec::new(),
            frame_factory(&frame),
        );
        window.show();

        assert_eq!(
            vec![
                FrameCall::SetBounds {
                    x: 20,
                    y: 30,
                    width: 400,
                    height: 300
                },
                FrameCall::SetTitle("demo".to_string()),
                FrameCall::SetVisible(true),
                FrameCall::StartTimer(REPAINT_INTERVAL),
            ],
            frame.get_calls()
        );
        assert!(frame.has_paint());
    }

    #[test]
    fn test_window_prepends_title_and_exit_on_close() {
        let frame = FakeFrame::new();
        let mut window = Window::new(
            "my app",
            Area2D::with_size(200, 200),
            Vec::new(),
            vec![Box::new(|frame: &mut dyn Frame| frame.set_title("override")) as WindowFeature],
            frame_factory(&frame),
        );
        window.show();

        let calls = frame.get_calls();
        assert_eq!(
            &[
                FrameCall::SetTitle("my app".to_string()),
                FrameCall::ExitOnClose,
                FrameCall::SetTitle("override".to_string()),
            ],
            &calls[1..4]
        );
    }

    #[test]
    fn test_shapes_are_wired_for_mouse_and_repaints() {
        let frame = FakeFrame::new();
        let mouse_registrations = Rc::new(Cell::new(0));
        let redraw_registrations = Rc::new(Cell::new(0));
        let shape = FakeShape::new()
            .track_mouse_registration(&mouse_registrations)
            .track_redraw_registration(&redraw_registrations);
        let mut window = BaseWindow::new(
            Area2D::with_size(100, 100),
            Vec::new(),
            vec![Box::new(shape) as Box<dyn Shape>],
            frame_factory(&frame),
        );
        window.show();

        assert_eq!(1, mouse_registrations.get());
        assert_eq!(1, redraw_registrations.get());
    }

    #[test]
    fn test_a_color_swap_reaches_the_frame_repaint_handle() {
        let frame = FakeFrame::new();
        let colors = DualColor::new(Color::rgb(1, 1, 1), Color::rgb(2, 2, 2));
        let rect = Rect::new(Rc::new(Area2D::with_size(50, 50)), colors.clone());
        let mut window = BaseWindow::new(
            Area2D::with_size(100, 100),
            Vec::new(),
            vec![Box::new(rect) as Box<dyn Shape>],
            frame_factory(&frame),
        );

        colors.swap();
        assert_eq!(0, frame.get_repaint_requests());

        window.show();
        colors.swap();
        assert_eq!(1, frame.get_repaint_requests());
    }

    #[test]
    fn test_the_paint_callback_draws_and_prunes() {
        let frame = FakeFrame::new();
        let draws = Rc::new(Cell::new(0));
        let short_lived = Rc::new(Cell::new(0));
        let mut window = BaseWindow::new(
            Area2D::with_size(100, 100),
            Vec::new(),
            vec![
                Box::new(FakeShape::new().track_draws(&draws)) as Box<dyn Shape>,
                Box::new(FakeShape::alive_for(1).track_draws(&short_lived)),
            ],
            frame_factory(&frame),
        );
        window.show();

        let mut surface = FakeSurface::new();
        frame.run_paint(&mut surface);
        frame.run_paint(&mut surface);
        frame.run_paint(&mut surface);
        assert_eq!(3, draws.get());
        // The second shape was pruned after reporting Removed
        assert_eq!(2, short_lived.get());
    }

    #[test]
    fn test_a_button_in_a_window_reacts_to_the_frame_mouse() {
        let frame = FakeFrame::new();
        let counter = Rc::new(Cell::new(0));
        let clone = Rc::clone(&counter);
        let button = Button::new(
            Rc::new(Area2D::new(Pos2D::new(10, 10), Size2D::new(50, 50))),
            move || clone.set(clone.get() + 1),
        );
        let mut window = Window::new(
            "buttons",
            Area2D::with_size(200, 200),
            vec![Box::new(button) as Box<dyn Shape>],
            Vec::new(),
            frame_factory(&frame),
        );
        window.show();

        frame.get_mouse().press(Pos2D::new(30, 30));
        frame.get_mouse().release(Pos2D::new(30, 30));
        assert_eq!(1, counter.get());

        // While held down, the button painted itself in its pressed color
        frame.get_mouse().press(Pos2D::new(30, 30));
        let mut surface = FakeSurface::new();
        frame.run_paint(&mut surface);
        assert!(surface
            .get_calls()
            .contains(&DrawCall::SetColor(Color::rgb(200, 200, 200))));
    }
}
