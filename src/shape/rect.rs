use std::rc::Rc;

use crate::{Area, ColorSource, Liveness, MouseSource, Redrawable, Shape, ShapeTarget, Surface};

/// A filled rectangle covering its area, optionally reacting to the mouse.
pub struct Rect {
    area: Rc<dyn Area>,
    color: Box<dyn ColorSource>,
    targets: Vec<Box<dyn ShapeTarget>>,
}

impl Rect {
    /// Constructs a `Rect` that just paints itself.
    pub fn new(area: Rc<dyn Area>, color: impl ColorSource + 'static) -> Self {
        Self::with_targets(area, color, Vec::new())
    }

    /// Constructs a `Rect` that additionally installs the given mouse
    /// handler on its own area.
    pub fn with_target(
        area: Rc<dyn Area>,
        color: impl ColorSource + 'static,
        target: impl ShapeTarget + 'static,
    ) -> Self {
        Self::with_targets(area, color, vec![Box::new(target)])
    }

    /// Constructs a `Rect` with any number of mouse handlers, all bound to
    /// its own area.
    pub fn with_targets(
        area: Rc<dyn Area>,
        color: impl ColorSource + 'static,
        targets: Vec<Box<dyn ShapeTarget>>,
    ) -> Self {
        Self {
            area,
            color: Box::new(color),
            targets,
        }
    }
}

impl Shape for Rect {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        surface.set_color(self.color.get_color());
        surface.fill_rect(
            self.area.get_x(),
            self.area.get_y(),
            self.area.get_width(),
            self.area.get_height(),
        );
        Liveness::Alive
    }

    fn register_for(&self, source: &dyn MouseSource) {
        for target in &self.targets {
            target.register_for(source, Rc::clone(&self.area));
        }
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.area.register(redrawable);
        self.color.register(redrawable);
    }
}
