use std::rc::Rc;

use crate::{
    Area, Area2D, ColorSource, Liveness, MouseSource, Pos, Pos2D, Redrawable, Shape, ShapeTarget,
    Size2D, Surface,
};

/// The largest filled oval that fits in its area, optionally reacting to the
/// mouse. Mouse events are matched against the bounding area, not the oval
/// outline.
pub struct Oval {
    area: Rc<dyn Area>,
    color: Box<dyn ColorSource>,
    targets: Vec<Box<dyn ShapeTarget>>,
}

impl Oval {
    /// Constructs an `Oval` that just paints itself.
    pub fn new(area: Rc<dyn Area>, color: impl ColorSource + 'static) -> Self {
        Self::with_targets(area, color, Vec::new())
    }

    /// Constructs an `Oval` that additionally installs the given mouse
    /// handler on its bounding area.
    pub fn with_target(
        area: Rc<dyn Area>,
        color: impl ColorSource + 'static,
        target: impl ShapeTarget + 'static,
    ) -> Self {
        Self::with_targets(area, color, vec![Box::new(target)])
    }

    /// Constructs an `Oval` with any number of mouse handlers, all bound to
    /// its bounding area.
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

impl Shape for Oval {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        surface.set_color(self.color.get_color());
        surface.fill_oval(
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

/// A small round dot of 5 by 5 pixels, centered on a position. Handy for
/// marking points.
pub struct Dot {
    oval: Oval,
}

impl Dot {
    pub fn new(center: Pos2D, color: impl ColorSource + 'static) -> Self {
        let area = Area2D::new(
            Pos2D::new(center.get_x() - 2, center.get_y() - 2),
            Size2D::new(5, 5),
        );
        Self {
            oval: Oval::new(Rc::new(area), color),
        }
    }
}

impl Shape for Dot {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        self.oval.draw(surface)
    }

    fn register_for(&self, source: &dyn MouseSource) {
        self.oval.register_for(source);
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        self.oval.register(redrawable);
    }
}
