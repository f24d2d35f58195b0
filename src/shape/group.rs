use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::{Liveness, MouseSource, Redrawable, Shape, Surface};

struct ShapeGroupState {
    shapes: Vec<Box<dyn Shape>>,
    redrawable: Option<Rc<dyn Redrawable>>,
}

/// A mutable collection of shapes that is itself a shape.
///
/// Cloning a `ShapeGroup` yields a second handle to the same collection, so
/// one clone can be installed in a window while another keeps adding shapes
/// from event actions. Shapes that report [`Liveness::Removed`] are pruned
/// during every draw pass, and the group itself reports `Removed` once it
/// has no shapes left.
#[derive(Clone)]
pub struct ShapeGroup {
    state: Rc<RefCell<ShapeGroupState>>,
}

impl ShapeGroup {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(ShapeGroupState {
                shapes: Vec::new(),
                redrawable: None,
            })),
        }
    }

    /// Adds a shape to this group and requests a redraw. If the group has
    /// already been registered, the new shape is registered right away so
    /// its mutable parts invalidate the window too.
    pub fn add(&self, shape: impl Shape + 'static) {
        let mut state = self.state.borrow_mut();
        if let Some(redrawable) = &state.redrawable {
            shape.register(redrawable);
            redrawable.request_redraw();
        }
        state.shapes.push(Box::new(shape));
    }

    /// Removes all shapes from this group and requests a redraw.
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        let removed = state.shapes.len();
        state.shapes.clear();
        if let Some(redrawable) = &state.redrawable {
            redrawable.request_redraw();
        }
        debug!("cleared {} shapes from group", removed);
    }

    /// Gets the number of shapes currently in this group.
    pub fn len(&self) -> usize {
        self.state.borrow().shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ShapeGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for ShapeGroup {
    fn draw(&mut self, surface: &mut dyn Surface) -> Liveness {
        let mut state = self.state.borrow_mut();
        state
            .shapes
            .retain_mut(|shape| shape.draw(surface) == Liveness::Alive);
        if state.shapes.is_empty() {
            Liveness::Removed
        } else {
            Liveness::Alive
        }
    }

    fn register_for(&self, source: &dyn MouseSource) {
        for shape in self.state.borrow().shapes.iter() {
            shape.register_for(source);
        }
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        let mut state = self.state.borrow_mut();
        for shape in state.shapes.iter() {
            shape.register(redrawable);
        }
        state.redrawable = Some(Rc::clone(redrawable));
    }
}
