use std::rc::Rc;

use crate::{Liveness, MouseSource, Redrawable, Shape, Surface};

/// A rectangular arrangement of shapes, addressed by row and column.
///
/// A `Grid` only holds its cells: positioning them is up to whoever built
/// the cell shapes, and drawing the grid as a whole is not supported yet.
pub struct Grid {
    cells: Vec<Vec<Box<dyn Shape>>>,
    columns: usize,
}

impl Grid {
    /// Constructs a `Grid` from rows of cells. All rows must have the same
    /// length.
    pub fn new(cells: Vec<Vec<Box<dyn Shape>>>) -> Self {
        let columns = cells.first().map_or(0, Vec::len);
        assert!(
            cells.iter().all(|row| row.len() == columns),
            "all rows of a Grid must have the same length"
        );
        Self { cells, columns }
    }

    pub fn get_rows(&self) -> usize {
        self.cells.len()
    }

    pub fn get_columns(&self) -> usize {
        self.columns
    }

    /// Gets the cell at the given row and column.
    pub fn get_cell(&self, row: usize, column: usize) -> &dyn Shape {
        self.cells[row][column].as_ref()
    }
}

impl Shape for Grid {
    fn draw(&mut self, _surface: &mut dyn Surface) -> Liveness {
        unimplemented!("Grid::draw")
    }

    fn register_for(&self, _source: &dyn MouseSource) {
        unimplemented!("Grid::register_for")
    }

    fn register(&self, redrawable: &Rc<dyn Redrawable>) {
        for row in &self.cells {
            for cell in row {
                cell.register(redrawable);
            }
        }
    }
}
