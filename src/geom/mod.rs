mod area;
mod pos;
mod size;

pub use area::*;
pub use pos::*;
pub use size::*;
