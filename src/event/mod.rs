mod click;
mod mouse;
mod press;
mod press_release;
mod release;

pub use click::*;
pub use mouse::*;
pub use press::*;
pub use press_release::*;
pub use release::*;
