pub mod constants;
pub mod driver;
pub mod entities;
pub mod paint;
pub mod scene;

pub use entities::*;
pub use paint::{Glow, Painter};
pub use scene::*;
