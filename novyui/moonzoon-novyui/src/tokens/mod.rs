// Design tokens used by the NovyUI components

pub mod color;
pub mod motion;
pub mod scale;
pub mod theme;

pub use color::*;
pub use motion::*;
pub use scale::*;
pub use theme::*;
