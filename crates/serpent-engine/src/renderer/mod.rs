pub mod draw;
pub mod traits;

pub use draw::{Baseline, DrawCommand, DrawList, Font, FontFamily, FontStyle, Glow, Outline};
pub use traits::Painter;
