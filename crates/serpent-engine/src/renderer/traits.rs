//! Painter trait for concrete drawing backends.
//!
//! The engine never draws; it produces a [`DrawList`] per frame and hands it
//! to a `Painter`. The web crate ships a Canvas2D painter. Tests use a
//! recording painter.

use super::draw::DrawList;

/// Backend that turns a draw list into pixels.
pub trait Painter {
    /// Backend identifier (e.g. "canvas2d").
    fn backend(&self) -> &'static str;

    /// Paint one complete frame.
    fn paint(&mut self, frame: &DrawList);

    /// The drawing surface changed size.
    fn resize(&mut self, width: u32, height: u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::color::Rgba;
    use crate::renderer::draw::DrawCommand;

    #[derive(Default)]
    struct Recording {
        frames: Vec<usize>,
        size: (u32, u32),
    }

    impl Painter for Recording {
        fn backend(&self) -> &'static str {
            "recording"
        }

        fn paint(&mut self, frame: &DrawList) {
            self.frames.push(frame.len());
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
    }

    #[test]
    fn painter_is_object_safe() {
        let mut painter: Box<dyn Painter> = Box::new(Recording::default());
        let mut list = DrawList::new(800.0, 600.0);
        list.push(DrawCommand::Clear { color: Rgba::BLACK });
        painter.paint(&list);
        painter.resize(1024, 768);
        assert_eq!(painter.backend(), "recording");
    }
}
