use glam::Vec2;

use crate::assets::color::Rgba;

/// Shadow glow applied to a shape or glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    SansSerif,
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub style: FontStyle,
    pub family: FontFamily,
}

impl Font {
    pub const fn new(size: f32, style: FontStyle, family: FontFamily) -> Self {
        Self { size, style, family }
    }

    /// CSS shorthand, e.g. `bold 20px sans-serif`.
    pub fn to_css(&self) -> String {
        let family = match self.family {
            FontFamily::Serif => "serif",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Monospace => "monospace",
        };
        match self.style {
            FontStyle::Normal => format!("{}px {}", self.size, family),
            FontStyle::Bold => format!("bold {}px {}", self.size, family),
            FontStyle::Italic => format!("italic {}px {}", self.size, family),
        }
    }
}

/// Vertical anchor for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Middle,
    Alphabetic,
}

/// Outline drawn under filled text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgba,
    pub width: f32,
}

/// One immediate-mode drawing step. Text is always horizontally centered.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the canvas, then fill it with `color`.
    Clear { color: Rgba },
    /// Push a translate-then-uniform-scale transform.
    PushTransform { translate: Vec2, scale: f32 },
    PopTransform,
    /// Global alpha for the following commands until changed.
    SetAlpha { alpha: f32 },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: Option<Glow>,
    },
    /// Stroked circle, optionally dashed as `[on, off]`.
    Ring {
        center: Vec2,
        radius: f32,
        color: Rgba,
        width: f32,
        dash: Option<[f32; 2]>,
    },
    /// Open polyline with round caps and joins.
    Polyline {
        points: Vec<Vec2>,
        color: Rgba,
        width: f32,
        glow: Option<Glow>,
    },
    Text {
        position: Vec2,
        text: String,
        font: Font,
        color: Rgba,
        baseline: Baseline,
        outline: Option<Outline>,
        glow: Option<Glow>,
    },
}

/// Ordered list of commands for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(128),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}
