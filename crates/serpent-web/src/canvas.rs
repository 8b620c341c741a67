//! Canvas2D painter over `web-sys`.

use std::f64::consts::TAU;

use js_sys::Array;
use serpent_engine::renderer::{Baseline, DrawCommand, DrawList, Glow, Outline, Painter};
use serpent_engine::Rgba;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Canvas2dPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dPainter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    fn set_glow(&self, glow: Option<Glow>) {
        match glow {
            Some(g) => {
                self.ctx.set_shadow_blur(g.blur as f64);
                self.ctx.set_shadow_color(&g.color.to_css());
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
    }

    fn fill_style(&self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn stroke_style(&self, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }

    fn draw(&self, frame: &DrawList, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Clear { color } => {
                let (w, h) = (frame.width as f64, frame.height as f64);
                ctx.clear_rect(0.0, 0.0, w, h);
                self.fill_style(*color);
                ctx.fill_rect(0.0, 0.0, w, h);
            }
            DrawCommand::PushTransform { translate, scale } => {
                ctx.save();
                ctx.translate(translate.x as f64, translate.y as f64)?;
                ctx.scale(*scale as f64, *scale as f64)?;
            }
            DrawCommand::PopTransform => ctx.restore(),
            DrawCommand::SetAlpha { alpha } => ctx.set_global_alpha(*alpha as f64),
            DrawCommand::Circle {
                center,
                radius,
                color,
                glow,
            } => {
                self.set_glow(*glow);
                self.fill_style(*color);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.fill();
                self.set_glow(None);
            }
            DrawCommand::Ring {
                center,
                radius,
                color,
                width,
                dash,
            } => {
                if let Some([on, off]) = dash {
                    let pattern = Array::of2(&JsValue::from_f64(*on as f64), &JsValue::from_f64(*off as f64));
                    ctx.set_line_dash(&pattern)?;
                }
                self.stroke_style(*color);
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.stroke();
                ctx.set_line_dash(&Array::new())?;
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
                glow,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                ctx.set_line_cap("round");
                ctx.set_line_join("round");
                ctx.set_line_width(*width as f64);
                self.stroke_style(*color);
                self.set_glow(*glow);
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in rest {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                ctx.stroke();
                self.set_glow(None);
            }
            DrawCommand::Text {
                position,
                text,
                font,
                color,
                baseline,
                outline,
                glow,
            } => {
                ctx.set_font(&font.to_css());
                ctx.set_text_align("center");
                ctx.set_text_baseline(match baseline {
                    Baseline::Middle => "middle",
                    Baseline::Alphabetic => "alphabetic",
                });
                self.set_glow(*glow);
                let (x, y) = (position.x as f64, position.y as f64);
                if let Some(Outline { color, width }) = outline {
                    self.stroke_style(*color);
                    ctx.set_line_width(*width as f64);
                    ctx.stroke_text(text, x, y)?;
                }
                self.fill_style(*color);
                ctx.fill_text(text, x, y)?;
                self.set_glow(None);
            }
        }
        Ok(())
    }
}

impl Painter for Canvas2dPainter {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn paint(&mut self, frame: &DrawList) {
        self.ctx.save();
        let mut failed = 0;
        for command in frame.iter() {
            if let Err(e) = self.draw(frame, command) {
                if failed == 0 {
                    log::warn!("canvas draw failed: {:?}", e);
                }
                failed += 1;
            }
        }
        self.ctx.restore();
        if failed > 1 {
            log::debug!("{} draw commands failed this frame", failed);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
