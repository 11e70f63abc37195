use super::color::Rgb;
use super::errors::{RenderError, Result};

/// Drawing surface the sky renderer paints on. Coordinates are pixels with the
/// origin in the top left corner and y pointing down.
pub trait Canvas {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn resize(&mut self, width: f64, height: f64) -> Result<()>;
    fn clear(&mut self, color: Rgb);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb);
    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb);
    fn fill_text(&mut self, text: &str, at: (f64, f64), color: Rgb);
}

pub(crate) fn check_size(width: f64, height: f64) -> Result<()> {
    if width.is_finite() && height.is_finite() && width >= 1. && height >= 1. {
        Ok(())
    } else {
        Err(RenderError::InvalidCanvasSize { width, height })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Rgb),
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgb,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Rgb,
    },
    Text {
        text: String,
        at: (f64, f64),
        color: Rgb,
    },
}

/// Canvas that records the operations of the last frame instead of rasterizing them
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            ops: Vec::new(),
        })
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn circles(&self) -> impl Iterator<Item = (&(f64, f64), f64)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle { center, radius, .. } => Some((center, *radius)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&(f64, f64), &(f64, f64))> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((from, to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        check_size(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        self.ops.push(DrawOp::Line { from, to, color });
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: (f64, f64), color: Rgb) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            color,
        });
    }
}
