use std::fmt::Write as _;
use std::path::Path;

use super::canvas::{check_size, Canvas};
use super::color::Rgb;
use super::errors::Result;

/// Canvas that builds an SVG document of the last frame
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        check_size(width, height)?;
        Ok(Self {
            width,
            height,
            body: String::new(),
        })
    }

    pub fn document(&self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">
{}</svg>
"#,
            self.width, self.height, self.body
        )
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.document())?;
        Ok(())
    }
}

// Writing into a String cannot fail
impl Canvas for SvgCanvas {
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
        self.body.clear();
        let _ = writeln!(
            self.body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width,
            self.height,
            color.to_hex()
        );
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1"/>"#,
            from.0,
            from.1,
            to.0,
            to.1,
            color.to_hex()
        );
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            center.0,
            center.1,
            radius,
            color.to_hex()
        );
    }

    fn fill_text(&mut self, text: &str, at: (f64, f64), color: Rgb) {
        let _ = writeln!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="12" fill="{}">{}</text>"#,
            at.0,
            at.1,
            color.to_hex(),
            escape(text)
        );
    }
}
