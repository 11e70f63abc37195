use std::path::Path;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::canvas::{check_size, Canvas};
use super::color::Rgb;
use super::errors::{RenderError, Result};

/// Raster canvas backed by a tiny-skia pixmap. It has no font support, so labels are
/// not drawn.
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

fn create_pixmap(width: f64, height: f64) -> Result<Pixmap> {
    check_size(width, height)?;
    Pixmap::new(width.round() as u32, height.round() as u32)
        .ok_or(RenderError::InvalidCanvasSize { width, height })
}

fn paint(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = true;
    paint
}

impl PixmapCanvas {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Ok(Self {
            pixmap: create_pixmap(width, height)?,
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| RenderError::Encode(e.to_string()))
    }
}

impl Canvas for PixmapCanvas {
    fn width(&self) -> f64 {
        self.pixmap.width() as f64
    }

    fn height(&self) -> f64 {
        self.pixmap.height() as f64
    }

    fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.pixmap = create_pixmap(width, height)?;
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.pixmap
            .fill(Color::from_rgba8(color.0, color.1, color.2, 255));
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0 as f32, from.1 as f32);
        pb.line_to(to.0 as f32, to.1 as f32);

        // Degenerate or non-finite segments produce no path
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 1.,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
        if let Some(path) = PathBuilder::from_circle(center.0 as f32, center.1 as f32, radius as f32) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn fill_text(&mut self, text: &str, _at: (f64, f64), _color: Rgb) {
        tracing::trace!("Skipping label {} on raster canvas", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_at(canvas: &PixmapCanvas, x: u32, y: u32) -> (u8, u8, u8) {
        let pixel = canvas.pixmap().pixel(x, y).unwrap();
        (pixel.red(), pixel.green(), pixel.blue())
    }

    #[test]
    fn circle_is_filled() {
        let mut canvas = PixmapCanvas::new(40., 30.).unwrap();
        canvas.clear(Rgb::BLACK);
        canvas.fill_circle((20., 15.), 4., Rgb::WHITE);

        assert_eq!(rgb_at(&canvas, 20, 15), (255, 255, 255));
        assert_eq!(rgb_at(&canvas, 2, 2), (0, 0, 0));
    }

    #[test]
    fn resize_replaces_raster() {
        let mut canvas = PixmapCanvas::new(40., 30.).unwrap();
        canvas.resize(64., 48.).unwrap();

        assert_eq!((canvas.width(), canvas.height()), (64., 48.));
        assert!(canvas.resize(0., 48.).is_err());
    }

    #[test]
    fn save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        let mut canvas = PixmapCanvas::new(8., 8.).unwrap();
        canvas.clear(Rgb::BLUE);

        canvas.save_png(&path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
