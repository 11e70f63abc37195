//! Sky renderer: draws constellation figures, stars and labels onto a [`Canvas`].

pub use canvas::*;
pub use color::Rgb;
pub use errors::*;
pub use pixmap::PixmapCanvas;
pub use svg::SvgCanvas;

use crate::catalog::Catalog;
use crate::config::RenderSettings;
use crate::projection::Projection;
use crate::view::ViewState;

mod canvas;
mod color;
mod errors;
mod pixmap;
mod svg;

/// Maps projection plane coordinates (origin at the canvas center, y up) to canvas
/// pixels (origin top left, y down) and back.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn of<C: Canvas + ?Sized>(canvas: &C) -> Self {
        Self::new(canvas.width(), canvas.height())
    }

    pub fn to_screen(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (x + self.width / 2., self.height - (y + self.height / 2.))
    }

    pub fn to_plane(&self, (px, py): (f64, f64)) -> (f64, f64) {
        (px - self.width / 2., (self.height - py) - self.height / 2.)
    }

    pub fn contains(&self, (px, py): (f64, f64)) -> bool {
        (0. ..self.width).contains(&px) && (0. ..self.height).contains(&py)
    }
}

fn is_finite((x, y): (f64, f64)) -> bool {
    x.is_finite() && y.is_finite()
}

/// What ended up on the canvas in one frame
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FrameStats {
    pub segments: usize,
    pub stars: usize,
    pub labels: usize,
}

#[derive(Debug, Clone)]
pub struct SkyRenderer {
    settings: RenderSettings,
}

impl SkyRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Faintest magnitude still drawn at this zoom
    pub fn limit_magnitude(&self, zoom: f64) -> f64 {
        zoom.log10() + self.settings.magnitude_offset
    }

    /// Redraws the whole frame. The result depends only on the arguments.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        catalog: &Catalog,
        projection: &dyn Projection,
        view: &ViewState,
    ) -> FrameStats {
        let settings = &self.settings;
        let viewport = Viewport::of(canvas);
        let to_screen = |ra, de| {
            viewport.to_screen(projection.to_xy(
                ra,
                de,
                view.center_ra(),
                view.center_de(),
                view.zoom(),
            ))
        };
        let mut stats = FrameStats::default();

        canvas.clear(settings.background);

        for (from, to) in catalog.segments() {
            let (from, to) = (to_screen(from.ra, from.de), to_screen(to.ra, to.de));
            // The antipode of the projection center has no finite image
            if !is_finite(from) || !is_finite(to) {
                continue;
            }
            canvas.stroke_line(from, to, settings.constellation_color);
            stats.segments += 1;
        }

        let limit_magnitude = self.limit_magnitude(view.zoom());
        let label_limit_magnitude = limit_magnitude + settings.label_magnitude_offset;
        let labels_visible = settings.draw_labels && view.zoom() > settings.label_min_zoom;

        for (index, star) in catalog.stars() {
            let position = to_screen(star.ra, star.de);
            if !viewport.contains(position) {
                continue;
            }

            let radius = limit_magnitude - star.magnitude as f64;
            if radius.is_nan() || radius <= 0. {
                continue;
            }

            let color = if settings.colored_stars {
                Rgb::from_color_index(star.color_index)
            } else {
                settings.star_color
            };
            canvas.fill_circle(position, radius, color);
            stats.stars += 1;

            if labels_visible && (star.magnitude as f64) < label_limit_magnitude {
                if let Some(name) = catalog.name(index) {
                    canvas.fill_text(name, position, settings.label_color);
                    stats.labels += 1;
                }
            }
        }

        tracing::debug!(
            "Drew {} segments, {} stars, {} labels at zoom {:.1}",
            stats.segments,
            stats.stars,
            stats.labels,
            view.zoom()
        );
        stats
    }
}
