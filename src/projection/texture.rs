use super::Projection;
use crate::astro_math::{clamp_de, wrap_ra, Radians};

/// Equirectangular projection: `ra` and `de` map linearly onto `x` and `y`,
/// like a flat sky texture.
#[derive(Debug, Default, Copy, Clone)]
pub struct TextureProjection;

impl Projection for TextureProjection {
    fn to_xy(
        &self,
        ra: Radians,
        de: Radians,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (f64, f64) {
        ((ra - center_ra) * zoom, (de - center_de) * zoom)
    }

    fn to_ra_de(
        &self,
        x: f64,
        y: f64,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (Radians, Radians) {
        (
            wrap_ra(x / zoom + center_ra),
            clamp_de(y / zoom + center_de),
        )
    }
}
