use super::Projection;
use crate::astro_math::Radians;

/// Oblique stereographic projection tangent to the sphere at the projection center.
/// Valid for any center declination.
/// See <https://mathworld.wolfram.com/StereographicProjection.html>.
#[derive(Debug, Default, Copy, Clone)]
pub struct StereographicProjection;

impl Projection for StereographicProjection {
    fn to_xy(
        &self,
        ra: Radians,
        de: Radians,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (f64, f64) {
        let (sin_center_de, cos_center_de) = center_de.sin_cos();
        let (sin_de, cos_de) = de.sin_cos();
        let (sin_dra, cos_dra) = (ra - center_ra).sin_cos();

        let k = 2. * zoom / (1. + sin_center_de * sin_de + cos_center_de * cos_de * cos_dra);
        let x = k * cos_de * sin_dra;
        let y = k * (cos_center_de * sin_de - sin_center_de * cos_de * cos_dra);
        (x, y)
    }

    fn to_ra_de(
        &self,
        x: f64,
        y: f64,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (Radians, Radians) {
        let r = x.hypot(y);
        if r == 0. {
            return (center_ra, center_de);
        }

        let (sin_center_de, cos_center_de) = center_de.sin_cos();
        let c = 2. * r.atan2(2. * zoom);
        let (sin_c, cos_c) = c.sin_cos();

        let de = (cos_c * sin_center_de + y * sin_c * cos_center_de / r)
            .clamp(-1., 1.)
            .asin();
        let ra = center_ra
            + (x * sin_c).atan2(r * cos_center_de * cos_c - y * sin_center_de * sin_c);
        (ra, de)
    }
}
