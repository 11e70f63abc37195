use super::Projection;
use crate::astro_math::Radians;

/// Stereographic projection with its tangent point fixed at `(0, 0)`.
///
/// The center is applied by shifting `ra` and `de` before projecting, which is exact
/// only while the center lies on the celestial equator. Away from the equator the map
/// is distorted compared to [`super::StereographicProjection`]; both are kept because
/// they are visibly different maps.
/// See <https://mathworld.wolfram.com/StereographicProjection.html>.
#[derive(Debug, Default, Copy, Clone)]
pub struct EquatorialStereographicProjection;

impl EquatorialStereographicProjection {
    fn to_xy_at_origin(ra: Radians, de: Radians, zoom: f64) -> (f64, f64) {
        let (sin_de, cos_de) = de.sin_cos();
        let (sin_ra, cos_ra) = ra.sin_cos();
        let k = 2. * zoom / (1. + cos_de * cos_ra);
        (k * cos_de * sin_ra, k * sin_de)
    }

    fn to_ra_de_at_origin(x: f64, y: f64, zoom: f64) -> Option<(Radians, Radians)> {
        let r = x.hypot(y);
        if r == 0. {
            return None;
        }

        let c = 2. * r.atan2(2. * zoom);
        let (sin_c, cos_c) = c.sin_cos();
        let de = (y * sin_c / r).clamp(-1., 1.).asin();
        let ra = (x * sin_c).atan2(r * cos_c);
        Some((ra, de))
    }
}

impl Projection for EquatorialStereographicProjection {
    fn to_xy(
        &self,
        ra: Radians,
        de: Radians,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (f64, f64) {
        Self::to_xy_at_origin(ra - center_ra, de - center_de, zoom)
    }

    fn to_ra_de(
        &self,
        x: f64,
        y: f64,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (Radians, Radians) {
        match Self::to_ra_de_at_origin(x, y, zoom) {
            Some((ra, de)) => (ra + center_ra, de + center_de),
            None => (center_ra, center_de),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::test_util::assert_same_direction;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn known_points() {
        let projection = EquatorialStereographicProjection;

        let (x, y) = projection.to_xy(FRAC_PI_2, 0., 0., 0., 200.);
        assert_float_absolute_eq!(x, 400., 1E-9);
        assert_float_absolute_eq!(y, 0., 1E-9);

        let (x, y) = projection.to_xy(0., FRAC_PI_2, 0., 0., 200.);
        assert_float_absolute_eq!(x, 0., 1E-9);
        assert_float_absolute_eq!(y, 400., 1E-9);
    }

    #[test]
    fn center_is_a_pure_shift() {
        let projection = EquatorialStereographicProjection;
        let shifted = projection.to_xy(1.3, 0.9, 1., 0.7, 300.);
        let at_origin = projection.to_xy(0.3, 0.2, 0., 0., 300.);

        assert_float_absolute_eq!(shifted.0, at_origin.0, 1E-9);
        assert_float_absolute_eq!(shifted.1, at_origin.1, 1E-9);
    }

    #[test]
    fn origin_maps_back_to_center() {
        let projection = EquatorialStereographicProjection;
        assert_eq!(projection.to_ra_de(0., 0., 2.5, -0.4, 800.), (2.5, -0.4));
        assert_eq!(projection.to_ra_de(0., 0., 0., 0., 200.), (0., 0.));
    }

    #[test]
    fn round_trip() {
        let projection = EquatorialStereographicProjection;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..2000 {
            let center_ra = rng.gen_range(0. ..TAU);
            let center_de = rng.gen_range(-0.5..0.5);
            let zoom = rng.gen_range(200. ..20000.);
            let ra = center_ra + rng.gen_range(-2.5..2.5);
            let de = center_de + rng.gen_range(-1.0..1.0);

            let (x, y) = projection.to_xy(ra, de, center_ra, center_de, zoom);
            let back = projection.to_ra_de(x, y, center_ra, center_de, zoom);
            assert_same_direction(back, (ra, de), 1E-9);
        }
    }
}
