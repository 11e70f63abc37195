//! Mappings between celestial coordinates and the projection plane.
//!
//! Every strategy takes the projection center and the zoom factor explicitly, so the
//! renderer and the interaction controller work with any of them. Plane coordinates
//! have their origin at the projection center with y pointing up.

use serde::{Deserialize, Serialize};

pub use equatorial_stereographic::EquatorialStereographicProjection;
pub use stereographic::StereographicProjection;
pub use texture::TextureProjection;

use crate::astro_math::Radians;

mod equatorial_stereographic;
mod stereographic;
mod texture;

pub trait Projection {
    /// Projects `(ra, de)` onto the plane around `(center_ra, center_de)`
    fn to_xy(
        &self,
        ra: Radians,
        de: Radians,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (f64, f64);

    /// Inverse of [`Projection::to_xy`]. The plane origin maps back to the center.
    fn to_ra_de(
        &self,
        x: f64,
        y: f64,
        center_ra: Radians,
        center_de: Radians,
        zoom: f64,
    ) -> (Radians, Radians);
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    #[default]
    EquatorialStereographic,
    Stereographic,
    Texture,
}

impl ProjectionKind {
    pub fn create(self) -> Box<dyn Projection> {
        match self {
            ProjectionKind::EquatorialStereographic => Box::new(EquatorialStereographicProjection),
            ProjectionKind::Stereographic => Box::new(StereographicProjection),
            ProjectionKind::Texture => Box::new(TextureProjection),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::f64::consts::{PI, TAU};

    use crate::astro_math::modulo;

    /// Signed difference of two angles, in `[-π, π)`
    pub fn angle_diff(a: f64, b: f64) -> f64 {
        modulo(a - b + PI, TAU) - PI
    }

    pub fn assert_same_direction(actual: (f64, f64), expected: (f64, f64), epsilon: f64) {
        assert!(
            angle_diff(actual.0, expected.0).abs() < epsilon,
            "ra {} != {}",
            actual.0,
            expected.0
        );
        assert!(
            (actual.1 - expected.1).abs() < epsilon,
            "de {} != {}",
            actual.1,
            expected.1
        );
    }
}
