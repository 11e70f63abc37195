//! View state, pointer/scroll interaction and the star map that ties them to the renderer.

pub use controller::*;
pub use star_map::StarMap;

use crate::astro_math::{clamp, clamp_de, wrap_ra, Radians};

mod controller;
mod star_map;

pub const MIN_ZOOM: f64 = 200.;
pub const MAX_ZOOM: f64 = 20000.;

/// Projection center and zoom of the map.
///
/// `center_ra` is always in `[0, 2π)`, `center_de` in `[-π, π]` and `zoom` in
/// `[MIN_ZOOM, MAX_ZOOM]`; every constructor normalizes its input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center_ra: Radians,
    center_de: Radians,
    zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(0., 0., MIN_ZOOM)
    }
}

impl ViewState {
    pub fn new(center_ra: Radians, center_de: Radians, zoom: f64) -> Self {
        Self {
            center_ra: wrap_ra(center_ra),
            center_de: clamp_de(center_de),
            zoom: clamp(zoom, MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn center_ra(&self) -> Radians {
        self.center_ra
    }

    pub fn center_de(&self) -> Radians {
        self.center_de
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn with_center(self, center_ra: Radians, center_de: Radians) -> Self {
        Self::new(center_ra, center_de, self.zoom)
    }

    pub fn with_zoom(self, zoom: f64) -> Self {
        Self::new(self.center_ra, self.center_de, zoom)
    }
}
