use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::astro_math::{deg_to_rad, hours_to_rad, Degrees, Hours};
use crate::projection::ProjectionKind;
use crate::render::Rgb;
use crate::view::ViewState;

/* Config */
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogPaths,
    pub view: ViewSettings,
    pub render: RenderSettings,
}

/* Catalog Files */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPaths {
    pub stars: PathBuf,
    pub names: PathBuf,
    pub constellations: PathBuf,
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            stars: PathBuf::from("hip.jbin"),
            names: PathBuf::from("star_names_western.txt"),
            constellations: PathBuf::from("constellations_western.txt"),
        }
    }
}

/* Initial View */
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub projection: ProjectionKind,
    pub center_ra_hours: Hours,
    pub center_de_degrees: Degrees,
    pub zoom: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::EquatorialStereographic,
            center_ra_hours: 0.,
            center_de_degrees: 0.,
            zoom: 200.,
        }
    }
}

impl ViewSettings {
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(
            hours_to_rad(self.center_ra_hours),
            deg_to_rad(self.center_de_degrees),
            self.zoom,
        )
    }
}

/* Rendering */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    /// Added to `log10(zoom)` to get the faintest drawn magnitude
    pub magnitude_offset: f64,
    /// Labels are only drawn for stars brighter than the limit magnitude plus this offset
    pub label_magnitude_offset: f64,
    pub label_min_zoom: f64,
    pub draw_labels: bool,
    pub colored_stars: bool,
    pub background: Rgb,
    pub constellation_color: Rgb,
    pub star_color: Rgb,
    pub label_color: Rgb,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 800.,
            height: 600.,
            magnitude_offset: 4.,
            label_magnitude_offset: 4.,
            label_min_zoom: 10.,
            draw_labels: false,
            colored_stars: false,
            background: Rgb::BLACK,
            constellation_color: Rgb::BLUE,
            star_color: Rgb::WHITE,
            label_color: Rgb::WHITE,
        }
    }
}
