//! Star catalog tables: the binary star catalog, display names and constellation figures.
//!
//! All tables are loaded once at startup and are read-only afterwards. Names and
//! constellation segments refer to stars by their catalog index.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

pub use constellations::*;
pub use errors::*;
pub use names::*;
pub use star::*;

use crate::config::CatalogPaths;

mod columns;
mod constellations;
mod errors;
pub mod hipparcos;
mod names;
mod star;
pub mod tycho;

/// Why a catalog index could not be turned into a star
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MissingStar {
    Absent(usize),
    OutOfRange(i64),
}

impl Display for MissingStar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MissingStar::Absent(index) => write!(f, "Missing star {}", index),
            MissingStar::OutOfRange(index) => write!(f, "Catalog index {} out of range", index),
        }
    }
}

pub(crate) fn resolve_index(stars: &[Option<Star>], index: i64) -> Result<usize, MissingStar> {
    let slot = usize::try_from(index).map_err(|_| MissingStar::OutOfRange(index))?;
    match stars.get(slot) {
        Some(Some(_)) => Ok(slot),
        Some(None) => Err(MissingStar::Absent(slot)),
        None => Err(MissingStar::OutOfRange(index)),
    }
}

pub(crate) fn parse_index(field: &str, origin: &Path, line: usize) -> Result<i64, CatalogError> {
    field.parse().map_err(|_| {
        CatalogError::parse(origin, line, format!("invalid catalog index `{}`", field))
    })
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stars: Vec<Option<Star>>,
    names: StarNames,
    constellations: Vec<Constellation>,
}

impl Catalog {
    pub fn new(
        stars: Vec<Option<Star>>,
        names: StarNames,
        constellations: Vec<Constellation>,
    ) -> Self {
        Self {
            stars,
            names,
            constellations,
        }
    }

    /// Loads the star table first, then the name and constellation tables that refer to it
    pub fn load(paths: &CatalogPaths) -> Result<Self, CatalogError> {
        let stars = load_stars(&paths.stars)?;
        let names = load_names(&stars, &paths.names)?;
        let constellations = load_constellations(&stars, &paths.constellations)?;
        Ok(Self::new(stars, names, constellations))
    }

    /// Number of catalog slots, absent ones included
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn star(&self, index: usize) -> Option<&Star> {
        self.stars.get(index).and_then(Option::as_ref)
    }

    /// Present stars with their catalog index
    pub fn stars(&self) -> impl Iterator<Item = (usize, &Star)> {
        self.stars
            .iter()
            .enumerate()
            .filter_map(|(index, star)| star.as_ref().map(|star| (index, star)))
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(&index).map(String::as_str)
    }

    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    /// End points of every constellation segment
    pub fn segments(&self) -> impl Iterator<Item = (&Star, &Star)> {
        self.constellations
            .iter()
            .flat_map(|c| c.segments.iter())
            .filter_map(|&(from, to)| Some((self.star(from)?, self.star(to)?)))
    }
}
