use std::path::Path;

use super::errors::{CatalogError, Result};
use super::{parse_index, resolve_index, Star};

/// A named stick figure. Segments hold catalog indices of their two end points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constellation {
    pub name: String,
    pub segments: Vec<(usize, usize)>,
}

pub fn load_constellations<P: AsRef<Path>>(
    stars: &[Option<Star>],
    path: P,
) -> Result<Vec<Constellation>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let constellations = parse_constellations(stars, &text, path)?;

    tracing::info!(
        "Loaded {} constellations ({} segments) from {}",
        constellations.len(),
        constellations
            .iter()
            .map(|c| c.segments.len())
            .sum::<usize>(),
        path.display()
    );
    Ok(constellations)
}

/// Parses `name count idx1 idx2 ...` lines where each index pair is one segment.
/// A repeated name replaces the earlier entry.
pub fn parse_constellations(
    stars: &[Option<Star>],
    text: &str,
    origin: &Path,
) -> Result<Vec<Constellation>> {
    let mut constellations: Vec<Constellation> = Vec::new();

    for (line_number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let constellation = parse_line(stars, line, origin, line_number)?;
        match constellations
            .iter_mut()
            .find(|c| c.name == constellation.name)
        {
            Some(existing) => *existing = constellation,
            None => constellations.push(constellation),
        }
    }

    Ok(constellations)
}

fn parse_line(
    stars: &[Option<Star>],
    line: &str,
    origin: &Path,
    line_number: usize,
) -> Result<Constellation> {
    let mut fields = line.split_whitespace();

    let name = fields
        .next()
        .ok_or_else(|| CatalogError::parse(origin, line_number, "missing constellation name"))?;
    let count = fields
        .next()
        .ok_or_else(|| CatalogError::parse(origin, line_number, "missing segment count"))?;
    let count: usize = count.parse().map_err(|_| {
        CatalogError::parse(origin, line_number, format!("invalid segment count `{}`", count))
    })?;

    let indices = fields
        .map(|field| parse_index(field, origin, line_number))
        .collect::<Result<Vec<_>>>()?;
    let expected = count.checked_mul(2).ok_or_else(|| {
        CatalogError::parse(origin, line_number, format!("segment count {} too large", count))
    })?;
    if indices.len() < expected {
        return Err(CatalogError::parse(
            origin,
            line_number,
            format!(
                "expected {} indices for {} segments, found {}",
                expected,
                count,
                indices.len()
            ),
        ));
    }

    let mut segments = Vec::with_capacity(count);
    for pair in indices.chunks_exact(2).take(count) {
        match (resolve_index(stars, pair[0]), resolve_index(stars, pair[1])) {
            (Ok(from), Ok(to)) => segments.push((from, to)),
            (Err(missing), _) => tracing::warn!(
                "First star of {} segment: {} (line {})",
                name,
                missing,
                line_number
            ),
            (_, Err(missing)) => tracing::warn!(
                "Second star of {} segment: {} (line {})",
                name,
                missing,
                line_number
            ),
        }
    }

    Ok(Constellation {
        name: name.to_string(),
        segments,
    })
}
