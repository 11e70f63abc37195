use std::collections::HashMap;
use std::path::Path;

use super::errors::{CatalogError, Result};
use super::{parse_index, resolve_index, Star};

/// Display names keyed by catalog index
pub type StarNames = HashMap<usize, String>;

pub fn load_names<P: AsRef<Path>>(stars: &[Option<Star>], path: P) -> Result<StarNames> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let names = parse_names(stars, &text, path)?;

    tracing::info!("Loaded {} star names from {}", names.len(), path.display());
    Ok(names)
}

/// Parses `index, name` lines. Names pointing at absent or unknown stars are dropped.
pub fn parse_names(stars: &[Option<Star>], text: &str, origin: &Path) -> Result<StarNames> {
    let mut names = StarNames::new();

    for (line_number, line) in text.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let (index, name) = line.split_once(',').ok_or_else(|| {
            CatalogError::parse(origin, line_number, "expected `index, name`")
        })?;
        let index = parse_index(index.trim(), origin, line_number)?;
        let name = name.trim().replace('_', " ");

        match resolve_index(stars, index) {
            Ok(index) => {
                names.insert(index, name);
            }
            Err(missing) => {
                tracing::warn!("{} for name {} (line {})", missing, name, line_number)
            }
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stars() -> Vec<Option<Star>> {
        vec![
            Some(Star::new(0., 0., 1., 0.)),
            None,
            Some(Star::new(1., 0.5, 2., 0.3)),
        ]
    }

    #[test]
    fn names_are_trimmed_and_underscores_become_spaces() {
        let text = "# index, name\n0, Alpha_Centauri_A\n2,  Vega \n";
        let names = parse_names(&stars(), text, Path::new("names.txt")).unwrap();

        assert_eq!(names.len(), 2);
        assert_eq!(names[&0], "Alpha Centauri A");
        assert_eq!(names[&2], "Vega");
    }

    #[test]
    fn absent_and_out_of_range_entries_are_dropped() {
        let text = "1, Ghost\n0, Sirius\n17, Nowhere\n-3, Negative\n";
        let names = parse_names(&stars(), text, Path::new("names.txt")).unwrap();

        assert_eq!(names.len(), 1);
        assert_eq!(names[&0], "Sirius");
    }

    #[test]
    fn malformed_index_fails() {
        let text = "0, Sirius\nzero, Vega\n";
        let result = parse_names(&stars(), text, Path::new("names.txt"));

        match result {
            Err(CatalogError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn missing_separator_fails() {
        let result = parse_names(&stars(), "0 Sirius\n", Path::new("names.txt"));
        assert!(matches!(result, Err(CatalogError::Parse { line: 1, .. })));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "2, Polaris\n").unwrap();

        let names = load_names(&stars(), &path).unwrap();
        assert_eq!(names.get(&2).map(String::as_str), Some("Polaris"));
    }
}
