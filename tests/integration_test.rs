use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use star_map::catalog::{tycho, write_stars, Catalog, CatalogError, Star};
use star_map::config::{CatalogPaths, Config, RenderSettings};
use star_map::projection::{Projection, ProjectionKind};
use star_map::render::{DrawList, SkyRenderer};
use star_map::view::{StarMap, ViewState, MAX_ZOOM, MIN_ZOOM};
use tempfile::TempDir;
#[macro_use]
extern crate assert_float_eq;

fn write_catalog(dir: &Path, stars: &[Option<Star>], names: &str, constellations: &str) -> CatalogPaths {
    let paths = CatalogPaths {
        stars: dir.join("stars.jbin"),
        names: dir.join("names.txt"),
        constellations: dir.join("constellations.txt"),
    };
    write_stars(&paths.stars, stars).unwrap();
    std::fs::write(&paths.names, names).unwrap();
    std::fs::write(&paths.constellations, constellations).unwrap();
    paths
}

fn create_map(catalog: Catalog, kind: ProjectionKind, settings: RenderSettings) -> StarMap<DrawList> {
    StarMap::new(
        catalog,
        kind.create(),
        SkyRenderer::new(settings),
        ViewState::new(0., 0., 200.),
        DrawList::new(800., 600.).unwrap(),
    )
}

fn labelled() -> RenderSettings {
    RenderSettings {
        draw_labels: true,
        ..RenderSettings::default()
    }
}

#[test]
fn test_three_star_scenario() {
    let dir = TempDir::new().unwrap();
    let paths = write_catalog(
        dir.path(),
        &[
            Some(Star::new(0., 0., 1., 0.)),
            None,
            Some(Star::new(FRAC_PI_2, 0., 5., 0.)),
        ],
        "0, Zero\n1, One\n2, Two\n",
        "Pair 2 0 2 0 1\n",
    );
    let catalog = Catalog::load(&paths).unwrap();
    assert_eq!(catalog.len(), 3);
    assert!(catalog.star(1).is_none());
    assert_eq!(catalog.name(1), None);
    assert_eq!(catalog.constellations()[0].segments, vec![(0, 2)]);

    let map = create_map(catalog, ProjectionKind::Texture, labelled());
    let circles: Vec<_> = map.canvas().circles().collect();
    let limit = 200f64.log10() + 4.;

    assert_eq!(circles.len(), 2);
    assert_eq!(circles[0].0, &(400., 300.));
    assert_float_absolute_eq!(circles[0].1, limit - 1., 1E-12);
    assert_float_absolute_eq!(circles[1].0 .0, 400. + 200. * FRAC_PI_2, 1E-9);
    assert_float_absolute_eq!(circles[1].0 .1, 300., 1E-9);
    assert_float_absolute_eq!(circles[1].1, limit - 5., 1E-12);
    assert_eq!(map.canvas().texts().collect::<Vec<_>>(), vec!["Zero", "Two"]);
    assert_eq!(map.canvas().lines().count(), 1);
}

#[test]
fn test_absent_slot_is_skipped() {
    let dir = TempDir::new().unwrap();
    let mut stars: Vec<_> = (0..8)
        .map(|i| Some(Star::new(0.01 * i as f64, 0.005 * i as f64, 2., 0.6)))
        .collect();
    stars[5] = None;
    let paths = write_catalog(
        dir.path(),
        &stars,
        "# index, name\n4, Four\n5, Ghost\n6, Six\n",
        "Ghost 3 4 5 5 6 4 6\n",
    );

    let catalog = Catalog::load(&paths).unwrap();
    assert_eq!(catalog.name(5), None);
    assert_eq!(catalog.constellations()[0].segments, vec![(4, 6)]);

    for kind in [
        ProjectionKind::EquatorialStereographic,
        ProjectionKind::Stereographic,
        ProjectionKind::Texture,
    ] {
        let map = create_map(catalog.clone(), kind, labelled());

        assert_eq!(map.last_frame().stars, 7);
        assert_eq!(map.last_frame().segments, 1);
        assert!(map.canvas().texts().all(|text| text != "Ghost"));
    }
}

#[test]
fn test_missing_catalog_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = CatalogPaths {
        stars: dir.path().join("missing.jbin"),
        ..CatalogPaths::default()
    };

    assert!(matches!(Catalog::load(&paths), Err(CatalogError::Io { .. })));
}

#[test]
fn test_malformed_names_fail() {
    let dir = TempDir::new().unwrap();
    let paths = write_catalog(
        dir.path(),
        &[Some(Star::new(0., 0., 1., 0.))],
        "zero, Zero\n",
        "",
    );

    assert!(matches!(
        Catalog::load(&paths),
        Err(CatalogError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_drag() {
    let catalog = Catalog::new(vec![Some(Star::new(0., 0., 1., 0.))], Default::default(), Vec::new());
    let mut map = create_map(catalog, ProjectionKind::Texture, RenderSettings::default());

    map.pointer_pressed(10., 10.);
    map.pointer_dragged(20., 20.);
    map.pointer_released();

    assert_float_absolute_eq!(map.view().center_ra(), TAU - 10. / 200., 1E-12);
    assert_float_absolute_eq!(map.view().center_de(), 10. / 200., 1E-12);
    assert_eq!(map.frames(), 2);
}

#[test]
fn test_zoom_saturates() {
    let mut map = create_map(Catalog::default(), ProjectionKind::Stereographic, RenderSettings::default());

    for _ in 0..100 {
        map.scrolled(1.);
        assert!(map.view().zoom() <= MAX_ZOOM);
    }
    assert_eq!(map.view().zoom(), MAX_ZOOM);

    for _ in 0..100 {
        map.scrolled(-1.);
        assert!(map.view().zoom() >= MIN_ZOOM);
    }
    assert_eq!(map.view().zoom(), MIN_ZOOM);
}

#[test]
fn test_degenerate_center() {
    for kind in [
        ProjectionKind::EquatorialStereographic,
        ProjectionKind::Stereographic,
        ProjectionKind::Texture,
    ] {
        let projection = kind.create();
        assert_eq!(projection.to_ra_de(0., 0., 2.5, -0.4, 5000.), (2.5, -0.4));
    }
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.view.projection = ProjectionKind::Texture;
    config.render.draw_labels = true;

    confy::store_path(&path, &config).unwrap();
    let loaded: Config = confy::load_path(&path).unwrap();

    assert_eq!(loaded.view, config.view);
    assert_eq!(loaded.render, config.render);
    assert_eq!(loaded.catalog, config.catalog);
}

fn tycho_line(bt: &str, vt: &str, ra_deg: &str, de_deg: &str) -> String {
    let mut line = " ".repeat(207);
    line.replace_range(110..116, &format!("{:>6}", bt));
    line.replace_range(123..129, &format!("{:>6}", vt));
    line.replace_range(152..164, &format!("{:>12}", ra_deg));
    line.replace_range(165..177, &format!("{:>12}", de_deg));
    line
}

#[test]
fn test_tycho_catalog_renders() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tyc2.dat");
    std::fs::write(
        &input,
        [
            tycho_line("5.500", "5.000", "0.00000000", "0.00000000"),
            tycho_line("", "", "0.50000000", "0.50000000"),
            tycho_line("6.000", "", "359.00000000", "-1.00000000"),
        ]
        .join("\n"),
    )
    .unwrap();

    let paths = write_catalog(dir.path(), &[], "", "");
    let summary = tycho::convert_file(&input, &paths.stars, None).unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(summary.without_magnitude, 1);

    let catalog = Catalog::load(&paths).unwrap();
    assert_eq!(catalog.len(), 3);
    let settings = RenderSettings {
        colored_stars: true,
        ..RenderSettings::default()
    };
    let map = create_map(catalog, ProjectionKind::Stereographic, settings);

    // The star without BT and VT is never drawn
    assert_eq!(map.last_frame().stars, 2);
    let circles: Vec<_> = map.canvas().circles().collect();
    assert_eq!(circles[0].0, &(400., 300.));
    assert_float_absolute_eq!(circles[0].1, 200f64.log10() + 4. - (5. - 0.045), 1E-5);
}
