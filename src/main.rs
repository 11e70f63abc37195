use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use star_map::catalog::{hipparcos, load_stars, tycho, Catalog};
use star_map::config::Config;
use star_map::render::{Canvas, PixmapCanvas, SkyRenderer, SvgCanvas};
use star_map::view::StarMap;

#[derive(Parser)]
#[command(name = "star_map")]
#[command(about = "Renders the night sky from a star catalog")]
#[command(version)]
struct Cli {
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one frame, optionally after replaying scroll and drag gestures
    Render {
        /// `.svg` writes an SVG document, anything else a PNG
        #[arg(short, long, default_value = "starmap.png")]
        output: PathBuf,
        /// Scroll steps, positive zooms in
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        scroll: i32,
        /// Drag from (x0, y0) to (x1, y1), in pixels
        #[arg(long, num_args = 4, value_names = ["X0", "Y0", "X1", "Y1"], allow_hyphen_values = true)]
        drag: Option<Vec<f64>>,
    },
    /// Convert the Hipparcos main catalog (hip2.dat) into the binary star catalog
    ConvertHipparcos { input: PathBuf, output: PathBuf },
    /// Convert the Tycho-2 catalog (tyc2.dat) into the binary star catalog
    ConvertTycho {
        input: PathBuf,
        output: PathBuf,
        /// Binary Hipparcos catalog to compare cross identified stars against
        #[arg(long)]
        hipparcos: Option<PathBuf>,
    },
}

struct Gestures {
    scroll: i32,
    drag: Option<Vec<f64>>,
}

fn draw<C: Canvas>(config: &Config, canvas: C, gestures: &Gestures) -> eyre::Result<C> {
    let catalog = Catalog::load(&config.catalog).wrap_err("Couldn't load the star catalog")?;
    let mut star_map = StarMap::new(
        catalog,
        config.view.projection.create(),
        SkyRenderer::new(config.render.clone()),
        config.view.initial_view(),
        canvas,
    );

    let delta = f64::from(gestures.scroll.signum());
    for _ in 0..gestures.scroll.unsigned_abs() {
        star_map.scrolled(delta);
    }

    if let Some([x0, y0, x1, y1]) = gestures.drag.as_deref() {
        star_map.pointer_pressed(*x0, *y0);
        star_map.pointer_dragged(*x1, *y1);
        star_map.pointer_released();
    }

    let view = star_map.view();
    tracing::info!(
        "Final view: ra={:.4} de={:.4} zoom={:.1}, {} frames drawn",
        view.center_ra(),
        view.center_de(),
        view.zoom(),
        star_map.frames()
    );
    Ok(star_map.into_canvas())
}

fn render(config: &Config, output: PathBuf, gestures: Gestures) -> eyre::Result<()> {
    let (width, height) = (config.render.width, config.render.height);
    let is_svg = output
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

    let saved = if is_svg {
        let canvas = draw(config, SvgCanvas::new(width, height)?, &gestures)?;
        canvas.save(&output)
    } else {
        let canvas = draw(config, PixmapCanvas::new(width, height)?, &gestures)?;
        canvas.save_png(&output)
    };
    saved.wrap_err_with(|| format!("Couldn't write {}", output.display()))?;

    tracing::info!("Wrote {}", output.display());
    Ok(())
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            output,
            scroll,
            drag,
        } => {
            let config: Config = confy::load_path(&cli.config)
                .wrap_err_with(|| format!("Couldn't parse configuration {}", cli.config.display()))?;
            render(&config, output, Gestures { scroll, drag })
        }
        Commands::ConvertHipparcos { input, output } => {
            hipparcos::convert_file(&input, &output)?;
            Ok(())
        }
        Commands::ConvertTycho {
            input,
            output,
            hipparcos: reference,
        } => {
            let reference = reference.map(load_stars).transpose()?;
            tycho::convert_file(&input, &output, reference.as_deref())?;
            Ok(())
        }
    }
}
