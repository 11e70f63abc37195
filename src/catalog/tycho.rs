//! Conversion of the Tycho-2 catalog into the binary star catalog.
//!
//! Tycho-2 (I/259) is distributed as `tyc2.dat.00.gz` .. `tyc2.dat.19.gz` from
//! <http://cdsarc.u-strasbg.fr/viz-bin/cat/I/259>; unpack and concatenate them into
//! one `tyc2.dat`. Unlike the Hipparcos conversion the output is dense: record `n`
//! of the input becomes catalog index `n`.
//!
//! Johnson V and B−V are derived from the Tycho BT/VT magnitudes:
//! `V = VT − 0.090·(BT − VT)` and `B−V = 0.850·(BT − VT)`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use super::columns::{number, optional_number};
use super::errors::{CatalogError, RecordError, Result};
use super::star::{write_star, Star};
use crate::astro_math::deg_to_rad;

const BT_MAG: Range<usize> = 110..116;
const VT_MAG: Range<usize> = 123..129;
const HIP: Range<usize> = 142..148;
const RA_DEG: Range<usize> = 152..164;
const DE_DEG: Range<usize> = 165..177;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TychoRecord {
    /// Hipparcos number of the same star, if it has one
    pub hip: Option<usize>,
    pub star: Star,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TychoSummary {
    pub records: usize,
    /// Records with a Hipparcos cross identification
    pub hipparcos: usize,
    /// Records without BT and VT, written with a NaN magnitude
    pub without_magnitude: usize,
}

/// Johnson V magnitude and B−V color index from Tycho BT/VT.
///
/// With one band missing the other one is used as the magnitude and the color index
/// is NaN. With both missing both values are NaN.
pub fn johnson_magnitude(bt: Option<f32>, vt: Option<f32>) -> (f32, f32) {
    match (bt, vt) {
        (Some(bt), Some(vt)) => {
            let (bt, vt) = (bt as f64, vt as f64);
            ((vt - 0.090 * (bt - vt)) as f32, (0.850 * (bt - vt)) as f32)
        }
        (Some(bt), None) => (bt, f32::NAN),
        (None, Some(vt)) => (vt, f32::NAN),
        (None, None) => (f32::NAN, f32::NAN),
    }
}

/// Parses one fixed-column `tyc2.dat` record
pub fn parse_record(record: &str) -> Result<TychoRecord, RecordError> {
    let bt = optional_number(record, BT_MAG, "BT magnitude")?;
    let vt = optional_number(record, VT_MAG, "VT magnitude")?;
    let (magnitude, color_index) = johnson_magnitude(bt, vt);

    Ok(TychoRecord {
        hip: optional_number(record, HIP, "HIP number")?,
        star: Star {
            ra: deg_to_rad(number(record, RA_DEG, "right ascension")?),
            de: deg_to_rad(number(record, DE_DEG, "declination")?),
            magnitude,
            color_index,
        },
    })
}

/// Logs how far a Tycho star is from its Hipparcos counterpart
fn cross_check(tycho: &TychoRecord, hipparcos: &[Option<Star>]) {
    let Some(hip) = tycho.hip else {
        return;
    };

    match hipparcos.get(hip).and_then(Option::as_ref) {
        Some(star) => tracing::debug!(
            "HIP {} delta ra={:e} de={:e} mag={:.3} color={:.3}",
            hip,
            tycho.star.ra - star.ra,
            tycho.star.de - star.de,
            tycho.star.magnitude - star.magnitude,
            tycho.star.color_index - star.color_index
        ),
        None => tracing::debug!("HIP {} not in the Hipparcos catalog", hip),
    }
}

/// Writes one catalog record per input line. `hipparcos`, when given, is only used to
/// log the differences of cross identified stars.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    origin: &Path,
    hipparcos: Option<&[Option<Star>]>,
) -> Result<TychoSummary> {
    let mut summary = TychoSummary::default();

    for (line_number, line) in reader.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let line = line.map_err(|e| CatalogError::io(origin, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let record =
            parse_record(&line).map_err(|e| CatalogError::record(origin, line_number, e))?;
        if let Some(hipparcos) = hipparcos {
            cross_check(&record, hipparcos);
        }

        write_star(writer, Some(&record.star)).map_err(|e| CatalogError::io(origin, e))?;
        summary.records += 1;
        if record.hip.is_some() {
            summary.hipparcos += 1;
        }
        if record.star.magnitude.is_nan() {
            summary.without_magnitude += 1;
        }
    }

    Ok(summary)
}

pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    hipparcos: Option<&[Option<Star>]>,
) -> Result<TychoSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = BufReader::new(File::open(input).map_err(|e| CatalogError::io(input, e))?);
    let mut writer = BufWriter::new(File::create(output).map_err(|e| CatalogError::io(output, e))?);

    let summary = convert(reader, &mut writer, input, hipparcos)?;
    writer.flush().map_err(|e| CatalogError::io(output, e))?;

    tracing::info!(
        "Converted {} stars ({} with HIP number, {} without magnitude) from {} into {}",
        summary.records,
        summary.hipparcos,
        summary.without_magnitude,
        input.display(),
        output.display()
    );
    Ok(summary)
}
