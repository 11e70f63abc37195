//! Conversion of the Hipparcos catalog into the binary star catalog.
//!
//! The Hipparcos catalog (new reduction, I/311) can be downloaded from
//! <http://cdsarc.u-strasbg.fr/ftp/I/311/hip2.dat.gz>. Each star is written at the
//! slot matching its HIP number so the binary catalog can be indexed by HIP number
//! directly; unused numbers become absent records.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use super::columns::number;
use super::errors::{CatalogError, RecordError, Result};
use super::star::{write_star, Star};

const HIP: Range<usize> = 0..6;
const RA_RAD: Range<usize> = 15..28;
const DE_RAD: Range<usize> = 29..42;
const HP_MAG: Range<usize> = 129..136;
const B_V: Range<usize> = 152..158;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HipparcosRecord {
    pub hip: usize,
    pub star: Star,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Stars written
    pub records: usize,
    /// Absent slots written for unused HIP numbers
    pub gaps: usize,
}

/// Parses one fixed-column `hip2.dat` record
pub fn parse_record(record: &str) -> Result<HipparcosRecord, RecordError> {
    Ok(HipparcosRecord {
        hip: number(record, HIP, "HIP number")?,
        star: Star {
            ra: number(record, RA_RAD, "right ascension")?,
            de: number(record, DE_RAD, "declination")?,
            magnitude: number(record, HP_MAG, "magnitude")?,
            color_index: number(record, B_V, "B-V color index")?,
        },
    })
}

pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    origin: &Path,
) -> Result<ConversionSummary> {
    let mut summary = ConversionSummary::default();
    let mut index = 0;

    for (line_number, line) in reader.lines().enumerate().map(|(i, l)| (i + 1, l)) {
        let line = line.map_err(|e| CatalogError::io(origin, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let record =
            parse_record(&line).map_err(|e| CatalogError::record(origin, line_number, e))?;
        if record.hip < index {
            return Err(CatalogError::OutOfOrder {
                number: record.hip,
                index,
            });
        }

        while index < record.hip {
            write_star(writer, None).map_err(|e| CatalogError::io(origin, e))?;
            summary.gaps += 1;
            index += 1;
        }

        write_star(writer, Some(&record.star)).map_err(|e| CatalogError::io(origin, e))?;
        summary.records += 1;
        index += 1;
    }

    Ok(summary)
}

pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConversionSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let reader = BufReader::new(File::open(input).map_err(|e| CatalogError::io(input, e))?);
    let mut writer = BufWriter::new(File::create(output).map_err(|e| CatalogError::io(output, e))?);

    let summary = convert(reader, &mut writer, input)?;
    writer.flush().map_err(|e| CatalogError::io(output, e))?;

    tracing::info!(
        "Converted {} stars ({} empty slots) from {} into {}",
        summary.records,
        summary.gaps,
        input.display(),
        output.display()
    );
    Ok(summary)
}
