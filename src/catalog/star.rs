use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use super::errors::{CatalogError, Result};
use crate::astro_math::Radians;

/// Size of one binary catalog record: ra (f64), de (f64), magnitude (f32), color index (f32)
pub const RECORD_SIZE: usize = 24;

/// Right ascension written into a record to mark an unused catalog number
pub const ABSENT_MARKER: f64 = f64::MIN;

/// Bit pattern of the smallest positive subnormal double, used as the absent marker
/// by catalogs produced with older converters
const LEGACY_ABSENT_MARKER_BITS: u64 = 1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Star {
    pub ra: Radians,
    pub de: Radians,
    pub magnitude: f32,
    pub color_index: f32,
}

impl Star {
    pub fn new(ra: Radians, de: Radians, magnitude: f32, color_index: f32) -> Self {
        Self {
            ra,
            de,
            magnitude,
            color_index,
        }
    }
}

pub fn is_absent_marker(ra: f64) -> bool {
    ra == ABSENT_MARKER || ra.to_bits() == LEGACY_ABSENT_MARKER_BITS
}

fn decode_record(record: &[u8; RECORD_SIZE]) -> Option<Star> {
    let ra = BigEndian::read_f64(&record[0..8]);
    if is_absent_marker(ra) {
        return None;
    }

    Some(Star {
        ra,
        de: BigEndian::read_f64(&record[8..16]),
        magnitude: BigEndian::read_f32(&record[16..20]),
        color_index: BigEndian::read_f32(&record[20..24]),
    })
}

/// Reads records until end of stream. A partial trailing record is dropped.
pub fn read_stars<R: Read>(mut reader: R) -> io::Result<Vec<Option<Star>>> {
    let mut stars = Vec::new();
    let mut record = [0u8; RECORD_SIZE];

    loop {
        match reader.read_exact(&mut record) {
            Ok(()) => stars.push(decode_record(&record)),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e),
        }
    }

    Ok(stars)
}

pub fn load_stars<P: AsRef<Path>>(path: P) -> Result<Vec<Option<Star>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let stars = read_stars(BufReader::new(file)).map_err(|e| CatalogError::io(path, e))?;

    tracing::info!(
        "Loaded {} catalog slots ({} stars) from {}",
        stars.len(),
        stars.iter().flatten().count(),
        path.display()
    );
    Ok(stars)
}

pub fn write_star<W: Write>(writer: &mut W, star: Option<&Star>) -> io::Result<()> {
    match star {
        Some(star) => {
            writer.write_f64::<BigEndian>(star.ra)?;
            writer.write_f64::<BigEndian>(star.de)?;
            writer.write_f32::<BigEndian>(star.magnitude)?;
            writer.write_f32::<BigEndian>(star.color_index)
        }
        None => {
            writer.write_f64::<BigEndian>(ABSENT_MARKER)?;
            writer.write_f64::<BigEndian>(f64::MIN)?;
            writer.write_f32::<BigEndian>(f32::MIN)?;
            writer.write_f32::<BigEndian>(f32::MIN)
        }
    }
}

pub fn write_stars<P: AsRef<Path>>(path: P, stars: &[Option<Star>]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for star in stars {
        write_star(&mut writer, star.as_ref()).map_err(|e| CatalogError::io(path, e))?;
    }
    writer.flush().map_err(|e| CatalogError::io(path, e))
}
