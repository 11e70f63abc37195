use std::ops::Range;
use std::str::FromStr;

use super::errors::{RecordError, Result};

/// Trimmed text of one fixed-column field
pub(crate) fn field<'a>(
    record: &'a str,
    range: Range<usize>,
    name: &'static str,
) -> Result<&'a str, RecordError> {
    record
        .get(range)
        .map(str::trim)
        .ok_or(RecordError::TooShort { field: name })
}

pub(crate) fn number<T: FromStr>(
    record: &str,
    range: Range<usize>,
    name: &'static str,
) -> Result<T, RecordError> {
    let text = field(record, range, name)?;
    text.parse().map_err(|_| RecordError::Invalid {
        field: name,
        value: text.to_string(),
    })
}

/// Like [`number`], but a blank field is `None`
pub(crate) fn optional_number<T: FromStr>(
    record: &str,
    range: Range<usize>,
    name: &'static str,
) -> Result<Option<T>, RecordError> {
    if field(record, range.clone(), name)?.is_empty() {
        return Ok(None);
    }
    number(record, range, name).map(Some)
}
