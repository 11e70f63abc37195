use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("{}:{line}: {source}", path.display())]
    Record {
        path: PathBuf,
        line: usize,
        #[source]
        source: RecordError,
    },

    #[error("Catalog number {number} out of order at index {index}")]
    OutOfOrder { number: usize, index: usize },
}

/// Defect in one fixed-column catalog record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record too short for {field}")]
    TooShort { field: &'static str },

    #[error("invalid {field} `{value}`")]
    Invalid { field: &'static str, value: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn record(path: impl Into<PathBuf>, line: usize, source: RecordError) -> Self {
        Self::Record {
            path: path.into(),
            line,
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

pub type Result<T, E = CatalogError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = CatalogError::parse("names.txt", 12, "invalid catalog index `x`");
        assert_eq!(format!("{}", err), "names.txt:12: invalid catalog index `x`");
    }

    #[test]
    fn record_error_display() {
        let err = CatalogError::record(
            "hip2.dat",
            3,
            RecordError::Invalid {
                field: "magnitude",
                value: "9.x".to_string(),
            },
        );
        assert_eq!(format!("{}", err), "hip2.dat:3: invalid magnitude `9.x`");
    }

    #[test]
    fn out_of_order_display() {
        let err = CatalogError::OutOfOrder {
            number: 3,
            index: 7,
        };
        assert_eq!(
            format!("{}", err),
            "Catalog number 3 out of order at index 7"
        );
    }
}
