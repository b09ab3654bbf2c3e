use thiserror::Error;

/// Error for a wide unit width which is not UTF-16 or UTF-32.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidthError {
    #[error("unsupported wide unit size: {0} bytes")]
    UnsupportedUnitSize(usize),
    #[error("unknown wide encoding '{0}'")]
    UnknownEncoding(String),
}
