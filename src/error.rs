use std::fmt::Display;
use std::fmt::Formatter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub enum Error {
    /// The report path does not exist or could not be opened.
    NotFound(PathBuf),
    /// An I/O error occurred while reading an open report.
    Io(Arc<std::io::Error>),
    /// The report is structurally invalid or a field failed numeric coercion.
    InvalidData(Option<String>),
    /// An empty query sequence was passed to the scanner.
    InvalidQuery,
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(Arc::new(error))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Error::Io(err) => err.fmt(f),
            Error::InvalidData(None) => f.write_str("invalid data"),
            Error::InvalidData(Some(x)) => write!(f, "invalid data: {}", x),
            Error::InvalidQuery => f.write_str("empty query sequence"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
