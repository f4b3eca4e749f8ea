use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn range_overflow(location: u64, length: u64) -> Error {
        Error(ErrorKind::RangeOverflow { location, length }.into())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("invalid format for '{element}': {message}")]
    InvalidFormat { element: String, message: String },

    /// The range `[location, location + length)` does not fit below the
    /// not-found sentinel.
    #[error("range at {location} with length {length} reaches past the largest storable index")]
    RangeOverflow { location: u64, length: u64 },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
