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

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn index_out_of_range(index: usize, count: usize) -> Error {
        Error(ErrorKind::IndexOutOfRange { index, count }.into())
    }

    pub fn broken_view(required: usize, actual: usize) -> Error {
        Error(ErrorKind::BrokenView { required, actual }.into())
    }

    pub fn read_only(operation: &'static str) -> Error {
        Error(ErrorKind::ReadOnly { operation }.into())
    }

    pub fn source_released() -> Error {
        Error(ErrorKind::SourceReleased.into())
    }

    pub fn source_borrowed() -> Error {
        Error(ErrorKind::SourceBorrowed.into())
    }

    /// Whether this error reports a view whose enforced minimum count is no
    /// longer met by its source.
    pub fn is_broken_view(&self) -> bool {
        matches!(self.kind(), ErrorKind::BrokenView { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("index {index} is out of range for a view of {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("broken view: at least {required} elements required, the source has {actual}")]
    BrokenView { required: usize, actual: usize },

    #[error("'{operation}' is not supported on a read-only collection")]
    ReadOnly { operation: &'static str },

    #[error("destination buffer is too small")]
    DestBufferTooSmall,

    #[error("the source sequence has been released by its owner")]
    SourceReleased,

    #[error("the source sequence is mutably borrowed")]
    SourceBorrowed,
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
