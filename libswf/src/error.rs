use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("overflow at offset {offset:#x} (need {need} bytes, have {have})")]
    Overflow {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("unsupported signature: {0}")]
    UnsupportedSignature(u8),

    #[error("unknown compression type: {0:#04x}")]
    UnknownCompression(u8),

    #[error("failed to inflate zlib body")]
    Decompress(#[source] std::io::Error),

    #[error("binary data id {id} not found")]
    NotFound { id: u16 },

    #[error("failed to read input")]
    Read(#[source] std::io::Error),

    #[error("failed to {context}")]
    Context {
        context: &'static str,
        #[source]
        source: Box<Error>,
    },
}

/// Coarse classification of an [`Error`], ignoring any context layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Overflow,
    UnsupportedSignature,
    UnknownCompression,
    Decompress,
    NotFound,
    Read,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Overflow { .. } => ErrorKind::Overflow,
            Error::UnsupportedSignature(_) => ErrorKind::UnsupportedSignature,
            Error::UnknownCompression(_) => ErrorKind::UnknownCompression,
            Error::Decompress(_) => ErrorKind::Decompress,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Read(_) => ErrorKind::Read,
            Error::Context { source, .. } => source.kind(),
        }
    }

    pub fn is_overflow(&self) -> bool {
        self.kind() == ErrorKind::Overflow
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Attach the name of the failing parse step to an error.
pub trait ResultExt<T> {
    fn context(self, context: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|source| Error::Context {
            context,
            source: Box::new(source),
        })
    }
}
