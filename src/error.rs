//! Custom error types for NDIFF.

#[derive(Debug, thiserror::Error)]
pub enum NdiffError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to open file {path}: {source}")]
    OpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// A token matched a numeric pattern but could not be parsed.
    #[error("Malformed numeric token: {token:?}")]
    MalformedNumber { token: String },
}

impl NdiffError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn open_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OpenError {
            path: path.into(),
            source,
        }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_number(token: impl Into<String>) -> Self {
        Self::MalformedNumber {
            token: token.into(),
        }
    }
}

impl From<std::io::Error> for NdiffError {
    fn from(source: std::io::Error) -> Self {
        Self::WriteError { source }
    }
}
