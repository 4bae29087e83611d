use thiserror::Error;

/// Every failure is fatal for the run; nothing here is retried.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("RSA key generation failed: {0}")]
    Generation(#[from] rsa::Error),

    #[error("key encoding failed: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl DatasetError {
    /// Name of the run phase that produced this error, for operator output
    pub fn phase(&self) -> &'static str {
        match self {
            DatasetError::Config(_) => "configuration",
            DatasetError::Generation(_) => "generation",
            DatasetError::Serialization(_) => "serialization",
            DatasetError::Io(_) => "file I/O",
            DatasetError::Parse { .. } => "read",
        }
    }
}

impl From<rsa::pkcs1::Error> for DatasetError {
    fn from(err: rsa::pkcs1::Error) -> Self {
        DatasetError::Serialization(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for DatasetError {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        DatasetError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_names() {
        assert_eq!(DatasetError::Config("bad".into()).phase(), "configuration");
        assert_eq!(DatasetError::Generation(rsa::Error::InvalidModulus).phase(), "generation");
        assert_eq!(DatasetError::Serialization("bad".into()).phase(), "serialization");
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(DatasetError::from(io).phase(), "file I/O");
        let parse = DatasetError::Parse { line: 2, reason: "bad".into() };
        assert_eq!(parse.phase(), "read");
        assert_eq!(parse.to_string(), "malformed dataset at line 2: bad");
    }
}
