use std::fmt;

/// Errors that can occur while loading the dataset.
#[derive(Debug)]
pub enum DataError {
    /// The HTTP request could not be sent or the body could not be read.
    #[cfg(feature = "api")]
    Http(reqwest::Error),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The document did not match the `{baseTemperature, monthlyVariance}` schema.
    Decode(serde_json::Error),
    /// A local dataset file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "api")]
            DataError::Http(e) => write!(f, "dataset request failed: {}", e),
            DataError::Status(code) => write!(f, "dataset request returned HTTP {}", code),
            DataError::Decode(e) => write!(f, "malformed dataset: {}", e),
            DataError::Io(e) => write!(f, "could not read dataset: {}", e),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "api")]
            DataError::Http(e) => Some(e),
            DataError::Status(_) => None,
            DataError::Decode(e) => Some(e),
            DataError::Io(e) => Some(e),
        }
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for DataError {
    fn from(e: reqwest::Error) -> Self {
        DataError::Http(e)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Decode(e)
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}
