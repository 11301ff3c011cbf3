use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    /// The credential environment variable is unset or empty. Fatal at
    /// startup; nothing network-facing runs without it.
    MissingCredential(String),
    /// Any failure reported by the chat API or the transport underneath it
    /// (auth, quota, network, server error). Callers print and continue.
    Api(String),
    Io(std::io::Error),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::MissingCredential(var) => {
                write!(f, "API key is not set. Add '{}' to your environment.", var)
            }
            ProbeError::Api(detail) => write!(f, "API error: {}", detail),
            ProbeError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        ProbeError::Api(err.to_string())
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Api(format!("malformed response: {}", err))
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
