use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeroError {
    #[error("Http request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Http failure response for {url}: {status}")]
    Status {
        url: String,
        status: u16,
        body: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

impl HeroError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HeroError::Status { status, .. } => Some(*status),
            HeroError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, HeroError>;
