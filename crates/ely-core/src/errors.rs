use thiserror::Error;

/// Error type shared by every Ely.by API surface.
#[derive(Error, Debug)]
pub enum ElyError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response. `message` carries the upstream-provided error text
    /// when the body had one, otherwise a snippet of the raw body.
    #[error("upstream error {status}: {message}")]
    Upstream {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ElyError {
    /// Convenience constructor for missing required config fields.
    pub fn missing_config(field: &str) -> Self {
        Self::Configuration(format!("required field is missing or empty: {field}"))
    }
}

pub type Result<T> = std::result::Result<T, ElyError>;
