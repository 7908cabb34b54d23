use thiserror::Error;

/// Failure to load one collection.
///
/// Never reaches the composer: the catalog turns it into an empty
/// collection and a status message.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to read or write the theme preference file.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),
}
