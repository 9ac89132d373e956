use std::fmt;

/// Failure decoding a location record or building an endpoint URL.
#[derive(Debug)]
pub enum GeoError {
    Json(serde_json::Error),
    Url(url::ParseError),
    /// Base URL cannot carry a path (e.g. `data:` URLs).
    CannotBeABase(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::Json(e) => write!(f, "invalid location record: {e}"),
            GeoError::Url(e) => write!(f, "invalid url: {e}"),
            GeoError::CannotBeABase(u) => write!(f, "url {u:?} cannot be used as a base"),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::Json(e) => Some(e),
            GeoError::Url(e) => Some(e),
            GeoError::CannotBeABase(_) => None,
        }
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        GeoError::Json(e)
    }
}

impl From<url::ParseError> for GeoError {
    fn from(e: url::ParseError) -> Self {
        GeoError::Url(e)
    }
}
