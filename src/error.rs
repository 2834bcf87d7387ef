use thiserror::Error;

/// Fallos al cargar el banco de preguntas. Todos acaban en la pantalla de error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("could not parse quiz data: {0}")]
    Parse(String),
    #[error("quiz data contains no questions")]
    Empty,
    #[error("question {id} is malformed: {reason}")]
    InvalidQuestion { id: String, reason: String },
    #[error("quiz loader stopped before returning any data")]
    Disconnected,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LoadError::Parse(err.to_string())
        } else {
            LoadError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}
