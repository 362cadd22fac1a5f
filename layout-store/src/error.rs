/// Error types for layout persistence operations.
#[derive(Debug)]
pub enum StoreError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    LayoutNotFound(String),
    MissingUserId,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::JsonError(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "IO error: {}", e),
            StoreError::JsonError(e) => write!(f, "JSON error: {}", e),
            StoreError::LayoutNotFound(id) => write!(f, "Layout not found: {}", id),
            StoreError::MissingUserId => write!(f, "userId is required"),
        }
    }
}

impl std::error::Error for StoreError {}
