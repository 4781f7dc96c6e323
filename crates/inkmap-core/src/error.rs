pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("records JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid reading record at index {index}: {message}")]
    InvalidRecord { index: usize, message: String },
}
