use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocNetError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SocNetResult<T> = Result<T, SocNetError>;
