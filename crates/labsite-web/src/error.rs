use labsite_common::error::{ApiError, LabsiteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error(transparent)]
    Labsite(#[from] LabsiteError),
}

pub type Result<T> = std::result::Result<T, WebError>;

impl From<WebError> for ApiError {
    fn from(err: WebError) -> Self {
        match err {
            WebError::Labsite(inner) => inner.into(),
            WebError::Template(inner) => ApiError::Internal(format!("template error: {inner}")),
        }
    }
}
