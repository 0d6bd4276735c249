use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown rule field '{0}' (expected 'old' or 'new')")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
