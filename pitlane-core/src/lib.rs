pub mod session;
pub mod validation;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
