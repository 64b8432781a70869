use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("site layout parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
