use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrammarError {
    #[error("Line {line}: expected \"->\" in `{text}`")]
    MissingArrow { line: usize, text: String },

    #[error("Line {line}: empty left side")]
    EmptyLeftSide { line: usize },

    #[error("Line {line}: invalid left side `{left}`")]
    InvalidLeftSide { line: usize, left: String },

    #[error("Line {line}: cannot find left side")]
    MissingPreviousLeft { line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrammarError>;
