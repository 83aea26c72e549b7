#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument type: {0}")]
    InvalidArgumentType(String),

    #[error("Invalid argument value: {0}")]
    InvalidArgumentValue(String),

    #[error("Invalid dice notation: {0:?}")]
    InvalidFormat(String),

    #[error("Record {index} does not have the same fields as the first record")]
    MismatchedRecord { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
