use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The number of terms does not equal the number of operators plus one.
    #[error("invalid expression format, check the use of '*' or '/'")]
    MalformedExpression,

    #[error("'{0}' not found in the quantity table")]
    UnknownQuantity(String),
}
