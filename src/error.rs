use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to parse input, reason: `{0}`")]
    ParsingFailure(String),
    #[error("invalid duration `{text}`: {reason}")]
    InvalidDuration { text: String, reason: String },
    #[error("`{0}` is not a valid amount of money")]
    NumericFormat(String),
    #[error("`{0}` is not a date of form `Jan 5, 2024`")]
    DateFormat(String),
}
