/* src/error.rs */

use thiserror::Error;

/// Result type alias for operations that may fail with `ClientIpError`.
pub type Result<T> = std::result::Result<T, ClientIpError>;

/// Errors raised while splitting addresses or building network tables.
///
/// Resolution itself never surfaces these; it degrades to an empty string.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientIpError {
    /// The address has no `:port` suffix.
    #[error("missing port in address: {0}")]
    MissingPort(String),

    /// An unbracketed host contains a colon.
    #[error("too many colons in address: {0}")]
    TooManyColons(String),

    /// A `[` was opened but never closed.
    #[error("missing ']' in address: {0}")]
    MissingBracket(String),

    /// A bracket appears outside the host part.
    #[error("unexpected bracket in address: {0}")]
    UnexpectedBracket(String),

    /// A CIDR string could not be parsed into a network range.
    #[error("invalid network range: {0}")]
    InvalidNetwork(String),
}
