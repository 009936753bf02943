//! Error types and result type for the streamliner crate.
//!
//! Every fallible helper returns [`Result<T>`]. The error type uses the `snafu`
//! library with automatic backtrace capture, and the helper constructors on
//! [`StreamlinerError`] are the usual way to build one.
//!
//! # Examples
//!
//! ```
//! use streamliner::{Result, StreamlinerError};
//!
//! fn first_char(value: &str) -> Result<char> {
//!     value
//!         .chars()
//!         .next()
//!         .ok_or_else(|| StreamlinerError::invalid_argument("Value cannot be empty."))
//! }
//!
//! assert!(first_char("").unwrap_err().is_invalid_argument());
//! assert_eq!(first_char("abc").unwrap(), 'a');
//! ```
//!
//! # Error Variants
//!
//! - [`StreamlinerError::InvalidArgument`]: a caller broke a function contract
//! - [`StreamlinerError::InvalidDataFormat`]: input bytes or text could not be decoded
//! - [`StreamlinerError::CompressionError`]: compression/decompression failures
//! - [`StreamlinerError::Io`]: I/O errors from pipes and child processes

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the streamliner crate.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StreamlinerError {
    /// I/O error while talking to a child process or a stream.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// Function was called with arguments that violate its contract.
    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument {
        message: String,
        backtrace: Backtrace,
    },

    /// Input could not be decoded (UTF-8, base64, HTML entities).
    #[snafu(display("Invalid data format: {message}"))]
    InvalidDataFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// Error during compression or decompression operations.
    #[snafu(display("Compression error: {message}"))]
    CompressionError {
        message: String,
        backtrace: Backtrace,
    },
}

impl From<io::Error> for StreamlinerError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<std::string::FromUtf8Error> for StreamlinerError {
    fn from(source: std::string::FromUtf8Error) -> Self {
        Self::InvalidDataFormat { message: format!("Invalid UTF-8 (String): {}", source), backtrace: Backtrace::capture() }
    }
}

impl From<std::str::Utf8Error> for StreamlinerError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self::InvalidDataFormat { message: format!("Invalid UTF-8 (&str): {}", source), backtrace: Backtrace::capture() }
    }
}

impl From<base64::DecodeError> for StreamlinerError {
    fn from(source: base64::DecodeError) -> Self {
        Self::InvalidDataFormat { message: format!("Invalid base64: {}", source), backtrace: Backtrace::capture() }
    }
}

/// Helper methods for creating errors without context providers.
impl StreamlinerError {
    /// Creates an `InvalidArgument` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use streamliner::StreamlinerError;
    ///
    /// let error = StreamlinerError::invalid_argument("List cannot be null or empty.");
    /// assert!(error.to_string().contains("List cannot be null or empty."));
    /// ```
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidDataFormat` error with the given message.
    pub fn invalid_data_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `CompressionError` with the given message.
    pub fn compression_error<S: Into<String>>(message: S) -> Self {
        Self::CompressionError {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `CompressionError` for decompression failures.
    pub fn decompression_error<S: Into<String>>(message: S) -> Self {
        Self::CompressionError {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is an `InvalidArgument` variant.
    pub fn is_invalid_argument(&self) -> bool {
        if let StreamlinerError::InvalidArgument { .. } = self {
            return true;
        }
        false
    }
}

/// A specialized `Result` type for streamliner operations.
///
/// This is a convenience type alias that uses [`StreamlinerError`] as the error type.
pub type Result<T> = std::result::Result<T, StreamlinerError>;
