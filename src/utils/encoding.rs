//! Base64 and UTF-8 conversions for byte buffers.
//!
//! The free functions accept `Option` so that an absent buffer can be passed
//! straight through; [`ByteSliceExt`] offers the same conversions as methods
//! on `[u8]`.
//!
//! # Examples
//!
//! ```
//! use streamliner::encoding::{ByteSliceExt, from_base64};
//!
//! let bytes = [1u8, 2, 1, 3, 4];
//! assert_eq!(bytes.to_base64().as_deref(), Some("AQIBAwQ="));
//! assert_eq!(from_base64("AQIBAwQ=")?, bytes);
//! assert_eq!(b"test".utf8_string()?, "test");
//! # Ok::<(), streamliner::StreamlinerError>(())
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::compression::{compress_gzip, decompress_gzip};
use crate::Result;

/// Encodes `value` with the standard base64 alphabet and padding.
///
/// Returns `None` when `value` is absent or empty.
pub fn to_base64(value: Option<&[u8]>) -> Option<String> {
    match value {
        None | Some([]) => None,
        Some(data) => Some(STANDARD.encode(data)),
    }
}

/// Decodes standard, padded base64.
///
/// # Errors
///
/// Returns `InvalidDataFormat` if `value` is not valid base64.
pub fn from_base64(value: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(value)?)
}

/// Decodes `value` as UTF-8.
///
/// An absent buffer gives `None`, an empty one the empty string.
///
/// # Errors
///
/// Returns `InvalidDataFormat` if `value` is not valid UTF-8.
pub fn utf8_string(value: Option<&[u8]>) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(data) => Ok(Some(std::str::from_utf8(data)?.to_owned())),
    }
}

/// Returns the UTF-8 bytes of `value`, or `None` when absent.
pub fn utf8_bytes(value: Option<&str>) -> Option<Vec<u8>> {
    value.map(|text| text.as_bytes().to_vec())
}

/// Conversions available on every byte slice.
pub trait ByteSliceExt {
    /// See [`to_base64`].
    fn to_base64(&self) -> Option<String>;

    /// See [`compress_gzip`].
    fn compress_gzip(&self) -> Result<Vec<u8>>;

    /// See [`decompress_gzip`].
    fn decompress_gzip(&self) -> Result<Vec<u8>>;

    /// See [`utf8_string`].
    fn utf8_string(&self) -> Result<String>;
}

impl ByteSliceExt for [u8] {
    fn to_base64(&self) -> Option<String> {
        to_base64(Some(self))
    }

    fn compress_gzip(&self) -> Result<Vec<u8>> {
        Ok(compress_gzip(Some(self))?.unwrap_or_default())
    }

    fn decompress_gzip(&self) -> Result<Vec<u8>> {
        Ok(decompress_gzip(Some(self))?.unwrap_or_default())
    }

    fn utf8_string(&self) -> Result<String> {
        Ok(utf8_string(Some(self))?.unwrap_or_default())
    }
}
