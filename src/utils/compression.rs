//! Gzip compression and decompression of byte buffers.
//!
//! [`compress_gzip`] and [`decompress_gzip`] are the null-aware entry points:
//! an absent buffer stays absent and an empty buffer stays empty, without a
//! gzip header being written.
//!
//! # Examples
//!
//! ```
//! use streamliner::compression::{compress_gzip, decompress_gzip};
//!
//! let text = b"This string will be compressed using gz compression.";
//! let packed = compress_gzip(Some(text))?.unwrap();
//! assert_eq!(&packed[..2], &[0x1f, 0x8b]);
//!
//! let unpacked = decompress_gzip(Some(packed.as_slice()))?.unwrap();
//! assert_eq!(unpacked, text);
//! # Ok::<(), streamliner::StreamlinerError>(())
//! ```

use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::{Result, StreamlinerError};

/// Common interface for compression and decompression operations.
pub trait Compressor {
    /// Compresses the input data.
    ///
    /// # Errors
    ///
    /// Returns an error if compression fails.
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decompresses the input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid stream for this method.
    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Gzip compression implementation.
pub struct GzipCompressor;

impl Compressor for GzipCompressor {
    fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data)
            .map_err(|e| StreamlinerError::compression_error(format!("Gzip error: {}", e)))?;
        encoder.finish()
            .map_err(|e| StreamlinerError::compression_error(format!("Gzip error: {}", e)))
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)
            .map_err(|e| StreamlinerError::decompression_error(format!("Gunzip error: {}", e)))?;
        Ok(decompressed)
    }
}

/// Gzip-compresses `value`.
///
/// Returns `None` for `None` and an empty buffer for an empty buffer.
pub fn compress_gzip(value: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
    match value {
        None => Ok(None),
        Some([]) => Ok(Some(Vec::new())),
        Some(data) => {
            let compressed = GzipCompressor.compress(data)?;
            log::debug!("Gzip compressed {} bytes into {}", data.len(), compressed.len());
            Ok(Some(compressed))
        }
    }
}

/// Decompresses a gzip buffer produced by [`compress_gzip`].
///
/// Returns `None` for `None` and an empty buffer for an empty buffer.
///
/// # Errors
///
/// Returns a `CompressionError` if `value` is not a gzip stream.
pub fn decompress_gzip(value: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
    match value {
        None => Ok(None),
        Some([]) => Ok(Some(Vec::new())),
        Some(data) => {
            let decompressed = GzipCompressor.decompress(data)?;
            log::debug!("Gzip decompressed {} bytes into {}", data.len(), decompressed.len());
            Ok(Some(decompressed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gzip_round_trip_of_utf8_text() {
        let _ = env_logger::builder().is_test(true).try_init();
        let text = "Test kompresije".as_bytes();
        let compressed = compress_gzip(Some(text)).unwrap().unwrap();
        assert_ne!(compressed, text);
        assert_eq!(decompress_gzip(Some(compressed.as_slice())).unwrap().unwrap(), text);
    }

    #[test]
    fn test_gzip_header() {
        let compressed = compress_gzip(Some(b"header check")).unwrap().unwrap();
        // magic, then CM = 8 (deflate)
        assert_eq!(&compressed[..3], &[0x1f, 0x8b, 0x08]);
    }

    #[test]
    fn test_gzip_none_and_empty() {
        assert_eq!(compress_gzip(None).unwrap(), None);
        assert_eq!(decompress_gzip(None).unwrap(), None);
        assert_eq!(compress_gzip(Some(&[])).unwrap(), Some(Vec::new()));
        assert_eq!(decompress_gzip(Some(&[])).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_decompress_garbage_fails() {
        let result = decompress_gzip(Some(b"definitely not gzip"));
        assert!(matches!(result, Err(StreamlinerError::CompressionError { .. })));
    }

    #[test]
    fn test_compressor_restores_large_input() {
        let data: Vec<u8> = (0..4096u32).map(|i| (i % 251) as u8).collect();
        let compressed = GzipCompressor.compress(&data).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(GzipCompressor.decompress(&compressed).unwrap(), data);
    }
}
