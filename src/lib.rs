//! # Streamliner - small helpers around the standard library
//!
//! This crate gathers short, stateless helper functions that smooth over
//! everyday chores:
//!
//! ## Features
//!
//! - **Random selection**: uniform pick, sampling without replacement and
//!   Fisher–Yates shuffling over any indexable sequence
//! - **Byte helpers**: base64, gzip compression and UTF-8 decoding
//! - **String helpers**: marker-based substring extraction, URL/URI/HTML
//!   escaping, lenient integer parsing, ellipsizing
//! - **Dates**: `yyyyMMdd` integers and day-by-day enumeration
//! - **Console**: colored, timestamped output lines
//! - **Processes**: run a program and capture its output
//!
//! ## Quick Start
//!
//! ```
//! use streamliner::collections::SequenceRandomizer;
//! use streamliner::encoding::ByteSliceExt;
//! use streamliner::string_utils::StrExt;
//!
//! # fn main() -> streamliner::Result<()> {
//! let mut deck: Vec<u32> = (1..=52).collect();
//! deck.shuffle()?;
//! let hand = deck.sample(5)?;
//! assert_eq!(hand.len(), 5);
//!
//! let packed = b"hello hello hello".compress_gzip()?;
//! assert_eq!(packed.decompress_gzip()?.utf8_string()?, "hello hello hello");
//!
//! assert_eq!("name=value;".url_encode(), "name%3Dvalue%3B");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Collections**: [`collections`] for the sequence randomizer and sequence comparison
//! - **Utilities**: [`utils`] for byte, string, URL, date, console and process helpers
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are represented by
//! [`StreamlinerError`]. The crate uses the `snafu` library for error handling with
//! backtraces. Contract violations, such as sampling from an empty list, are reported
//! as [`StreamlinerError::InvalidArgument`].

pub mod collections;
pub mod error;
pub mod utils;

// Re-export utility modules at the crate root for shorter paths
pub use utils::{compression, console, date_utils, encoding, process, string_utils, url_utils};

// Re-export commonly used types for convenience
pub use collections::{IndexedSequence, RandomSource, SequenceRandomizer};

// Re-export error types for convenience
pub use error::{StreamlinerError, Result, snafu};
