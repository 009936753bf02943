//! String helpers.
//!
//! This module provides helper functions for:
//! - extracting the text between two markers ([`extract_substring`])
//! - HTML entity encoding and decoding
//! - lenient integer parsing
//! - shortening text with an ellipsis
//! - prefixing text with the current timestamp
//!
//! [`StrExt`] gathers these, together with the URL and base64 helpers, as
//! methods on `str`.
//!
//! # Examples
//!
//! ```
//! use streamliner::string_utils::{ExtractOptions, StrExt};
//!
//! let options = ExtractOptions::between("<b>", "</b>");
//! assert_eq!("a <b>bold</b> move".extract_substring(&options).as_deref(), Some("bold"));
//! assert_eq!("you > me".html_encode(), "you &gt; me");
//! assert_eq!(" 1234 ".try_parse_int(), Some(1234));
//! ```

use crate::utils::date_utils::{DateProvider, SystemDateProvider};
use crate::utils::encoding;
use crate::utils::url_utils;
use crate::{Result, StreamlinerError};

pub const ENG_LETTERS_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const ENG_LETTERS_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CRO_LETTERS_LOWER: &str = "abcčćdđefghijklmnoprsštuvzž";
pub const CRO_LETTERS_UPPER: &str = "ABCČĆDĐEFGHIJKLMNOPRSŠTUVZŽ";

const ELLIPSIS: &str = "...";

/// Format used by [`add_now`].
pub const NOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns true when no alphabetic character of `value` is lower-case.
///
/// Digits, punctuation and whitespace are ignored.
pub fn is_all_upper(value: &str) -> bool {
    value.chars().all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// Options for [`extract_substring`].
///
/// Offsets count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Marker the extraction starts at. `None` or empty starts at the beginning.
    pub start: Option<String>,
    /// Marker the extraction stops at, searched from the start position.
    /// `None` or empty runs to the end.
    pub end: Option<String>,
    /// Added to the start marker position (use the marker length to skip it).
    pub add_to_start: isize,
    /// Added to the end marker position, clamped to the text length.
    pub add_to_end: isize,
    /// Returned whenever the extraction fails.
    pub default_value: Option<String>,
    /// When false a missing start marker means "start at the beginning".
    pub default_if_start_not_found: bool,
    /// When false a missing end marker means "run to the end".
    pub default_if_end_not_found: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            add_to_start: 0,
            add_to_end: 0,
            default_value: None,
            default_if_start_not_found: true,
            default_if_end_not_found: true,
        }
    }
}

impl ExtractOptions {
    /// Extracts the text strictly between `start` and `end`.
    pub fn between(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            add_to_start: start.chars().count() as isize,
            ..Self::default()
        }
    }
}

fn char_to_byte(value: &str, char_index: usize) -> usize {
    value
        .char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(value.len())
}

fn byte_to_char(value: &str, byte_index: usize) -> isize {
    value[..byte_index].chars().count() as isize
}

/// Extracts part of `value` delimited by the markers in `options`.
///
/// Returns `options.default_value` when `value` is blank, when a required
/// marker is missing, or when the resulting range is empty.
///
/// # Examples
///
/// ```
/// use streamliner::string_utils::{extract_substring, ExtractOptions};
///
/// let options = ExtractOptions {
///     start: Some("This is a test ".into()),
///     end: Some("!".into()),
///     add_to_start: 15,
///     ..ExtractOptions::default()
/// };
/// assert_eq!(extract_substring("This is a test string!", &options).as_deref(), Some("string"));
/// ```
pub fn extract_substring(value: &str, options: &ExtractOptions) -> Option<String> {
    let default = || options.default_value.clone();
    if value.trim().is_empty() {
        return default();
    }
    let len = value.chars().count() as isize;

    let mut first: isize = 0;
    if let Some(start) = options.start.as_deref().filter(|s| !s.is_empty()) {
        first = match value.find(start) {
            Some(byte_index) => byte_to_char(value, byte_index),
            None if options.default_if_start_not_found => return default(),
            None => 0,
        };
        first = first.saturating_add(options.add_to_start);
    }
    if first < 0 || first > len {
        return default();
    }

    let mut last = len;
    if let Some(end) = options.end.as_deref().filter(|s| !s.is_empty()) {
        let from = char_to_byte(value, first as usize);
        last = match value[from..].find(end) {
            Some(byte_index) => byte_to_char(value, from + byte_index),
            None if options.default_if_end_not_found => return default(),
            None => len,
        };
        last = last.saturating_add(options.add_to_end).min(len);
    }

    if first >= last {
        return default();
    }
    Some(value.chars().skip(first as usize).take((last - first) as usize).collect())
}

/// Replaces `& < > " '` with HTML entities.
pub fn html_encode(value: &str) -> String {
    htmlescape::encode_minimal(value)
}

/// Decodes named and numeric HTML entities.
///
/// # Errors
///
/// Returns `InvalidDataFormat` for an unknown or malformed entity.
pub fn html_decode(value: &str) -> Result<String> {
    htmlescape::decode_html(value).map_err(|e| {
        StreamlinerError::invalid_data_format(format!("Invalid HTML entity in {:?}: {:?}", value, e))
    })
}

pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

pub fn is_null_or_whitespace(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}

/// Parses a 32-bit integer, tolerating surrounding whitespace.
pub fn try_parse_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}

/// Parses a 64-bit integer, tolerating surrounding whitespace.
pub fn try_parse_long(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Shortens `value` to at most `max_len` characters, ending in `...`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `value` must be shortened but `max_len`
/// leaves no room for the ellipsis.
pub fn ellipsize(value: &str, max_len: usize) -> Result<String> {
    if value.chars().count() <= max_len {
        return Ok(value.to_string());
    }
    let keep = max_len.checked_sub(ELLIPSIS.len()).ok_or_else(|| {
        StreamlinerError::invalid_argument(format!("Max length {} is shorter than the ellipsis", max_len))
    })?;
    let mut shortened: String = value.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    Ok(shortened)
}

/// Prefixes `value` with the current local time and a space.
pub fn add_now(value: &str) -> String {
    add_now_with(&SystemDateProvider, value)
}

/// Same as [`add_now`], reading the time from `provider`.
pub fn add_now_with(provider: &dyn DateProvider, value: &str) -> String {
    format!("{} {}", provider.now().format(NOW_FORMAT), value)
}

/// String helpers as methods on `str`.
pub trait StrExt {
    fn is_all_upper(&self) -> bool;
    fn extract_substring(&self, options: &ExtractOptions) -> Option<String>;
    fn url_encode(&self) -> String;
    fn url_decode(&self) -> String;
    fn html_encode(&self) -> String;
    fn html_decode(&self) -> Result<String>;
    fn escape_data_string(&self) -> String;
    fn escape_uri_string(&self) -> String;
    fn is_blank(&self) -> bool;
    fn from_base64(&self) -> Result<Vec<u8>>;
    fn try_parse_int(&self) -> Option<i32>;
    fn try_parse_long(&self) -> Option<i64>;
    fn ellipsize(&self, max_len: usize) -> Result<String>;
    fn add_now(&self) -> String;
}

impl StrExt for str {
    fn is_all_upper(&self) -> bool {
        is_all_upper(self)
    }

    fn extract_substring(&self, options: &ExtractOptions) -> Option<String> {
        extract_substring(self, options)
    }

    fn url_encode(&self) -> String {
        url_utils::url_encode(self)
    }

    fn url_decode(&self) -> String {
        url_utils::url_decode(self)
    }

    fn html_encode(&self) -> String {
        html_encode(self)
    }

    fn html_decode(&self) -> Result<String> {
        html_decode(self)
    }

    fn escape_data_string(&self) -> String {
        url_utils::escape_data_string(self)
    }

    fn escape_uri_string(&self) -> String {
        url_utils::escape_uri_string(self)
    }

    fn is_blank(&self) -> bool {
        is_null_or_whitespace(Some(self))
    }

    fn from_base64(&self) -> Result<Vec<u8>> {
        encoding::from_base64(self)
    }

    fn try_parse_int(&self) -> Option<i32> {
        try_parse_int(self)
    }

    fn try_parse_long(&self) -> Option<i64> {
        try_parse_long(self)
    }

    fn ellipsize(&self, max_len: usize) -> Result<String> {
        ellipsize(self, max_len)
    }

    fn add_now(&self) -> String {
        add_now(self)
    }
}
