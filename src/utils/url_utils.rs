//! URL and URI escaping helpers.
//!
//! This module provides:
//! - form-style URL encoding and decoding (space as `+`)
//! - data-string escaping, which keeps only RFC 3986 unreserved characters
//! - URI-string escaping, which also keeps reserved characters so that an
//!   already structured URI survives
//!
//! # Examples
//!
//! ```
//! use streamliner::url_utils;
//!
//! assert_eq!(url_utils::url_encode("This is a test string?"), "This+is+a+test+string%3F");
//! assert_eq!(url_utils::url_decode("This%20is%20a%20test%20string%3F"), "This is a test string?");
//! assert_eq!(url_utils::escape_data_string("a+b"), "a%2Bb");
//! assert_eq!(url_utils::escape_uri_string("http://host/a b?q=1"), "http://host/a%20b?q=1");
//! ```

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

/// Everything except the RFC 3986 unreserved characters.
const DATA_STRING_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Like [`DATA_STRING_SET`] but keeping the RFC 3986 reserved characters.
const URI_STRING_SET: &AsciiSet = &DATA_STRING_SET
    .remove(b':')
    .remove(b'/')
    .remove(b'?')
    .remove(b'#')
    .remove(b'[')
    .remove(b']')
    .remove(b'@')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// Encodes `value` for use in a query string or form body.
///
/// Spaces become `+`; everything but ASCII alphanumerics and `*-._` is
/// percent-encoded as UTF-8.
pub fn url_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Reverses [`url_encode`].
///
/// Both `+` and `%20` decode to a space. Malformed escapes are kept
/// verbatim and invalid UTF-8 is replaced with U+FFFD.
pub fn url_decode(value: &str) -> String {
    let plus_as_space = value.replace('+', " ");
    percent_decode_str(&plus_as_space).decode_utf8_lossy().into_owned()
}

/// Percent-encodes every character except `A-Z a-z 0-9 - . _ ~`.
pub fn escape_data_string(value: &str) -> String {
    utf8_percent_encode(value, DATA_STRING_SET).to_string()
}

/// Percent-encodes every character that is neither unreserved nor reserved
/// in RFC 3986. `%` itself is encoded.
pub fn escape_uri_string(value: &str) -> String {
    utf8_percent_encode(value, URI_STRING_SET).to_string()
}
