// Utility functions and helpers
//
// This module provides byte, string, URL, date, console and process helpers
// that wrap standard library and ecosystem primitives.

pub mod compression;
pub mod console;
pub mod date_utils;
pub mod encoding;
pub mod process;
pub mod string_utils;
pub mod url_utils;

pub use compression::{Compressor, GzipCompressor, compress_gzip, decompress_gzip};
pub use date_utils::{DateProvider, SystemDateProvider, FixedDateProvider, to_int, enum_days};
pub use encoding::{ByteSliceExt, to_base64, from_base64, utf8_string, utf8_bytes};
pub use process::{start_process, ProcessOptions, ProcessOutput};
pub use string_utils::{
    ExtractOptions, StrExt, extract_substring, is_all_upper, html_encode, html_decode,
    is_null_or_empty, is_null_or_whitespace, try_parse_int, try_parse_long, ellipsize,
    add_now, add_now_with
};
pub use url_utils::{url_encode, url_decode, escape_data_string, escape_uri_string};
