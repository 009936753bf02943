//! Colored, timestamped console lines.
//!
//! Each writer prints a single line to stdout, prefixed with the current
//! local time unless `exclude_adding_now` is set. Coloring goes through the
//! `colored` crate, so `NO_COLOR` and `CLICOLOR_FORCE` are honoured.
//!
//! # Examples
//!
//! ```
//! use streamliner::console::{self, Color};
//!
//! let line = console::format_line("done", None, true);
//! assert_eq!(line, "done");
//!
//! console::write_line_green("build finished", false)?;
//! console::write_line_with_color("custom", Color::Magenta, true)?;
//! # Ok::<(), streamliner::StreamlinerError>(())
//! ```

use std::io::{self, Write};

use colored::Colorize;
pub use colored::Color;

use crate::utils::date_utils::{DateProvider, SystemDateProvider};
use crate::utils::string_utils::add_now_with;
use crate::Result;

/// Renders `message` the way the writers print it, without the newline.
pub fn format_line(message: &str, color: Option<Color>, exclude_adding_now: bool) -> String {
    format_line_with(&SystemDateProvider, message, color, exclude_adding_now)
}

/// Same as [`format_line`], reading the time from `provider`.
pub fn format_line_with(
    provider: &dyn DateProvider,
    message: &str,
    color: Option<Color>,
    exclude_adding_now: bool,
) -> String {
    let text = if exclude_adding_now {
        message.to_string()
    } else {
        add_now_with(provider, message)
    };
    match color {
        Some(color) => text.color(color).to_string(),
        None => text,
    }
}

fn print_line(message: &str, color: Option<Color>, exclude_adding_now: bool) -> Result<()> {
    let line = format_line(message, color, exclude_adding_now);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    Ok(())
}

pub fn write_line(message: &str, exclude_adding_now: bool) -> Result<()> {
    print_line(message, None, exclude_adding_now)
}

pub fn write_line_red(message: &str, exclude_adding_now: bool) -> Result<()> {
    print_line(message, Some(Color::Red), exclude_adding_now)
}

pub fn write_line_green(message: &str, exclude_adding_now: bool) -> Result<()> {
    print_line(message, Some(Color::Green), exclude_adding_now)
}

pub fn write_line_yellow(message: &str, exclude_adding_now: bool) -> Result<()> {
    print_line(message, Some(Color::Yellow), exclude_adding_now)
}

pub fn write_line_with_color(message: &str, color: Color, exclude_adding_now: bool) -> Result<()> {
    print_line(message, Some(color), exclude_adding_now)
}
