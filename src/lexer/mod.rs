// Author: Dustin Pilgrim
// License: MIT

use once_cell::sync::Lazy;
use regex::Regex;

mod scanner;

pub use scanner::{bracket_balance, split_array_items, ArrayScanner};

static GROUP_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.*)\]$").unwrap());

static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._\s-]+=.+$").unwrap());

/// One physical line after trimming and comment removal.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    /// Nothing left once comments and whitespace are gone.
    Blank,
    /// A `[name]` header. Only meaningful when no array is being collected.
    Group { name: &'a str, text: &'a str },
    /// A `key = value` line, split on the first `=`.
    Assignment { key: &'a str, value: &'a str, text: &'a str },
    /// Anything else, usually the continuation of a multi-line array.
    Other(&'a str),
}

impl<'a> Line<'a> {
    /// The cleaned text of the line, whatever it was classified as.
    pub fn text(&self) -> &'a str {
        match self {
            Line::Blank => "",
            Line::Group { text, .. } | Line::Assignment { text, .. } => text,
            Line::Other(text) => text,
        }
    }
}

/// Drop everything from the first `#` on, then trim.
///
/// The cut is not quote-aware: `"#hash"` inside a string starts a comment too.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

pub fn classify(raw: &str) -> Line<'_> {
    let text = strip_comment(raw);
    if text.is_empty() {
        return Line::Blank;
    }

    if let Some(caps) = GROUP_HEADER.captures(text) {
        let name = caps.get(1).map_or("", |m| m.as_str()).trim();
        return Line::Group { name, text };
    }

    if ASSIGNMENT.is_match(text) {
        if let Some((key, value)) = text.split_once('=') {
            return Line::Assignment { key: key.trim(), value: value.trim(), text };
        }
    }

    Line::Other(text)
}

#[cfg(test)]
mod tests;
