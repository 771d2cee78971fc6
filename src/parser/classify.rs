//! Line classification
//!
//! Every trimmed line gets exactly one outcome, checked in priority order:
//! blank, comment, section header, property, unparseable.

use crate::options::IniOptions;
use crate::parser::text::strip_inline_comments;
use crate::SyntaxError;
use regex::Regex;
use std::sync::LazyLock;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*)\]").expect("section pattern is valid"));

static EQUALS_PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^=]*)=(.*)").expect("property pattern is valid"));

static COLON_PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^:]*):(.*)").expect("colon property pattern is valid"));

/// Outcome of classifying a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Nothing but whitespace
    Blank,

    /// Starts with the comment marker
    Comment,

    /// `[name]` header; the capture is kept verbatim
    Section(String),

    /// Raw, untrimmed key and value around the first separator
    Property { key: String, value: String },

    /// Matches none of the above
    Unparseable,
}

/// Classifies lines according to a set of options
#[derive(Debug, Clone)]
pub struct LineClassifier<'a> {
    options: &'a IniOptions,
    property_re: &'static Regex,
}

impl<'a> LineClassifier<'a> {
    /// Creates a classifier for the given options
    pub fn new(options: &'a IniOptions) -> Self {
        let property_re = match options.assignment_separator() {
            ':' => &*COLON_PROPERTY_RE,
            _ => &*EQUALS_PROPERTY_RE,
        };

        Self {
            options,
            property_re,
        }
    }

    /// Classifies one raw line
    ///
    /// # Arguments
    ///
    /// * `raw` - The line as read, surrounding whitespace included
    /// * `line_number` - 1-based line number used in errors
    ///
    /// # Returns
    ///
    /// * `Ok(Line)` - The classification of the line
    /// * `Err(SyntaxError)` - A header or property matched without its captures
    pub fn classify(&self, raw: &str, line_number: usize) -> Result<Line, SyntaxError> {
        let line = raw.trim();

        if line.is_empty() {
            return Ok(Line::Blank);
        }

        if line.starts_with(self.options.comment_start.as_str()) {
            return Ok(Line::Comment);
        }

        let line = if self.options.allow_inline_comments {
            strip_inline_comments(
                line,
                &self.options.comment_start,
                &self.options.comment_escape_prefix,
            )
        } else {
            line.into()
        };

        if let Some(captures) = SECTION_RE.captures(&line) {
            let name = captures
                .get(1)
                .ok_or(SyntaxError::UnparseableSection(line_number))?;
            return Ok(Line::Section(name.as_str().to_string()));
        }

        if let Some(captures) = self.property_re.captures(&line) {
            return match (captures.get(1), captures.get(2)) {
                (Some(key), Some(value)) => Ok(Line::Property {
                    key: key.as_str().to_string(),
                    value: value.as_str().to_string(),
                }),
                _ => Err(SyntaxError::UnparseableProperty(line_number)),
            };
        }

        Ok(Line::Unparseable)
    }
}
