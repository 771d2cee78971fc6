use crate::options::IniOptions;
use crate::parser::classify::{Line, LineClassifier};
use crate::parser::text::strip_enclosing_quotes;
use crate::store::Store;
use crate::{IniError, SyntaxError, GLOBAL_SECTION};
use std::io;

/// Counters reported once a parse completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Lines read, including skipped ones
    pub lines: usize,

    /// Section header lines seen
    pub sections: usize,

    /// Properties written to the store
    pub properties: usize,

    /// Blank, comment and ignored unparseable lines
    pub skipped: usize,

    /// Properties dropped because their value was empty
    pub discarded: usize,
}

/// Parses a sequence of lines into a store
///
/// The options are validated before the first line is read. Lines are handled
/// strictly in order and the first failure aborts the parse.
///
/// # Arguments
///
/// * `lines` - Lines without terminators, as produced by `BufRead::lines`
/// * `options` - Parsing rules
///
/// # Returns
///
/// * `Ok(Store)` - Every line was accepted
/// * `Err(IniError)` - Invalid options, a read failure or a syntax error
pub fn parse_lines<I, S>(lines: I, options: &IniOptions) -> Result<Store, IniError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    parse_lines_with_stats(lines, options).map(|(store, _)| store)
}

/// Same as [`parse_lines`], also returning the parse counters
pub fn parse_lines_with_stats<I, S>(
    lines: I,
    options: &IniOptions,
) -> Result<(Store, ParseStats), IniError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    options.validate()?;

    let classifier = LineClassifier::new(options);
    let mut store = Store::new(options.case_sensitive);
    let mut stats = ParseStats::default();
    let mut section = GLOBAL_SECTION.to_string();

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = line?;
        stats.lines += 1;

        match classifier.classify(line.as_ref(), line_number)? {
            Line::Blank => {
                if !options.tolerate_blank_lines {
                    return Err(SyntaxError::BlankLine(line_number).into());
                }
                stats.skipped += 1;
            }
            Line::Comment => {
                stats.skipped += 1;
            }
            Line::Section(name) => {
                tracing::trace!("Line {}: section [{}]", line_number, name);
                stats.sections += 1;
                section = name;
            }
            Line::Property { key, value } => {
                if section == GLOBAL_SECTION && !options.allow_global_section {
                    return Err(SyntaxError::GlobalProperty(line_number).into());
                }

                let (key, value) = if options.trim_properties {
                    (key.trim(), value.trim())
                } else {
                    (key.as_str(), value.as_str())
                };

                let value = if options.strip_enclosing_quotes {
                    strip_enclosing_quotes(value, &options.enclosing_quote_symbols)
                } else {
                    value
                };

                if value.is_empty() && options.discard_properties_with_no_value {
                    tracing::trace!(
                        "Line {}: discarding [{}].{} with no value",
                        line_number,
                        section,
                        key
                    );
                    stats.discarded += 1;
                    continue;
                }

                tracing::trace!("Line {}: property [{}].{}", line_number, section, key);
                store.add(&section, key, value);
                stats.properties += 1;
            }
            Line::Unparseable => {
                if !options.ignore_unparseable {
                    return Err(SyntaxError::UnparseableLine(line_number).into());
                }
                tracing::trace!("Line {}: ignoring unparseable line", line_number);
                stats.skipped += 1;
            }
        }
    }

    tracing::debug!(
        "Parsed {} lines: {} sections, {} properties, {} skipped, {} discarded",
        stats.lines,
        stats.sections,
        stats.properties,
        stats.skipped,
        stats.discarded
    );

    Ok((store, stats))
}
