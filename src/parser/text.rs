//! Comment and quote stripping applied to individual lines and values

use std::borrow::Cow;

/// Removes a trailing inline comment from a line
///
/// Every occurrence of `escape_prefix + comment_start` becomes a literal
/// `comment_start`; the first unescaped `comment_start` and everything after
/// it is dropped.
///
/// # Examples
///
/// ```
/// use inifile::parser::strip_inline_comments;
///
/// assert_eq!(strip_inline_comments("host=localhost ;comment", ";", "\\"), "host=localhost ");
/// assert_eq!(strip_inline_comments("a\\;b ;real comment", ";", "\\"), "a;b ");
/// ```
pub fn strip_inline_comments<'a>(
    line: &'a str,
    comment_start: &str,
    escape_prefix: &str,
) -> Cow<'a, str> {
    if comment_start.is_empty() || !line.contains(comment_start) {
        return Cow::Borrowed(line);
    }

    let escaped = format!("{}{}", escape_prefix, comment_start);
    let mut stripped = String::with_capacity(line.len());

    // Escaped markers split the line; a marker inside any piece starts the comment
    for (index, piece) in line.split(escaped.as_str()).enumerate() {
        if index > 0 {
            stripped.push_str(comment_start);
        }

        if let Some(pos) = piece.find(comment_start) {
            stripped.push_str(&piece[..pos]);
            break;
        }

        stripped.push_str(piece);
    }

    Cow::Owned(stripped)
}

/// Removes one layer of matching enclosing quotes from a value
///
/// The first and last characters must be the same symbol from `symbols`;
/// values shorter than two characters are returned unchanged.
///
/// # Examples
///
/// ```
/// use inifile::parser::strip_enclosing_quotes;
///
/// assert_eq!(strip_enclosing_quotes("\"bar\"", &['\'', '"']), "bar");
/// assert_eq!(strip_enclosing_quotes("'bar\"", &['\'', '"']), "'bar\"");
/// ```
pub fn strip_enclosing_quotes<'a>(value: &'a str, symbols: &[char]) -> &'a str {
    let mut chars = value.chars();

    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && symbols.contains(&first) => chars.as_str(),
        _ => value,
    }
}
