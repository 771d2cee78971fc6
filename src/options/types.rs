use serde::Deserialize;

/// Options controlling how INI text is parsed and how values are converted
///
/// Start from [`IniOptions::default`] and override only what a given file
/// needs:
///
/// ```
/// use inifile::IniOptions;
///
/// let options = IniOptions {
///     comment_start: "#".to_string(),
///     allow_inline_comments: true,
///     ..IniOptions::default()
/// };
/// assert!(options.trim_properties);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct IniOptions {
    /// Match section and property names case-sensitively
    pub case_sensitive: bool,

    /// Prefix marking a comment line
    pub comment_start: String,

    /// Trim whitespace around property names and values
    pub trim_properties: bool,

    /// Skip blank lines instead of failing the parse
    pub tolerate_blank_lines: bool,

    /// Allow properties before the first section header
    pub allow_global_section: bool,

    /// Drop properties whose value is empty
    pub discard_properties_with_no_value: bool,

    /// Use the permissive `1/t/T/TRUE/true/True` and `0/f/F/FALSE/false/False` rules
    ///
    /// When false, `strict_bool_true` and `strict_bool_false` must be matched.
    pub use_go_bool_rules: bool,

    /// Value that must be matched to read `true` in strict mode
    pub strict_bool_true: String,

    /// Value that must be matched to read `false` in strict mode
    pub strict_bool_false: String,

    /// Case-sensitive matching of the strict bool values
    pub strict_bool_case_sensitive: bool,

    /// Skip lines that are not blank, comments, sections or properties
    pub ignore_unparseable: bool,

    /// Allow comments after a section header or property
    pub allow_inline_comments: bool,

    /// Prefix that escapes a literal comment marker when inline comments are on
    pub comment_escape_prefix: String,

    /// Remove one layer of matching quotes around values
    pub strip_enclosing_quotes: bool,

    /// Characters recognised as enclosing quotes
    pub enclosing_quote_symbols: Vec<char>,

    /// Use `:` instead of `=` between property name and value
    pub use_colon_assignment: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            comment_start: ";".to_string(),
            trim_properties: true,
            tolerate_blank_lines: true,
            allow_global_section: true,
            discard_properties_with_no_value: true,
            use_go_bool_rules: true,
            strict_bool_true: String::new(),
            strict_bool_false: String::new(),
            strict_bool_case_sensitive: true,
            ignore_unparseable: false,
            allow_inline_comments: false,
            comment_escape_prefix: "\\".to_string(),
            strip_enclosing_quotes: false,
            enclosing_quote_symbols: vec!['\'', '"'],
            use_colon_assignment: false,
        }
    }
}

impl IniOptions {
    /// The separator between a property name and its value
    pub fn assignment_separator(&self) -> char {
        if self.use_colon_assignment {
            ':'
        } else {
            '='
        }
    }
}
