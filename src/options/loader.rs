use crate::options::types::IniOptions;
use crate::OptionsError;
use std::path::Path;

/// Loads parser options from a TOML file
///
/// Keys use the kebab-case option names (`comment-start`,
/// `allow-inline-comments`, ...). Keys that are absent keep their default
/// values; unknown keys are rejected.
///
/// # Arguments
///
/// * `path` - Path to the TOML options file
///
/// # Returns
///
/// * `Ok(IniOptions)` - Successfully loaded and validated options
/// * `Err(OptionsError)` - Failed to read, parse, or validate the options
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use inifile::options::load_options;
///
/// let options = load_options(Path::new("options.toml")).unwrap();
/// println!("Inline comments: {}", options.allow_inline_comments);
/// ```
pub fn load_options(path: &Path) -> Result<IniOptions, OptionsError> {
    let content = std::fs::read_to_string(path)?;
    let options = parse_options(&content)?;

    tracing::debug!("Loaded parser options from {}", path.display());

    Ok(options)
}

/// Parses and validates parser options from TOML text
pub fn parse_options(content: &str) -> Result<IniOptions, OptionsError> {
    let options: IniOptions = toml::from_str(content)?;

    options.validate()?;

    Ok(options)
}
