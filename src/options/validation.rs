use crate::options::types::IniOptions;
use crate::OptionsError;

impl IniOptions {
    /// Checks the options before any line is parsed
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The options can be used for parsing
    /// * `Err(OptionsError)` - The comment marker is empty or whitespace only
    pub fn validate(&self) -> Result<(), OptionsError> {
        validate_comment_start(&self.comment_start)?;
        check_strict_bool_targets(self);
        Ok(())
    }
}

/// Validates the comment marker
fn validate_comment_start(comment_start: &str) -> Result<(), OptionsError> {
    if comment_start.trim().is_empty() {
        return Err(OptionsError::EmptyCommentStart);
    }
    Ok(())
}

/// Strict bool mode with no targets is legal but only ever matches empty values
fn check_strict_bool_targets(options: &IniOptions) {
    if !options.use_go_bool_rules
        && options.strict_bool_true.is_empty()
        && options.strict_bool_false.is_empty()
    {
        tracing::warn!(
            "Strict bool rules enabled without strict-bool-true or strict-bool-false; \
             only empty values will convert"
        );
    }
}
