use regex::Regex;

use crate::error::FormError;

/// Structural check for incoming PHP-style formats: starts and ends with a
/// date-component letter, at least five characters, only token letters and
/// separators in between.
const FORMAT_PATTERN: &str = r"^[djmnFYy][djmnFYy\-/\., ]{3,}[djmnFYy]$";

/// Token rewrites from the PHP convention to the widget's, applied in order.
const REWRITES: &[(&str, &str)] = &[("Y", "y"), ("yyyy", "yy"), ("F", "MM"), ("n", "m")];

/// Translate a PHP-style date format into the widget's tokens.
pub fn translate_format(php_format: &str) -> Result<String, FormError> {
    let pattern = Regex::new(FORMAT_PATTERN).expect("valid format pattern");
    if !pattern.is_match(php_format) {
        return Err(FormError::InvalidDateFormat {
            format: php_format.to_string(),
        });
    }

    let mut translated = php_format.to_string();
    for (from, to) in REWRITES {
        translated = translated.replace(from, to);
    }
    Ok(translated)
}
