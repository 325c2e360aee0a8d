use crate::utils::error::{Result, ThemeError};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("valid hex color regex"))
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    if !hex_color_pattern().is_match(value) {
        return Err(ThemeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected 6 hex digits with an optional '#' prefix".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ThemeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ThemeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ThemeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Every name in `names` must exist as a key of the palette.
pub fn validate_color_references(
    field_name: &str,
    names: &[String],
    palette: &HashMap<String, String>,
) -> Result<()> {
    for name in names {
        if !palette.contains_key(name) {
            return Err(ThemeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: format!(
                    "Unknown color name. Known colors: {}",
                    known_color_list(palette)
                ),
            });
        }
    }
    Ok(())
}

pub fn validate_report_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let valid_formats = ["text", "csv", "json"];
    for format in formats {
        if !valid_formats.contains(&format.as_str()) {
            return Err(ThemeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }
    }
    Ok(())
}

fn known_color_list(palette: &HashMap<String, String>) -> String {
    let mut names: Vec<&str> = palette.keys().map(String::as_str).collect();
    names.sort_unstable();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("colors.background", "#23364a").is_ok());
        assert!(validate_hex_color("colors.background", "23364A").is_ok());
        assert!(validate_hex_color("colors.background", "#fff").is_err());
        assert!(validate_hex_color("colors.background", "zzzzzz").is_err());
        assert!(validate_hex_color("colors.background", "").is_err());
        assert!(validate_hex_color("colors.background", "#23364a00").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("report.output_path", "./output").is_ok());
        assert!(validate_path("report.output_path", "").is_err());
        assert!(validate_path("report.output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_color_references() {
        let mut palette = HashMap::new();
        palette.insert("navy".to_string(), "#23364a".to_string());
        palette.insert("green".to_string(), "#30cf7b".to_string());

        let known = vec!["navy".to_string(), "green".to_string()];
        assert!(validate_color_references("backgrounds", &known, &palette).is_ok());

        let unknown = vec!["crimson".to_string()];
        let err = validate_color_references("backgrounds", &unknown, &palette).unwrap_err();
        assert!(err.to_string().contains("crimson"));
    }

    #[test]
    fn test_validate_report_formats() {
        let formats = vec!["text".to_string(), "csv".to_string()];
        assert!(validate_report_formats("report.formats", &formats).is_ok());

        let invalid = vec!["xml".to_string()];
        assert!(validate_report_formats("report.formats", &invalid).is_err());
    }
}
