use crate::core::{ConfigProvider, NamedCombination};
use crate::utils::error::{Result, ThemeError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Palette configuration: the theme's colors, which of them act as
/// backgrounds and foregrounds, and the named combinations the theme
/// actually uses. Loaded from TOML, or built in via [`Default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub theme: ThemeConfig,
    pub colors: HashMap<String, String>,
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub pairs: Vec<NamedCombination>,
    #[serde(default)]
    pub report: ReportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

/// Which palette colors act as backgrounds and foregrounds in the
/// exhaustive contrast matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixConfig {
    pub backgrounds: Vec<String>,
    pub foregrounds: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
    #[serde(default)]
    pub large_text: bool,
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_formats() -> Vec<String> {
    vec!["text".to_string()]
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            formats: default_formats(),
            large_text: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl PaletteConfig {
    /// Load the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ThemeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ThemeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` references with environment variable values.
    /// Unset variables are left as-is so validation reports them in context.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("theme.name", &self.theme.name)?;

        if self.colors.is_empty() {
            return Err(ThemeError::MissingConfigError {
                field: "colors".to_string(),
            });
        }

        for (name, hex) in &self.colors {
            validation::validate_hex_color(&format!("colors.{}", name), hex)?;
        }

        if self.matrix.backgrounds.is_empty() {
            return Err(ThemeError::MissingConfigError {
                field: "matrix.backgrounds".to_string(),
            });
        }
        if self.matrix.foregrounds.is_empty() {
            return Err(ThemeError::MissingConfigError {
                field: "matrix.foregrounds".to_string(),
            });
        }

        validation::validate_color_references(
            "matrix.backgrounds",
            &self.matrix.backgrounds,
            &self.colors,
        )?;
        validation::validate_color_references(
            "matrix.foregrounds",
            &self.matrix.foregrounds,
            &self.colors,
        )?;

        for pair in &self.pairs {
            validation::validate_non_empty_string("pairs.label", &pair.label)?;
            validation::validate_color_references(
                "pairs.foreground",
                std::slice::from_ref(&pair.foreground),
                &self.colors,
            )?;
            validation::validate_color_references(
                "pairs.background",
                std::slice::from_ref(&pair.background),
                &self.colors,
            )?;
        }

        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_report_formats("report.formats", &self.report.formats)?;

        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for PaletteConfig {
    fn theme_name(&self) -> &str {
        &self.theme.name
    }

    fn colors(&self) -> &HashMap<String, String> {
        &self.colors
    }

    fn backgrounds(&self) -> &[String] {
        &self.matrix.backgrounds
    }

    fn foregrounds(&self) -> &[String] {
        &self.matrix.foregrounds
    }

    fn combinations(&self) -> &[NamedCombination] {
        &self.pairs
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn report_formats(&self) -> &[String] {
        &self.report.formats
    }

    fn large_text(&self) -> bool {
        self.report.large_text
    }
}

impl Validate for PaletteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// The shipped theme palette, used when no configuration file is given.
impl Default for PaletteConfig {
    fn default() -> Self {
        let colors: HashMap<String, String> = [
            // Background colors
            ("building-block-blue", "#23364a"),
            ("darker-blue", "#1c2c3d"),
            ("slightly-darker-blue", "#2c3f57"),
            // Foreground colors
            ("action-figure-green", "#30cf7b"),
            ("light-grey", "#d4d4d4"),
            ("puzzle-purple", "#5f207a"),
            ("race-car-red", "#be2d26"),
            ("bright-red", "#dd5943"),
            ("green", "#199171"),
            ("yellow", "#da8e26"),
            ("bright-yellow", "#e7d74b"),
            ("blue", "#325d96"),
            ("bright-blue", "#33a5d9"),
            ("magenta", "#8a5ddb"),
            ("bright-magenta", "#ad6bdc"),
            ("cyan", "#35a08f"),
            ("bright-cyan", "#41c3ad"),
            ("white", "#23d082"),
            ("bright-white", "#f0f0f0"),
            ("bright-black", "#5a8baf"),
        ]
        .into_iter()
        .map(|(name, hex)| (name.to_string(), hex.to_string()))
        .collect();

        let backgrounds = vec![
            "building-block-blue".to_string(),
            "darker-blue".to_string(),
            "slightly-darker-blue".to_string(),
        ];

        let foregrounds = vec![
            "action-figure-green".to_string(),
            "light-grey".to_string(),
            "puzzle-purple".to_string(),
            "race-car-red".to_string(),
            "bright-red".to_string(),
            "green".to_string(),
            "yellow".to_string(),
            "bright-yellow".to_string(),
            "blue".to_string(),
            "bright-blue".to_string(),
            "magenta".to_string(),
            "bright-magenta".to_string(),
            "cyan".to_string(),
            "bright-cyan".to_string(),
            "white".to_string(),
            "bright-white".to_string(),
            "bright-black".to_string(),
        ];

        let combo = |label: &str, fg: &str, bg: &str| NamedCombination {
            label: label.to_string(),
            foreground: fg.to_string(),
            background: bg.to_string(),
        };

        let pairs = vec![
            combo("Editor text", "action-figure-green", "building-block-blue"),
            combo("Comments", "bright-black", "building-block-blue"),
            combo("Variables", "action-figure-green", "building-block-blue"),
            combo("Functions", "bright-blue", "building-block-blue"),
            combo("Keywords", "bright-magenta", "building-block-blue"),
            combo("Strings", "bright-yellow", "building-block-blue"),
            combo("Types", "bright-cyan", "building-block-blue"),
            combo("Constants", "bright-red", "building-block-blue"),
            combo("Status bar text", "bright-white", "green"),
            combo(
                "Activity bar icons",
                "action-figure-green",
                "slightly-darker-blue",
            ),
            combo("Tab active text", "action-figure-green", "building-block-blue"),
            combo("Tab inactive text", "light-grey", "slightly-darker-blue"),
        ];

        Self {
            theme: ThemeConfig {
                name: "Toy Chest Theme".to_string(),
                description: Some("Deep navy editor theme with toy-box accents".to_string()),
                version: Some("1.2.0".to_string()),
            },
            colors,
            matrix: MatrixConfig {
                backgrounds,
                foregrounds,
            },
            pairs,
            report: ReportConfig::default(),
            monitoring: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r##"
[theme]
name = "Mini Theme"

[colors]
navy = "#23364a"
green = "#30cf7b"

[matrix]
backgrounds = ["navy"]
foregrounds = ["green"]

[[pairs]]
label = "Editor text"
foreground = "green"
background = "navy"

[report]
output_path = "./out"
formats = ["text", "json"]
"##;

    #[test]
    fn parses_minimal_toml() {
        let config = PaletteConfig::from_toml_str(MINIMAL_TOML).unwrap();
        assert_eq!(config.theme.name, "Mini Theme");
        assert_eq!(config.colors.len(), 2);
        assert_eq!(config.matrix.backgrounds, vec!["navy"]);
        assert_eq!(config.pairs.len(), 1);
        assert_eq!(config.report.formats, vec!["text", "json"]);
        assert!(!config.report.large_text);
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn report_section_defaults_when_absent() {
        let toml = r##"
[theme]
name = "Mini Theme"

[colors]
navy = "#23364a"
green = "#30cf7b"

[matrix]
backgrounds = ["navy"]
foregrounds = ["green"]
"##;
        let config = PaletteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.report.output_path, "./output");
        assert_eq!(config.report.formats, vec!["text"]);
        assert!(config.pairs.is_empty());
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("THEME_AUDIT_TEST_OUT", "/tmp/audit-out");
        let toml = r##"
[theme]
name = "Env Theme"

[colors]
navy = "#23364a"
green = "#30cf7b"

[matrix]
backgrounds = ["navy"]
foregrounds = ["green"]

[report]
output_path = "${THEME_AUDIT_TEST_OUT}"
"##;
        let config = PaletteConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.report.output_path, "/tmp/audit-out");
        std::env::remove_var("THEME_AUDIT_TEST_OUT");
    }

    #[test]
    fn unset_environment_variable_is_left_verbatim() {
        let substituted =
            PaletteConfig::substitute_env_vars("path = \"${THEME_AUDIT_UNSET_VAR}\"").unwrap();
        assert_eq!(substituted, "path = \"${THEME_AUDIT_UNSET_VAR}\"");
    }

    #[test]
    fn rejects_invalid_hex_color() {
        let mut config = PaletteConfig::from_toml_str(MINIMAL_TOML).unwrap();
        config
            .colors
            .insert("bad".to_string(), "zzzzzz".to_string());

        let err = config.validate_config().unwrap_err();
        assert!(err.to_string().contains("zzzzzz"));
    }

    #[test]
    fn rejects_unknown_pair_reference() {
        let mut config = PaletteConfig::from_toml_str(MINIMAL_TOML).unwrap();
        config.pairs.push(NamedCombination {
            label: "Ghost".to_string(),
            foreground: "crimson".to_string(),
            background: "navy".to_string(),
        });

        assert!(config.validate_config().is_err());
    }

    #[test]
    fn rejects_empty_background_list() {
        let mut config = PaletteConfig::from_toml_str(MINIMAL_TOML).unwrap();
        config.matrix.backgrounds.clear();

        let err = config.validate_config().unwrap_err();
        assert!(matches!(
            err,
            ThemeError::MissingConfigError { ref field } if field == "matrix.backgrounds"
        ));
    }

    #[test]
    fn rejects_unsupported_report_format() {
        let mut config = PaletteConfig::from_toml_str(MINIMAL_TOML).unwrap();
        config.report.formats = vec!["xml".to_string()];

        assert!(config.validate_config().is_err());
    }

    #[test]
    fn built_in_palette_is_valid() {
        let config = PaletteConfig::default();
        assert!(config.validate_config().is_ok());
        assert_eq!(config.matrix.backgrounds.len(), 3);
        assert_eq!(config.matrix.foregrounds.len(), 17);
        assert_eq!(config.pairs.len(), 12);
        assert_eq!(config.colors.len(), 20);
    }
}
