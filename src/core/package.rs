//! Theme extension packaging.
//!
//! Validates an extension directory (manifest, contributed theme files,
//! README) and builds the distributable archive natively. No external
//! packaging CLI and no editor process is ever invoked.

use crate::core::Storage;
use crate::utils::error::{Result, ThemeError};
use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

/// The subset of the extension manifest the packager cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtensionManifest {
    pub name: String,
    pub version: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub contributes: Contributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contributes {
    #[serde(default)]
    pub themes: Vec<ThemeContribution>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeContribution {
    pub label: Option<String>,
    #[serde(rename = "uiTheme")]
    pub ui_theme: Option<String>,
    pub path: String,
}

impl ExtensionManifest {
    pub fn archive_name(&self) -> String {
        format!("{}-{}.vsix", self.name, self.version)
    }
}

fn packaging_error(message: impl Into<String>) -> ThemeError {
    ThemeError::PackagingError {
        message: message.into(),
    }
}

/// Check the extension directory and parse its manifest.
///
/// Required: `package.json` declaring at least one theme contribution, every
/// contributed theme file present and parseable as JSON, and `README.md`.
/// A missing LICENSE or CHANGELOG only logs a warning.
pub fn validate_package(dir: &Path) -> Result<ExtensionManifest> {
    let manifest_path = dir.join("package.json");
    if !manifest_path.is_file() {
        return Err(packaging_error("package.json not found"));
    }

    let manifest_text = std::fs::read_to_string(&manifest_path)?;
    let manifest: ExtensionManifest = serde_json::from_str(&manifest_text)?;

    if manifest.contributes.themes.is_empty() {
        return Err(packaging_error(
            "package.json does not contribute any themes",
        ));
    }

    for theme in &manifest.contributes.themes {
        let theme_path = dir.join(&theme.path);
        if !theme_path.is_file() {
            return Err(packaging_error(format!(
                "contributed theme file '{}' not found",
                theme.path
            )));
        }

        let theme_text = std::fs::read_to_string(&theme_path)?;
        let _: serde_json::Value = serde_json::from_str(&theme_text)?;
        tracing::debug!(
            "Theme '{}' ({}) is valid JSON",
            theme.label.as_deref().unwrap_or("unnamed"),
            theme.path
        );
    }

    if !dir.join("README.md").is_file() {
        return Err(packaging_error("README.md not found"));
    }

    for optional in ["LICENSE", "CHANGELOG.md"] {
        if !dir.join(optional).is_file() {
            tracing::warn!("⚠️ {} is missing; the package will ship without it", optional);
        }
    }

    if let Some(icon) = &manifest.icon {
        if !dir.join(icon).is_file() {
            return Err(packaging_error(format!(
                "declared icon '{}' not found",
                icon
            )));
        }
    }

    Ok(manifest)
}

/// Build the `.vsix` archive and write it through the storage port.
/// Entries are added in a deterministic order. Returns the archive filename.
pub async fn build_package<S: Storage>(
    storage: &S,
    dir: &Path,
    manifest: &ExtensionManifest,
) -> Result<String> {
    let mut entries = vec!["package.json".to_string(), "README.md".to_string()];

    let mut theme_paths: Vec<String> = manifest
        .contributes
        .themes
        .iter()
        .map(|t| t.path.clone())
        .collect();
    theme_paths.sort_unstable();
    theme_paths.dedup();
    entries.extend(theme_paths);

    for optional in ["LICENSE", "CHANGELOG.md"] {
        if dir.join(optional).is_file() {
            entries.push(optional.to_string());
        }
    }

    if let Some(icon) = &manifest.icon {
        entries.push(icon.clone());
    }

    let zip_data = {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        for entry in &entries {
            let data = std::fs::read(dir.join(entry))?;
            zip.start_file::<_, ()>(entry.as_str(), FileOptions::default())?;
            zip.write_all(&data)?;
        }

        let cursor = zip.finish()?;
        cursor.into_inner()
    };

    let archive_name = manifest.archive_name();
    tracing::debug!(
        "Writing {} ({} entries, {} bytes)",
        archive_name,
        entries.len(),
        zip_data.len()
    );
    storage.write_file(&archive_name, &zip_data).await?;

    Ok(archive_name)
}
