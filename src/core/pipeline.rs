use crate::core::contrast;
use crate::core::{AuditResult, ColorPair, Compliance, ConfigProvider, PairKind, Storage};
use crate::domain::model::{AuditSummary, PairEvaluation};
use crate::utils::error::{Result, ThemeError};
use chrono::Utc;
use serde::Serialize;

pub struct ContrastPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ContrastPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn resolve_color(&self, field: &str, name: &str) -> Result<String> {
        self.config
            .colors()
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::InvalidConfigValueError {
                field: field.to_string(),
                value: name.to_string(),
                reason: "Unknown color name".to_string(),
            })
    }

    fn render_text_report(&self, evaluations: &[PairEvaluation], summary: &AuditSummary) -> String {
        let mut lines = Vec::new();

        lines.push(format!("{} - Contrast Ratio Check", self.config.theme_name()));
        lines.push("=======================================".to_string());
        lines.push(
            "WCAG AA requires at least 4.5:1 for normal text, 3:1 for large text".to_string(),
        );
        lines.push(format!(
            "Generated: {}",
            summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        let mut current_background: Option<&str> = None;
        for eval in evaluations.iter().filter(|e| e.kind == PairKind::Matrix) {
            if current_background != Some(eval.background_name.as_str()) {
                lines.push(String::new());
                lines.push(format!(
                    "Background: {} ({})",
                    eval.background_name, eval.background
                ));
                lines.push("-----------------------------------".to_string());
                current_background = Some(eval.background_name.as_str());
            }
            lines.push(format!(
                "{} ({}): {} - {}",
                eval.foreground_name,
                eval.foreground,
                contrast::format_ratio(eval.ratio),
                eval.compliance.label()
            ));
        }

        let combinations: Vec<&PairEvaluation> = evaluations
            .iter()
            .filter(|e| e.kind == PairKind::Combination)
            .collect();
        if !combinations.is_empty() {
            lines.push(String::new());
            lines.push("Specific Theme Combinations".to_string());
            lines.push("---------------------------".to_string());
            for eval in combinations {
                lines.push(format!(
                    "{}: {} - {}",
                    eval.label,
                    contrast::format_ratio(eval.ratio),
                    eval.compliance.label()
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Summary: {} checked, {} pass, {} large-text only, {} fail",
            summary.total, summary.pass, summary.pass_large_only, summary.fail
        ));

        lines.push(String::new());
        lines.push(
            "Note: This is a simplified check. For a complete accessibility audit,".to_string(),
        );
        lines.push(
            "use a dedicated tool like the WebAIM Contrast Checker or Colour Contrast Analyser."
                .to_string(),
        );

        lines.join("\n")
    }

    fn render_csv(&self, evaluations: &[PairEvaluation]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for eval in evaluations {
            writer.serialize(eval)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ThemeError::ProcessingError {
                message: format!("CSV buffer flush failed: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| ThemeError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a AuditSummary,
    evaluations: &'a [PairEvaluation],
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> crate::core::Pipeline for ContrastPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ColorPair>> {
        let mut pairs = Vec::new();

        for background in self.config.backgrounds() {
            let background_hex = self.resolve_color("backgrounds", background)?;
            for foreground in self.config.foregrounds() {
                let foreground_hex = self.resolve_color("foregrounds", foreground)?;
                pairs.push(ColorPair {
                    kind: PairKind::Matrix,
                    label: format!("{} on {}", foreground, background),
                    foreground_name: foreground.clone(),
                    foreground: foreground_hex,
                    background_name: background.clone(),
                    background: background_hex.clone(),
                });
            }
        }

        for combo in self.config.combinations() {
            pairs.push(ColorPair {
                kind: PairKind::Combination,
                label: combo.label.clone(),
                foreground_name: combo.foreground.clone(),
                foreground: self.resolve_color("pairs.foreground", &combo.foreground)?,
                background_name: combo.background.clone(),
                background: self.resolve_color("pairs.background", &combo.background)?,
            });
        }

        tracing::debug!(
            "Resolved {} color pairs ({} backgrounds x {} foregrounds + {} combinations)",
            pairs.len(),
            self.config.backgrounds().len(),
            self.config.foregrounds().len(),
            self.config.combinations().len()
        );

        Ok(pairs)
    }

    async fn evaluate(&self, pairs: Vec<ColorPair>) -> Result<AuditResult> {
        let mut evaluations = Vec::with_capacity(pairs.len());
        let large_text = self.config.large_text();

        for pair in pairs {
            let foreground = contrast::parse_hex(&pair.foreground)?;
            let background = contrast::parse_hex(&pair.background)?;
            let ratio = contrast::contrast_ratio(foreground, background);
            let compliance = contrast::classify(ratio);

            evaluations.push(PairEvaluation {
                kind: pair.kind,
                label: pair.label,
                foreground_name: pair.foreground_name,
                foreground: pair.foreground,
                background_name: pair.background_name,
                background: pair.background,
                ratio,
                meets_aa: contrast::meets_aa(ratio, large_text),
                compliance,
            });
        }

        let summary = AuditSummary {
            theme: self.config.theme_name().to_string(),
            total: evaluations.len(),
            pass: evaluations
                .iter()
                .filter(|e| e.compliance == Compliance::Pass)
                .count(),
            pass_large_only: evaluations
                .iter()
                .filter(|e| e.compliance == Compliance::PassLargeOnly)
                .count(),
            fail: evaluations
                .iter()
                .filter(|e| e.compliance == Compliance::Fail)
                .count(),
            generated_at: Utc::now(),
        };

        let text_report = self.render_text_report(&evaluations, &summary);
        let csv_output = self.render_csv(&evaluations)?;

        Ok(AuditResult {
            evaluations,
            text_report,
            csv_output,
            summary,
        })
    }

    async fn report(&self, result: AuditResult) -> Result<String> {
        let mut primary_path = None;

        for format in self.config.report_formats() {
            let (filename, data) = match format.as_str() {
                "text" => (
                    "contrast-report.txt",
                    result.text_report.clone().into_bytes(),
                ),
                "csv" => ("contrast-report.csv", result.csv_output.clone().into_bytes()),
                "json" => {
                    let document = JsonReport {
                        summary: &result.summary,
                        evaluations: &result.evaluations,
                    };
                    (
                        "contrast-report.json",
                        serde_json::to_vec_pretty(&document)?,
                    )
                }
                other => {
                    return Err(ThemeError::InvalidConfigValueError {
                        field: "report.formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format. Valid formats: text, csv, json".to_string(),
                    })
                }
            };

            tracing::debug!("Writing {} ({} bytes)", filename, data.len());
            self.storage.write_file(filename, &data).await?;

            if primary_path.is_none() {
                primary_path = Some(format!("{}/{}", self.config.output_path(), filename));
            }
        }

        primary_path.ok_or_else(|| ThemeError::MissingConfigError {
            field: "report.formats".to_string(),
        })
    }
}
