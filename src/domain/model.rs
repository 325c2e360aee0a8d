use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An sRGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// WCAG AA classification of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compliance {
    Pass,
    PassLargeOnly,
    Fail,
}

impl Compliance {
    pub fn label(&self) -> &'static str {
        match self {
            Compliance::Pass => "PASS",
            Compliance::PassLargeOnly => "PASS (large text only)",
            Compliance::Fail => "FAIL",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Compliance::Fail)
    }
}

/// A named foreground/background combination as written in the configuration.
/// Both sides reference palette color names, not hex values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedCombination {
    pub label: String,
    pub foreground: String,
    pub background: String,
}

/// Where an evaluation request came from: the exhaustive background x
/// foreground matrix, or a named combination from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairKind {
    Matrix,
    Combination,
}

/// A fully resolved evaluation request produced by the extract stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPair {
    pub kind: PairKind,
    pub label: String,
    pub foreground_name: String,
    pub foreground: String,
    pub background_name: String,
    pub background: String,
}

/// One evaluated pair: the request plus its ratio and classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairEvaluation {
    pub kind: PairKind,
    pub label: String,
    pub foreground_name: String,
    pub foreground: String,
    pub background_name: String,
    pub background: String,
    pub ratio: f64,
    /// Whether the ratio meets AA at the configured text size.
    pub meets_aa: bool,
    pub compliance: Compliance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSummary {
    pub theme: String,
    pub total: usize,
    pub pass: usize,
    pub pass_large_only: usize,
    pub fail: usize,
    pub generated_at: DateTime<Utc>,
}

/// Output of the evaluate stage: every evaluation plus the rendered artifacts.
#[derive(Debug, Clone)]
pub struct AuditResult {
    pub evaluations: Vec<PairEvaluation>,
    pub text_report: String,
    pub csv_output: String,
    pub summary: AuditSummary,
}
