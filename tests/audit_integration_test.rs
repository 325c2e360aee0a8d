use tempfile::TempDir;
use theme_audit::config::PaletteConfig;
use theme_audit::utils::validation::Validate;
use theme_audit::{AuditEngine, ContrastPipeline, LocalStorage};

#[tokio::test]
async fn test_end_to_end_audit_with_builtin_palette() {
    // Setup temporary directory for output
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = PaletteConfig::default();
    config.report.output_path = output_path.clone();
    config.report.formats = vec!["text".to_string(), "csv".to_string(), "json".to_string()];
    assert!(config.validate().is_ok());

    let matrix = config.matrix.backgrounds.len() * config.matrix.foregrounds.len();
    let expected_total = matrix + config.pairs.len();

    // Create storage and pipeline
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ContrastPipeline::new(storage, config);

    // Create and run audit engine
    let engine = AuditEngine::new_with_monitoring(pipeline, false);
    let result = engine.run().await;

    assert!(result.is_ok());
    let report_path = result.unwrap();
    assert!(report_path.contains("contrast-report.txt"));

    // Verify the text report
    let text_path = std::path::Path::new(&output_path).join("contrast-report.txt");
    assert!(text_path.exists());
    let report = std::fs::read_to_string(&text_path).unwrap();

    assert!(report.contains("Toy Chest Theme - Contrast Ratio Check"));
    assert!(report.contains("Background: building-block-blue (#23364a)"));
    assert!(report.contains("action-figure-green (#30cf7b): 6.09:1 - PASS"));
    // Royal purple on navy is nearly invisible
    assert!(report.contains("puzzle-purple (#5f207a): 1.16:1 - FAIL"));
    assert!(report.contains("Specific Theme Combinations"));
    assert!(report.contains("Editor text: 6.09:1 - PASS"));
    assert!(report.contains(&format!("Summary: {} checked", expected_total)));

    // Verify the CSV artifact
    let csv_path = std::path::Path::new(&output_path).join("contrast-report.csv");
    let csv_content = std::fs::read_to_string(&csv_path).unwrap();
    let csv_lines: Vec<&str> = csv_content.trim_end().split('\n').collect();
    assert_eq!(csv_lines.len(), expected_total + 1); // header + rows

    // Verify the JSON artifact
    let json_path = std::path::Path::new(&output_path).join("contrast-report.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["summary"]["theme"], "Toy Chest Theme");
    assert_eq!(json["summary"]["total"], expected_total);
    assert_eq!(
        json["evaluations"].as_array().unwrap().len(),
        expected_total
    );

    let totals = json["summary"]["pass"].as_u64().unwrap()
        + json["summary"]["pass_large_only"].as_u64().unwrap()
        + json["summary"]["fail"].as_u64().unwrap();
    assert_eq!(totals as usize, expected_total);
}

#[tokio::test]
async fn test_audit_with_toml_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config_toml = format!(
        r##"
[theme]
name = "Two Color Theme"

[colors]
ink = "#000000"
paper = "#ffffff"

[matrix]
backgrounds = ["paper"]
foregrounds = ["ink"]

[[pairs]]
label = "Body text"
foreground = "ink"
background = "paper"

[report]
output_path = "{}"
formats = ["text"]
"##,
        output_path
    );

    let config_path = temp_dir.path().join("palette.toml");
    std::fs::write(&config_path, config_toml).unwrap();

    let config = PaletteConfig::from_file(&config_path).unwrap();
    assert!(config.validate().is_ok());

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ContrastPipeline::new(storage, config);
    let engine = AuditEngine::new(pipeline);

    let report_path = engine.run().await.unwrap();
    assert!(report_path.ends_with("contrast-report.txt"));

    let report =
        std::fs::read_to_string(std::path::Path::new(&output_path).join("contrast-report.txt"))
            .unwrap();
    assert!(report.contains("Two Color Theme - Contrast Ratio Check"));
    assert!(report.contains("ink (#000000): 21.00:1 - PASS"));
    assert!(report.contains("Body text: 21.00:1 - PASS"));
    assert!(report.contains("Summary: 2 checked, 2 pass, 0 large-text only, 0 fail"));
}

#[tokio::test]
async fn test_audit_fails_on_unresolvable_pair() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = PaletteConfig::default();
    config.report.output_path = output_path.clone();
    // Bypass validation to exercise the pipeline's own resolution failure
    config.matrix.backgrounds.push("missing-color".to_string());

    let storage = LocalStorage::new(output_path);
    let pipeline = ContrastPipeline::new(storage, config);
    let engine = AuditEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    assert!(err.to_string().contains("missing-color"));
}
