use clap::Parser;
use theme_audit::config::PaletteConfig;
use theme_audit::utils::{logger, validation::Validate};
use theme_audit::{AuditEngine, ContrastPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "theme-audit")]
#[command(about = "WCAG AA contrast audit for editor color themes")]
struct Args {
    /// Path to a TOML palette configuration (built-in palette when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the report output directory
    #[arg(long)]
    output_path: Option<String>,

    /// Override the report formats (comma separated: text, csv, json)
    #[arg(long, value_delimiter = ',')]
    formats: Vec<String>,

    /// Evaluate against the large-text AA threshold (3:1)
    #[arg(long)]
    large_text: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be checked without evaluating
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting theme contrast audit");

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading palette configuration from: {}", path);
            match PaletteConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => {
            tracing::info!("🎨 Using the built-in theme palette");
            PaletteConfig::default()
        }
    };

    // Command line overrides
    if let Some(output_path) = &args.output_path {
        config.report.output_path = output_path.clone();
        tracing::info!("🔧 Output path overridden to: {}", output_path);
    }
    if !args.formats.is_empty() {
        config.report.formats = args.formats.clone();
        tracing::info!("🔧 Report formats overridden to: {}", args.formats.join(", "));
    }
    if args.large_text {
        config.report.large_text = true;
        tracing::info!("🔧 Evaluating against the large-text threshold (3:1)");
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No evaluation will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.report.output_path.clone());
    let pipeline = ContrastPipeline::new(storage, config);

    let engine = AuditEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Contrast audit completed successfully!");
            tracing::info!("📁 Report saved to: {}", output_path);
            println!("✅ Contrast audit completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Contrast audit failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                theme_audit::utils::error::ErrorSeverity::Low => 0,
                theme_audit::utils::error::ErrorSeverity::Medium => 2,
                theme_audit::utils::error::ErrorSeverity::High => 1,
                theme_audit::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &PaletteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Theme: {} v{}",
        config.theme.name,
        config.theme.version.as_deref().unwrap_or("0.0.0")
    );
    println!("  Palette: {} colors", config.colors.len());
    println!(
        "  Matrix: {} backgrounds x {} foregrounds",
        config.matrix.backgrounds.len(),
        config.matrix.foregrounds.len()
    );
    println!("  Named combinations: {}", config.pairs.len());
    println!("  Output: {}", config.report.output_path);
    println!("  Formats: {}", config.report.formats.join(", "));

    if config.report.large_text {
        println!("  Threshold: 3:1 (large text)");
    } else {
        println!("  Threshold: 4.5:1 (normal text)");
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &PaletteConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("🎨 Palette:");
    let mut names: Vec<&String> = config.colors.keys().collect();
    names.sort_unstable();
    for name in names {
        println!("  {} = {}", name, config.colors[name]);
    }

    println!();
    println!("⚙️ Checks to perform:");
    let matrix = config.matrix.backgrounds.len() * config.matrix.foregrounds.len();
    println!(
        "  📊 Matrix: {} pairs ({} backgrounds x {} foregrounds)",
        matrix,
        config.matrix.backgrounds.len(),
        config.matrix.foregrounds.len()
    );
    println!("  📊 Named combinations: {}", config.pairs.len());
    println!("  📊 Total: {} evaluations", matrix + config.pairs.len());

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
