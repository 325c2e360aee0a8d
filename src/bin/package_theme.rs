use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use theme_audit::core::package;
use theme_audit::utils::logger;
use theme_audit::LocalStorage;

#[derive(Parser)]
#[command(name = "package-theme")]
#[command(about = "Validate and package a color theme extension")]
struct Args {
    /// Extension directory containing package.json
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Directory to write the archive to
    #[arg(short, long, default_value = "./output")]
    output_path: String,

    /// Validate only, do not build the archive
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Packaging theme extension from: {}", args.dir.display());

    let manifest = match package::validate_package(&args.dir) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::error!("❌ Package validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    println!("📋 Extension Summary:");
    println!(
        "  Name: {} ({})",
        manifest.display_name.as_deref().unwrap_or(&manifest.name),
        manifest.name
    );
    println!("  Version: {}", manifest.version);
    println!("  Themes: {}", manifest.contributes.themes.len());
    for theme in &manifest.contributes.themes {
        println!(
            "    {} ({})",
            theme.label.as_deref().unwrap_or("unnamed"),
            theme.path
        );
    }
    println!();

    if args.check {
        tracing::info!("✅ Package validation passed");
        println!("✅ Package validation passed");
        return Ok(());
    }

    let storage = LocalStorage::new(args.output_path.clone());
    let archive_name = package::build_package(&storage, &args.dir, &manifest)
        .await
        .context("failed to build the theme archive")?;

    tracing::info!("✅ Theme packaged successfully!");
    println!("✅ Theme packaged successfully!");
    println!("📦 Archive saved to: {}/{}", args.output_path, archive_name);

    Ok(())
}
