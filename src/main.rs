//! UI5 deployer for SAP NetWeaver ABAP
//!
//! Provides CLI interface for checking deployment settings and planning deployments

// ui5-nwabap-deployer/src/main.rs
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ui5_nwabap_deployer::classify::classify;
use ui5_nwabap_deployer::config::settings::{ResourceSelection, TaskSettings};
use ui5_nwabap_deployer::transport::select_strategy;
use ui5_nwabap_deployer::utils::files::collect_files;
use ui5_nwabap_deployer::utils::logging::init_logging;
use ui5_nwabap_deployer::validate::validate;
use ui5_nwabap_deployer::{NormalizedConfig, TracingLogger};

const DEFAULT_SETTINGS_PATH: &str = "ui5-deploy.json";

/// Main entry point for the deployer
#[tokio::main]
async fn main() -> ExitCode {
    match run_app().await {
        Ok(_) => {
            println!("✅ Operation completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_app() -> Result<()> {
    // Environment fallbacks may live in a .env file next to the settings
    dotenv::dotenv().ok();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");

    init_logging(verbose)?;

    let choice = match args.first() {
        Some(choice) => choice.trim().to_string(),
        None => prompt_choice()?,
    };
    let settings_path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));

    match choice.as_str() {
        "1" | "check" => {
            println!("🔍 Checking deployment settings in {}...", settings_path.display());
            let (normalized, _) = load_and_validate(&settings_path)?;
            println!(
                "✓ Settings valid for BSP container {} in package {}.",
                normalized.ui5.bsp_container, normalized.ui5.package
            );
        }
        "2" | "plan" => {
            println!("🗺️ Planning deployment from {}...", settings_path.display());
            let (normalized, selection) = load_and_validate(&settings_path)?;
            plan_deployment(&normalized, selection).await?;
        }
        _ => {
            println!("❌ Invalid choice. Please enter '1' (check) or '2' (plan).");
            anyhow::bail!("Invalid operation choice");
        }
    }
    Ok(())
}

fn load_and_validate(settings_path: &Path) -> Result<(NormalizedConfig, ResourceSelection)> {
    let settings = TaskSettings::load_from_json(settings_path).with_context(|| {
        format!(
            "Failed to load deployment settings from {}",
            settings_path.display()
        )
    })?;
    let (config, selection) = settings
        .into_deployment(|key| env::var(key).ok())
        .context("Failed to build deployment options")?;

    let normalized = validate(&config, &TracingLogger).context("Configuration erroneous")?;
    Ok((normalized, selection))
}

/// Collects and classifies the resources and reports the transport path
/// a deployment would take. Performs no remote calls.
async fn plan_deployment(normalized: &NormalizedConfig, selection: ResourceSelection) -> Result<()> {
    let ResourceSelection { path, pattern } = selection;
    let root = path.clone();
    let sources = tokio::task::spawn_blocking(move || collect_files(&root, &pattern))
        .await
        .context("Resource collection task failed")?
        .with_context(|| format!("Failed to collect resources from {}", path.display()))?;

    let files = classify(sources);
    let binary = files.iter().filter(|f| f.is_binary()).count();

    println!(
        "Target: BSP container {} ({}) in package {}, language {}",
        normalized.ui5.bsp_container,
        normalized.ui5.bsp_container_text,
        normalized.ui5.package,
        normalized.ui5.language
    );
    println!("Transport: {}", select_strategy(normalized));
    println!(
        "Files: {} from {} ({} text, {} binary)",
        files.len(),
        path.display(),
        files.len() - binary,
        binary
    );
    for file in &files {
        println!("   {}", file);
    }
    Ok(())
}

/// Prompts user to select an operation
///
/// Returns the user's choice as String
fn prompt_choice() -> Result<String> {
    use std::io::{Write, stdin, stdout};

    println!("Select an operation:");
    println!("1. Check deployment settings (or type 'check')");
    println!("2. Plan deployment (or type 'plan')");
    print!("Enter your choice: ");
    stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok(input.trim().to_string())
}
