//! Validate fund records from JSON files

use anyhow::{bail, Context, Result};
use compliance_core::{ComplianceRecord, ComplianceValidator, Config};
use std::io::Write;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: compliance-check <record.json>...");
    }

    // Load configuration
    let config = if let Ok(config_path) = std::env::var("COMPLIANCE_CONFIG") {
        tracing::info!("Loading config from: {}", config_path);
        Config::from_file(&config_path)
            .with_context(|| format!("failed to load config {}", config_path))?
    } else {
        Config::from_env()?
    };

    let validator = ComplianceValidator::from_config(&config)?;

    let stdout = std::io::stdout();
    let non_compliant = check_records(&validator, &paths, &mut stdout.lock())?;
    tracing::info!(
        "Checked {} record(s), {} non-compliant",
        paths.len(),
        non_compliant
    );
    Ok(())
}

/// Validate each record file, writing every result and then the report to `out`.
/// Returns the number of non-compliant records.
fn check_records<W: Write>(
    validator: &ComplianceValidator,
    paths: &[String],
    out: &mut W,
) -> Result<usize> {
    let mut non_compliant = 0;

    for path in paths {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
        let record = ComplianceRecord::from_json_str(&content)
            .with_context(|| format!("failed to parse {}", path))?;

        let result = validator.validate_compliance(&record);
        if !result.is_compliant {
            tracing::warn!("{}: {} violation(s)", path, result.violations.len());
            non_compliant += 1;
        }
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    }

    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&validator.generate_compliance_report())?
    )?;
    Ok(non_compliant)
}
