//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceKind;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!(
        "2. Run: edgematch config validate -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: edgematch run -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
///
/// A missing file shows the built-in defaults.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "unify": {
                "threshold": config.unify.threshold,
                "confidence_bonus": config.unify.confidence_bonus,
            },
            "source": {
                "kind": config.source.kind.to_string(),
                "path": config.source.path,
                "url": config.source.url,
                "timeout_secs": config.source.timeout_secs,
                "retry_max_attempts": config.source.retry_max_attempts,
                "retry_backoff_ms": config.source.retry_backoff_ms,
            },
            "export": {
                "dir": config.export.dir,
                "formats": format_names(&config),
                "split_by_site": config.export.split_by_site,
            },
            "logging": {
                "level": config.logging.level,
                "format": config.logging.format,
            },
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, showing defaults)");
    }

    output::section("Unify");
    output::field("Threshold", config.unify.threshold);
    output::field("Confidence bonus", config.unify.confidence_bonus);

    output::section("Source");
    output::field("Kind", config.source.kind);
    match config.source.kind {
        SourceKind::Sample => {}
        SourceKind::File => {
            output::field("Path", config.source.path.as_deref().unwrap_or_default());
        }
        SourceKind::Http => {
            output::field("URL", config.source.url.as_deref().unwrap_or_default());
            output::field("Timeout", format!("{}s", config.source.timeout_secs));
            output::field("Attempts", config.source.retry_max_attempts);
            output::field("Backoff", format!("{}ms", config.source.retry_backoff_ms));
        }
    }

    output::section("Export");
    output::field("Directory", &config.export.dir);
    let formats = format_names(&config);
    if formats.is_empty() {
        output::note("(export disabled)");
    } else {
        output::field("Formats", formats.join(", "));
    }
    output::field("Split by site", config.export.split_by_site);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    let warnings = warnings(&config);
    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field(
        "Next",
        format!("edgematch config show -c {}", path.display()),
    );

    Ok(())
}

/// Settings that are valid but probably not what the user wants.
fn warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();
    if config.unify.threshold == 0.0 {
        warnings.push("threshold 0 merges every listing into a single product".to_string());
    }
    if config.unify.threshold == 1.0 {
        warnings.push("threshold 1 only links names with identical token sets".to_string());
    }
    if config.export.formats.is_empty() {
        warnings.push("no export formats configured; reports will not be written".to_string());
    }
    warnings
}

fn format_names(config: &Config) -> Vec<&'static str> {
    use crate::infrastructure::config::export::ExportFormat;

    config
        .export
        .formats
        .iter()
        .map(|format| match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        })
        .collect()
}
