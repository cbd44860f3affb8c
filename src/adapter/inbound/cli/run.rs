//! Handler for the `run` command.

use std::path::PathBuf;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{output, render};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceKind;
use crate::infrastructure::factory::source::build_source;
use crate::infrastructure::runner::{export_report, unify_from_source};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    apply_overrides(&mut config, args, output::verbosity());
    config.validate()?;
    config.init_logging();

    print_startup(&config);

    let source = build_source(&config)?;
    let pb = output::spinner(&format!("Fetching listings from {}", source.name()));
    let report = match unify_from_source(source.as_ref(), &config).await {
        Ok(report) => {
            output::spinner_success(
                &pb,
                &format!(
                    "Unified {} listings into {} products",
                    report.summary.total_entries, report.summary.unique_products
                ),
            );
            report
        }
        Err(e) => {
            output::spinner_fail(&pb, "Unification failed");
            return Err(e);
        }
    };

    let exported = if args.no_export || config.export.formats.is_empty() {
        Vec::new()
    } else {
        let dir = PathBuf::from(&config.export.dir);
        export_report(&report, &config, &dir)?
    };

    render::report(&report, &exported);
    Ok(())
}

/// Fold command-line overrides into the loaded configuration.
///
/// `--input` and `--url` select their source kind unless `--source` names
/// one explicitly.
fn apply_overrides(config: &mut Config, args: &RunArgs, verbosity: u8) {
    if let Some(input) = &args.input {
        config.source.kind = SourceKind::File;
        config.source.path = Some(input.to_string_lossy().to_string());
    }
    if let Some(url) = &args.url {
        config.source.kind = SourceKind::Http;
        config.source.url = Some(url.clone());
    }
    if let Some(kind) = args.source {
        config.source.kind = kind;
    }

    if let Some(threshold) = args.threshold {
        config.unify.threshold = threshold;
    }
    if let Some(bonus) = args.confidence_bonus {
        config.unify.confidence_bonus = bonus;
    }
    if let Some(dir) = &args.output_dir {
        config.export.dir = dir.to_string_lossy().to_string();
    }

    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    } else if verbosity > 0 {
        config.logging.level = "debug".to_string();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
}

fn print_startup(config: &Config) {
    if output::is_json() || output::is_quiet() {
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Source", config.source.kind);
    match config.source.kind {
        SourceKind::Sample => {}
        SourceKind::File => {
            output::field("Input", config.source.path.as_deref().unwrap_or_default());
        }
        SourceKind::Http => {
            output::field("Endpoint", config.source.url.as_deref().unwrap_or_default());
        }
    }
    output::field("Threshold", config.unify.threshold);
    if output::verbosity() > 0 {
        output::field("Confidence bonus", config.unify.confidence_bonus);
    }
}
