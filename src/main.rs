use anyhow::Context;
use clap::Parser;
use csv_merger::utils::{logger, validation::Validate};
use csv_merger::{render, CliConfig, LocalStorage, MergeOutcome, MergePipeline};
use std::io::Write;

/// Exit code when redefinitions stop the merge.
const CONFLICT_EXIT_CODE: i32 = 2;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting csv-merger in {:?} mode", config.mode);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let storage = config
        .base_dir
        .as_deref()
        .map_or_else(LocalStorage::default, LocalStorage::new);
    let format = config.format;
    let pipeline = MergePipeline::new(storage, config);

    let outcome = match pipeline.run() {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("❌ Merge failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let rendered = render(&outcome, format).context("failed to render merge result")?;
    let mut stdout = std::io::stdout().lock();
    if !rendered.is_empty() {
        writeln!(stdout, "{}", rendered).context("failed to write merge result")?;
    }
    stdout.flush().context("failed to write merge result")?;

    if let MergeOutcome::Conflicts(report) = outcome {
        tracing::warn!("Merge aborted: {} redefinitions", report.len());
        drop(stdout);
        std::process::exit(CONFLICT_EXIT_CODE);
    }

    Ok(())
}
