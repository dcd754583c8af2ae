use clap::Parser;
use service_object::utils::{logger, validation::Validate};
use service_object::{BatchReport, CliConfig, InvocationReport, Runner, RunnerConfig, ServiceError};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting service-object {}", service_object::VERSION);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let batch = match run(&config) {
        Ok(batch) => batch,
        Err(e) => {
            tracing::error!("❌ Failed to start: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 先輸出已完成的結果，再回報中斷原因
    if let Err(e) = print_reports(&batch.reports, config.json) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Some(e) = batch.error {
        tracing::error!("❌ Service call failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Loads and validates the requested invocations, then runs them. Panics
/// captured on the safe path still pass through the default panic hook, so
/// a `thread '…' panicked at …` line on stderr next to a ❌ report is expected.
fn run(config: &CliConfig) -> Result<BatchReport, ServiceError> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading invocations from: {}", path);
            let batch = RunnerConfig::from_file(path)?;
            batch.validate()?;
            tracing::info!(
                "Running batch '{}' ({} invocations)",
                batch.name(),
                batch.invocations.len()
            );
            Ok(Runner::new(batch.stop_on_error()).run_all(&batch.invocations))
        }
        None => {
            config.validate()?;
            Ok(Runner::default().run_all(std::slice::from_ref(&config.invocation())))
        }
    }
}

fn print_reports(reports: &[InvocationReport], json: bool) -> Result<(), ServiceError> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for report in reports {
            println!("{}", report.summary());
        }
    }
    Ok(())
}
