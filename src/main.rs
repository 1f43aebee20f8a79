//! SMAA XMCDA command line entry point
//!
//! Reads `alternatives.xml`, `criteria.xml` and `performanceTable.xml` from the
//! input directory and writes the four result documents to the output directory.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smaa_xmcda::adapters::ProcessAcceptabilityEngine;
use smaa_xmcda::application::{RunAnalysisCommand, RunAnalysisHandler};
use smaa_xmcda::config::{AppConfig, LoggingConfig};

/// SMAA XMCDA CLI
#[derive(Parser)]
#[command(name = "smaa-xmcda")]
#[command(about = "Run SMAA-2 acceptability analysis on XMCDA 2.0 documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding alternatives.xml, criteria.xml and performanceTable.xml
    #[arg(short = 'i', long)]
    input_dir: PathBuf,

    /// Directory receiving the result documents
    #[arg(short = 'o', long)]
    output_dir: PathBuf,

    /// Override the configured simulation iteration count
    #[arg(long, env = "SMAA_XMCDA_ITERATIONS")]
    iterations: Option<u32>,
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    let env_filter = logging.env_filter().map_err(|e| e.to_string())?;

    if logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("smaa-xmcda: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(iterations) = cli.iterations {
        config.engine.iterations = iterations;
    }

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("smaa-xmcda: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        eprintln!("smaa-xmcda: {e}");
        return ExitCode::FAILURE;
    }

    let engine = ProcessAcceptabilityEngine::new(config.engine.command())
        .with_args(config.engine.args_list());
    let handler = RunAnalysisHandler::new(Arc::new(engine));

    let cmd = RunAnalysisCommand::new(cli.input_dir, cli.output_dir)
        .with_iterations(config.engine.iterations);
    match handler.handle(cmd).await {
        Ok(result) => {
            info!(
                alternatives = result.alternatives,
                criteria = result.criteria,
                documents = result.written.len(),
                "Analysis complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Analysis failed");
            eprintln!("smaa-xmcda: {e}");
            ExitCode::FAILURE
        }
    }
}
