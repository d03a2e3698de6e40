//! qltest - Main Entry Point
//!
//! Runs a suite file against the endpoint configured in the environment:
//!
//! ```text
//! QLTEST_URL=http://localhost:8080/ qltest suite.yaml
//! ```
//!
//! Exits with 0 when every test matched, 1 when a test was rejected and 2
//! when the harness or the suite could not be set up.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use qltest_application::ports::EventLog;
use qltest_domain::LogCategory;
use qltest_infrastructure::{HarnessConfig, load_suite};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}

async fn run() -> Result<bool, Box<dyn Error>> {
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .ok_or("usage: qltest <suite-file>")?
        .into();

    let config = HarnessConfig::from_env()?;
    let harness = config.build_harness()?;
    let cases = load_suite(&path).await?;

    tracing::info!(
        "Running {} test(s) from {} against {}",
        cases.len(),
        path.display(),
        harness.url()
    );

    let report = harness.run_report(&cases).await;
    match report.failure() {
        None => harness.log().record(
            LogCategory::Successful,
            &format!("TESTS SUCCESSFUL ({}/{})", report.passed(), report.total),
        ),
        Some((name, error)) => harness.log().record(
            LogCategory::Failure,
            &format!(
                "TESTS FAILURE at \"{name}\" ({} passed, {} skipped):\n{error}",
                report.passed(),
                report.skipped()
            ),
        ),
    }

    Ok(report.all_passed())
}
