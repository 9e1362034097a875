use std::sync::Arc;

use business::domain::diagnostic::use_cases::run::RunDiagnosticUseCase;
use business::domain::environment::EnvironmentProvider;
use dotenvy::dotenv;
use environment::ProcessEnvironment;

mod config;
mod output;
mod setup;

use config::app_config::AppConfig;
use output::line_report_writer::LineReportWriter;
use setup::dependency_injection::DependencyContainer;

/// OpenAI connectivity diagnostic.
///
/// Prints the executable path and whether an API key is configured, then sends
/// one chat completion request and prints the reply or the failure. An API
/// failure is part of the report, so the process still exits successfully.
///
/// - config/: Configuration read through the `EnvironmentProvider` port
/// - setup/: Dependency wiring
/// - output/: Report line printing
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr so stdout holds only the report
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let environment: Arc<dyn EnvironmentProvider> = Arc::new(ProcessEnvironment);
    let config = AppConfig::from_environment(environment.as_ref())?;

    // 4. Wire dependencies
    let writer = Arc::new(LineReportWriter::stdout(config.diagnostic.locale));
    let container = DependencyContainer::new(&config, environment, writer);

    // 5. Run the diagnostic
    container
        .run_diagnostic
        .execute(config.diagnostic.params())
        .await?;

    Ok(())
}
