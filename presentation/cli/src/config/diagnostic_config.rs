use business::domain::diagnostic::report::Locale;
use business::domain::diagnostic::use_cases::run::RunDiagnosticParams;
use business::domain::environment::EnvironmentProvider;

/// What the diagnostic sends and how it prints.
#[derive(Debug, Clone)]
pub struct DiagnosticConfig {
    pub locale: Locale,
    pub params: RunDiagnosticParams,
}

impl DiagnosticConfig {
    /// Environment variables:
    /// - DIAGNOSTIC_LOCALE: "tr" or "en" (default: "tr")
    pub fn from_environment(env: &dyn EnvironmentProvider) -> Self {
        let locale = match env.var("DIAGNOSTIC_LOCALE") {
            None => Locale::default(),
            Some(raw) => raw.parse::<Locale>().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, Locale::default());
                Locale::default()
            }),
        };

        Self {
            locale,
            params: RunDiagnosticParams::default(),
        }
    }

    pub fn params(&self) -> RunDiagnosticParams {
        self.params.clone()
    }
}
