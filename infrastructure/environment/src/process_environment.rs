use std::path::PathBuf;

use business::domain::environment::{EnvironmentError, EnvironmentProvider};

/// `EnvironmentProvider` backed by the real process environment.
pub struct ProcessEnvironment;

impl EnvironmentProvider for ProcessEnvironment {
    fn executable_path(&self) -> Result<PathBuf, EnvironmentError> {
        std::env::current_exe().map_err(|e| EnvironmentError::ExecutablePath(e.to_string()))
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    /// Checks the raw OS value, so a non-empty value that is not valid unicode still counts.
    fn is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some_and(|value| !value.is_empty())
    }
}
