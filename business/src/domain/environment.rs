use std::path::PathBuf;

/// Errors raised while inspecting the host process.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    #[error("environment.executable_path: {0}")]
    ExecutablePath(String),
}

/// Read-only view of the process environment.
///
/// Everything the diagnostic knows about its host goes through this port, so
/// tests can substitute fixed values instead of mutating the real environment.
pub trait EnvironmentProvider: Send + Sync {
    /// Absolute path of the running executable.
    fn executable_path(&self) -> Result<PathBuf, EnvironmentError>;

    /// Value of a variable, or `None` when it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// True when the variable is set to any non-empty value, unicode or not.
    ///
    /// The default only sees values `var` can return; adapters backed by raw OS
    /// strings override it.
    fn is_set(&self, name: &str) -> bool {
        self.var(name).is_some_and(|value| !value.is_empty())
    }
}
