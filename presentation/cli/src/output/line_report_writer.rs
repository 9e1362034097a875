use std::io::Write;
use std::sync::Mutex;

use business::domain::diagnostic::report::{Locale, ReportLine};
use business::domain::diagnostic::services::ReportWriter;

/// Renders each report line in the configured locale and writes it immediately.
pub struct LineReportWriter<W: Write + Send> {
    locale: Locale,
    out: Mutex<W>,
}

impl LineReportWriter<std::io::Stdout> {
    pub fn stdout(locale: Locale) -> Self {
        Self::new(locale, std::io::stdout())
    }
}

impl<W: Write + Send> LineReportWriter<W> {
    pub fn new(locale: Locale, out: W) -> Self {
        Self {
            locale,
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> ReportWriter for LineReportWriter<W> {
    fn write_line(&self, line: &ReportLine) {
        let rendered = line.render(self.locale);
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{}", rendered).and_then(|_| out.flush()) {
            tracing::error!("Failed to write report line: {}", e);
        }
    }
}
