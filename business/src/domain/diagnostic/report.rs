use std::path::PathBuf;

/// Language of the printed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Turkish,
    English,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Turkish => write!(f, "tr"),
            Locale::English => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" => Ok(Locale::Turkish),
            "en" => Ok(Locale::English),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}

struct Labels {
    key_presence_suffix: &'static str,
    yes: &'static str,
    no: &'static str,
    reply: &'static str,
    failure: &'static str,
}

const TURKISH: Labels = Labels {
    key_presence_suffix: "var mı?",
    yes: "Evet",
    no: "Hayır",
    reply: "Model cevabı",
    failure: "Hata",
};

const ENGLISH: Labels = Labels {
    key_presence_suffix: "set?",
    yes: "Yes",
    no: "No",
    reply: "Model reply",
    failure: "Error",
};

const RUNTIME_LABEL: &str = "Rust";

impl Locale {
    fn labels(&self) -> &'static Labels {
        match self {
            Locale::Turkish => &TURKISH,
            Locale::English => &ENGLISH,
        }
    }
}

/// One printed line of the diagnostic, in output order.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    Runtime { executable_path: PathBuf },
    /// Carries only the presence flag, never the value.
    ApiKeyPresence { variable: String, present: bool },
    ModelReply { text: String },
    ApiFailure { kind: String, message: String },
}

impl ReportLine {
    pub fn render(&self, locale: Locale) -> String {
        let labels = locale.labels();
        match self {
            ReportLine::Runtime { executable_path } => {
                format!("{}: {}", RUNTIME_LABEL, executable_path.display())
            }
            ReportLine::ApiKeyPresence { variable, present } => {
                let answer = if *present { labels.yes } else { labels.no };
                format!("{} {}: {}", variable, labels.key_presence_suffix, answer)
            }
            ReportLine::ModelReply { text } => format!("{}: {}", labels.reply, text),
            ReportLine::ApiFailure { kind, message } => {
                format!("{}: {} - {}", labels.failure, kind, message)
            }
        }
    }
}
