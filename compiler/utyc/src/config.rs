//! Run configuration.
//!
//! None of these settings change which violations are found; they choose
//! where tracing goes and how findings are rendered.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use uty_diagnostic::emitter::ColorMode;

use crate::ConfigError;

/// Environment variable selecting the trace sink.
pub const TRACE_ENV: &str = "UTY_TRACE";
/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "UTY_FORMAT";
/// Environment variable selecting the color mode.
pub const COLOR_ENV: &str = "UTY_COLOR";
/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "uty=info";

/// Where detection events and checker spans are mirrored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TraceSink {
    #[default]
    None,
    /// Indented span tree on stderr.
    Console,
    /// Plain (no ANSI) event lines appended to a file.
    File(PathBuf),
}

impl FromStr for TraceSink {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "off" => Ok(TraceSink::None),
            "console" => Ok(TraceSink::Console),
            other => match other.strip_prefix("file:") {
                Some("") => Err(ConfigError::EmptyTracePath),
                Some(path) => Ok(TraceSink::File(PathBuf::from(path))),
                None => Err(ConfigError::UnknownTraceSink(other.to_string())),
            },
        }
    }
}

impl fmt::Display for TraceSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSink::None => write!(f, "none"),
            TraceSink::Console => write!(f, "console"),
            TraceSink::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

/// Rendering of findings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parse `auto`, `always` or `never`.
pub fn parse_color_mode(s: &str) -> Result<ColorMode, ConfigError> {
    match s.trim() {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(ConfigError::UnknownColorMode(other.to_string())),
    }
}

/// Settings for one checker invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub trace: TraceSink,
    pub color: ColorMode,
    pub format: OutputFormat,
}

impl CheckConfig {
    /// Read `UTY_TRACE`, `UTY_FORMAT` and `UTY_COLOR`; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`CheckConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = CheckConfig::default();
        if let Some(value) = lookup(TRACE_ENV) {
            config.trace = value.parse()?;
        }
        if let Some(value) = lookup(FORMAT_ENV) {
            config.format = value.parse()?;
        }
        if let Some(value) = lookup(COLOR_ENV) {
            config.color = parse_color_mode(&value)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_trace(mut self, trace: TraceSink) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}
