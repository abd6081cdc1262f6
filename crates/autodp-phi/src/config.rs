//! Construction-time and logging configuration

use crate::tracing_support::{LogFormat, DEFAULT_FILTER};

/// Controls the checks applied when tensors are constructed, and the
/// subscriber installed by [`init_tracing`](crate::tracing_support::init_tracing).
///
/// # Examples
///
/// ```
/// use autodp_phi::PhiConfig;
///
/// let config = PhiConfig::new().with_check_shape(false).with_validate_bounds(true);
/// assert!(!config.check_shape);
/// assert!(config.validate_bounds);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhiConfig {
    /// Require every row of a row-entity tensor to share one shape
    pub check_shape: bool,
    /// Require `min_vals <= data <= max_vals` for every element on construction
    pub validate_bounds: bool,
    pub log_format: LogFormat,
    /// `tracing-subscriber` filter directive; `None` defers to `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for PhiConfig {
    fn default() -> Self {
        Self {
            check_shape: true,
            validate_bounds: false,
            log_format: LogFormat::default(),
            log_filter: None,
        }
    }
}

impl PhiConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from the environment:
    ///
    /// | variable                 | field             |
    /// |--------------------------|-------------------|
    /// | `AUTODP_CHECK_SHAPE`     | `check_shape`     |
    /// | `AUTODP_VALIDATE_BOUNDS` | `validate_bounds` |
    /// | `AUTODP_LOG_FORMAT`      | `log_format`      |
    /// | `AUTODP_LOG`             | `log_filter`      |
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            check_shape: env_flag("AUTODP_CHECK_SHAPE").unwrap_or(defaults.check_shape),
            validate_bounds: env_flag("AUTODP_VALIDATE_BOUNDS")
                .unwrap_or(defaults.validate_bounds),
            log_format: std::env::var("AUTODP_LOG_FORMAT")
                .ok()
                .and_then(|name| LogFormat::from_name(&name))
                .unwrap_or(defaults.log_format),
            log_filter: std::env::var("AUTODP_LOG").ok().or(defaults.log_filter),
        }
    }

    /// Set row shape checking
    pub fn with_check_shape(mut self, check: bool) -> Self {
        self.check_shape = check;
        self
    }

    /// Set bound validation
    pub fn with_validate_bounds(mut self, validate: bool) -> Self {
        self.validate_bounds = validate;
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_log_filter(mut self, directive: impl Into<String>) -> Self {
        self.log_filter = Some(directive.into());
        self
    }

    /// The filter directive the subscriber will use: `log_filter`, else
    /// `RUST_LOG`, else [`DEFAULT_FILTER`].
    pub fn log_directive(&self) -> String {
        self.log_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
