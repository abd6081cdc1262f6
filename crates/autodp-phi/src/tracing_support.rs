//! Structured logging for owner-merging decisions
//!
//! Escalations, refused comparisons and row-wise dispatch are reported as
//! `tracing` events. [`init_tracing`] installs a `tracing-subscriber` sink
//! shaped by [`PhiConfig`]:
//!
//! - `log_format` (`AUTODP_LOG_FORMAT`): `pretty` (default), `compact` or `json`
//! - `log_filter` (`AUTODP_LOG`), else `RUST_LOG`, else [`DEFAULT_FILTER`]
//!
//! ```no_run
//! use autodp_phi::tracing_support::init_tracing;
//! use autodp_phi::PhiConfig;
//!
//! init_tracing(&PhiConfig::from_env()).unwrap();
//! ```
//!
//! Without the `tracing` feature every function here is a no-op.

use crate::config::PhiConfig;
use crate::entity::Entity;

/// Filter used when neither the configuration nor `RUST_LOG` names one.
pub const DEFAULT_FILTER: &str = "autodp_phi=info";

/// Layout of emitted log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    /// One line per event
    Compact,
    Json,
}

impl LogFormat {
    /// Case-insensitive lookup; unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// Only one subscriber can be installed per process; later calls fail.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: &PhiConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{
        fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
    };

    let filter = EnvFilter::try_new(config.log_directive())?;
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    };
    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()?;
    Ok(())
}

#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: &PhiConfig) -> anyhow::Result<()> {
    Ok(())
}

/// A binary operation merged several owners into a gamma result.
#[cfg(feature = "tracing")]
pub fn record_escalation(op: &str, entities: &[Entity]) {
    let names: Vec<&str> = entities.iter().map(Entity::name).collect();
    tracing::debug!(
        operation = op,
        entity_count = entities.len(),
        entities = ?names,
        "escalated_to_gamma"
    );
}

#[cfg(not(feature = "tracing"))]
pub fn record_escalation(_op: &str, _entities: &[Entity]) {}

/// A comparison spanning owners was refused.
#[cfg(feature = "tracing")]
pub fn record_refused_comparison(op: &str, lhs: &str, rhs: &str) {
    tracing::debug!(operation = op, lhs = lhs, rhs = rhs, "comparison_refused");
}

#[cfg(not(feature = "tracing"))]
pub fn record_refused_comparison(_op: &str, _lhs: &str, _rhs: &str) {}

/// An operation was applied row by row.
#[cfg(feature = "tracing")]
pub fn record_row_dispatch(op: &str, rows: usize, operand: &str) {
    tracing::trace!(operation = op, rows = rows, operand = operand, "row_dispatch");
}

#[cfg(not(feature = "tracing"))]
pub fn record_row_dispatch(_op: &str, _rows: usize, _operand: &str) {}
