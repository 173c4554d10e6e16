//! Uty driver.
//!
//! Glue between a host and the union type checker:
//!
//! - [`CheckConfig`]: trace sink, output format and color mode, read from
//!   `UTY_TRACE`, `UTY_FORMAT` and `UTY_COLOR`
//! - [`init_tracing`]: installs the configured sink once per process,
//!   keeping a subscriber the host already set
//! - [`check_unit`], [`check_units`], [`run`]: per-unit checking, in
//!   parallel across independent units
//! - [`emit_report`]: renders findings as text or JSON
//!
//! Configuration only affects observability and rendering. The set of
//! violations for a unit is the same under every setting.

mod config;
mod driver;
mod error;
mod trace;

pub use config::{
    parse_color_mode, CheckConfig, OutputFormat, TraceSink, COLOR_ENV, DEFAULT_FILTER, FORMAT_ENV,
    TRACE_ENV,
};
pub use driver::{check_unit, check_units, emit_report, emit_report_to_stderr, run};
pub use error::ConfigError;
pub use trace::init_tracing;
