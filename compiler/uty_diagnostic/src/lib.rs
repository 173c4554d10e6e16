//! Diagnostic system for union type findings.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (which alternatives were allowed)
//!
//! The checker produces plain violation records; hosts that want rendered
//! warnings convert them into [`Diagnostic`]s and pass them to an
//! [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
