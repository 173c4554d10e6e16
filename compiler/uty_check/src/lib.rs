//! Union type compatibility checker.
//!
//! A type alias tagged `@UnionType([A, B, ...])` declares a closed set of
//! allowed shapes. Every value bound to a slot of that type must conform to
//! at least one of them:
//!
//! - a function literal must match the parameter list of a function-shape
//!   alternative (see [`matcher::signature`])
//! - an object construction must name a class that explicitly implements a
//!   capability alternative (see [`matcher::conformance`])
//!
//! # Architecture
//!
//! ```text
//! Module + ExprArena
//!     └── UnionChecker (single tree-order walk, `Visitor`)
//!         ├── CheckContext
//!         │   ├── UnionRegistry (unions + function shapes)
//!         │   ├── checked offsets (de-duplication)
//!         │   └── Reporter (count, log, optional ViolationSink)
//!         └── DeclIndex (classes and functions of the unit)
//! ```
//!
//! A union alias is only visible to usage sites that come after it in tree
//! order; there is no separate collection pass.

mod check;
mod context;
mod decls;
pub mod matcher;
mod output;
mod registry;
mod report;
mod signature;

pub use check::{check_module, check_module_with_sink, check_unit, UnionChecker};
pub use context::CheckContext;
pub use decls::{CallTarget, DeclIndex};
pub use output::CheckResult;
pub use registry::UnionRegistry;
pub use report::{Reporter, Violation, ViolationSink};
pub use signature::{Signature, WILDCARD};
