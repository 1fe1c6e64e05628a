//! Nested wall-clock time tracing with indentation-aligned log output.
//!
//! This package provides a [`Stopwatch`] that measures and logs elapsed
//! wall-clock time for nested sections of work, producing human-readable
//! trace lines whose indentation follows the nesting depth.
//!
//! The core functionality includes:
//! - [`Stopwatch`] - A named measurement channel with nested scope support
//! - [`Span`] - Scope guard that logs elapsed time when dropped
//! - [`SpanBuilder`] - Builder for opening spans with a label, color, or
//!   suppressed start line
//! - [`TraceContext`] - Process-wide depth counter and epoch shared by
//!   independently-created stopwatches
//! - [`Sink`] - Append-line target that mirrors emitted lines
//!
//! This package is meant for ad-hoc performance and diagnostic logging
//! inside a larger program, not as a metrics-collection backend.
//!
//! # Simple usage
//!
//! ```
//! use trace_time::Stopwatch;
//!
//! let watch = Stopwatch::new("IO");
//!
//! // A plain one-shot line.
//! watch.log("ready");
//!
//! // A measured scope.
//! {
//!     let _span = watch.measure("read-file");
//!     // Work to be measured goes here.
//! } // The "finished in ..." line is emitted here.
//! ```
//!
//! # Nesting
//!
//! Spans nest arbitrarily; each open span on a stopwatch shifts that
//! stopwatch's lines one indent level to the right:
//!
//! ```
//! use trace_time::Stopwatch;
//!
//! let watch = Stopwatch::new("Parser");
//! {
//!     let _outer = watch.measure("parse-module");
//!     {
//!         let _inner = watch.measure("parse-function");
//!         watch.log("42 tokens");
//!     }
//! }
//! ```
//!
//! # Labels, colors, and suppressed start lines
//!
//! The builder returned by [`Stopwatch::span()`] stages metadata for the
//! scope it opens:
//!
//! ```
//! use trace_time::Stopwatch;
//!
//! let watch = Stopwatch::new("Cache");
//! {
//!     let _span = watch.span().label("warmup").color("green").begin();
//!     // ...
//! }
//!
//! // Only the "finished in ..." line is emitted for this one.
//! {
//!     let _span = watch.span().label("evict").skip_start().begin();
//!     // ...
//! }
//! ```
//!
//! # Multiple channels
//!
//! Stopwatches created with [`Stopwatch::new()`] share one process-wide
//! [`TraceContext`], so interleaved output from several channels carries a
//! secondary depth marker showing how deep the *other* channels are nested.
//! Tests should instead inject a fresh context with
//! [`Stopwatch::with_context()`] to stay independent of each other.
//!
//! # Threading
//!
//! A stopwatch is a single-threaded object (`!Sync`); each instance assumes
//! one logical thread of control. Stopwatches on different threads may share
//! a [`TraceContext`]: the shared depth counter is atomic, and a racy
//! interleaving can only garble the cosmetic depth marker, never a measured
//! duration.

mod context;
mod error;
mod paint;
mod sink;
mod span;
mod span_builder;
mod stopwatch;

pub use context::TraceContext;
pub use error::UnderflowError;
pub use paint::{UNCHANGED, render};
pub use sink::Sink;
pub use span::Span;
pub use span_builder::SpanBuilder;
pub use stopwatch::Stopwatch;
