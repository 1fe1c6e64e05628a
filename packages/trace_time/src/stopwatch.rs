//! The measurement channel at the heart of the crate.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{Result, UnderflowError};
use crate::paint::{self, UNCHANGED};
use crate::{Sink, Span, SpanBuilder, TraceContext};

/// A named measurement channel that logs elapsed wall-clock time for nested
/// sections of work.
///
/// Create one stopwatch per logical channel being profiled (one per
/// subsystem, say) and keep it around; it can be reused indefinitely across
/// independent or nested scopes. Every line it emits carries a timestamp
/// relative to the shared [`TraceContext`] epoch, an indent that follows the
/// channel's own nesting depth, and a secondary depth marker showing how
/// deep *other* channels on the same context are nested.
///
/// A stopwatch assumes a single logical thread of control; it is `!Sync` by
/// construction. See the crate-level documentation for the threading model.
///
/// # Examples
///
/// ```
/// use trace_time::Stopwatch;
///
/// let watch = Stopwatch::new("IO");
/// watch.log("ready");
///
/// {
///     let _span = watch.measure("read-file");
///     // Work to be measured goes here.
/// } // "finished in ..." is emitted here.
/// ```
///
/// Mirroring output to a sink:
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use trace_time::Stopwatch;
///
/// let captured: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
/// let watch = Stopwatch::new("IO")
///     .verbose(false)
///     .sink(Arc::<Mutex<Vec<u8>>>::clone(&captured));
///
/// watch.log("sink only");
/// assert!(!captured.lock().unwrap().is_empty());
/// ```
pub struct Stopwatch {
    channel: String,
    context: Arc<TraceContext>,
    sink: Option<Arc<dyn Sink>>,
    verbose: bool,
    open_scopes: Cell<usize>,
}

impl Stopwatch {
    /// Creates a stopwatch on the process-wide [`TraceContext`], printing to
    /// stdout, with no sink.
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self::with_context(channel, TraceContext::process_wide())
    }

    /// Creates a stopwatch on an explicitly provided context.
    ///
    /// Stopwatches sharing one context share the depth marker and the
    /// timestamp epoch. Tests should pass a fresh context so that scopes
    /// left open by one test can never skew another test's output.
    #[must_use]
    pub fn with_context(channel: impl Into<String>, context: Arc<TraceContext>) -> Self {
        Self {
            channel: channel.into(),
            context,
            sink: None,
            verbose: true,
            open_scopes: Cell::new(0),
        }
    }

    /// Mirrors every emitted line to `sink` in addition to stdout.
    ///
    /// The sink is shared and externally owned: the stopwatch only appends
    /// lines and never flushes or closes it.
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Controls whether lines are printed to stdout. Defaults to true.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Name identifying this channel in output.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Number of spans currently open on this stopwatch.
    #[must_use]
    pub fn open_scopes(&self) -> usize {
        self.open_scopes.get()
    }

    /// The context this stopwatch shares with its sibling channels.
    #[must_use]
    pub fn context(&self) -> &Arc<TraceContext> {
        &self.context
    }

    /// Emits a plain one-shot line at the current indent.
    ///
    /// Touches neither the local nor the shared depth counter.
    pub fn log(&self, message: &str) {
        self.log_colored(message, UNCHANGED);
    }

    /// Emits a plain one-shot line in the named color.
    ///
    /// Accepts the names understood by [`render`](crate::render);
    /// unrecognized names leave the line unstyled.
    pub fn log_colored(&self, message: &str, color: &str) {
        let text = format!("{}# {}: {message}", self.indent_markers(), self.channel);
        self.emit(&text, color);
    }

    /// Opens a labeled measured scope. Shorthand for
    /// `span().label(label).begin()`.
    ///
    /// The returned [`Span`] closes the scope when dropped, on every exit
    /// path including unwinding.
    pub fn measure(&self, label: impl Into<String>) -> Span<'_> {
        self.span().label(label).begin()
    }

    /// Returns a builder for a measured scope with an optional label, color,
    /// and start-line suppression.
    pub fn span(&self) -> SpanBuilder<'_> {
        SpanBuilder::new(self)
    }

    pub(crate) fn open_scope(&self, label: Option<&str>, color: &str, skip_start: bool) {
        if !skip_start {
            let text = format!(
                "{}> {}:{} starting...",
                self.indent_markers(),
                self.channel,
                label.map(|label| format!(" {label}")).unwrap_or_default(),
            );
            self.emit(&text, color);
        }

        self.open_scopes.set(self.open_scopes.get().saturating_add(1));
        self.context.raise();
    }

    /// Closes the innermost scope and emits its "finished in ..." line.
    ///
    /// Underflow is checked before either counter is touched, so a violated
    /// nesting discipline cannot corrupt shared state.
    pub(crate) fn close_scope(
        &self,
        label: Option<&str>,
        color: &str,
        started: Instant,
    ) -> Result<()> {
        let Some(remaining) = self.open_scopes.get().checked_sub(1) else {
            return Err(UnderflowError {
                channel: self.channel.clone(),
            });
        };

        self.open_scopes.set(remaining);
        self.context.lower();

        let elapsed = started.elapsed();
        let text = format!(
            "{}< {}:{} finished in {elapsed:?}",
            self.indent_markers(),
            self.channel,
            label.map(|label| format!(" {label}")).unwrap_or_default(),
        );
        self.emit(&text, color);

        Ok(())
    }

    fn indent_markers(&self) -> String {
        "> ".repeat(self.open_scopes.get())
    }

    /// The output pipeline shared by one-shot lines and scope lines:
    /// timestamp prefix, depth marker, color, stdout, then sink.
    fn emit(&self, text: &str, color: &str) {
        let depth = self.context.depth().saturating_sub(self.open_scopes.get());
        let line = format!(
            "[{:?}] {}{text}",
            self.context.since_epoch(),
            "- ".repeat(depth),
        );
        let line = paint::render(&line, color);

        if self.verbose {
            print_line(&line);
        }

        if let Some(sink) = &self.sink {
            sink.append_line(&line);
        }
    }
}

#[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
fn print_line(line: &str) {
    println!("{line}");
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stopwatch")
            .field("channel", &self.channel)
            .field("verbose", &self.verbose)
            .field("open_scopes", &self.open_scopes.get())
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
