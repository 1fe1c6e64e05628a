//! Scope guards for measured sections of work.

use std::time::{Duration, Instant};

use crate::Stopwatch;

/// Guard for one open trace scope.
///
/// Created by [`Stopwatch::measure()`] or [`SpanBuilder::begin()`]. Dropping
/// the guard closes the scope: the elapsed wall-clock time is computed, the
/// "finished in ..." line is emitted, and both indent counters are lowered.
/// Because the close runs from `Drop`, it runs on every exit path out of the
/// guarded block, including unwinding.
///
/// Guards on one stopwatch must be dropped in LIFO order, which ordinary
/// block scoping guarantees.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use trace_time::Stopwatch;
///
/// let watch = Stopwatch::new("IO");
/// let span = watch.measure("read-file");
///
/// // The elapsed time can be read mid-scope without closing it.
/// assert!(span.elapsed() < Duration::from_secs(1));
///
/// drop(span); // "finished in ..." is emitted here.
/// ```
///
/// [`SpanBuilder::begin()`]: crate::SpanBuilder::begin
#[derive(Debug)]
#[must_use = "the scope is measured until the span is dropped"]
pub struct Span<'a> {
    watch: &'a Stopwatch,
    label: Option<String>,
    color: String,
    started: Instant,
}

impl<'a> Span<'a> {
    pub(crate) fn begin(
        watch: &'a Stopwatch,
        label: Option<String>,
        color: String,
        skip_start: bool,
    ) -> Self {
        let started = Instant::now();
        watch.open_scope(label.as_deref(), &color, skip_start);

        Self {
            watch,
            label,
            color,
            started,
        }
    }

    /// Wall-clock time elapsed since this span was opened.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for Span<'_> {
    fn drop(&mut self) {
        let closed = self
            .watch
            .close_scope(self.label.as_deref(), &self.color, self.started);

        // Unreachable through the guard discipline. Never escalate out of a
        // drop on the caller's unwind path.
        debug_assert!(closed.is_ok(), "span dropped with no open scope");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::TraceContext;

    fn quiet_watch() -> Stopwatch {
        Stopwatch::with_context("test", Arc::new(TraceContext::new())).verbose(false)
    }

    #[test]
    fn elapsed_grows_while_open() {
        let watch = quiet_watch();
        let span = watch.measure("grow");

        let first = span.elapsed();
        thread::sleep(Duration::from_millis(2));
        let second = span.elapsed();

        assert!(second > first);
    }

    #[test]
    fn drop_lowers_both_counters() {
        let watch = quiet_watch();

        {
            let _span = watch.measure("scoped");
            assert_eq!(watch.open_scopes(), 1);
            assert_eq!(watch.context().depth(), 1);
        }

        assert_eq!(watch.open_scopes(), 0);
        assert_eq!(watch.context().depth(), 0);
    }

    #[test]
    fn drop_runs_on_unwind() {
        let context = Arc::new(TraceContext::new());

        let panicked = std::panic::catch_unwind({
            let context = Arc::clone(&context);
            move || {
                let watch = Stopwatch::with_context("test", context).verbose(false);
                let _span = watch.measure("doomed");
                panic!("guarded code failed");
            }
        });

        assert!(panicked.is_err());
        // The guard closed the scope on the unwind path.
        assert_eq!(context.depth(), 0);
    }
}
