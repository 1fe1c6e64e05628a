//! Process-wide trace state shared by independently-created stopwatches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Depth counter and epoch shared by every [`Stopwatch`] attached to it.
///
/// The depth counter is the sum of open spans across all attached
/// stopwatches; each stopwatch uses it to render a secondary depth marker so
/// that interleaved output from several channels stays visually
/// distinguishable. The epoch is the reference point for the absolute
/// timestamp stamped on every line.
///
/// [`Stopwatch::new()`] attaches to the lazily-created process-wide context,
/// so independently-created stopwatches line up by default. Tests should
/// construct a fresh context and pass it to [`Stopwatch::with_context()`] to
/// avoid cross-test contamination.
///
/// The counter uses relaxed atomics: when stopwatches on different threads
/// share a context, an unlucky interleaving can garble the cosmetic depth
/// marker but never an elapsed-time measurement, since every measurement
/// lives in its own span.
///
/// [`Stopwatch`]: crate::Stopwatch
/// [`Stopwatch::new()`]: crate::Stopwatch::new
/// [`Stopwatch::with_context()`]: crate::Stopwatch::with_context
#[derive(Debug)]
pub struct TraceContext {
    epoch: Instant,
    depth: AtomicUsize,
}

impl TraceContext {
    /// Creates a new context with depth zero and an epoch of "now".
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            depth: AtomicUsize::new(0),
        }
    }

    /// Returns the process-wide context, creating it on first use.
    ///
    /// The epoch of this context is captured at the first call, so timestamps
    /// on lines from every default-constructed stopwatch count from the same
    /// reference point.
    #[must_use]
    pub fn process_wide() -> Arc<Self> {
        static PROCESS_WIDE: OnceLock<Arc<TraceContext>> = OnceLock::new();

        Arc::clone(PROCESS_WIDE.get_or_init(|| Arc::new(Self::new())))
    }

    /// Total number of spans currently open across all attached stopwatches.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }

    /// Wall-clock time elapsed since this context was created.
    #[must_use]
    pub fn since_epoch(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub(crate) fn raise(&self) {
        self.depth.fetch_add(1, Ordering::Relaxed);
    }

    /// Saturating decrement: a racing misuse must not wrap the counter into
    /// an absurd indent width.
    pub(crate) fn lower(&self) {
        let mut depth = self.depth.load(Ordering::Relaxed);

        while let Some(next) = depth.checked_sub(1) {
            match self
                .depth
                .compare_exchange_weak(depth, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return,
                Err(current) => depth = current,
            }
        }
    }
}

impl Default for TraceContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn starts_at_depth_zero() {
        let context = TraceContext::new();
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn raise_and_lower_are_balanced() {
        let context = TraceContext::new();

        context.raise();
        context.raise();
        assert_eq!(context.depth(), 2);

        context.lower();
        assert_eq!(context.depth(), 1);

        context.lower();
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn lower_at_zero_saturates() {
        let context = TraceContext::new();

        context.lower();

        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn since_epoch_is_monotonic() {
        let context = TraceContext::new();

        let first = context.since_epoch();
        let second = context.since_epoch();

        assert!(second >= first);
    }

    #[test]
    fn process_wide_returns_the_same_context() {
        let first = TraceContext::process_wide();
        let second = TraceContext::process_wide();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn depth_is_shared_across_threads() {
        let context = Arc::new(TraceContext::new());

        let raiser = Arc::clone(&context);
        thread::spawn(move || raiser.raise())
            .join()
            .expect("raising thread panicked");

        assert_eq!(context.depth(), 1);
    }

    // The shared state is thread-safe even though stopwatches are not.
    static_assertions::assert_impl_all!(TraceContext: Send, Sync);
}
