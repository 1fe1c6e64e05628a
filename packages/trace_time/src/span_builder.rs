//! Builder for opening trace spans with staged metadata.

use crate::paint::UNCHANGED;
use crate::{Span, Stopwatch};

/// Builder for opening a trace span with an optional label, a color, and an
/// optionally suppressed start line.
///
/// All staged metadata travels with the [`Span`] guard this builder returns,
/// so nothing staged for one scope can leak into the next one.
///
/// # Examples
///
/// ```
/// use trace_time::Stopwatch;
///
/// let watch = Stopwatch::new("IO");
///
/// // Fully staged scope.
/// {
///     let _span = watch.span().label("flush").color("yellow").begin();
///     // Work to be measured goes here.
/// }
///
/// // Bare scope - no label, default color.
/// {
///     let _span = watch.span().begin();
/// }
/// ```
#[derive(Debug)]
#[must_use]
pub struct SpanBuilder<'a> {
    watch: &'a Stopwatch,
    label: Option<String>,
    color: String,
    skip_start: bool,
}

impl<'a> SpanBuilder<'a> {
    pub(crate) fn new(watch: &'a Stopwatch) -> Self {
        Self {
            watch,
            label: None,
            color: UNCHANGED.to_string(),
            skip_start: false,
        }
    }

    /// Labels the scope; the label appears on both the starting and the
    /// finished line.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Colors the scope's lines. Accepts the names understood by
    /// [`render`](crate::render); unrecognized names leave the lines
    /// unstyled.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Suppresses the "starting..." line for this scope. The finished line
    /// is always emitted.
    pub fn skip_start(mut self) -> Self {
        self.skip_start = true;
        self
    }

    /// Opens the scope: records the start instant, emits the starting line
    /// unless suppressed, and raises both indent counters.
    pub fn begin(self) -> Span<'a> {
        Span::begin(self.watch, self.label, self.color, self.skip_start)
    }
}
