//! Append-line targets that mirror emitted trace lines.

use std::io::Write;
use std::sync::Mutex;

/// An append-line target mirrored by a stopwatch's output pipeline.
///
/// The sink is shared and externally owned: the stopwatch appends lines and
/// nothing else. It never seeks, flushes, or closes the sink, and the caller
/// may keep writing to it independently.
///
/// Appending is best-effort. A failing sink must swallow the failure rather
/// than let it escalate into the measured code's own error path, and it never
/// prevents the stdout path from running (the pipeline writes to stdout
/// first).
pub trait Sink {
    /// Appends one formatted line.
    fn append_line(&self, line: &str);
}

/// Any mutex-guarded writer works as a sink, which covers files, buffers,
/// and `Vec<u8>` captures in tests.
impl<W: Write> Sink for Mutex<W> {
    fn append_line(&self, line: &str) {
        if let Ok(mut writer) = self.lock() {
            // Best-effort: a failed write never disturbs the measured code.
            drop(writeln!(writer, "{line}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn mutex_writer_appends_line_with_newline() {
        let sink: Mutex<Vec<u8>> = Mutex::new(Vec::new());

        sink.append_line("first");
        sink.append_line("second");

        let written = sink.into_inner().expect("sink mutex poisoned");
        assert_eq!(written, b"first\nsecond\n");
    }

    #[test]
    fn failing_writer_does_not_panic() {
        struct BrokenWriter;

        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("broken"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::other("broken"))
            }
        }

        let sink = Mutex::new(BrokenWriter);

        sink.append_line("lost");
    }
}
