//! Simplified example demonstrating key `trace_time` types working together.
//!
//! This example shows how to use the main types in the `trace_time` package:
//! - `Stopwatch`: A named measurement channel with nested scope support
//! - `Span`: Scope guard that logs elapsed time when dropped
//! - `SpanBuilder`: Staging a label, a color, or a suppressed start line
//!
//! Run with: `cargo run --example trace_time_basic`.

use std::thread;
use std::time::Duration;

use trace_time::Stopwatch;

fn main() {
    // One stopwatch per subsystem being profiled. Both share the
    // process-wide context, so their interleaved output lines up.
    let io = Stopwatch::new("IO");
    let parser = Stopwatch::new("Parser");

    io.log("ready");

    {
        let _load = io.measure("load-config");
        thread::sleep(Duration::from_millis(15));

        {
            let _parse = parser.span().label("parse-config").color("green").begin();
            thread::sleep(Duration::from_millis(10));
            parser.log("12 sections");
        }

        // A scope that announces only its completion.
        {
            let _validate = io.span().label("validate").skip_start().begin();
            thread::sleep(Duration::from_millis(5));
        }
    }

    io.log_colored("all done", "cyan");
}
