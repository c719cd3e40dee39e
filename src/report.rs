//! Timing sample conversion and report rendering
//!
//! The runner hands over four raw 64-bit counters in 100-nanosecond ticks;
//! this module converts them to millisecond-precision durations and renders
//! the three-line `real`/`system`/`user` report. The report goes to stderr
//! so piping the child's stdout stays clean.

use std::io::Write;
use std::time::Duration;

/// 100 ns ticks per millisecond.
const TICKS_PER_MILLI: u64 = 10_000;

/// Raw timing counters captured once, immediately after the child exits.
///
/// Creation and exit are instants in ticks from a shared monotonic origin;
/// kernel and user are accumulated CPU-time durations, already absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub creation_ticks: u64,
    pub exit_ticks: u64,
    pub kernel_ticks: u64,
    pub user_ticks: u64,
}

impl TimingSample {
    /// Wall-clock elapsed time, truncated to whole milliseconds.
    pub fn real_millis(&self) -> u64 {
        (self.exit_ticks - self.creation_ticks) / TICKS_PER_MILLI
    }

    /// Kernel-mode CPU time, truncated to whole milliseconds.
    pub fn system_millis(&self) -> u64 {
        self.kernel_ticks / TICKS_PER_MILLI
    }

    /// User-mode CPU time, truncated to whole milliseconds.
    pub fn user_millis(&self) -> u64 {
        self.user_ticks / TICKS_PER_MILLI
    }

    /// Render the fixed three-line report.
    pub fn render(&self) -> String {
        format!(
            "{}{}{}",
            line("real", self.real_millis()),
            line("system", self.system_millis()),
            line("user", self.user_millis())
        )
    }
}

/// One report line: label padded to 8 columns, then `seconds.millis` with
/// the millisecond part zero-padded to exactly 3 digits.
fn line(label: &str, millis: u64) -> String {
    format!("{:<8}{}.{:03}\n", label, millis / 1000, millis % 1000)
}

/// Convert a monotonic duration to 100 ns ticks.
pub fn ticks_from_duration(duration: Duration) -> u64 {
    (duration.as_nanos() / 100) as u64
}

/// Convert a CPU-time value in seconds + microseconds to 100 ns ticks.
pub fn ticks_from_timeval(seconds: i64, microseconds: i64) -> u64 {
    (seconds as u64) * 10_000_000 + (microseconds as u64) * 10
}

/// Write the report to stderr.
pub fn print(sample: &TimingSample) {
    // A failed write to stderr leaves nothing to report to
    let _ = std::io::stderr().write_all(sample.render().as_bytes());
}
