//! Timed child execution
//!
//! Spawns the resolved executable with the child's own argv, blocks until it
//! terminates (the launcher's only synchronization point, with no timeout),
//! and captures the timing counters immediately afterwards.
//!
//! While the child runs the launcher must survive terminal interrupts: the
//! kernel delivers SIGINT/SIGQUIT to the whole foreground process group, so
//! the child sees them on its own and the launcher only has to stay alive
//! long enough to report. `SignalGuard` sets those two dispositions to
//! ignore for exactly the lifetime of the wait and restores the previous
//! dispositions on every exit path. Ignored dispositions survive fork and
//! exec, so the child resets them to default between fork and exec (the
//! POSIX `system()` arrangement) and keeps its normal interrupt behavior.
//! SIGTERM and SIGHUP keep their default disposition so orderly teardown
//! still works.

use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use anyhow::{Context, Result};
use nix::sys::resource::{getrusage, UsageWho};
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use tracing::debug;

use crate::cmdline::ChildCommand;
use crate::report::{ticks_from_duration, ticks_from_timeval, TimingSample};

/// Signals the launcher ignores while the child runs.
const HELD_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGQUIT];

/// Result of one timed child execution.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub sample: TimingSample,
    pub exit_code: i32,
}

/// Scoped signal-disposition override.
///
/// Installs ignore dispositions for [`HELD_SIGNALS`] and restores whatever
/// was there before when dropped. Ignoring means no handler code runs at
/// all, so there is no reentrancy to reason about.
pub struct SignalGuard {
    saved: Vec<(Signal, SigAction)>,
}

impl SignalGuard {
    pub fn install() -> Result<Self> {
        let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
        let mut guard = Self { saved: Vec::new() };
        for signal in HELD_SIGNALS {
            // On failure the partially built guard drops and restores the
            // dispositions already replaced.
            let previous = unsafe { sigaction(signal, &ignore) }
                .with_context(|| format!("installing {signal} handler"))?;
            guard.saved.push((signal, previous));
        }
        Ok(guard)
    }
}

impl Drop for SignalGuard {
    fn drop(&mut self) {
        for (signal, previous) in self.saved.drain(..) {
            // Nothing sensible to report if restoration fails at teardown
            let _ = unsafe { sigaction(signal, &previous) };
        }
    }
}

/// Run `program` with the child's argv and collect timing plus exit status.
///
/// The child keeps the name the user typed as its `argv[0]`; the resolved
/// path is only what the kernel executes. Stdio is inherited untouched.
pub fn run(program: &Path, child: &ChildCommand) -> Result<RunOutcome> {
    let _guard = SignalGuard::install()?;

    let mut command = Command::new(program);
    command.arg0(child.program()).args(child.args());
    unsafe {
        // The guard's ignore dispositions would otherwise survive exec and
        // leave the child deaf to terminal interrupts. Runs between fork
        // and exec; sigaction is async-signal-safe.
        command.pre_exec(|| {
            let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());
            for signal in HELD_SIGNALS {
                unsafe { sigaction(signal, &default) }.map_err(std::io::Error::from)?;
            }
            Ok(())
        });
    }

    let origin = Instant::now();
    let mut process = command
        .spawn()
        .with_context(|| format!("launching {}", program.display()))?;
    let creation_ticks = ticks_from_duration(origin.elapsed());
    debug!(pid = process.id(), program = %program.display(), "child started");

    let status = process
        .wait()
        .context("waiting for child termination status")?;
    let exit_ticks = ticks_from_duration(origin.elapsed());

    let usage = getrusage(UsageWho::RUSAGE_CHILDREN)
        .context("querying child CPU times")?;
    let kernel = usage.system_time();
    let user = usage.user_time();
    let sample = TimingSample {
        creation_ticks,
        exit_ticks,
        kernel_ticks: ticks_from_timeval(kernel.tv_sec() as i64, kernel.tv_usec() as i64),
        user_ticks: ticks_from_timeval(user.tv_sec() as i64, user.tv_usec() as i64),
    };

    let exit_code = exit_code_of(status);
    debug!(exit_code, "child terminated");
    Ok(RunOutcome { sample, exit_code })
}

/// Map a wait status to the code this launcher should exit with: the
/// child's own code, or 128 + signal number when it was killed by a signal.
fn exit_code_of(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    }
}
