use anyhow::{bail, Result};
use clap::Parser;
use cronometra::{cli::Cli, cmdline::ChildCommand, locator::Locator, report, runner};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output, gated by RUST_LOG.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve, run and report. Returns the exit code to propagate.
fn launch(command: Vec<String>) -> Result<i32> {
    let Some(child) = ChildCommand::from_argv(command) else {
        bail!("usage: cronometra COMMAND [ARGS...]");
    };
    debug!(command = child.raw(), "child command line");

    let locator = Locator::from_env();
    let program = locator.resolve(child.program())?;
    debug!(program = %program.display(), "resolved executable");

    let outcome = runner::run(&program, &child)?;
    report::print(&outcome.sample);
    Ok(outcome.exit_code)
}

fn main() {
    let args = Cli::parse();
    init_tracing();

    // Every failure is terminal and maps to exit 1; success exits with the
    // child's own code, bit-for-bit.
    match launch(args.command) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("cronometra: {err:#}");
            std::process::exit(1);
        }
    }
}
