//! CLI argument parsing for cronometra

use clap::Parser;

/// The launcher has no options of its own: every token after the program
/// name belongs to the child command, hyphens included. `--help` and
/// `--version` only take effect on a bare invocation.
#[derive(Parser, Debug)]
#[command(name = "cronometra")]
#[command(version)]
#[command(about = "Run a command and report its real, system and user time", long_about = None)]
pub struct Cli {
    /// Command to run and time, with its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_command() {
        let cli = Cli::parse_from(["cronometra", "echo", "hello"]);
        assert_eq!(cli.command, vec!["echo", "hello"]);
    }

    #[test]
    fn test_cli_empty_without_command() {
        let cli = Cli::parse_from(["cronometra"]);
        assert!(cli.command.is_empty());
    }

    #[test]
    fn test_cli_keeps_child_flags() {
        // Hyphenated tokens after the command belong to the child
        let cli = Cli::parse_from(["cronometra", "grep", "-rn", "--count", "x"]);
        assert_eq!(cli.command, vec!["grep", "-rn", "--count", "x"]);
    }

    #[test]
    fn test_cli_leading_hyphen_token_is_the_command() {
        let cli = Cli::parse_from(["cronometra", "-v"]);
        assert_eq!(cli.command, vec!["-v"]);
    }

    #[test]
    fn test_cli_preserves_spaced_argument() {
        let cli = Cli::parse_from(["cronometra", "my app.exe", "--flag", "value"]);
        assert_eq!(cli.command[0], "my app.exe");
    }
}
