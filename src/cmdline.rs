//! Quote-aware command-line splitting
//!
//! Separates the launcher's own name from the child command it should run,
//! and derives the resolution token (executable name) from the child command
//! line without disturbing the text that is handed to the child.
//!
//! Tokenization rule: a token is delimited by whitespace unless it starts
//! with `"`, in which case it runs to the matching close quote. The close
//! quote is consumed by the scan but the child command line itself is
//! returned verbatim, never re-trimmed or re-quoted.

/// Byte offset just past the first token of `s`.
///
/// Mirrors the quote rule above: a leading `"` opens a quoted token that
/// ends at the next `"` (consumed if present); otherwise the token ends at
/// the first space.
fn skip_token(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'"') {
        i = 1;
        while i < bytes.len() && bytes[i] != b'"' {
            i += 1;
        }
        if i < bytes.len() {
            i += 1; // consume the closing quote
        }
    } else {
        while i < bytes.len() && bytes[i] != b' ' {
            i += 1;
        }
    }
    i
}

/// Split a raw invocation line into the child command it carries.
///
/// The first token (the launcher's own name) and any separating spaces are
/// skipped; the rest is returned verbatim. `None` means no child command was
/// given and the caller must report a usage error.
pub fn split_invocation(raw: &str) -> Option<&str> {
    let rest = &raw[skip_token(raw)..];
    let child = rest.trim_start_matches(' ');
    if child.is_empty() {
        None
    } else {
        Some(child)
    }
}

/// First token of a child command line, with surrounding quotes stripped.
///
/// This is the name used for path resolution only; execution always uses
/// the untouched child command.
pub fn executable_name(child: &str) -> &str {
    let token = child[..skip_token(child)].trim_end_matches(' ');
    if let Some(inner) = token.strip_prefix('"') {
        inner.strip_suffix('"').unwrap_or(inner)
    } else {
        token
    }
}

/// Split a child command line into argv entries, stripping outer quotes.
fn tokenize(child: &str) -> Vec<String> {
    let mut argv = Vec::new();
    let mut rest = child;
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        let end = skip_token(rest);
        argv.push(executable_name(&rest[..end]).to_string());
        rest = &rest[end..];
    }
    argv
}

/// Render an argv tail back into a single command line, quoting any entry
/// that contains a space or is empty.
///
/// The quote rule has no escape character, so an entry containing both a
/// space and a `"` cannot be represented exactly; the rendered line is a
/// display form and execution always uses the argv vector, never this.
fn join_tokens(argv: &[String]) -> String {
    let mut line = String::new();
    for (i, arg) in argv.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        if arg.is_empty() || arg.contains(' ') {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// The command this launcher was asked to run.
///
/// Carries both representations of the same command: the verbatim command
/// line (what a raw-line platform would hand to the child unchanged) and
/// the argv vector actually used to spawn. The executable name is derived
/// from the command line for resolution and is never what gets executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildCommand {
    raw: String,
    argv: Vec<String>,
}

impl ChildCommand {
    /// Build from an already-split argument tail (everything after the
    /// launcher's own name). Returns `None` for an empty tail.
    pub fn from_argv(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        let raw = join_tokens(&argv);
        Some(Self { raw, argv })
    }

    /// Build from a raw invocation line (launcher name included).
    /// Returns `None` when no child command follows the launcher's name.
    pub fn from_invocation(raw: &str) -> Option<Self> {
        let child = split_invocation(raw)?;
        Some(Self {
            raw: child.to_string(),
            argv: tokenize(child),
        })
    }

    /// The verbatim child command line.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Executable name for resolution (first token, quotes stripped).
    ///
    /// Taken from the argv vector, which is exact even for entries the
    /// quote rule cannot render; for raw-line input `argv[0]` is what
    /// [`executable_name`] derived during tokenization.
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Full argv, executable name first.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Arguments after the executable name.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}
