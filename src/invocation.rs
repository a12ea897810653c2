//! Splitting the raw argument list into a trigger and a subject path.

use crate::trigger::Trigger;

/// One request from the host: do `trigger` to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// What to do.
    pub trigger: Trigger,
    /// The file the host's cursor is on, exactly as passed.
    pub path: String,
}

impl Invocation {
    /// The last argument is the path; everything before it, joined with
    /// spaces, is the command. Arguments containing whitespace are wrapped
    /// in double quotes when joined.
    ///
    /// Returns `None` when there are no arguments at all.
    #[must_use]
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Option<Self> {
        let (path, command) = args.split_last()?;
        let command = command
            .iter()
            .map(|arg| quote_if_spaced(arg.as_ref()))
            .collect::<Vec<_>>()
            .join(" ");

        Some(Self {
            trigger: Trigger::parse(&command),
            path: path.as_ref().to_string(),
        })
    }
}

fn quote_if_spaced(arg: &str) -> String {
    if arg.chars().any(char::is_whitespace) {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}
