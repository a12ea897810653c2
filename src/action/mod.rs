//! Host directives and the command line handed to the host.


use std::fmt;

/// A built-in action of the host file manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `&CD`: change the current folder.
    Cd,
    /// `&VIEW`: open the built-in viewer.
    View,
    /// `&EDIT`: open the configured editor.
    Edit,
    /// `&EXEC`: run with the associated program.
    Exec,
    /// `&CLIP`: copy the path to the clipboard.
    Clip,
    /// `&SENDKEY nnnn`: replay a key code (modifier digit followed by a virtual key).
    SendKey(u16),
}

impl Directive {
    /// Recognise a directive written out in full. `&SENDKEY` is not parsed
    /// back; it is only ever produced, never matched on.
    #[must_use]
    pub fn parse(command: &str) -> Option<Self> {
        match command {
            "&CD" => Some(Self::Cd),
            "&VIEW" => Some(Self::View),
            "&EDIT" => Some(Self::Edit),
            "&EXEC" => Some(Self::Exec),
            "&CLIP" => Some(Self::Clip),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cd => f.write_str("&CD"),
            Self::View => f.write_str("&VIEW"),
            Self::Edit => f.write_str("&EDIT"),
            Self::Exec => f.write_str("&EXEC"),
            Self::Clip => f.write_str("&CLIP"),
            Self::SendKey(code) => write!(f, "&SENDKEY {code:04}"),
        }
    }
}

/// The part of an action line in front of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A host built-in.
    Directive(Directive),
    /// A program, or a host directive this crate does not model, passed through verbatim.
    External(String),
    /// Nothing: the path itself is run.
    Executable,
}

impl Command {
    /// Classify a free-form command string.
    #[must_use]
    pub fn parse(command: &str) -> Self {
        if command.is_empty() {
            return Self::Executable;
        }
        Directive::parse(command).map_or_else(|| Self::External(command.to_string()), Self::Directive)
    }
}

impl From<Directive> for Command {
    fn from(directive: Directive) -> Self {
        Self::Directive(directive)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive(directive) => write!(f, "{directive}"),
            Self::External(command) => f.write_str(command),
            Self::Executable => Ok(()),
        }
    }
}

/// A command applied to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// What to run.
    pub command: Command,
    /// What to run it on. Empty means no argument.
    pub path: String,
}

impl Action {
    /// Apply `command` to `path`.
    #[must_use]
    pub fn new(command: impl Into<Command>, path: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            path: path.into(),
        }
    }

    /// Whether the command is the given directive.
    #[must_use]
    pub fn is(&self, directive: Directive) -> bool {
        self.command == Command::Directive(directive)
    }

    /// The single line handed to the host.
    ///
    /// The path is double-quoted, except for `&CLIP` whose payload must
    /// stay free of quote characters.
    #[must_use]
    pub fn compose(&self) -> String {
        let mut line = self.command.to_string();
        if self.path.is_empty() {
            return line;
        }
        if !line.is_empty() {
            line.push(' ');
        }
        if self.is(Directive::Clip) {
            line.push_str(&self.path);
        } else {
            line.push('"');
            line.push_str(&self.path);
            line.push('"');
        }
        line
    }
}
