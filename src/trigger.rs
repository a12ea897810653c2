//! The key or command that started an invocation.

use std::fmt;

/// What the host asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// `ENTER`
    Enter,
    /// `ENTER-CD`: like `ENTER`, but a linked file is entered with `&CD` too.
    EnterCd,
    /// `SHIFT-ENTER`
    ShiftEnter,
    /// `CTRL-ENTER`
    CtrlEnter,
    /// `E`
    Edit,
    /// `V`
    View,
    /// Any other command line, including the empty one ("run the file").
    Other(String),
}

impl Trigger {
    /// Parse a trigger. Matching is exact and case-sensitive; anything
    /// unrecognised becomes [`Trigger::Other`].
    #[must_use]
    pub fn parse(command: &str) -> Self {
        match command {
            "ENTER" => Self::Enter,
            "ENTER-CD" => Self::EnterCd,
            "SHIFT-ENTER" => Self::ShiftEnter,
            "CTRL-ENTER" => Self::CtrlEnter,
            "E" => Self::Edit,
            "V" => Self::View,
            other => Self::Other(other.to_string()),
        }
    }

    /// The trigger as it appears on the command line.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enter => "ENTER",
            Self::EnterCd => "ENTER-CD",
            Self::ShiftEnter => "SHIFT-ENTER",
            Self::CtrlEnter => "CTRL-ENTER",
            Self::Edit => "E",
            Self::View => "V",
            Self::Other(command) => command,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
