//! Help text shown when the tool is started without arguments.

use crate::host::Host;

/// One entry per printed line.
pub const USAGE: &[&str] = &[
    r#"Usage: follow-symlink [options] [command] "$F""#,
    "",
    "Commands:",
    "  ENTER                 Emulate ENTER",
    "  ENTER-CD              &CD into symlinks; otherwise the same as ENTER",
    "  SHIFT-ENTER           Emulate SHIFT + ENTER",
    "  CTRL-ENTER            Emulate CTRL + ENTER",
    "  E                     Emulate the E key",
    "  V                     Emulate the V key",
    "  &EXEC/&CD/&CLIP/...   Run a host built-in command on the file",
    "  (any string)          Run any program with the file as argument",
    "  (none)                Run the file as an executable",
    "",
    "Options (before the command):",
    "  -v, --verbose         Log resolution details to stderr",
    "  -q, --quiet           Log errors only",
    "  --config <FILE>       Read settings from FILE",
    "  --                    End of options; use it when the command starts with '-'",
    "",
];

/// Print the usage text through the host, one line at a time.
pub fn print(host: &dyn Host) {
    for line in USAGE {
        host.print(line.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHost;

    #[test]
    fn test_usage_lists_every_named_trigger() {
        let text = USAGE.join("\n");
        for trigger in ["ENTER", "ENTER-CD", "SHIFT-ENTER", "CTRL-ENTER", "  E  ", "  V  "] {
            assert!(text.contains(trigger), "usage is missing {trigger:?}");
        }
    }

    #[test]
    fn test_usage_explains_option_terminator() {
        assert!(USAGE.iter().any(|line| line.trim_start().starts_with("-- ")));
    }

    #[test]
    fn test_print_one_line_per_entry() {
        let host = RecordingHost::default();
        print(&host);
        assert_eq!(host.printed().len(), USAGE.len());
        assert!(host.executed().is_empty());
        assert!(host.printed().iter().all(|line| line.trim_end() == line));
    }
}
