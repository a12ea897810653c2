//! Translation of Cygwin paths into native Windows paths.

mod cygpath;


pub use cygpath::{Cygpath, PathConverter};

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::link::RawTarget;

/// Native path separator.
pub const SEPARATOR: char = '\\';

static CYGDRIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/cygdrive/([a-zA-Z])/").expect("cygdrive pattern is valid"));

/// A backslash-separated Windows path, only ever produced by [`translate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativePath(String);

impl NativePath {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path for filesystem lookups.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Consume the wrapper.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Translate a stored symlink target into a native path.
///
/// Relative targets and `/cygdrive/<letter>/...` targets are rewritten
/// in place. Any other absolute target is handed to `converter`.
///
/// # Errors
///
/// Returns the converter's error unchanged; it is never downgraded to
/// "not a link".
pub fn translate(raw: &RawTarget, converter: &dyn PathConverter) -> Result<NativePath, ConvertError> {
    let raw = raw.as_str();

    if !raw.starts_with('/') {
        log::debug!("relative target {raw}");
        return Ok(NativePath(to_native_separators(raw)));
    }

    if let Some(caps) = CYGDRIVE.captures(raw) {
        let drive = caps[1].to_ascii_uppercase();
        let rest = &raw[caps[0].len()..];
        log::debug!("cygdrive target {raw} on drive {drive}");
        return Ok(NativePath(format!("{drive}:{SEPARATOR}{}", to_native_separators(rest))));
    }

    log::debug!("converting {raw} with {}", converter.name());
    let converted = converter.to_windows(raw)?;
    Ok(NativePath(converted.trim_end().to_string()))
}

fn to_native_separators(path: &str) -> String {
    path.replace('/', "\\")
}
