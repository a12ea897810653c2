//! Detection and decoding of Cygwin-style symlink files.
//!
//! Cygwin (in its default `winsymlinks` mode) writes a symlink as an
//! ordinary file with the "system" attribute set. Its content is the
//! magic `!<symlink>`, a UTF-16LE byte-order mark, the target path in
//! UTF-16LE and a single trailing NUL code unit.

#[cfg(test)]
mod tests;

use std::fmt;
use std::path::Path;

use crate::fs::FileSystem;

/// The first six UTF-16LE code units of a symlink file: `!<symlink>` followed by `FF FE`.
pub const MARKER: [u16; 6] = [0x3c21, 0x7973, 0x6c6d, 0x6e69, 0x3e6b, 0xfeff];

const BYTE_ORDER_MARK: [u8; 2] = [0xff, 0xfe];

/// The target stored inside a symlink file, still in Unix path syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTarget(String);

impl RawTarget {
    /// Wrap an already-decoded Unix-style target.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    /// The stored target as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Return the stored target if `path` is a symlink file, `None` otherwise.
///
/// Every lookup failure (missing file, access denied, a folder instead
/// of a file) means "not a symlink"; nothing here is an error.
pub fn decode(fs: &dyn FileSystem, path: &Path) -> Option<RawTarget> {
    let stat = match fs.stat(path) {
        Ok(stat) => stat,
        Err(e) => {
            log::debug!("cannot inspect {}: {e}", path.display());
            return None;
        }
    };
    if !stat.is_file || !stat.system {
        return None;
    }

    let bytes = match fs.read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("cannot read {}: {e}", path.display());
            return None;
        }
    };

    let target = parse(&bytes);
    if let Some(target) = &target {
        log::debug!("{} is a symlink to {target}", path.display());
    }
    target
}

/// Decode the content of a symlink file.
///
/// The final code unit after the marker is always dropped, whatever its value.
#[must_use]
pub fn parse(bytes: &[u8]) -> Option<RawTarget> {
    let body = bytes.strip_prefix(&BYTE_ORDER_MARK).unwrap_or(bytes);
    let mut units = body
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

    let head: Vec<u16> = units.by_ref().take(MARKER.len()).collect();
    if head != MARKER {
        return None;
    }

    let mut rest: Vec<u16> = units.collect();
    rest.pop();
    Some(RawTarget(String::from_utf16_lossy(&rest)))
}
