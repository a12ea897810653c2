//! Filesystem access used while decoding and resolving links.

use std::io;
use std::path::Path;

/// Windows `FILE_ATTRIBUTE_SYSTEM`.
pub const FILE_ATTRIBUTE_SYSTEM: u32 = 0x4;

/// What a single metadata lookup tells us about a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStat {
    /// The path is a regular file (not a folder).
    pub is_file: bool,
    /// The "system" attribute bit is set.
    pub system: bool,
}

/// The filesystem operations the decoder, resolver and dispatcher need.
pub trait FileSystem {
    /// Look up the metadata of `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the path cannot be inspected.
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// Read the full contents of a file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Whether `path` names an existing folder.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = std::fs::metadata(path)?;
        Ok(FileStat {
            is_file: meta.is_file(),
            system: has_system_bit(&meta),
        })
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(windows)]
fn has_system_bit(meta: &std::fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;
    meta.file_attributes() & FILE_ATTRIBUTE_SYSTEM != 0
}

// Only NTFS carries the attribute; elsewhere nothing is ever a link of this kind.
#[cfg(not(windows))]
const fn has_system_bit(_meta: &std::fs::Metadata) -> bool {
    false
}
