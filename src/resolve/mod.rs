//! Dereference a path into what its symlink (if any) points at.


use std::path::Path;

use crate::error::ConvertError;
use crate::fs::FileSystem;
use crate::link;
use crate::path::{self, NativePath, PathConverter};

/// Outcome of dereferencing a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    /// The path is not a symlink; use it as given.
    NotALink,
    /// The path is a symlink whose target does not exist.
    Missing(NativePath),
    /// The symlink points at a file.
    File(NativePath),
    /// The symlink points at a folder.
    Folder(NativePath),
}

impl ResolvedTarget {
    /// The dereferenced native path, if the source was a symlink.
    #[must_use]
    pub const fn native_path(&self) -> Option<&NativePath> {
        match self {
            Self::NotALink => None,
            Self::Missing(path) | Self::File(path) | Self::Folder(path) => Some(path),
        }
    }

    /// Like [`native_path`](Self::native_path) but by value.
    #[must_use]
    pub fn into_native_path(self) -> Option<NativePath> {
        match self {
            Self::NotALink => None,
            Self::Missing(path) | Self::File(path) | Self::Folder(path) => Some(path),
        }
    }
}

/// Combines the decoder and translator against one filesystem.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    fs: &'a dyn FileSystem,
    converter: &'a dyn PathConverter,
}

impl<'a> Resolver<'a> {
    /// Resolve against `fs`, converting unmapped absolute targets with `converter`.
    #[must_use]
    pub const fn new(fs: &'a dyn FileSystem, converter: &'a dyn PathConverter) -> Self {
        Self { fs, converter }
    }

    /// The filesystem this resolver inspects.
    #[must_use]
    pub const fn fs(&self) -> &'a dyn FileSystem {
        self.fs
    }

    /// Dereference `path`. Always reads the current filesystem state.
    ///
    /// # Errors
    ///
    /// Only the external converter can fail; see [`path::translate`].
    pub fn resolve(&self, path: &str) -> Result<ResolvedTarget, ConvertError> {
        let Some(raw) = link::decode(self.fs, Path::new(path)) else {
            return Ok(ResolvedTarget::NotALink);
        };

        let native = path::translate(&raw, self.converter)?;
        // A link with nothing behind the marker is no link at all.
        if native.as_str().is_empty() {
            return Ok(ResolvedTarget::NotALink);
        }

        let resolved = if self.fs.is_dir(native.as_path()) {
            ResolvedTarget::Folder(native)
        } else if self.fs.is_file(native.as_path()) {
            ResolvedTarget::File(native)
        } else {
            ResolvedTarget::Missing(native)
        };
        log::debug!("{path} resolved to {resolved:?}");
        Ok(resolved)
    }
}
