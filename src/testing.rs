//! In-memory collaborators for unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::fs::{FileStat, FileSystem};
use crate::host::Host;
use crate::link::MARKER;
use crate::path::PathConverter;

/// Encode `target` the way Cygwin writes a symlink, with a NUL trailer.
pub fn symlink_bytes(target: &str) -> Vec<u8> {
    symlink_bytes_with_trailer(target, 0)
}

pub fn symlink_bytes_with_trailer(target: &str, trailer: u16) -> Vec<u8> {
    MARKER
        .iter()
        .copied()
        .chain(target.encode_utf16())
        .chain(std::iter::once(trailer))
        .flat_map(u16::to_le_bytes)
        .collect()
}

struct FakeFile {
    system: bool,
    content: Option<Vec<u8>>,
}

#[derive(Default)]
pub struct FakeFs {
    files: HashMap<PathBuf, FakeFile>,
    dirs: HashSet<PathBuf>,
}

impl FakeFs {
    pub fn with_dir(mut self, path: &str) -> Self {
        self.dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_file(self, path: &str, content: Vec<u8>) -> Self {
        self.insert(path, false, Some(content))
    }

    pub fn with_system_file(self, path: &str, content: Vec<u8>) -> Self {
        self.insert(path, true, Some(content))
    }

    pub fn with_unreadable_system_file(self, path: &str) -> Self {
        self.insert(path, true, None)
    }

    pub fn with_symlink(self, path: &str, target: &str) -> Self {
        self.with_system_file(path, symlink_bytes(target))
    }

    fn insert(mut self, path: &str, system: bool, content: Option<Vec<u8>>) -> Self {
        self.files.insert(PathBuf::from(path), FakeFile { system, content });
        self
    }
}

impl FileSystem for FakeFs {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        if self.dirs.contains(path) {
            return Ok(FileStat::default());
        }
        self.files
            .get(path)
            .map(|file| FileStat {
                is_file: true,
                system: file.system,
            })
            .ok_or_else(|| io::ErrorKind::NotFound.into())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.files.get(path) {
            Some(FakeFile {
                content: Some(content),
                ..
            }) => Ok(content.clone()),
            Some(_) => Err(io::ErrorKind::PermissionDenied.into()),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}

/// Answers conversions from a fixed table and records every request.
#[derive(Default)]
pub struct ScriptedConverter {
    answers: HashMap<String, String>,
    unavailable: bool,
    calls: RefCell<Vec<String>>,
}

impl ScriptedConverter {
    pub fn with(mut self, unix_path: &str, windows_path: &str) -> Self {
        self.answers.insert(unix_path.to_string(), windows_path.to_string());
        self
    }

    /// A converter that behaves as if `cygpath` is not installed.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl PathConverter for ScriptedConverter {
    fn name(&self) -> &str {
        "scripted-cygpath"
    }

    fn to_windows(&self, unix_path: &str) -> Result<String, ConvertError> {
        self.calls.borrow_mut().push(unix_path.to_string());
        if self.unavailable {
            return Err(ConvertError::NotFound {
                program: self.name().to_string(),
                source: which::Error::CannotFindBinaryPath,
            });
        }
        self.answers
            .get(unix_path)
            .cloned()
            .ok_or_else(|| ConvertError::InvalidOutput {
                program: self.name().to_string(),
                path: unix_path.to_string(),
            })
    }
}

/// Keeps everything the core hands to the host.
#[derive(Default)]
pub struct RecordingHost {
    printed: RefCell<Vec<String>>,
    executed: RefCell<Vec<String>>,
}

impl RecordingHost {
    pub fn printed(&self) -> Vec<String> {
        self.printed.borrow().clone()
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }
}

impl Host for RecordingHost {
    fn print(&self, message: &str) {
        self.printed.borrow_mut().push(message.to_string());
    }

    fn execute(&self, command_line: &str) -> anyhow::Result<()> {
        self.executed.borrow_mut().push(command_line.to_string());
        Ok(())
    }
}
