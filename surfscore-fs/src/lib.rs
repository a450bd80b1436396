//! Capability-based file access for surfscore inputs such as spot
//! catalogues, built on `cap-std` and `camino`.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open the directory containing `path` and return it with the file name.
///
/// Relative paths without a parent resolve against the current directory.
///
/// # Errors
/// Returns an error when `path` has no file name or the directory cannot be
/// opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} should include a file name")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Read a UTF-8 text file through its parent directory capability.
///
/// # Errors
/// Returns an error when the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.read_to_string(name.as_str())
}

/// Return whether an existing path is a regular file.
///
/// # Errors
/// Returns an error when the parent directory cannot be opened or the
/// metadata lookup fails; an absent path reports [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}
