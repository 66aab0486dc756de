//! Storage operations
//!
//! Read, write, delete, move and copy on logical paths. Every path argument is
//! normalized before it reaches the file system.

use log::{debug, error, info, warn};
use std::fs::{self, File, FileTimes, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::StorageError;
use crate::path::PathNormalizer;
use crate::storage::results::{FileOutcome, ReadResult};

#[derive(Debug, Clone, Default)]
pub struct FileStore {
    normalizer: PathNormalizer,
}

impl FileStore {
    pub fn new(normalizer: PathNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn normalizer(&self) -> &PathNormalizer {
        &self.normalizer
    }

    /// Reads a text file line by line, terminating every line with `\n`.
    ///
    /// A missing file reads as empty. A failure part way through is logged and
    /// the lines read so far are returned.
    pub fn read(&self, path: &str) -> String {
        let result = self.read_detailed(path);
        if let Some(e) = &result.error {
            error!(
                "Failed to read {} (real: {}): {}",
                path,
                result.physical_path.display(),
                e
            );
        }
        result.content
    }

    /// Same as [`FileStore::read`], returning the failure to the caller
    pub fn read_detailed(&self, path: &str) -> ReadResult {
        let physical_path = self.normalizer.to_path(path);
        let mut result = ReadResult {
            physical_path,
            content: String::new(),
            found: false,
            error: None,
        };

        if !result.physical_path.exists() {
            debug!("Read of missing file {}", path);
            return result;
        }
        result.found = true;

        let file = match File::open(&result.physical_path) {
            Ok(file) => file,
            Err(e) => {
                result.error = Some(e);
                return result;
            }
        };

        let mut reader = BufReader::new(file);
        let mut raw = Vec::new();
        loop {
            raw.clear();
            match reader.read_until(b'\n', &mut raw) {
                Ok(0) => break,
                Ok(_) => push_lines(&mut result.content, &raw),
                Err(e) => {
                    result.error = Some(e);
                    break;
                }
            }
        }

        result
    }

    /// Creates or truncates the file and writes `content` to it
    pub fn write(&self, path: &str, content: &str) -> Result<(), StorageError> {
        let real_path = self.normalizer.to_path(path);
        let existed = real_path.exists();

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&real_path)
            .map_err(|e| {
                error!("Failed to open {} for writing: {}", real_path.display(), e);
                if existed {
                    StorageError::WriteFailed(real_path.clone(), e)
                } else {
                    StorageError::CreationFailed(real_path.clone(), e)
                }
            })?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| {
                error!("Failed to write {}: {}", real_path.display(), e);
                StorageError::WriteFailed(real_path.clone(), e)
            })?;

        info!(
            "Wrote {} bytes to {} (real: {})",
            content.len(),
            path,
            real_path.display()
        );
        Ok(())
    }

    /// Deletes a file, or an empty directory
    pub fn delete(&self, path: &str) -> FileOutcome {
        let real_path = self.normalizer.to_path(path);
        if !real_path.exists() {
            warn!("Delete skipped, {} does not exist", path);
            return FileOutcome::NotFound;
        }

        let removed = if real_path.is_dir() {
            fs::remove_dir(&real_path)
        } else {
            fs::remove_file(&real_path)
        };

        match removed {
            Ok(()) => {
                info!("Deleted {} (real: {})", path, real_path.display());
                FileOutcome::Succeeded
            }
            Err(e) => {
                error!(
                    "Failed to delete {} (real: {}): {}",
                    path,
                    real_path.display(),
                    e
                );
                FileOutcome::Failed(e)
            }
        }
    }

    /// Renames `src_path` to `dest_path`.
    ///
    /// This is a single rename; there is no copy-then-delete fallback, so a
    /// move across file systems fails.
    pub fn move_file(&self, src_path: &str, dest_path: &str) -> FileOutcome {
        let src = self.normalizer.to_path(src_path);
        let dest = self.normalizer.to_path(dest_path);
        if !src.exists() {
            warn!("Move skipped, {} does not exist", src_path);
            return FileOutcome::NotFound;
        }

        match fs::rename(&src, &dest) {
            Ok(()) => {
                info!("Moved {} to {}", src.display(), dest.display());
                FileOutcome::Succeeded
            }
            Err(e) => {
                error!(
                    "Failed to move {} to {}: {}",
                    src.display(),
                    dest.display(),
                    e
                );
                FileOutcome::Failed(e)
            }
        }
    }

    /// Copies bytes and permissions, creating parent directories of the
    /// destination. Access and modification times are carried over when the
    /// platform allows it.
    pub fn copy(&self, src_path: &str, dest_path: &str) -> FileOutcome {
        let src = self.normalizer.to_path(src_path);
        let dest = self.normalizer.to_path(dest_path);
        if !src.exists() {
            warn!("Copy skipped, {} does not exist", src_path);
            return FileOutcome::NotFound;
        }

        match copy_file(&src, &dest) {
            Ok(bytes) => {
                info!("Copied {} to {} ({} bytes)", src.display(), dest.display(), bytes);
                FileOutcome::Succeeded
            }
            Err(e) => {
                error!(
                    "Failed to copy {} to {}: {}",
                    src.display(),
                    dest.display(),
                    e
                );
                FileOutcome::Failed(e)
            }
        }
    }
}

/// Appends each line of one `\n`-terminated chunk, ending lines at `\n`,
/// `\r\n` or a lone `\r`. Undecodable bytes become U+FFFD.
fn push_lines(content: &mut String, raw: &[u8]) {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    for line in raw.split(|&b| b == b'\r') {
        content.push_str(&String::from_utf8_lossy(line));
        content.push('\n');
    }
}

fn copy_file(src: &Path, dest: &Path) -> io::Result<u64> {
    // fs::copy onto itself truncates the file
    if dest.exists() && fs::canonicalize(src)? == fs::canonicalize(dest)? {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let bytes = fs::copy(src, dest)?;

    if let Err(e) = copy_times(src, dest) {
        warn!("Could not preserve times on {}: {}", dest.display(), e);
    }

    Ok(bytes)
}

fn copy_times(src: &Path, dest: &Path) -> io::Result<()> {
    let metadata = fs::metadata(src)?;
    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    OpenOptions::new().write(true).open(dest)?.set_times(times)
}
