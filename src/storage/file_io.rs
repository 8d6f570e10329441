//! File I/O utilities with atomic writes
//!
//! Line-oriented helpers for the data file. Full rewrites go through a temp
//! file and a rename so a failed write leaves the previous file in place.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::FinpalError;

/// Read all lines of a file, returning an empty list if the file doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, FinpalError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| FinpalError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut lines = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => line_read_error(index + 1, e),
            _ => FinpalError::Io(format!("Failed to read {}: {}", path.display(), e)),
        })?;
        lines.push(line);
    }
    Ok(lines)
}

/// Map a failed read of a 1-based line; undecodable text is a malformed record
pub fn line_read_error(line_number: usize, err: std::io::Error) -> FinpalError {
    if err.kind() == ErrorKind::InvalidData {
        FinpalError::decode(line_number, "line is not valid UTF-8")
    } else {
        FinpalError::from(err)
    }
}

/// Open a file for buffered reading
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<File>, FinpalError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| FinpalError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Append lines to a file, creating it (and its parent directory) if needed
pub fn append_lines<P, S>(path: P, lines: &[S]) -> Result<(), FinpalError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FinpalError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    write_all_lines(&mut writer, lines)
        .map_err(|e| FinpalError::Io(format!("Failed to append to {}: {}", path.display(), e)))?;

    writer
        .flush()
        .map_err(|e| FinpalError::Io(format!("Failed to flush data: {}", e)))
}

/// Replace a file's contents with the given lines atomically (write to temp, then rename)
pub fn write_lines_atomic<P, S>(path: P, lines: &[S]) -> Result<(), FinpalError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FinpalError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    write_all_lines(&mut writer, lines)
        .map_err(|e| FinpalError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinpalError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinpalError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinpalError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_all_lines<W: Write, S: AsRef<str>>(writer: &mut W, lines: &[S]) -> std::io::Result<()> {
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), FinpalError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                FinpalError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
