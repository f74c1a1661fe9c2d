//! Snapshot and roster files
//!
//! JSON files written atomically: serialize into a temporary file in the
//! target directory, then persist it over the destination, so a crash
//! mid-write never leaves a truncated save behind. Decode failures surface
//! as `InvalidData` I/O errors; snapshot invariant validation happens
//! separately in [`crate::snapshot`].

use crate::game::Roster;
use crate::snapshot::SessionSnapshot;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

fn write_json<T: Serialize>(value: &T, path: &Path) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    let writer = BufWriter::new(&temp);
    serde_json::to_writer_pretty(writer, value).map_err(io::Error::other)?;
    temp.persist(path)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write a session snapshot
///
/// # Errors
/// Returns an I/O error if the file cannot be written or replaced.
pub fn save_session(snapshot: &SessionSnapshot, path: &Path) -> io::Result<()> {
    write_json(snapshot, path)
}

/// Read a session snapshot
///
/// The result still needs [`SessionSnapshot::restore`] to validate its
/// invariants before play can resume.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, or `InvalidData` if it
/// is not a snapshot.
pub fn load_session(path: &Path) -> io::Result<SessionSnapshot> {
    read_json(path)
}

/// Write the player roster
///
/// # Errors
/// Returns an I/O error if the file cannot be written or replaced.
pub fn save_roster(roster: &Roster, path: &Path) -> io::Result<()> {
    write_json(roster, path)
}

/// Read the player roster, treating a missing file as an empty roster
///
/// # Errors
/// Returns an I/O error if the file exists but cannot be read, or
/// `InvalidData` if it is not a roster.
pub fn load_roster(path: &Path) -> io::Result<Roster> {
    if !path.exists() {
        return Ok(Roster::new());
    }
    read_json(path)
}
