//! Routing of decoded records into per-sender files.

use std::{
    collections::HashSet,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};

/// Writes each sender's records to `<dir>/<MMSI>.txt`.
///
/// A sender's file is truncated the first time it is written in a run and
/// appended to afterwards, so re-running over the same log replaces stale
/// output instead of growing it.
#[derive(Debug)]
pub struct Outbox {
    dir: PathBuf,
    seen: HashSet<u32>,
}

impl Outbox {
    /// Route records into the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), seen: HashSet::new() }
    }

    /// Append a record to its sender's file.
    pub fn put(&mut self, mmsi: u32, record: &str) -> io::Result<()> {
        let path = self.dir.join(format!("{mmsi}.txt"));

        let mut options = OpenOptions::new();
        if self.seen.insert(mmsi) {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        options.create(true).open(&path)?.write_all(record.as_bytes())
    }
}
