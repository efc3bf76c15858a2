use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::PlayerScore;

/// Append-only flat file of `name,score` lines. The file is opened and closed
/// within each call.
#[derive(Debug, Clone)]
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_append(&self, name: &str, score: u32) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(PlayerScore::new(name, score).to_line().as_bytes())
            .map_err(write_err)?;

        info!(path = %self.path.display(), name, score, "Score recorded");
        Ok(())
    }

    /// Records a score. Store failures are reported on `out` and otherwise
    /// ignored; only a failure to write that report is returned.
    pub fn append(&self, name: &str, score: u32, out: &mut impl Write) -> io::Result<()> {
        if let Err(e) = self.try_append(name, score) {
            warn!(error = %e, "Could not save score");
            writeln!(out, "Error saving to leaderboard: {}", e)?;
        }
        Ok(())
    }

    /// Reads every record ranked by score, highest first, keeping file order
    /// among equal scores. Returns `Ok(None)` when the file does not exist yet.
    ///
    /// Records with a non-numeric score are skipped and handed to `on_skip`.
    pub fn try_top_entries(
        &self,
        n: usize,
        mut on_skip: impl FnMut(&StoreError),
    ) -> Result<Option<Vec<PlayerScore>>, StoreError> {
        let contents = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Leaderboard file not found");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        // Decoded leniently so one bad byte cannot hide the other records.
        let contents = String::from_utf8_lossy(&contents);
        let mut scores = Vec::new();
        for line in contents.lines() {
            match PlayerScore::parse_line(line) {
                Ok(Some(score)) => scores.push(score),
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "Skipping leaderboard record");
                    on_skip(&e);
                }
            }
        }

        // sort_by is stable
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(n);
        Ok(Some(scores))
    }

    /// Reads the top `n` records. A missing file yields an empty list; other
    /// store failures are reported on `out` and also yield an empty list.
    /// Only a failure to write those reports is returned.
    pub fn top_entries(&self, n: usize, out: &mut impl Write) -> io::Result<Vec<PlayerScore>> {
        let mut skipped = Vec::new();
        let result = self.try_top_entries(n, |e| skipped.push(e.to_string()));

        for reason in &skipped {
            writeln!(out, "Warning: {}", reason)?;
        }

        match result {
            Ok(entries) => Ok(entries.unwrap_or_default()),
            Err(e) => {
                warn!(error = %e, "Could not read leaderboard");
                writeln!(out, "Error reading leaderboard: {}", e)?;
                Ok(Vec::new())
            }
        }
    }
}
