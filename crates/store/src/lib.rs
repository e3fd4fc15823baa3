//! High-score persistence.
//!
//! The ledger is stored as plain text: one non-negative integer per line, highest
//! first. A missing file means "no history yet" and loads as five zeros. Every
//! save rewrites the whole file.

use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use blockfall_core::HighScores;

#[derive(Error, Debug)]
pub enum HighScoreError {
    #[error("failed to access high-score file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid score on line {line} of {path}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: ParseIntError,
    },
}

/// File-backed high-score ledger
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the ledger. A missing file yields the default (all zero) ledger.
    pub fn load(&self) -> Result<HighScores, HighScoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no high-score file at {}, starting fresh", self.path.display());
                return Ok(HighScores::new());
            }
            Err(source) => {
                return Err(HighScoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let scores = parse_scores(&text).map_err(|(line, source)| HighScoreError::Parse {
            path: self.path.clone(),
            line,
            source,
        })?;

        let ledger = HighScores::from_scores(scores);
        debug!("loaded high scores {:?} from {}", ledger.scores(), self.path.display());
        Ok(ledger)
    }

    /// Rewrite the file with the full ledger.
    pub fn save(&self, ledger: &HighScores) -> Result<(), HighScoreError> {
        let io_err = |source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        fs::write(&self.path, format_scores(ledger)).map_err(io_err)?;
        debug!("saved high scores {:?} to {}", ledger.scores(), self.path.display());
        Ok(())
    }
}

/// Parse newline-separated scores. Blank lines are skipped; errors carry the
/// 1-based line number.
fn parse_scores(text: &str) -> Result<Vec<u32>, (usize, ParseIntError)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(n, line)| line.parse::<u32>().map_err(|e| (n, e)))
        .collect()
}

fn format_scores(ledger: &HighScores) -> String {
    let mut out = String::new();
    for score in ledger.scores() {
        out.push_str(&score.to_string());
        out.push('\n');
    }
    out
}
