//! Durable local board state
//!
//! The whole tree plus the active funnel id is written as one JSON document
//! after every mutation and restored on load. Anything invalid on disk
//! (missing file, parse failure, shape mismatch) is treated as absent and
//! silently falls back to the demo seed.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::board::Board;
use crate::board::seed::seed_board;
use crate::error::{FunnelboardError, Result};
use crate::paths::state_path;

pub struct BoardStore {
    path: PathBuf,
}

impl Default for BoardStore {
    fn default() -> Self {
        BoardStore::new(state_path())
    }
}

impl BoardStore {
    pub fn new(path: PathBuf) -> Self {
        BoardStore { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Restore the board from disk, falling back to seed data when no valid
    /// stored state is found.
    pub fn load(&self) -> Board {
        match fs::read_to_string(&self.path) {
            Ok(raw) => match serde_json::from_str::<Board>(&raw) {
                Ok(board) => board,
                Err(e) => {
                    debug!("stored board at {} is invalid ({e}); reseeding", self.path.display());
                    seed_board()
                }
            },
            Err(_) => seed_board(),
        }
    }

    /// Persist the board. Called after every mutation.
    pub fn save(&self, board: &Board) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| {
                FunnelboardError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for board state at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }
        let content = serde_json::to_string_pretty(board)?;
        fs::write(&self.path, content).map_err(|e| {
            FunnelboardError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to write board state at {}: {}",
                    self.path.display(),
                    e
                ),
            ))
        })
    }

    /// Load, apply a mutation, and persist the result in one step.
    ///
    /// The mutation's error aborts the save; a failed save surfaces as the
    /// command's error, leaving the previous state on disk.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut Board) -> Result<T>) -> Result<T> {
        let mut board = self.load();
        let out = f(&mut board)?;
        self.save(&board)?;
        Ok(out)
    }
}
