use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "retro-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// On-disk shape of the score file: one slot holding the decimal string of
/// the high score, matching the legacy save format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScoreFile {
    snake_highscore: String,
}

/// Failure writing the score file. Reads never fail: a missing or
/// unreadable slot means a high score of zero.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("failed to write score file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode score file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Persistent high score backed by a small key-value file.
///
/// `record` writes only when a score strictly exceeds the stored value, so
/// the file sees each new high score exactly once.
#[derive(Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    stored: u32,
}

impl HighScoreStore {
    /// Opens the store at the default platform path.
    #[must_use]
    pub fn open() -> Self {
        Self::open_at(scores_path())
    }

    /// Opens the store at an explicit path.
    #[must_use]
    pub fn open_at(path: PathBuf) -> Self {
        let stored = read_high_score(&path);
        Self { path, stored }
    }

    /// Returns the high score read at open time, 0 when none was stored.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.stored
    }

    /// Persists `score` when it beats the stored high score.
    ///
    /// Returns true when a write happened.
    pub fn record(&mut self, score: u32) -> Result<bool, ScoreError> {
        if score <= self.stored {
            return Ok(false);
        }

        write_high_score(&self.path, score)?;
        self.stored = score;
        Ok(true)
    }
}

/// Reads the stored high score, defaulting to 0 when the file is missing,
/// the slot is absent, or the value is not a decimal number.
fn read_high_score(path: &Path) -> u32 {
    let Ok(raw) = fs::read_to_string(path) else {
        return 0;
    };
    let Ok(file) = serde_json::from_str::<ScoreFile>(&raw) else {
        return 0;
    };

    file.snake_highscore.parse().unwrap_or(0)
}

fn write_high_score(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let payload = ScoreFile {
        snake_highscore: score.to_string(),
    };
    let json = serde_json::to_string_pretty(&payload)?;

    fs::write(path, json).map_err(|source| ScoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::HighScoreStore;

    #[test]
    fn missing_file_reads_as_zero() {
        let path = unique_test_path("missing");

        let store = HighScoreStore::open_at(path);

        assert_eq!(store.high_score(), 0);
    }

    #[test]
    fn malformed_file_reads_as_zero() {
        let path = unique_test_path("malformed");
        write_fixture(&path, "not-json");

        let store = HighScoreStore::open_at(path.clone());

        assert_eq!(store.high_score(), 0);
        cleanup_test_path(&path);
    }

    #[test]
    fn non_numeric_slot_reads_as_zero() {
        let path = unique_test_path("non-numeric");
        write_fixture(&path, r#"{"snake_highscore": "lots"}"#);

        let store = HighScoreStore::open_at(path.clone());

        assert_eq!(store.high_score(), 0);
        cleanup_test_path(&path);
    }

    #[test]
    fn record_round_trips_through_the_file() {
        let path = unique_test_path("round-trip");

        let mut store = HighScoreStore::open_at(path.clone());
        store.record(42).expect("record should succeed");

        let reopened = HighScoreStore::open_at(path.clone());
        assert_eq!(reopened.high_score(), 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn record_writes_only_new_high_scores() {
        let path = unique_test_path("monotonic");
        write_fixture(&path, r#"{"snake_highscore": "30"}"#);

        let mut store = HighScoreStore::open_at(path.clone());
        assert_eq!(store.high_score(), 30);

        // A session scoring 25 then 35: only the 35 reaches the file.
        assert!(!store.record(25).expect("record should succeed"));
        assert_eq!(HighScoreStore::open_at(path.clone()).high_score(), 30);

        assert!(store.record(35).expect("record should succeed"));
        assert_eq!(HighScoreStore::open_at(path.clone()).high_score(), 35);

        cleanup_test_path(&path);
    }

    fn write_fixture(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("retro-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
