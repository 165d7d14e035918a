use crate::{
    domain::{Board, Row},
    error::{Result, TierError},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Initial rows a board is built from.
///
/// Serialized as a plain JSON array of rows:
/// `[{"name": "S", "color": "#ff7f7f", "items": [{"name": "...", "image": "..."}]}]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSeed {
    rows: Vec<Row>,
}

impl BoardSeed {
    /// Creates a seed from rows in tier order
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Gets the seeded rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the seed, returning its rows
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl Default for BoardSeed {
    fn default() -> Self {
        Self::new(vec![
            Row::new("S", "#ff7f7f"),
            Row::new("A", "#ffbf7f"),
            Row::new("B", "#ffdf7f"),
            Row::new("C", "#ffff7f"),
            Row::new("D", "#bfff7f"),
            Row::new("F", "#7fff7f"),
        ])
    }
}

/// Source of the seed a board starts from
#[async_trait]
pub trait SeedLoader: Send + Sync {
    /// Loads the seed
    async fn load_seed(&self) -> Result<BoardSeed>;

    /// Loads the seed and builds a validated board from it
    async fn load_board(&self) -> Result<Board> {
        Board::from_seed(self.load_seed().await?)
    }
}

/// Reads a seed from a JSON file
pub struct FileSeedLoader {
    path: PathBuf,
    default_when_missing: bool,
}

impl FileSeedLoader {
    /// Creates a loader for the given seed file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            default_when_missing: false,
        }
    }

    /// Falls back to [`BoardSeed::default`] instead of failing when the file is absent
    pub fn default_when_missing(mut self) -> Self {
        self.default_when_missing = true;
        self
    }

    /// Gets the seed file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeedLoader for FileSeedLoader {
    async fn load_seed(&self) -> Result<BoardSeed> {
        if !self.path.exists() {
            if self.default_when_missing {
                tracing::info!(path = %self.path.display(), "seed file missing, using default tiers");
                return Ok(BoardSeed::default());
            }
            return Err(TierError::SeedNotFound(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let seed: BoardSeed = serde_json::from_str(&contents)?;

        tracing::info!(
            path = %self.path.display(),
            rows = seed.rows().len(),
            "loaded board seed"
        );
        Ok(seed)
    }
}

/// Serves a seed that is already in memory, e.g. an embedded constant
pub struct StaticSeedLoader {
    seed: BoardSeed,
}

impl StaticSeedLoader {
    /// Wraps an in-memory seed
    pub fn new(seed: BoardSeed) -> Self {
        Self { seed }
    }

    /// Parses an embedded JSON seed
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

#[async_trait]
impl SeedLoader for StaticSeedLoader {
    async fn load_seed(&self) -> Result<BoardSeed> {
        Ok(self.seed.clone())
    }
}
