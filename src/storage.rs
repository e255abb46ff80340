// src/storage.rs

//! Persistence of finished survey records as pretty-printed JSON files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};

use crate::models::survey::SurveyRecord;

pub const FILE_PREFIX: &str = "survey_responses_";
pub const FILE_EXTENSION: &str = "json";

/// Upper bound on `_N` suffixes tried for names taken within one second.
const MAX_SUFFIX: u32 = 1000;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create {path}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not encode survey record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("stored record {path} is malformed: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("no free file name left for {stem}")]
    NamesExhausted { stem: String },
}

/// Destination for finished survey records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists `record` and returns where it was stored.
    async fn write(&self, record: &SurveyRecord) -> Result<String, StorageError>;

    /// Reads back a record from a location returned by `write`.
    async fn load(&self, location: &str) -> Result<SurveyRecord, StorageError>;
}

/// Writes one `survey_responses_<YYYYMMDD_HHMMSS>.json` file per record.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Candidate path for the `attempt`-th try within one second.
    /// The first try has no suffix.
    fn candidate(&self, stem: &str, attempt: u32) -> PathBuf {
        let file_name = if attempt == 0 {
            format!("{stem}.{FILE_EXTENSION}")
        } else {
            format!("{stem}_{attempt}.{FILE_EXTENSION}")
        };
        self.dir.join(file_name)
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn write(&self, record: &SurveyRecord) -> Result<String, StorageError> {
        let contents = serde_json::to_vec_pretty(record).map_err(StorageError::Encode)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let stem = format!("{FILE_PREFIX}{}", Local::now().format("%Y%m%d_%H%M%S"));

        for attempt in 0..MAX_SUFFIX {
            let path = self.candidate(&stem, attempt);

            // create_new never clobbers a response written earlier in the same second
            let mut file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::debug!("{} already exists, trying next suffix", path.display());
                    continue;
                }
                Err(source) => return Err(StorageError::CreateFile { path, source }),
            };

            let written = match file.write_all(&contents).await {
                Ok(()) => file.sync_all().await,
                Err(e) => Err(e),
            };

            if let Err(source) = written {
                if let Err(e) = fs::remove_file(&path).await {
                    tracing::warn!("Failed to remove partial file {}: {:?}", path.display(), e);
                }
                return Err(StorageError::Write { path, source });
            }

            tracing::info!("Survey response written to {}", path.display());
            return Ok(path.display().to_string());
        }

        Err(StorageError::NamesExhausted { stem })
    }

    async fn load(&self, location: &str) -> Result<SurveyRecord, StorageError> {
        let path = Path::new(location);
        let contents = fs::read(path).await.map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&contents).map_err(|source| StorageError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }
}
