//! JSON-lines persistence for the flashcard collection.
//!
//! The first line is a header record, every following line one flashcard.
//! Records are re-validated through the value objects on load, so an edited
//! file cannot smuggle in a blank answer or a one-choice question.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::flashcard::Flashcard;
use crate::model::QuickCache;

const STORAGE_VERSION: u8 = 1;

/// Metadata stored on the first line of the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageHeader {
    pub version: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl StorageHeader {
    pub fn new() -> Self {
        Self {
            version: STORAGE_VERSION,
            created_at: Utc::now(),
            saved_at: None,
        }
    }
}

impl Default for StorageHeader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StorageLine {
    Header(StorageHeader),
    Flashcard(Flashcard),
}

/// A collection file on disk.
#[derive(Debug, Clone)]
pub struct JsonQuickCacheStorage {
    header: StorageHeader,
}

impl JsonQuickCacheStorage {
    pub fn new() -> Self {
        Self {
            header: StorageHeader::new(),
        }
    }

    /// Read `path`; a missing file is an empty collection.
    pub fn load(path: &Path) -> Result<(Self, QuickCache)> {
        if !path.exists() {
            info!(path = %path.display(), "no data file yet, starting empty");
            return Ok((Self::new(), QuickCache::new()));
        }
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("failed to open data file {}", path.display()))?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| anyhow!("data file {} is empty", path.display()))??;
        let header = match serde_json::from_str::<StorageLine>(&header_line)
            .with_context(|| format!("failed to parse header in {}", path.display()))?
        {
            StorageLine::Header(header) => header,
            StorageLine::Flashcard(_) => {
                return Err(anyhow!("expected a header as the first line"));
            }
        };
        if header.version != STORAGE_VERSION {
            return Err(anyhow!(
                "unsupported data file version {} in {}",
                header.version,
                path.display()
            ));
        }

        let mut cache = QuickCache::new();
        for (idx, raw) in lines.enumerate() {
            let raw = raw?;
            if raw.trim().is_empty() {
                continue;
            }
            let line: StorageLine = serde_json::from_str(&raw).with_context(|| {
                format!(
                    "failed to parse flashcard at line {} in {}",
                    idx + 2,
                    path.display()
                )
            })?;
            match line {
                StorageLine::Header(_) => {
                    return Err(anyhow!(
                        "multiple headers found in {} at line {}",
                        path.display(),
                        idx + 2
                    ));
                }
                StorageLine::Flashcard(card) => cache.add(card).with_context(|| {
                    format!("duplicate flashcard at line {} in {}", idx + 2, path.display())
                })?,
            }
        }
        info!(path = %path.display(), count = cache.len(), "loaded flashcards");
        Ok((Self { header }, cache))
    }

    /// Rewrite `path` with the header and every flashcard of `cache`.
    pub fn save(&mut self, path: &Path, cache: &QuickCache) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to write data file {}", path.display()))?;
        self.header.saved_at = Some(Utc::now());

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &StorageLine::Header(self.header.clone()))
            .context("failed to serialize header")?;
        writer.write_all(b"\n")?;
        for card in cache.as_slice() {
            serde_json::to_writer(&mut writer, &StorageLine::Flashcard(card.clone()))
                .context("failed to serialize flashcard")?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        info!(path = %path.display(), count = cache.len(), "saved flashcards");
        Ok(())
    }
}

impl Default for JsonQuickCacheStorage {
    fn default() -> Self {
        Self::new()
    }
}
