//! Directory-of-JSON-files implementation of [`CandidateRepository`].

use crate::paths::IntakePaths;
use anyhow::{Context, Result};
use async_trait::async_trait;
use intake_core::session::{CandidateRecord, CandidateRepository};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Stores each completed candidate as a pretty-printed JSON file.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── 7d3c...e1.json
/// └── 0a91...4f.json
/// ```
pub struct JsonCandidateRepository {
    base_dir: PathBuf,
}

impl JsonCandidateRepository {
    /// Creates a repository at the default location, or under `data_dir` when given.
    pub async fn default_location(data_dir: Option<&PathBuf>) -> Result<Self> {
        let base_dir = IntakePaths::candidates_dir(data_dir)
            .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;
        Self::new(base_dir).await
    }

    /// Creates a repository rooted at `base_dir`, creating the directory if needed.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .with_context(|| format!("Failed to create {}", base_dir.display()))?;

        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, id: &str) -> Result<PathBuf> {
        // Ids become file names; refuse anything that could escape the directory.
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            anyhow::bail!("Invalid candidate id '{}'", id);
        }
        Ok(self.base_dir.join(format!("{}.json", id)))
    }

    async fn read_record(path: &Path) -> Result<CandidateRecord> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[async_trait]
impl CandidateRepository for JsonCandidateRepository {
    async fn save(&self, record: &CandidateRecord) -> Result<()> {
        let path = self.record_path(&record.id)?;
        let tmp_path = self.base_dir.join(format!(".{}.json.tmp", record.id));

        let json = serde_json::to_string_pretty(record).context("Failed to serialize record")?;

        let mut tmp_file = fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
        tmp_file.write_all(json.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)
            .await
            .with_context(|| format!("Failed to move record into {}", path.display()))?;

        tracing::info!(candidate_id = %record.id, session_id = %record.session_id, "Saved candidate record");
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<CandidateRecord>> {
        let path = self.record_path(id)?;
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(None);
        }
        Self::read_record(&path).await.map(Some)
    }

    async fn list_all(&self) -> Result<Vec<CandidateRecord>> {
        let mut records = Vec::new();

        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .with_context(|| format!("Failed to list {}", self.base_dir.display()))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_record = path.extension().is_some_and(|ext| ext == "json")
                && !entry.file_name().to_string_lossy().starts_with('.');
            if !is_record {
                continue;
            }

            match Self::read_record(&path).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping unreadable candidate record: {:#}", e);
                }
            }
        }

        // RFC 3339 strings in UTC order lexically
        records.sort_by(|a, b| {
            a.submitted_at
                .cmp(&b.submitted_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let path = self.record_path(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(candidate_id = %id, "Deleted candidate record");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {}", path.display())),
        }
    }
}
