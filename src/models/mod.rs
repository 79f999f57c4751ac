//! Model downloading and caching via hf-hub.

use crate::config::ModelConfig;
use crate::error::{AssistantError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::info;

/// Manages downloading and caching of ML models.
pub struct ModelManager {
    cache_dir: PathBuf,
}

impl ModelManager {
    /// Create a new model manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache directory cannot be created.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.cache_dir)?;
        info!("model cache directory: {}", config.cache_dir.display());

        Ok(Self {
            cache_dir: config.cache_dir.clone(),
        })
    }

    fn api(&self) -> Result<hf_hub::api::sync::Api> {
        hf_hub::api::sync::ApiBuilder::new()
            .with_cache_dir(self.cache_dir.clone())
            .with_progress(false)
            .build()
            .map_err(|e| AssistantError::Model(format!("failed to create HF API: {e}")))
    }

    /// Get the path to a cached model file, downloading if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be downloaded.
    pub fn get_model_path(&self, repo_id: &str, filename: &str) -> Result<PathBuf> {
        let repo = self.api()?.model(repo_id.to_owned());
        repo.get(filename).map_err(|e| {
            AssistantError::Model(format!("failed to download {filename} from {repo_id}: {e}"))
        })
    }

    /// Download a model file with a visible progress bar.
    ///
    /// If the file is already cached, returns immediately without showing a bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails.
    pub fn download_with_progress(&self, repo_id: &str, filename: &str) -> Result<PathBuf> {
        if let Some(path) = self.cached_path(repo_id, filename) {
            println!("  {repo_id}/{filename}  [cached]");
            return Ok(path);
        }

        let pb = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::with_template(
            "  {msg} [{bar:30}] {bytes}/{total_bytes} {bytes_per_sec} ETA {eta}",
        ) {
            pb.set_style(style);
        }
        pb.set_message(format!("{repo_id}/{filename}"));

        let repo = self.api()?.model(repo_id.to_owned());
        repo.download_with_progress(filename, pb)
            .map_err(|e| AssistantError::Model(format!("failed to download {filename}: {e}")))
    }

    /// Download every file in `filenames`, returning the directory holding them.
    ///
    /// # Errors
    ///
    /// Returns an error if any download fails.
    pub fn download_repo_with_progress(&self, repo_id: &str, filenames: &[&str]) -> Result<PathBuf> {
        let mut dir = None;
        for filename in filenames {
            let path = self.download_with_progress(repo_id, filename)?;
            dir = path.parent().map(Path::to_path_buf);
        }
        dir.ok_or_else(|| {
            AssistantError::Model(format!("could not determine repo directory for {repo_id}"))
        })
    }

    /// Local path of a file if it is already in the cache.
    pub fn cached_path(&self, repo_id: &str, filename: &str) -> Option<PathBuf> {
        hf_hub::Cache::new(self.cache_dir.clone())
            .model(repo_id.to_owned())
            .get(filename)
    }

    /// Get the cache directory path.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
