use std::path::Path;

use crate::{
    config::Config,
    error::{AppError, AppResult},
};

/// Text-generation model registered at startup
///
/// Loaded once and held for the lifetime of the process. Nothing in the
/// recommendation path runs it; it only contributes startup work and a
/// startup failure mode.
#[derive(Debug, Clone)]
pub struct TextModel {
    name: String,
    artifact: Option<Vec<u8>>,
}

impl TextModel {
    /// Registers the configured model, reading its artifact when a path is set
    pub async fn load(config: &Config) -> AppResult<Self> {
        let artifact = match &config.model_path {
            Some(path) => Some(read_artifact(Path::new(path)).await?),
            None => None,
        };

        let model = Self {
            name: config.model_name.clone(),
            artifact,
        };

        tracing::info!(
            model = %model.name,
            artifact_bytes = model.artifact_size(),
            "Text model initialized"
        );

        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether an artifact was read into memory
    pub fn is_loaded(&self) -> bool {
        self.artifact.is_some()
    }

    pub fn artifact_size(&self) -> usize {
        self.artifact.as_ref().map_or(0, Vec::len)
    }
}

async fn read_artifact(path: &Path) -> AppResult<Vec<u8>> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::ModelInit(format!("failed to read {}: {}", path.display(), e))
    })?;

    if bytes.is_empty() {
        return Err(AppError::ModelInit(format!(
            "model artifact {} is empty",
            path.display()
        )));
    }

    Ok(bytes)
}
