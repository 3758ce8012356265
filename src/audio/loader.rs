use async_trait::async_trait;
use rodio::Decoder;
use std::io::Cursor;
use tracing::debug;

use crate::audio::{
    error::AudioError,
    traits::{PreviewLoader, PreviewSource},
};

/// Downloads a preview in full, then decodes it on the blocking pool.
#[derive(Debug, Clone)]
pub struct HttpPreviewLoader {
    client: reqwest::Client,
}

impl HttpPreviewLoader {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PreviewLoader for HttpPreviewLoader {
    async fn load(&self, url: &str) -> Result<PreviewSource, AudioError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| AudioError::NetworkError(e.to_string()))?
            .bytes()
            .await
            .map_err(|e| AudioError::NetworkError(e.to_string()))?;

        debug!(url, bytes = bytes.len(), "audio_preview_downloaded");

        let data = bytes.to_vec();
        let decoder = tokio::task::spawn_blocking(move || Decoder::new(Cursor::new(data)))
            .await
            .map_err(|e| AudioError::Unknown(e.to_string()))?
            .map_err(|e| AudioError::DecodingError(e.to_string()))?;

        Ok(Box::new(decoder))
    }
}
