use crate::{errors::MetadataError, providers::ImageProbe, types::ImageDimensions};
use async_trait::async_trait;
use image::ImageReader;
use reqwest::Client as ReqwestClient;
use std::io::Cursor;
use std::time::Duration;
use tracing::debug;

/// An `ImageProbe` that downloads the image over HTTP and decodes its header.
///
/// Requests are bounded by a timeout and a maximum body size, and are never
/// retried.
#[derive(Clone, Debug)]
pub struct HttpImageProbe {
    client: ReqwestClient,
    max_bytes: usize,
}

impl HttpImageProbe {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

    /// Creates a new `HttpImageProbe`.
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, MetadataError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(MetadataError::ReqwestClientBuild)?;
        Ok(Self { client, max_bytes })
    }

    fn too_large(&self, url: &str) -> MetadataError {
        MetadataError::ProbeTooLarge {
            url: url.to_string(),
            limit: self.max_bytes,
        }
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<ImageDimensions, MetadataError> {
        debug!(url, "Probing image dimensions");
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MetadataError::ProbeRequest)?;

        if !response.status().is_success() {
            return Err(MetadataError::ProbeStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            if length > self.max_bytes as u64 {
                return Err(self.too_large(url));
            }
        }

        // Content-Length may be absent, so the limit is enforced while reading.
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(MetadataError::ProbeRequest)?
        {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(self.too_large(url));
            }
            body.extend_from_slice(&chunk);
        }

        dimensions_from_bytes(&body)
    }
}

/// Reads width and height from an encoded image without decoding its pixels.
pub fn dimensions_from_bytes(bytes: &[u8]) -> Result<ImageDimensions, MetadataError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| MetadataError::ProbeDecode(e.to_string()))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| MetadataError::ProbeDecode(e.to_string()))?;
    Ok(ImageDimensions { width, height })
}
