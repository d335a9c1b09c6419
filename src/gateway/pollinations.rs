use super::{ImageGateway, send_with_retry};
use crate::error::{AssetLoadError, GatewayError};
use crate::model::{DecodedImage, ImageHandle};
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const SEED_RANGE: u64 = 1_000_000;

/// Generador de imágenes por URL: la imagen se crea al descargarla
pub struct PollinationsImages {
    client: Client,
    base: Url,
    counter: AtomicU64,
}

impl PollinationsImages {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base = Url::parse(endpoint.trim()).map_err(|_| GatewayError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(GatewayError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
            });
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| GatewayError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base,
            counter: AtomicU64::new(0),
        })
    }

    /// Semilla distinta en cada llamada para que dos retos no repitan imagen
    fn next_seed(&self) -> u64 {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::from(d.subsec_nanos()))
            .unwrap_or(0);
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        (nanos ^ n.wrapping_mul(7_919)) % SEED_RANGE
    }

    pub fn image_url(&self, prompt: &str, seed: u64) -> Result<Url, GatewayError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidEndpoint {
                endpoint: self.base.to_string(),
            })?
            .pop_if_empty()
            .push("prompt")
            .push(prompt);
        url.query_pairs_mut()
            .append_pair("width", &WIDTH.to_string())
            .append_pair("height", &HEIGHT.to_string())
            .append_pair("seed", &seed.to_string())
            .append_pair("nologo", "true");
        Ok(url)
    }
}

impl ImageGateway for PollinationsImages {
    fn generate(&self, prompt: &str) -> Result<ImageHandle, GatewayError> {
        let url = self.image_url(prompt, self.next_seed())?;
        debug!("image url for \"{prompt}\": {url}");
        Ok(ImageHandle::generated(url.to_string()))
    }

    fn preload(&self, image: &ImageHandle) -> Result<DecodedImage, AssetLoadError> {
        let url = image.url.as_str();
        let response = send_with_retry(|| self.client.get(url), self.base.as_str()).map_err(
            |err| AssetLoadError::Unreachable {
                url: url.to_string(),
                reason: err.to_string(),
            },
        )?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssetLoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.starts_with("image/") {
            return Err(AssetLoadError::NotAnImage {
                url: url.to_string(),
                content_type,
            });
        }

        let bytes = response.bytes().map_err(|err| AssetLoadError::Unreachable {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
        decode_image(url, &bytes)
    }
}

pub fn decode_image(url: &str, bytes: &[u8]) -> Result<DecodedImage, AssetLoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|err| AssetLoadError::Decode {
        url: url.to_string(),
        reason: err.to_string(),
    })?;
    let rgba = decoded.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        rgba: rgba.into_raw(),
    })
}
