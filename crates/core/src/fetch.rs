//! Fetch a remote image and encode it as a `data:` URL.
//!
//! One request, no retries. Failures are reported to a caller-supplied
//! callback by [`fetch_data_url`], or returned by [`try_fetch_data_url`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response; carries the status text.
    #[error("{0}")]
    Status(String),
}

/// A downloaded file ready to attach to an upload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedFiles {
    pub added_files: Vec<AttachedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    pub files: AddedFiles,
    pub data_url: String,
}

impl FetchedImage {
    pub fn from_bytes(url: &str, bytes: Vec<u8>) -> Self {
        let data_url = encode_data_url(&bytes);
        Self {
            files: AddedFiles {
                added_files: vec![AttachedFile { name: file_name_from_url(url).to_string(), bytes }],
            },
            data_url,
        }
    }
}

/// Fetch `url`, passing any failure message to `on_error`.
pub fn fetch_data_url(url: &str, on_error: impl FnOnce(String)) -> Option<FetchedImage> {
    match try_fetch_data_url(url) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(url, error = %e, "image fetch failed");
            on_error(e.to_string());
            None
        }
    }
}

pub fn try_fetch_data_url(url: &str) -> Result<FetchedImage, FetchError> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        // reqwest drops the server's reason phrase; custom phrases are lost.
        let text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        return Err(FetchError::Status(text));
    }

    let bytes = response.bytes()?.to_vec();
    debug!(url, bytes = bytes.len(), "fetched image");
    Ok(FetchedImage::from_bytes(url, bytes))
}

/// Last path segment of `url`, ignoring any query or fragment.
pub fn file_name_from_url(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let path = &url[..end];
    path.rsplit('/').next().unwrap_or(path)
}

pub fn encode_data_url(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_strips_query_and_fragment() {
        assert_eq!(file_name_from_url("https://cdn.example.com/img/logo.png"), "logo.png");
        assert_eq!(file_name_from_url("https://cdn.example.com/img/logo.png?v=2"), "logo.png");
        assert_eq!(file_name_from_url("https://cdn.example.com/a/b.png#top"), "b.png");
        assert_eq!(file_name_from_url("https://cdn.example.com/dir/"), "");
        assert_eq!(file_name_from_url("plain.png"), "plain.png");
    }

    #[test]
    fn data_url_is_base64_png() {
        assert_eq!(encode_data_url(b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(encode_data_url(&[]), "data:image/png;base64,");
    }
}
