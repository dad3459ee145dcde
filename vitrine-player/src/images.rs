//! Fetching product images into iced handles.

use std::path::PathBuf;

use iced::widget::image::Handle;
use thiserror::Error;
use vitrine_model::ImageRef;

/// Image load failures. Kept cloneable so they can travel inside messages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImageLoadError {
    #[error("request for {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },
    #[error("{0} returned no image data")]
    Empty(String),
}

/// Fetch raw bytes for an image reference.
pub async fn fetch_bytes(image: ImageRef) -> Result<Vec<u8>, ImageLoadError> {
    let bytes = match &image {
        ImageRef::Remote(url) if url.scheme() == "file" => {
            let path = url.to_file_path().map_err(|_| ImageLoadError::Io {
                path: PathBuf::from(url.path()),
                reason: "not a local file url".to_string(),
            })?;
            read_local(path).await?
        }
        ImageRef::Remote(url) => {
            log::trace!("fetching image {url}");
            let response = reqwest::get(url.clone()).await.map_err(|err| {
                ImageLoadError::Request {
                    url: url.to_string(),
                    reason: err.to_string(),
                }
            })?;

            if !response.status().is_success() {
                return Err(ImageLoadError::Status {
                    url: url.to_string(),
                    status: response.status().as_u16(),
                });
            }

            response
                .bytes()
                .await
                .map_err(|err| ImageLoadError::Request {
                    url: url.to_string(),
                    reason: err.to_string(),
                })?
                .to_vec()
        }
        ImageRef::Local(path) => read_local(path.clone()).await?,
    };

    if bytes.is_empty() {
        return Err(ImageLoadError::Empty(image.to_string()));
    }
    Ok(bytes)
}

async fn read_local(path: PathBuf) -> Result<Vec<u8>, ImageLoadError> {
    tokio::fs::read(&path)
        .await
        .map_err(|err| ImageLoadError::Io {
            path,
            reason: err.to_string(),
        })
}

/// Fetch an image and wrap it in a renderer handle. Decoding happens in the
/// renderer, so an undecodable file shows up as an empty image rather than
/// an error here.
pub async fn load(image: ImageRef) -> Result<Handle, ImageLoadError> {
    fetch_bytes(image).await.map(Handle::from_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_local_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();
        let image = ImageRef::Local(file.path().to_path_buf());

        let bytes = fetch_bytes(image).await.unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[tokio::test]
    async fn missing_local_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let image = ImageRef::Local(dir.path().join("missing.png"));
        let err = fetch_bytes(image).await.unwrap_err();
        assert!(matches!(err, ImageLoadError::Io { .. }));
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let image = ImageRef::Local(file.path().to_path_buf());
        let err = fetch_bytes(image).await.unwrap_err();
        assert!(matches!(err, ImageLoadError::Empty(_)));
    }
}
