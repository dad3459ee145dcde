use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ModelError;

/// Where a product image lives.
///
/// `http`, `https` and `file` URLs are remote references; anything else is
/// treated as a filesystem path relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageRef {
    Remote(Url),
    Local(PathBuf),
}

impl ImageRef {
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyImageRef);
        }

        let lower = trimmed.to_ascii_lowercase();
        let looks_like_url = ["http://", "https://", "file://"]
            .iter()
            .any(|scheme| lower.starts_with(scheme));

        if looks_like_url {
            let url = Url::parse(trimmed).map_err(|err| {
                ModelError::InvalidImageUrl {
                    raw: trimmed.to_string(),
                    reason: err.to_string(),
                }
            })?;
            Ok(ImageRef::Remote(url))
        } else {
            Ok(ImageRef::Local(PathBuf::from(trimmed)))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageRef::Remote(_))
    }
}

impl FromStr for ImageRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageRef::parse(s)
    }
}

impl TryFrom<String> for ImageRef {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ImageRef::parse(&value)
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Remote(url) => write!(f, "{url}"),
            ImageRef::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote() {
        let image = ImageRef::parse("https://cdn.example.com/latte.png").unwrap();
        assert!(image.is_remote());
        assert_eq!(image.to_string(), "https://cdn.example.com/latte.png");
    }

    #[test]
    fn bare_paths_are_local() {
        let image = ImageRef::parse("assets/latte.png").unwrap();
        assert_eq!(image, ImageRef::Local(PathBuf::from("assets/latte.png")));
    }

    #[test]
    fn empty_and_malformed_refs_are_rejected() {
        assert_eq!(ImageRef::parse("   "), Err(ModelError::EmptyImageRef));
        assert!(matches!(
            ImageRef::parse("https://"),
            Err(ModelError::InvalidImageUrl { .. })
        ));
    }
}
