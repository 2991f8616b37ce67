use serde::Serialize;
use url::Url;

/// Externally hosted picture shown under the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroImage {
    pub url: String,
    pub media_type: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageLoadError {
    #[error("image reference '{reference}' is not a valid URL: {source}")]
    InvalidUrl {
        reference: String,
        #[source]
        source: url::ParseError,
    },
    #[error("image reference must use http or https, found '{scheme}'")]
    UnsupportedScheme { scheme: String },
    #[error("'{reference}' does not point at an image file")]
    NotAnImage { reference: String },
}

impl HeroImage {
    /// Resolve an image reference, checking it is an absolute web address to an image file.
    pub fn load(reference: &str, caption: impl Into<String>) -> Result<Self, ImageLoadError> {
        let url = Url::parse(reference.trim()).map_err(|source| ImageLoadError::InvalidUrl {
            reference: reference.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ImageLoadError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }

        let media_type = mime_guess::from_path(url.path())
            .iter()
            .find(|guess| guess.type_() == mime::IMAGE)
            .ok_or_else(|| ImageLoadError::NotAnImage {
                reference: reference.to_string(),
            })?;

        Ok(Self {
            url: url.to_string(),
            media_type: media_type.essence_str().to_string(),
            caption: caption.into(),
        })
    }
}

/// Instructions rendered in place of the picture when the reference cannot be used.
pub fn fallback_instructions() -> Vec<&'static str> {
    vec![
        "To add your own image:",
        "1. Host the image (.jpg, .png, .webp) somewhere reachable over http(s)",
        "2. Set APP_HERO_IMAGE_URL to its full address",
        "3. Make sure the address ends with the exact file name, including the extension",
    ]
}
