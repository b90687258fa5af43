use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

use crate::error::GenerateError;

/// One image supplied by the user, either a local file or a pasted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    File(PathBuf),
    Url(String),
}

impl ImageInput {
    /// Produce the string entry stored in the image list.
    ///
    /// URLs pass through untouched — broken links are not detected here and
    /// simply render as broken placeholders downstream. Files are read and
    /// embedded as data URLs so both forms are interchangeable.
    pub async fn embed(&self) -> Result<String, GenerateError> {
        match self {
            ImageInput::Url(url) => Ok(url.clone()),
            ImageInput::File(path) => encode_image_file(path).await,
        }
    }
}

/// Read an image file and encode it as a `data:` URL.
///
/// The image content is never validated or analyzed; it is only carried as
/// an embeddable string entry.
pub async fn encode_image_file(path: &Path) -> Result<String, GenerateError> {
    let image_data = tokio::fs::read(path).await?;
    debug!("Embedding image {} ({} bytes)", path.display(), image_data.len());
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        STANDARD.encode(&image_data)
    ))
}

/// MIME type from the file extension. Unknown extensions fall back to JPEG.
fn mime_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}
