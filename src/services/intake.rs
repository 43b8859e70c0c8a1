// src/services/intake.rs
//! Validation for the two input paths of the generator page.

use std::path::Path;

use crate::models::intake::{UploadedAsset, VideoLinkReference, VideoPreview};

pub const ALLOWED_EXTENSIONS: [&str; 4] = ["mp3", "mp4", "wav", "m4a"];

/// Value for the `accept` attribute of the file input.
pub const ACCEPT_ATTRIBUTE: &str = ".mp3,.mp4,.wav,.m4a";

const YOUTUBE_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("❌ Unsupported file type for '{0}'. Supported formats: MP3, MP4, WAV, M4A")]
    UnsupportedExtension(String),

    #[error("❌ Please enter a valid YouTube URL")]
    InvalidYouTubeUrl,
}

pub fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

pub fn is_allowed_extension(filename: &str) -> bool {
    file_extension(filename)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// MIME type for an accepted extension.
pub fn detect_mime_type(filename: &str) -> Option<&'static str> {
    let mime = match file_extension(filename)?.as_str() {
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        "wav" => "audio/wav",
        "m4a" => "audio/mp4",
        _ => return None,
    };
    Some(mime)
}

/// Accepts a file by extension only; the declared content type wins over the
/// extension-derived one when the client sent it.
pub fn accept_file(
    filename: &str,
    size: u64,
    declared_mime: Option<&str>,
) -> Result<UploadedAsset, IntakeError> {
    if !is_allowed_extension(filename) {
        return Err(IntakeError::UnsupportedExtension(filename.to_string()));
    }

    let mime_type = declared_mime
        .filter(|m| !m.is_empty() && *m != "application/octet-stream")
        .or_else(|| detect_mime_type(filename))
        .unwrap_or("application/octet-stream")
        .to_string();

    Ok(UploadedAsset {
        name: filename.to_string(),
        size,
        mime_type,
    })
}

pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_MARKERS.iter().any(|marker| url.contains(marker))
}

/// `Ok(None)` means the field was left empty, which is not an error.
pub fn accept_link(url: &str) -> Result<Option<VideoLinkReference>, IntakeError> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(None);
    }
    if !is_youtube_url(url) {
        return Err(IntakeError::InvalidYouTubeUrl);
    }
    Ok(Some(VideoLinkReference { url: url.to_string() }))
}

pub fn mock_preview() -> VideoPreview {
    VideoPreview {
        title: "Sample Podcast Episode",
        duration: "45:32",
        channel: "Tech Talks",
    }
}
