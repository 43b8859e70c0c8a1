use serde::{Deserialize, Serialize};

/// Metadata of a file handed to the upload intake. The bytes themselves are
/// counted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl UploadedAsset {
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLinkReference {
    pub url: String,
}

/// The single active input of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InputSource {
    #[default]
    None,
    File(UploadedAsset),
    Link(VideoLinkReference),
}

impl InputSource {
    pub fn is_present(&self) -> bool {
        !matches!(self, InputSource::None)
    }
}

/// Fixed preview shown for any accepted YouTube link; nothing is fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoPreview {
    pub title: &'static str,
    pub duration: &'static str,
    pub channel: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct LinkForm {
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_source_presence() {
        assert!(!InputSource::None.is_present());
        assert!(InputSource::Link(VideoLinkReference {
            url: "https://youtu.be/abc123".into()
        })
        .is_present());
    }

    #[test]
    fn input_source_serializes_with_kind_tag() {
        let source = InputSource::File(UploadedAsset {
            name: "episode.mp3".into(),
            size: 2048,
            mime_type: "audio/mpeg".into(),
        });
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["kind"], "file");
        assert_eq!(value["name"], "episode.mp3");
        assert_eq!(value["size"], 2048);
    }
}
