use serde::Serialize;

use super::settings::ContentType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph { text: String },
    /// One post of a numbered thread ("3/6").
    ThreadPost { index: usize, total: usize, text: String },
    Checklist { items: Vec<String> },
    Quote { text: String },
    OutlineEntry { icon: String, label: String, text: String },
    Hashtags { tags: Vec<String> },
    Footnote { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentPiece {
    pub content_type: ContentType,
    pub heading: String,
    pub title: Option<String>,
    /// CSS colour used for the piece's accent border.
    pub accent: String,
    pub blocks: Vec<ContentBlock>,
}

impl ContentPiece {
    pub fn new(content_type: ContentType, heading: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            content_type,
            heading: heading.into(),
            title: None,
            accent: accent.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Buttons under each generated piece. None of them touch the clipboard,
/// the filesystem or the network; they only acknowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentAction {
    Copy,
    Download,
    Regenerate,
    Share,
}

impl ContentAction {
    pub const ALL: [ContentAction; 4] = [
        ContentAction::Copy,
        ContentAction::Download,
        ContentAction::Regenerate,
        ContentAction::Share,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ContentAction::Copy => "copy",
            ContentAction::Download => "download",
            ContentAction::Regenerate => "regenerate",
            ContentAction::Share => "share",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.slug() == slug)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ContentAction::Copy => "📋 Copy",
            ContentAction::Download => "📥 Download",
            ContentAction::Regenerate => "🔄 Regenerate",
            ContentAction::Share => "📤 Share",
        }
    }

    pub fn hint(self, content_type: ContentType) -> String {
        match self {
            ContentAction::Copy => format!("Copy {} to clipboard", content_type.label()),
            ContentAction::Download => format!("Download {} as text file", content_type.label()),
            ContentAction::Regenerate => format!("Generate new version of {}", content_type.label()),
            ContentAction::Share => format!("Share {}", content_type.label()),
        }
    }

    pub fn acknowledgment(self) -> &'static str {
        match self {
            ContentAction::Copy => "Content copied to clipboard!",
            ContentAction::Download => "Download started!",
            ContentAction::Regenerate => "Regenerating content...",
            ContentAction::Share => "Share link created!",
        }
    }

    /// Regenerate is reported as info, everything else as success.
    pub fn is_informational(self) -> bool {
        matches!(self, ContentAction::Regenerate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_slugs_resolve() {
        for action in ContentAction::ALL {
            assert_eq!(ContentAction::from_slug(action.slug()), Some(action));
        }
        assert_eq!(ContentAction::from_slug("print"), None);
    }

    #[test]
    fn acknowledgments_are_fixed() {
        assert_eq!(ContentAction::Copy.acknowledgment(), "Content copied to clipboard!");
        assert_eq!(ContentAction::Share.acknowledgment(), "Share link created!");
        assert!(ContentAction::Regenerate.is_informational());
        assert!(!ContentAction::Download.is_informational());
    }

    #[test]
    fn builder_collects_blocks_in_order() {
        let piece = ContentPiece::new(ContentType::BlogPost, "📝 Blog Post Outline", "#ff6b35")
            .with_title("A title")
            .with_block(ContentBlock::Paragraph { text: "one".into() })
            .with_block(ContentBlock::Footnote { text: "two".into() });
        assert_eq!(piece.title.as_deref(), Some("A title"));
        assert_eq!(piece.blocks.len(), 2);
        assert!(!piece.is_empty());
    }
}
