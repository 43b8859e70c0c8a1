// src/services/content_provider.rs
//! Content generation seam.
//!
//! Rendering only ever talks to [`ContentProvider`]. The shipped
//! implementation is [`MockContentProvider`], which returns the same sample
//! pieces for every session.

use async_trait::async_trait;

use crate::models::content::{ContentBlock, ContentPiece};
use crate::models::settings::{ContentSettings, ContentType};

/// Text extracted from the uploaded episode. Nothing produces one yet.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub text: String,
}

#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn generate(
        &self,
        content_type: ContentType,
        transcript: Option<&Transcript>,
        settings: &ContentSettings,
    ) -> ContentPiece;

    fn name(&self) -> &'static str;
}

/// Fixed sample content. Ignores the transcript and the settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockContentProvider;

#[async_trait]
impl ContentProvider for MockContentProvider {
    async fn generate(
        &self,
        content_type: ContentType,
        _transcript: Option<&Transcript>,
        _settings: &ContentSettings,
    ) -> ContentPiece {
        sample_piece(content_type)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

const THREAD: [&str; 6] = [
    "🎙️ Just discovered an amazing insight about content creation that will change how you think about podcasting...",
    "The key is not just creating content, but creating content that resonates with your audience on multiple platforms 🎯",
    "\"Content is king, but context is kingdom\" - This quote from the podcast really hit home 👑",
    "Here are 3 actionable strategies mentioned:\n• Repurpose everything\n• Know your audience\n• Stay consistent",
    "The most surprising stat: 73% of creators don't repurpose their content effectively 📈",
    "What's your biggest content creation challenge? Drop a comment below! 👇",
];

const BLOG_OUTLINE: [(&str, &str, &str); 7] = [
    ("🎯", "Introduction", "Hook about content creation challenges"),
    ("📊", "Section 1", "Why Repurposing Matters"),
    ("🚀", "Section 2", "The 5-Platform Strategy"),
    ("🛠️", "Section 3", "Tools and Techniques"),
    ("📈", "Section 4", "Measuring Success"),
    ("✅", "Conclusion", "Action steps and next steps"),
    ("📞", "CTA", "Download free template"),
];

fn sample_piece(content_type: ContentType) -> ContentPiece {
    match content_type {
        ContentType::TwitterThread => twitter_thread(),
        ContentType::LinkedinPost => linkedin_post(),
        ContentType::BlogPost => blog_outline(),
        // No samples exist for the remaining formats.
        ContentType::Newsletter | ContentType::YoutubeShorts | ContentType::TiktokScript => {
            ContentPiece::new(
                content_type,
                format!("{} {}", content_type.icon(), content_type.label()),
                "#667eea",
            )
        }
    }
}

fn twitter_thread() -> ContentPiece {
    let total = THREAD.len();
    THREAD.iter().enumerate().fold(
        ContentPiece::new(
            ContentType::TwitterThread,
            format!("🧵 Twitter Thread ({total} tweets)"),
            "#1da1f2",
        ),
        |piece, (i, text)| {
            piece.with_block(ContentBlock::ThreadPost {
                index: i + 1,
                total,
                text: (*text).to_string(),
            })
        },
    )
}

fn linkedin_post() -> ContentPiece {
    ContentPiece::new(ContentType::LinkedinPost, "💼 LinkedIn Post", "#0077b5")
        .with_block(ContentBlock::Paragraph {
            text: "The content creation landscape is evolving rapidly, and podcasters who adapt will thrive."
                .into(),
        })
        .with_block(ContentBlock::Paragraph {
            text: "Key insights from today's discussion:".into(),
        })
        .with_block(ContentBlock::Checklist {
            items: vec![
                "Authenticity beats perfection every time".into(),
                "Consistent value delivery builds trust".into(),
                "Multi-platform thinking from day one".into(),
            ],
        })
        .with_block(ContentBlock::Quote {
            text: "Your audience doesn't just want content, they want connection.".into(),
        })
        .with_block(ContentBlock::Paragraph {
            text: "What strategies have worked best for your content? Let's discuss in the comments."
                .into(),
        })
        .with_block(ContentBlock::Hashtags {
            tags: vec![
                "ContentCreation".into(),
                "Podcasting".into(),
                "Marketing".into(),
                "Leadership".into(),
            ],
        })
}

fn blog_outline() -> ContentPiece {
    BLOG_OUTLINE
        .iter()
        .fold(
            ContentPiece::new(ContentType::BlogPost, "📝 Blog Post Outline", "#ff6b35")
                .with_title("The Ultimate Guide to Content Repurposing for Podcasters"),
            |piece, (icon, label, text)| {
                piece.with_block(ContentBlock::OutlineEntry {
                    icon: (*icon).to_string(),
                    label: (*label).to_string(),
                    text: (*text).to_string(),
                })
            },
        )
        .with_block(ContentBlock::Footnote {
            text: "Estimated read time: 8-10 minutes | Word count: ~2,000 words".into(),
        })
}
