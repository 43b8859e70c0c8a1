// src/models/settings.rs
//! Sidebar settings of the generator page.
//!
//! Only widget-level constraints apply: the emoji slider is clamped to its
//! bounds and select boxes fall back to their default when handed a label
//! they do not offer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    TwitterThread,
    LinkedinPost,
    BlogPost,
    Newsletter,
    YoutubeShorts,
    TiktokScript,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::TwitterThread,
        ContentType::LinkedinPost,
        ContentType::BlogPost,
        ContentType::Newsletter,
        ContentType::YoutubeShorts,
        ContentType::TiktokScript,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentType::TwitterThread => "Twitter Thread",
            ContentType::LinkedinPost => "LinkedIn Post",
            ContentType::BlogPost => "Blog Post",
            ContentType::Newsletter => "Newsletter",
            ContentType::YoutubeShorts => "YouTube Shorts",
            ContentType::TiktokScript => "TikTok Script",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ContentType::TwitterThread => "🐦",
            ContentType::LinkedinPost => "💼",
            ContentType::BlogPost => "📝",
            ContentType::Newsletter => "📬",
            ContentType::YoutubeShorts => "🎬",
            ContentType::TiktokScript => "🎵",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ContentType::TwitterThread => "Engaging threads with hooks and CTAs",
            ContentType::LinkedinPost => "Professional posts with industry insights",
            ContentType::BlogPost => "SEO-optimized articles and outlines",
            ContentType::Newsletter => "Email-ready content snippets",
            ContentType::YoutubeShorts => "Short-form video scripts",
            ContentType::TiktokScript => "Viral short-form content",
        }
    }

    /// URL path segment and form field suffix.
    pub fn slug(self) -> &'static str {
        match self {
            ContentType::TwitterThread => "twitter_thread",
            ContentType::LinkedinPost => "linkedin_post",
            ContentType::BlogPost => "blog_post",
            ContentType::Newsletter => "newsletter",
            ContentType::YoutubeShorts => "youtube_shorts",
            ContentType::TiktokScript => "tiktok_script",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ct| ct.slug() == slug)
    }

    pub fn enabled_by_default(self) -> bool {
        matches!(
            self,
            ContentType::TwitterThread | ContentType::LinkedinPost | ContentType::BlogPost
        )
    }

    pub fn form_field(self) -> String {
        format!("type_{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Engaging,
    Educational,
    Humorous,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Engaging,
        Tone::Educational,
        Tone::Humorous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Engaging => "Engaging",
            Tone::Educational => "Educational",
            Tone::Humorous => "Humorous",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl ContentLength {
    pub const ALL: [ContentLength; 3] = [ContentLength::Short, ContentLength::Medium, ContentLength::Long];

    pub fn label(self) -> &'static str {
        match self {
            ContentLength::Short => "Short",
            ContentLength::Medium => "Medium",
            ContentLength::Long => "Long",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    #[default]
    General,
    BusinessProfessionals,
    TechEnthusiasts,
    Entrepreneurs,
    Educators,
    Creators,
}

impl Audience {
    pub const ALL: [Audience; 6] = [
        Audience::General,
        Audience::BusinessProfessionals,
        Audience::TechEnthusiasts,
        Audience::Entrepreneurs,
        Audience::Educators,
        Audience::Creators,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Audience::General => "General",
            Audience::BusinessProfessionals => "Business Professionals",
            Audience::TechEnthusiasts => "Tech Enthusiasts",
            Audience::Entrepreneurs => "Entrepreneurs",
            Audience::Educators => "Educators",
            Audience::Creators => "Creators",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

pub const EMOJI_MIN: u8 = 0;
pub const EMOJI_MAX: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSettings {
    pub content_types: BTreeSet<ContentType>,
    pub tone: Tone,
    pub length: ContentLength,
    pub audience: Audience,
    pub emoji_count: u8,
    pub include_hashtags: bool,
    pub include_cta: bool,
    pub include_timestamps: bool,
    pub detect_speakers: bool,
    pub auto_generate: bool,
    pub save_template: bool,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            content_types: ContentType::ALL
                .into_iter()
                .filter(|ct| ct.enabled_by_default())
                .collect(),
            tone: Tone::default(),
            length: ContentLength::default(),
            audience: Audience::default(),
            emoji_count: 5,
            include_hashtags: true,
            include_cta: true,
            include_timestamps: false,
            detect_speakers: false,
            auto_generate: true,
            save_template: false,
        }
    }
}

impl ContentSettings {
    pub fn is_enabled(&self, content_type: ContentType) -> bool {
        self.content_types.contains(&content_type)
    }

    /// Enabled content types in their fixed display order.
    pub fn enabled_types(&self) -> Vec<ContentType> {
        self.content_types.iter().copied().collect()
    }

    /// Builds settings from a submitted sidebar form. HTML omits unchecked
    /// checkboxes, so a missing key means `false`.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let checked = |key: &str| form.contains_key(key);

        let emoji_count = form
            .get("emoji_count")
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|n| n.clamp(EMOJI_MIN as i64, EMOJI_MAX as i64) as u8)
            .unwrap_or(defaults.emoji_count);

        Self {
            content_types: ContentType::ALL
                .into_iter()
                .filter(|ct| checked(&ct.form_field()))
                .collect(),
            tone: form
                .get("tone")
                .and_then(|v| Tone::from_label(v))
                .unwrap_or(defaults.tone),
            length: form
                .get("length")
                .and_then(|v| ContentLength::from_label(v))
                .unwrap_or(defaults.length),
            audience: form
                .get("audience")
                .and_then(|v| Audience::from_label(v))
                .unwrap_or(defaults.audience),
            emoji_count,
            include_hashtags: checked("include_hashtags"),
            include_cta: checked("include_cta"),
            include_timestamps: checked("include_timestamps"),
            detect_speakers: checked("detect_speakers"),
            auto_generate: checked("auto_generate"),
            save_template: checked("save_template"),
        }
    }
}
