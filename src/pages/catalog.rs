// src/pages/catalog.rs
// Static copy for the decorative sections. Nothing here is computed.

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct ImpactMetric {
    pub ring_percent: u8,
    pub value: &'static str,
    pub label: &'static str,
    pub today: &'static str,
}

pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    pub badge: &'static str,
    pub badge_bg: &'static str,
}

pub struct QuickAction {
    pub label: &'static str,
    pub hint: &'static str,
    pub target: QuickTarget,
}

pub enum QuickTarget {
    Link(&'static str),
    Notice(&'static str),
}

pub struct HomeNotice {
    pub key: &'static str,
    pub message: &'static str,
    pub informational: bool,
}

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub perks: &'static [&'static str],
    pub button: &'static str,
    pub featured: bool,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct AnalyticsMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

pub struct TopicShare {
    pub topic: &'static str,
    pub mentions: u32,
    pub relevance: u32,
}

pub struct OverviewCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub status: &'static str,
}

pub static HOME_NOTICES: [HomeNotice; 4] = [
    HomeNotice { key: "analytics", message: "Analytics coming soon!", informational: true },
    HomeNotice { key: "inspired", message: "Check out the sample content in the main app!", informational: false },
    HomeNotice { key: "demo", message: "Demo available in the main app!", informational: true },
    HomeNotice { key: "support", message: "Support: support@podcastagent.com", informational: false },
];

pub const SIDEBAR_QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction { label: "🎙️ Upload Podcast", hint: "Go directly to upload", target: QuickTarget::Link("/generator") },
    QuickAction { label: "📊 View Analytics", hint: "See your content stats", target: QuickTarget::Notice("analytics") },
    QuickAction { label: "💡 Get Inspired", hint: "See example content", target: QuickTarget::Notice("inspired") },
];

pub const HERO_QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction { label: "🚀 Start Creating", hint: "Begin content generation", target: QuickTarget::Link("/generator") },
    QuickAction { label: "📖 Learn More", hint: "Explore features", target: QuickTarget::Link("/landing") },
    QuickAction { label: "🎥 View Demo", hint: "See it in action", target: QuickTarget::Notice("demo") },
    QuickAction { label: "💬 Get Support", hint: "Need help?", target: QuickTarget::Notice("support") },
];

pub const RECENT_ACTIVITY: [&str; 4] = [
    "🎵 New podcast processed - 'Tech Trends 2025'",
    "📱 5 Twitter threads generated",
    "💼 3 LinkedIn posts created",
    "📝 Blog post outline ready",
];

pub const IMPACT_METRICS: [ImpactMetric; 4] = [
    ImpactMetric { ring_percent: 70, value: "1,247", label: "Podcasts Processed", today: "+12 today" },
    ImpactMetric { ring_percent: 85, value: "18,705", label: "Content Pieces", today: "+156 today" },
    ImpactMetric { ring_percent: 92, value: "342", label: "Happy Creators", today: "+8 today" },
    ImpactMetric { ring_percent: 95, value: "4,980", label: "Hours Saved", today: "+40 today" },
];

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        title: "⚡ Lightning Fast Processing",
        body: "Upload your podcast and get 15+ content pieces in under 10 minutes. Our AI works at superhuman speed while maintaining quality.",
        badge: "Average Processing Time: 8 minutes",
        badge_bg: "#e3f2fd",
    },
    Highlight {
        title: "🤖 Advanced AI Technology",
        body: "Powered by the latest language models, our AI understands context, tone, and audience to create content that resonates.",
        badge: "97% Accuracy Rate",
        badge_bg: "#e8f5e8",
    },
    Highlight {
        title: "🎯 Platform-Optimized Content",
        body: "Each piece is tailored for its specific platform - Twitter threads with hooks, LinkedIn posts with professional tone, blog posts with SEO optimization.",
        badge: "6 Different Content Types",
        badge_bg: "#f3e5f5",
    },
    Highlight {
        title: "📈 Proven Results",
        body: "Creators see 300% increase in engagement and save 10+ hours per week. Turn your podcast into a content empire.",
        badge: "300% Engagement Boost",
        badge_bg: "#fff3e0",
    },
];

pub const LIVE_STATUS: [&str; 3] = [
    "🟢 AI Processing: Operational",
    "🟢 Content Generation: Optimal",
    "🟢 All Systems: Ready",
];

pub const PROBLEMS: [(&str, [&str; 4]); 2] = [
    (
        "⏰ Time-Consuming Manual Work",
        [
            "Hours spent transcribing audio",
            "Manual content adaptation for each platform",
            "Repetitive formatting and editing",
            "Missing opportunities for viral content",
        ],
    ),
    (
        "💸 Missed Revenue Opportunities",
        [
            "Content sits unused after initial publish",
            "Limited reach across platforms",
            "Inconsistent posting schedules",
            "No time for audience engagement",
        ],
    ),
];

pub const SOLUTION_STATS: [Stat; 4] = [
    Stat { value: "🎙️ 1", label: "Podcast Upload" },
    Stat { value: "⚡ 10", label: "Minutes Processing" },
    Stat { value: "📱 15+", label: "Content Pieces" },
    Stat { value: "🚀 ∞", label: "Platform Reach" },
];

pub const WORKFLOW_STEPS: [Card; 4] = [
    Card {
        icon: "🎵",
        title: "Upload Your Content",
        body: "Drop your MP3, MP4, or share a YouTube link. We support all major audio formats.",
    },
    Card {
        icon: "🤖",
        title: "AI Transcription & Analysis",
        body: "Our AI transcribes your content and identifies key topics, quotes, and insights.",
    },
    Card {
        icon: "✍️",
        title: "Content Generation",
        body: "Generate Twitter threads, LinkedIn posts, blog outlines, and more - all optimized for each platform.",
    },
    Card {
        icon: "📱",
        title: "Publish & Scale",
        body: "Copy, download, or directly publish to your favorite platforms. Watch your reach explode!",
    },
];

pub const FEATURES: [Card; 6] = [
    Card {
        icon: "🐦",
        title: "Twitter Threads",
        body: "Engaging threads with hooks, key points, and CTAs that drive engagement and followers.",
    },
    Card {
        icon: "💼",
        title: "LinkedIn Posts",
        body: "Professional posts optimized for LinkedIn's algorithm with industry insights and thought leadership.",
    },
    Card {
        icon: "📝",
        title: "Blog Posts",
        body: "SEO-optimized blog outlines and full articles ready for your website or Medium.",
    },
    Card {
        icon: "📬",
        title: "Newsletter Content",
        body: "Engaging newsletter snippets perfect for Substack, ConvertKit, or Mailchimp.",
    },
    Card {
        icon: "🎬",
        title: "Video Scripts",
        body: "YouTube Shorts and TikTok scripts with hooks, punchlines, and clear CTAs.",
    },
    Card {
        icon: "⏰",
        title: "Smart Timestamps",
        body: "Automatic chapter detection and timestamp generation for easy navigation.",
    },
];

pub const USE_CASES: [(&str, &str); 6] = [
    ("🎙️ Podcast Creators", "Maximize reach from every episode"),
    ("📱 Content Creators", "Repurpose long-form content efficiently"),
    ("🏢 Marketing Agencies", "Scale content production for clients"),
    ("💼 Business Owners", "Turn webinars into marketing content"),
    ("🎓 Educators", "Create educational content across platforms"),
    ("📺 YouTubers", "Transform videos into social media content"),
];

pub const PRICING: [PricingTier; 3] = [
    PricingTier {
        name: "🆓 Free",
        price: "$0",
        perks: &["✅ 3 uploads per month", "✅ Basic content types", "✅ Standard processing", "❌ No priority support"],
        button: "Get Started",
        featured: false,
    },
    PricingTier {
        name: "⭐ Pro",
        price: "$29",
        perks: &["✅ Unlimited uploads", "✅ All content types", "✅ Priority processing", "✅ Advanced templates", "✅ API access"],
        button: "Start Free Trial",
        featured: true,
    },
    PricingTier {
        name: "🚀 Agency",
        price: "$99",
        perks: &["✅ Everything in Pro", "✅ Team collaboration", "✅ White-label options", "✅ Custom integrations", "✅ Priority support"],
        button: "Contact Sales",
        featured: false,
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Podcast Host @TechTalks",
        quote: "This tool saved me 10+ hours per week. My Twitter engagement increased by 300% since I started using it!",
        avatar: "👩‍💼",
    },
    Testimonial {
        name: "Mike Chen",
        role: "Content Creator @GrowthHacking",
        quote: "Game-changer! I went from 1 piece of content per week to 15+ pieces. My audience growth has been incredible.",
        avatar: "👨‍💻",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Marketing Agency Owner",
        quote: "Our clients love the quality and speed. We've been able to take on 3x more clients with the same team size.",
        avatar: "👩‍🚀",
    },
];

pub const OVERVIEW_CARDS: [OverviewCard; 4] = [
    OverviewCard { icon: "🐦", title: "Twitter Thread", status: "6 tweets generated" },
    OverviewCard { icon: "💼", title: "LinkedIn Post", status: "Professional ready" },
    OverviewCard { icon: "📝", title: "Blog Outline", status: "SEO optimized" },
    OverviewCard { icon: "📬", title: "Newsletter", status: "Email ready" },
];

pub const WHAT_YOU_GET: [&str; 5] = [
    "🐦 Engaging Twitter threads",
    "💼 Professional LinkedIn posts",
    "📝 SEO-optimized blog outlines",
    "📬 Newsletter-ready content",
    "🎬 Video scripts for shorts",
];

pub const ANALYTICS: [AnalyticsMetric; 4] = [
    AnalyticsMetric { label: "📊 Total Duration", value: "45:32", delta: "2:15" },
    AnalyticsMetric { label: "💬 Word Count", value: "6,847", delta: "234" },
    AnalyticsMetric { label: "🎯 Key Topics", value: "7", delta: "1" },
    AnalyticsMetric { label: "⭐ Quotable Moments", value: "12", delta: "3" },
];

pub const TOPICS: [TopicShare; 5] = [
    TopicShare { topic: "Content Strategy", mentions: 23, relevance: 95 },
    TopicShare { topic: "Social Media", mentions: 18, relevance: 87 },
    TopicShare { topic: "Productivity", mentions: 15, relevance: 82 },
    TopicShare { topic: "Marketing", mentions: 12, relevance: 78 },
    TopicShare { topic: "Technology", mentions: 8, relevance: 65 },
];

pub const CONTENT_PIECES_TODAY: &str = "156";

pub fn home_notice(key: &str) -> Option<&'static HomeNotice> {
    HOME_NOTICES.iter().find(|n| n.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_action_notices_resolve() {
        for action in SIDEBAR_QUICK_ACTIONS.iter().chain(HERO_QUICK_ACTIONS.iter()) {
            if let QuickTarget::Notice(key) = &action.target {
                assert!(home_notice(key).is_some(), "missing notice for {key}");
            }
        }
        assert!(home_notice("nope").is_none());
    }

    #[test]
    fn exactly_one_featured_pricing_tier() {
        assert_eq!(PRICING.iter().filter(|t| t.featured).count(), 1);
    }
}
