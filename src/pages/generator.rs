// src/pages/generator.rs
//! The generator page: settings sidebar, intake panels, processing status,
//! generated content tabs and analytics.
//!
//! [`render`] is a pure function of a session snapshot and the pieces the
//! content provider produced for the enabled types. Every form posts back to
//! a `/generator/:session_id/...` route.

use super::catalog::{ANALYTICS, CONTENT_PIECES_TODAY, OVERVIEW_CARDS, TOPICS, WHAT_YOU_GET};
use super::{escape_html, footer, metric, notice, shell, Page, Route, APP_TITLE};
use crate::models::content::{ContentAction, ContentBlock, ContentPiece};
use crate::models::intake::{InputSource, UploadedAsset, VideoLinkReference};
use crate::models::settings::{
    Audience, ContentLength, ContentSettings, ContentType, Tone, EMOJI_MAX, EMOJI_MIN,
};
use crate::services::intake::{mock_preview, ACCEPT_ATTRIBUTE};
use crate::services::processing::{pipeline, ProcessingState, StepStatus};
use crate::session::SessionState;

const GENERATOR_STYLES: &str = r#"
.settings-header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 1rem; border-radius: 10px; margin-bottom: 1rem; text-align: center; }
.settings-group { margin: 1rem 0; padding-top: 1rem; border-top: 1px solid #dcdfe6; }
.settings-group label { display: block; margin: 0.35rem 0; font-size: 0.95rem; }
.settings-group select, .settings-group input[type=range] { width: 100%; margin-top: 0.25rem; }
.type-hint { display: block; color: #888; font-size: 0.8rem; margin-left: 1.5rem; }
.upload-area { border: 3px dashed #667eea; border-radius: 15px; padding: 2rem; text-align: center; background: linear-gradient(45deg, #f8f9ff, #ffffff); margin: 1rem 0; }
.intake-panel { background: white; border-radius: 10px; padding: 1.25rem; margin: 1rem 0; box-shadow: 0 2px 10px rgba(0,0,0,0.06); }
.intake-panel h4 { color: #667eea; }
.intake-panel input[type=text], .intake-panel input[type=url] { width: 100%; padding: 0.6rem; border: 1px solid #ccc; border-radius: 8px; margin: 0.5rem 0; }
.confirmation { background: #e8f5e8; padding: 1rem; border-radius: 10px; margin: 1rem 0; }
.confirmation h4 { color: #4caf50; }
.video-preview { background: #f8f9fa; padding: 1rem; border-radius: 10px; }
.pipeline-step { padding: 0.6rem 1rem; border-radius: 8px; margin: 0.4rem 0; }
.step-done { background: #e8f5e8; }
.step-pending, .step-actionable, .step-running { background: #e3f2fd; }
.progress { height: 12px; background: #e9ecef; border-radius: 6px; overflow: hidden; margin: 0.5rem 0; }
.progress-fill { height: 100%; background: linear-gradient(45deg, #667eea, #764ba2); transition: width 0.2s ease; }
.waiting { text-align: center; padding: 2rem; background: #f8f9fa; border-radius: 10px; }
.results-header { text-align: center; margin: 1rem 0; }
.results-header h2 { color: #667eea; }
.complete-banner { background: linear-gradient(45deg, #f8f9ff, #ffffff); padding: 1.5rem; border-radius: 15px; margin: 1rem 0; text-align: center; }
.mini-feature-card { background: white; padding: 1rem; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.08); text-align: center; }
.tab-strip { display: flex; gap: 0.5rem; border-bottom: 2px solid #e0e0e0; margin: 1.5rem 0 1rem; flex-wrap: wrap; }
.tab-strip a { padding: 0.5rem 1rem; text-decoration: none; border-radius: 8px 8px 0 0; }
.tab-strip a:hover { background: rgba(102, 126, 234, 0.1); }
.content-tab { margin: 1.5rem 0; }
.content-tab h3 { color: #667eea; border-bottom: 2px solid #e0e0e0; padding-bottom: 0.5rem; }
.piece { border-left: 4px solid; padding: 1rem 1.5rem; margin: 1rem 0; background: white; border-radius: 10px; }
.tweet { background: #f7f9fa; padding: 0.75rem 1rem; border-radius: 10px; margin: 0.5rem 0; }
.piece blockquote { border-left: 3px solid #ccc; padding-left: 1rem; margin: 1rem 0; font-style: italic; }
.footnote { background: #f0f2f6; padding: 0.75rem 1rem; border-radius: 5px; margin-top: 1rem; font-size: 0.85rem; }
.piece-actions { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.5rem; }
.piece-actions .btn { width: 100%; }
.empty-state { text-align: center; padding: 4rem 2rem; background: #f8f9fa; border-radius: 15px; margin: 2rem 0; }
.empty-state h3 { color: #667eea; }
.topic-chart { display: flex; align-items: flex-end; gap: 1rem; height: 220px; padding: 1rem; background: #fafbff; border-radius: 10px; }
.topic-bar { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; text-align: center; height: 100%; }
.topic-bar .bar { background: linear-gradient(180deg, #667eea, #764ba2); border-radius: 6px 6px 0 0; }
.topic-bar small { color: #666; margin-top: 0.25rem; }
"#;

/// Polls the progress endpoint while a run is active and reloads once it
/// completes so the pipeline steps update.
const PROGRESS_SCRIPT: &str = r#"
(function () {
    var bar = document.getElementById('progress');
    if (!bar) { return; }
    var fill = bar.querySelector('.progress-fill');
    var timer = setInterval(function () {
        fetch(bar.dataset.progressUrl)
            .then(function (res) { return res.json(); })
            .then(function (body) {
                fill.style.width = body.percent + '%';
                if (body.status !== 'running') {
                    clearInterval(timer);
                    window.location.reload();
                }
            })
            .catch(function () { clearInterval(timer); });
    }, 250);
})();
"#;

pub fn render(state: &SessionState, pieces: &[ContentPiece], max_upload_mb: u64) -> String {
    let base = format!("{}/{}", Route::Generator.path(), state.id);

    let flash = state.flash.as_ref().map(notice).unwrap_or_default();

    let results = if state.results_visible() {
        format!(
            "{}<hr>{}",
            results_section(&base, pieces),
            analytics_section()
        )
    } else {
        empty_state()
    };

    let body = format!(
        r#"<div class="main-header">
    <div class="main-title">🎙️ {APP_TITLE}</div>
    <div class="main-subtitle">Transform your podcasts into engaging content across all platforms</div>
</div>
{flash}
<div class="row cols-2">
    <section>
        <h2>🎵 Upload Your Content</h2>
        <div class="upload-area">
            <h3>📁 Choose Your Input Method</h3>
            <p>Drag and drop your files or paste a YouTube link to get started</p>
        </div>
        {file_panel}
        {link_panel}
        {recording_panel}
        {clear}
    </section>
    <section>
        <h2>⚡ Processing Status</h2>
        {status}
    </section>
</div>
<hr>
<div class="results-header">
    <h2>📊 Generated Content</h2>
    <p>Your podcast transformed into engaging content</p>
</div>
{results}
{footer}"#,
        file_panel = file_panel(&base, &state.input, max_upload_mb),
        link_panel = link_panel(&base, &state.input),
        recording_panel = recording_panel(),
        clear = clear_button(&base, &state.input),
        status = status_panel(&base, state),
        footer = footer("Transforming audio into engaging content"),
    );

    shell(Page {
        title: APP_TITLE,
        active: Route::Generator,
        extra_styles: GENERATOR_STYLES,
        sidebar: settings_sidebar(&base, &state.settings),
        body,
    })
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn options<T: Copy + PartialEq>(all: &[T], current: T, label: fn(T) -> &'static str) -> String {
    all.iter()
        .map(|&value| {
            let selected = if value == current { " selected" } else { "" };
            format!(r#"<option value="{0}"{selected}>{0}</option>"#, label(value))
        })
        .collect()
}

fn settings_sidebar(base: &str, settings: &ContentSettings) -> String {
    let types = ContentType::ALL
        .iter()
        .map(|&ct| {
            format!(
                r#"<label><input type="checkbox" name="{field}"{on}> {icon} {label}<span class="type-hint">{desc}</span></label>"#,
                field = ct.form_field(),
                on = checked(settings.is_enabled(ct)),
                icon = ct.icon(),
                label = ct.label(),
                desc = ct.description(),
            )
        })
        .collect::<String>();

    format!(
        r#"<form method="post" action="{base}/settings">
<div class="settings-header">
    <h2>⚙️ Content Settings</h2>
    <p>Customize your content generation</p>
</div>
<div class="settings-group">
    <h3>📝 Content Types to Generate</h3>
    <p><em>Select which types of content you want to create</em></p>
    {types}
</div>
<div class="settings-group">
    <h3>🔧 Advanced Options</h3>
    <label title="Include time markers in content"><input type="checkbox" name="include_timestamps"{timestamps}> ⏰ Timestamps</label>
    <label title="Identify different speakers"><input type="checkbox" name="detect_speakers"{speakers}> 👥 Speakers</label>
    <label title="Choose the overall tone for your content">🎭 Content Tone<select name="tone">{tones}</select></label>
    <label title="Select the desired length for generated content">📏 Content Length<select name="length">{lengths}</select></label>
    <label title="Who is your primary audience?">🎯 Target Audience<select name="audience">{audiences}</select></label>
</div>
<div class="settings-group">
    <h3>🎨 Style Preferences</h3>
    <label title="How many emojis to include">😊 Emoji Usage: {emoji}<input type="range" name="emoji_count" min="{EMOJI_MIN}" max="{EMOJI_MAX}" value="{emoji}"></label>
    <label title="Add relevant hashtags"><input type="checkbox" name="include_hashtags"{hashtags}> # Include Hashtags</label>
    <label title="Add engagement prompts"><input type="checkbox" name="include_cta"{cta}> 📢 Call-to-Action</label>
</div>
<div class="settings-group">
    <h3>⚡ Processing Options</h3>
    <label title="Generate all selected content types automatically"><input type="checkbox" name="auto_generate"{auto}> 🚀 Auto-generate all content</label>
    <label title="Save these settings for future use"><input type="checkbox" name="save_template"{template}> 💾 Save as template</label>
</div>
<button class="btn" type="submit">✔️ Apply Settings</button>
</form>
<div class="sidebar-section">
    <h4>📊 Quick Stats</h4>
    <p style="color: #666;">Content pieces generated today</p>
    <h3 style="color: #28a745;">{CONTENT_PIECES_TODAY}</h3>
</div>"#,
        timestamps = checked(settings.include_timestamps),
        speakers = checked(settings.detect_speakers),
        tones = options(&Tone::ALL, settings.tone, Tone::label),
        lengths = options(&ContentLength::ALL, settings.length, ContentLength::label),
        audiences = options(&Audience::ALL, settings.audience, Audience::label),
        emoji = settings.emoji_count,
        hashtags = checked(settings.include_hashtags),
        cta = checked(settings.include_cta),
        auto = checked(settings.auto_generate),
        template = checked(settings.save_template),
    )
}

fn file_panel(base: &str, input: &InputSource, max_upload_mb: u64) -> String {
    let confirmation = match input {
        InputSource::File(asset) => file_confirmation(asset),
        _ => String::new(),
    };
    format!(
        r#"<div class="intake-panel" id="file-upload">
    <h4>📁 File Upload</h4>
    <h4>🎵 Upload Your Audio File</h4>
    <p style="color: #666;">Supported formats: MP3, MP4, WAV, M4A (Max {max_upload_mb}MB)</p>
    <form method="post" action="{base}/upload" enctype="multipart/form-data">
        <label>Upload your podcast file <input type="file" name="file" accept="{ACCEPT_ATTRIBUTE}" title="Supported formats: MP3, MP4, WAV, M4A" required></label>
        <button class="btn" type="submit">⬆️ Upload</button>
    </form>
    {confirmation}
</div>"#
    )
}

fn file_confirmation(asset: &UploadedAsset) -> String {
    format!(
        r#"<div class="confirmation">
        <h4>✅ File Successfully Uploaded!</h4>
        <p style="color: #666;">Ready for processing</p>
    </div>
    <div class="row cols-3">{name}{size}{mime}</div>"#,
        name = metric("📄 Filename", &asset.name, None),
        size = metric("📊 Size", &format!("{:.1} MB", asset.size_mb()), None),
        mime = metric("🎵 Type", &asset.mime_type, None),
    )
}

fn link_panel(base: &str, input: &InputSource) -> String {
    let (value, confirmation) = match input {
        InputSource::Link(link) => (escape_html(&link.url), link_confirmation(link)),
        _ => (String::new(), String::new()),
    };
    format!(
        r#"<div class="intake-panel" id="youtube-link">
    <h4>🔗 YouTube Link</h4>
    <h4>🔗 Import from YouTube</h4>
    <p style="color: #666;">Paste any YouTube URL to extract audio automatically</p>
    <form method="post" action="{base}/link">
        <label>🔗 YouTube URL <input type="text" name="url" value="{value}" placeholder="https://www.youtube.com/watch?v=..." title="Paste the full YouTube URL here"></label>
        <button class="btn" type="submit">🔍 Check Link</button>
    </form>
    {confirmation}
</div>"#
    )
}

fn link_confirmation(link: &VideoLinkReference) -> String {
    let preview = mock_preview();
    format!(
        r#"<div class="confirmation">
        <h4>✅ Valid YouTube URL Detected!</h4>
        <p style="color: #666;">Ready to extract audio</p>
    </div>
    <div class="video-preview">
        <h5>📺 Video Preview</h5>
        <p><strong>Title:</strong> {}</p>
        <p><strong>Duration:</strong> {}</p>
        <p><strong>Channel:</strong> {}</p>
        <p><small>{}</small></p>
    </div>"#,
        preview.title,
        preview.duration,
        preview.channel,
        escape_html(&link.url),
    )
}

fn recording_panel() -> String {
    r#"<div class="intake-panel" id="direct-recording">
    <h4>🎙️ Direct Recording</h4>
    <p style="color: #666;">Record directly in your browser (Coming Soon)</p>
    <button class="btn" type="button" disabled title="Feature coming in next update">🎙️ Start Recording</button>
</div>"#
        .to_string()
}

fn clear_button(base: &str, input: &InputSource) -> String {
    if !input.is_present() {
        return String::new();
    }
    format!(
        r#"<form method="post" action="{base}/clear"><button class="btn btn-secondary" type="submit">🗑️ Clear Input</button></form>"#
    )
}

fn status_panel(base: &str, state: &SessionState) -> String {
    if !state.input.is_present() {
        return r#"<div class="waiting">
    <h4 style="color: #666;">Waiting for Upload</h4>
    <p style="color: #888;">Upload a file to start processing</p>
</div>"#
            .to_string();
    }

    let steps = pipeline(state.processing)
        .into_iter()
        .map(|step| match step.status {
            StepStatus::Done => format!(r#"<div class="pipeline-step step-done">{} ✅</div>"#, step.label),
            StepStatus::Actionable => format!(
                r#"<form method="post" action="{base}/process"><button class="btn" type="submit">🚀 Start Processing</button></form>
<div class="pipeline-step step-actionable">{} ⏳</div>"#,
                step.label
            ),
            StepStatus::Running => format!(r#"<div class="pipeline-step step-running">{} 🔄</div>"#, step.label),
            StepStatus::Pending => format!(r#"<div class="pipeline-step step-pending">{} ⏳</div>"#, step.label),
        })
        .collect::<String>();

    let progress = match state.processing {
        ProcessingState::Idle => String::new(),
        ProcessingState::Running { percent } => format!(
            r#"<p>Processing...</p>
<div class="progress" id="progress" data-progress-url="/api/sessions/{id}/progress"><div class="progress-fill" style="width: {percent}%;"></div></div>
<script>{PROGRESS_SCRIPT}</script>"#,
            id = state.id,
        ),
        ProcessingState::Complete => {
            r#"<div class="progress"><div class="progress-fill" style="width: 100%;"></div></div>"#.to_string()
        }
    };

    format!("<h3>🔄 Processing Pipeline</h3>{steps}{progress}")
}

fn results_section(base: &str, pieces: &[ContentPiece]) -> String {
    let overview = OVERVIEW_CARDS
        .iter()
        .map(|card| {
            format!(
                r#"<div class="mini-feature-card"><div style="font-size: 2rem;">{}</div><h4>{}</h4><p style="color: #28a745;">{}</p></div>"#,
                card.icon, card.title, card.status
            )
        })
        .collect::<String>();

    let strip = pieces
        .iter()
        .map(|p| {
            format!(
                r##"<a href="#tab-{}">{} {}</a>"##,
                p.content_type.slug(),
                p.content_type.icon(),
                p.content_type.label()
            )
        })
        .collect::<String>();

    let tabs = pieces.iter().map(|p| content_tab(base, p)).collect::<String>();

    format!(
        r#"<div class="complete-banner">
    <h3>🎉 Content Generation Complete!</h3>
    <p style="color: #666;">Your content has been successfully generated across all selected platforms</p>
</div>
<div class="row cols-4">{overview}</div>
<nav class="tab-strip">{strip}</nav>
{tabs}"#
    )
}

fn content_tab(base: &str, piece: &ContentPiece) -> String {
    let ct = piece.content_type;
    let body = if piece.is_empty() {
        format!(
            r#"<p style="color: #888;">Sample content for {} is not available yet.</p>"#,
            ct.label()
        )
    } else {
        piece_body(piece)
    };

    let actions = ContentAction::ALL
        .iter()
        .map(|&action| {
            format!(
                r#"<form method="post" action="{base}/content/{slug}/{action}"><button class="btn btn-secondary" type="submit" title="{hint}">{label}</button></form>"#,
                slug = ct.slug(),
                action = action.slug(),
                hint = action.hint(ct),
                label = action.button_label(),
            )
        })
        .collect::<String>();

    format!(
        r#"<section class="content-tab" id="tab-{slug}">
    <h3>{label}</h3>
    <div class="piece" style="border-left-color: {accent};">
        <h4 style="color: {accent};">{heading}</h4>
        {body}
    </div>
    <div class="piece-actions">{actions}</div>
</section>"#,
        slug = ct.slug(),
        label = ct.label(),
        accent = piece.accent,
        heading = escape_html(&piece.heading),
    )
}

fn piece_body(piece: &ContentPiece) -> String {
    let title = piece
        .title
        .as_ref()
        .map(|t| format!(r#"<h5>Title: "{}"</h5>"#, escape_html(t)))
        .unwrap_or_default();

    let blocks = piece
        .blocks
        .iter()
        .map(|block| render_block(block, &piece.accent))
        .collect::<String>();

    format!("{title}{blocks}")
}

fn render_block(block: &ContentBlock, accent: &str) -> String {
    match block {
        ContentBlock::Paragraph { text } => format!("<p>{}</p>", escape_html(text)),
        ContentBlock::ThreadPost { index, total, text } => format!(
            r#"<div class="tweet"><p><strong>{index}/{total}</strong> {}</p></div>"#,
            escape_html(text).replace('\n', "<br>")
        ),
        ContentBlock::Checklist { items } => {
            let items = items
                .iter()
                .map(|i| format!("✅ {}", escape_html(i)))
                .collect::<Vec<_>>()
                .join("<br>");
            format!("<p>{items}</p>")
        }
        ContentBlock::Quote { text } => format!("<blockquote>\"{}\"</blockquote>", escape_html(text)),
        ContentBlock::OutlineEntry { icon, label, text } => format!(
            "<p><strong>{} {}:</strong> {}</p>",
            escape_html(icon),
            escape_html(label),
            escape_html(text)
        ),
        ContentBlock::Hashtags { tags } => {
            let tags = tags
                .iter()
                .map(|t| format!("#{}", escape_html(t)))
                .collect::<Vec<_>>()
                .join(" ");
            format!(r#"<p style="color: {accent}; font-weight: bold;">{tags}</p>"#)
        }
        ContentBlock::Footnote { text } => {
            format!(r#"<div class="footnote"><small>{}</small></div>"#, escape_html(text))
        }
    }
}

fn empty_state() -> String {
    let items = WHAT_YOU_GET
        .iter()
        .map(|i| format!("<p>{i}</p>"))
        .collect::<String>();
    format!(
        r#"<div class="empty-state">
    <h3>Ready to Transform Your Podcast?</h3>
    <p style="color: #666; font-size: 1.1rem; margin-bottom: 2rem;">Upload your audio file or paste a YouTube link to get started</p>
    <div class="card" style="display: inline-block; text-align: left;">
        <h4>✨ What you'll get:</h4>
        {items}
    </div>
</div>"#
    )
}

fn analytics_section() -> String {
    let metrics = ANALYTICS
        .iter()
        .map(|m| metric(m.label, m.value, Some(m.delta)))
        .collect::<String>();

    let peak = TOPICS.iter().map(|t| t.mentions).max().unwrap_or(1).max(1);
    let bars = TOPICS
        .iter()
        .map(|t| {
            let height = t.mentions * 100 / peak;
            format!(
                r#"<div class="topic-bar" title="{topic}: {mentions} mentions, {relevance}% relevance"><strong>{mentions}</strong><div class="bar" style="height: {height}%;"></div><small>{topic}</small></div>"#,
                topic = t.topic,
                mentions = t.mentions,
                relevance = t.relevance,
            )
        })
        .collect::<String>();

    format!(
        r#"<h2>📈 Content Analytics &amp; Insights</h2>
<div class="row cols-4">{metrics}</div>
<h3>🏷️ Topic Breakdown</h3>
<div class="topic-chart">{bars}</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ContentProvider, MockContentProvider};
    use crate::session::{Notice, SessionStore};

    async fn pieces_for(settings: &ContentSettings) -> Vec<ContentPiece> {
        let mut pieces = Vec::new();
        for ct in settings.enabled_types() {
            pieces.push(MockContentProvider.generate(ct, None, settings).await);
        }
        pieces
    }

    fn tab_ids(html: &str) -> Vec<&str> {
        html.match_indices(r#"<section class="content-tab" id="tab-"#)
            .map(|(i, m)| {
                let rest = &html[i + m.len()..];
                &rest[..rest.find('"').unwrap_or(0)]
            })
            .collect()
    }

    async fn fresh_state() -> SessionState {
        SessionStore::new().create().await
    }

    fn with_link(mut state: SessionState) -> SessionState {
        state.set_input(InputSource::Link(VideoLinkReference {
            url: "https://www.youtube.com/watch?v=abc".into(),
        }));
        state
    }

    #[tokio::test]
    async fn empty_session_shows_waiting_and_empty_state() {
        let state = fresh_state().await;
        let html = render(&state, &[], 200);
        assert!(html.contains("Waiting for Upload"));
        assert!(html.contains("Ready to Transform Your Podcast?"));
        assert!(html.contains("🎬 Video scripts for shorts"));
        assert!(!html.contains("Content Generation Complete!"));
        assert!(!html.contains("Topic Breakdown"));
        assert!(!html.contains("Clear Input"));
        assert!(html.contains(&format!(r#"action="/generator/{}/settings""#, state.id)));
        assert!(html.contains(r#"accept=".mp3,.mp4,.wav,.m4a""#));
    }

    #[tokio::test]
    async fn upload_limit_follows_configuration() {
        let state = fresh_state().await;
        let html = render(&state, &[], 50);
        assert!(html.contains("M4A (Max 50MB)"));
        assert!(!html.contains("200MB"));
    }

    #[tokio::test]
    async fn default_results_render_three_tabs_in_order() {
        let state = with_link(fresh_state().await);
        let pieces = pieces_for(&state.settings).await;
        let html = render(&state, &pieces, 200);

        assert!(html.contains("🎉 Content Generation Complete!"));
        assert_eq!(tab_ids(&html), vec!["twitter_thread", "linkedin_post", "blog_post"]);
        assert!(html.contains("<strong>1/6</strong>"));
        assert!(html.contains("• Repurpose everything<br>• Know your audience"));
        assert!(html.contains("#ContentCreation #Podcasting"));
        assert!(html.contains(&format!(
            r#"action="/generator/{}/content/blog_post/share""#,
            state.id
        )));
        assert!(html.contains("Topic Breakdown"));
        assert!(html.contains("Word Count"));
    }

    #[tokio::test]
    async fn toggling_a_type_changes_exactly_one_tab() {
        let mut state = with_link(fresh_state().await);
        let before = render(&state, &pieces_for(&state.settings).await, 200);

        state.settings.content_types.insert(ContentType::Newsletter);
        let after = render(&state, &pieces_for(&state.settings).await, 200);

        let before_tabs = tab_ids(&before);
        let after_tabs = tab_ids(&after);
        assert_eq!(after_tabs.len(), before_tabs.len() + 1);
        assert_eq!(
            after_tabs,
            vec!["twitter_thread", "linkedin_post", "blog_post", "newsletter"]
        );
        assert!(after.contains("Sample content for Newsletter is not available yet."));
        // The other tabs are unchanged.
        assert!(after.contains("The Ultimate Guide to Content Repurposing for Podcasters"));
    }

    #[tokio::test]
    async fn file_input_shows_metrics_and_escapes_name() {
        let mut state = fresh_state().await;
        state.set_input(InputSource::File(UploadedAsset {
            name: "<ep>.mp3".into(),
            size: 5 * 1024 * 1024 + 300 * 1024,
            mime_type: "audio/mpeg".into(),
        }));
        let html = render(&state, &[], 200);
        assert!(html.contains("✅ File Successfully Uploaded!"));
        assert!(html.contains("&lt;ep&gt;.mp3"));
        assert!(html.contains("5.3 MB"));
        assert!(html.contains("audio/mpeg"));
        assert!(html.contains("Clear Input"));
        assert!(html.contains("🚀 Start Processing"));
    }

    #[tokio::test]
    async fn link_input_shows_preview() {
        let state = with_link(fresh_state().await);
        let html = render(&state, &[], 200);
        assert!(html.contains("✅ Valid YouTube URL Detected!"));
        assert!(html.contains("📺 Video Preview"));
        assert!(html.contains("Tech Talks"));
    }

    #[tokio::test]
    async fn running_state_embeds_progress_poller() {
        let mut state = with_link(fresh_state().await);
        state.processing = ProcessingState::Running { percent: 42 };
        let html = render(&state, &[], 200);
        assert!(html.contains("width: 42%;"));
        assert!(html.contains(&format!("/api/sessions/{}/progress", state.id)));
        assert!(!html.contains("🚀 Start Processing"));
        assert!(html.contains("📝 Transcription 🔄"));
    }

    #[tokio::test]
    async fn settings_are_reflected_in_the_form() {
        let mut state = fresh_state().await;
        state.settings.tone = Tone::Humorous;
        state.settings.emoji_count = 9;
        state.settings.content_types.remove(&ContentType::BlogPost);
        let html = render(&state, &[], 200);
        assert!(html.contains(r#"<option value="Humorous" selected>"#));
        assert!(html.contains(r#"name="emoji_count" min="0" max="10" value="9""#));
        assert!(html.contains(r#"name="type_blog_post">"#));
        assert!(html.contains(r#"name="type_twitter_thread" checked>"#));
    }

    #[tokio::test]
    async fn flash_notice_is_rendered() {
        let mut state = fresh_state().await;
        state.flash = Some(Notice::error("❌ Please enter a valid YouTube URL"));
        let html = render(&state, &[], 200);
        assert!(html.contains(r#"class="notice notice-error""#));
        assert!(html.contains("❌ Please enter a valid YouTube URL"));
    }
}
