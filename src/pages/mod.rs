// src/pages/mod.rs
//! Server-side HTML for the three pages.
//!
//! Every page is the shared [`shell`] (head, styles, sidebar) around a body
//! produced by the page module. Static sections come from the manifests in
//! [`catalog`]; anything that came from a user goes through [`escape_html`].

pub mod catalog;
pub mod generator;
pub mod home;
pub mod landing;

use crate::session::{Notice, NoticeLevel};

pub const APP_TITLE: &str = "Podcast to Content Agent";

/// Named navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Landing,
    Generator,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Landing => "/landing",
            Route::Generator => "/generator",
        }
    }

    fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "🎙️ Home",
            Route::Landing => "🏠 Landing Page",
            Route::Generator => "🚀 Content Generator",
        }
    }
}

const BASE_STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; background: #fff; }
a { color: #667eea; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 300px; flex-shrink: 0; background: #f0f2f6; padding: 1.5rem 1rem; }
.sidebar-section { background: linear-gradient(45deg, #f8f9fa, #ffffff); padding: 1.25rem; border-radius: 10px; margin: 1rem 0; border-left: 4px solid #667eea; }
.sidebar-section h2, .sidebar-section h3 { color: #667eea; }
.nav-link { display: block; padding: 0.5rem 0.75rem; border-radius: 8px; text-decoration: none; color: #333; }
.nav-link.active, .nav-link:hover { background: rgba(102, 126, 234, 0.15); }
.main { flex: 1; padding: 2rem 3rem; max-width: 1200px; }
.main-header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 3rem 2rem; border-radius: 15px; text-align: center; margin-bottom: 2rem; box-shadow: 0 8px 32px rgba(102, 126, 234, 0.3); }
.main-title { font-size: 3rem; font-weight: bold; margin-bottom: 1rem; }
.main-subtitle { font-size: 1.2rem; opacity: 0.9; margin-bottom: 1rem; }
.row { display: grid; gap: 1rem; margin: 1rem 0; }
.cols-2 { grid-template-columns: repeat(2, 1fr); }
.cols-3 { grid-template-columns: repeat(3, 1fr); }
.cols-4 { grid-template-columns: repeat(4, 1fr); }
.btn { display: inline-block; background: linear-gradient(45deg, #667eea, #764ba2); color: white; padding: 0.75rem 1.5rem; border: none; border-radius: 10px; font-weight: bold; cursor: pointer; text-decoration: none; text-align: center; }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.btn-secondary { background: white; color: #667eea; border: 2px solid #667eea; }
.card { background: white; padding: 1.5rem; border-radius: 15px; box-shadow: 0 4px 20px rgba(0,0,0,0.1); }
.feature-card { background: white; padding: 2rem; border-radius: 15px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); border-left: 4px solid #667eea; margin: 1rem 0; }
.notice { padding: 0.75rem 1rem; border-radius: 8px; margin: 0.5rem 0; }
.notice-success { background: #e8f5e8; color: #1e7e34; }
.notice-info { background: #e3f2fd; color: #0b5394; }
.notice-error { background: #fdecea; color: #b71c1c; }
.metric { background: white; padding: 1rem; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.08); }
.metric-label { color: #666; font-size: 0.9rem; }
.metric-value { font-size: 1.6rem; font-weight: bold; word-break: break-all; }
.metric-delta { color: #28a745; font-size: 0.85rem; }
hr { border: none; border-top: 1px solid #e0e0e0; margin: 2rem 0; }
.footer { text-align: center; padding: 2rem; color: #666; }
"#;

pub struct Page<'a> {
    pub title: &'a str,
    pub active: Route,
    pub extra_styles: &'a str,
    /// Sidebar content below the navigation block.
    pub sidebar: String,
    pub body: String,
}

pub fn shell(page: Page<'_>) -> String {
    let nav = [Route::Home, Route::Landing, Route::Generator]
        .iter()
        .map(|route| {
            let class = if *route == page.active { "nav-link active" } else { "nav-link" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                route.path(),
                route.nav_label()
            )
        })
        .collect::<String>();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{BASE_STYLES}{extra}</style>
</head>
<body>
<div class="layout">
    <aside class="sidebar">
        <div class="sidebar-section">
            <h2>🧭 Navigation</h2>
            <p style="color: #666; font-size: 0.9rem;">Explore different sections of the app</p>
        </div>
        <nav>{nav}</nav>
        {sidebar}
    </aside>
    <main class="main">
        {body}
    </main>
</div>
</body>
</html>"#,
        title = escape_html(page.title),
        extra = page.extra_styles,
        sidebar = page.sidebar,
        body = page.body,
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Success => "notice-success",
        NoticeLevel::Info => "notice-info",
        NoticeLevel::Error => "notice-error",
    };
    format!(
        r#"<div class="notice {class}" role="status">{}</div>"#,
        escape_html(&notice.message)
    )
}

/// A labelled value with an optional delta, like a dashboard metric tile.
pub fn metric(label: &str, value: &str, delta: Option<&str>) -> String {
    let delta = delta
        .map(|d| format!(r#"<div class="metric-delta">↑ {}</div>"#, escape_html(d)))
        .unwrap_or_default();
    format!(
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div>{delta}</div>"#,
        escape_html(label),
        escape_html(value)
    )
}

pub fn footer(tagline: &str) -> String {
    format!(
        r#"<hr><div class="footer"><p>🎙️ <strong>{APP_TITLE}</strong> - {tagline}</p><p>Version {}</p></div>"#,
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain.mp3"), "plain.mp3");
    }

    #[test]
    fn shell_marks_active_route() {
        let html = shell(Page {
            title: APP_TITLE,
            active: Route::Landing,
            extra_styles: "",
            sidebar: String::new(),
            body: "<p>body</p>".into(),
        });
        assert!(html.contains(r#"<a class="nav-link active" href="/landing">"#));
        assert!(html.contains(r#"<a class="nav-link" href="/generator">"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn notice_escapes_message() {
        let html = notice(&Notice::error("<b>bad</b>"));
        assert!(html.contains("notice-error"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }
}
