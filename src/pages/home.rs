use super::catalog::{
    HomeNotice, QuickAction, QuickTarget, HERO_QUICK_ACTIONS, HIGHLIGHTS, IMPACT_METRICS,
    LIVE_STATUS, RECENT_ACTIVITY, SIDEBAR_QUICK_ACTIONS,
};
use super::{footer, notice, shell, Page, Route, APP_TITLE};
use crate::session::Notice;

const HOME_STYLES: &str = r#"
.stats-container { background: linear-gradient(45deg, #f8f9fa, #ffffff); padding: 2rem; border-radius: 15px; box-shadow: 0 4px 20px rgba(0,0,0,0.1); margin: 2rem 0; text-align: center; }
.metric-card { background: white; padding: 1.5rem; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); text-align: center; transition: transform 0.3s ease; }
.metric-card:hover { transform: scale(1.05); }
.metric-card h3 { color: #667eea; }
.progress-ring { width: 60px; height: 60px; border-radius: 50%; display: flex; align-items: center; justify-content: center; margin: 0 auto 1rem; }
.progress-inner { width: 40px; height: 40px; background: white; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-weight: bold; font-size: 0.8rem; color: #667eea; }
.feature-highlight { background: white; padding: 2rem; border-radius: 15px; box-shadow: 0 4px 20px rgba(0,0,0,0.1); border-left: 5px solid #667eea; margin: 1rem 0; }
.feature-badge { padding: 0.5rem; border-radius: 5px; margin-top: 1rem; font-weight: bold; }
.recent-activity { background: #f8f9fa; padding: 0.75rem 1rem; border-radius: 8px; margin: 0.5rem 0; border-left: 3px solid #28a745; font-size: 0.85rem; }
.cta-banner { background: linear-gradient(45deg, #667eea, #764ba2); color: white; padding: 3rem; border-radius: 15px; text-align: center; margin: 2rem 0; }
.sidebar .btn { display: block; margin: 0.5rem 0; }
"#;

pub fn render(active_notice: Option<&HomeNotice>) -> String {
    let flash = active_notice
        .map(|n| {
            let n = if n.informational {
                Notice::info(n.message)
            } else {
                Notice::success(n.message)
            };
            notice(&n)
        })
        .unwrap_or_default();

    let body = format!(
        r#"{flash}
<div class="main-header">
    <div class="main-title">🎙️ {APP_TITLE}</div>
    <div class="main-subtitle">Transform your audio into viral content across all platforms</div>
    <p>Your AI-powered content creation companion that turns one podcast into 15+ pieces of engaging content</p>
</div>
<div class="row cols-4">{quick}</div>
<div class="stats-container"><h2>📊 Platform Impact</h2></div>
<div class="row cols-4">{metrics}</div>
<hr>
<h2>✨ Why Creators Love Our Platform</h2>
<div class="row cols-2">{highlights}</div>
<hr>
<h2>🔴 Live Platform Status</h2>
<div class="row cols-3">{status}</div>
<hr>
<div class="cta-banner">
    <h2>Ready to Transform Your Content Strategy?</h2>
    <p>Join thousands of creators who are already scaling their content with AI</p>
</div>
<div style="text-align: center;"><a class="btn" href="{generator}" title="Transform your content now">🎯 Start Your First Podcast</a></div>
{footer}"#,
        quick = HERO_QUICK_ACTIONS.iter().map(quick_action).collect::<String>(),
        metrics = IMPACT_METRICS.iter().map(impact_card).collect::<String>(),
        highlights = HIGHLIGHTS
            .iter()
            .map(|h| {
                format!(
                    r#"<div class="feature-highlight"><h3>{}</h3><p>{}</p><div class="feature-badge" style="background: {};">{}</div></div>"#,
                    h.title, h.body, h.badge_bg, h.badge
                )
            })
            .collect::<String>(),
        status = LIVE_STATUS
            .iter()
            .map(|s| format!(r#"<div class="notice notice-success">{s}</div>"#))
            .collect::<String>(),
        generator = Route::Generator.path(),
        footer = footer("Transforming audio into engaging content"),
    );

    shell(Page {
        title: APP_TITLE,
        active: Route::Home,
        extra_styles: HOME_STYLES,
        sidebar: sidebar(),
        body,
    })
}

fn sidebar() -> String {
    format!(
        r#"<div class="sidebar-section"><h3>⚡ Quick Actions</h3></div>
{actions}
<div class="sidebar-section"><h3>📈 Recent Activity</h3></div>
{activity}"#,
        actions = SIDEBAR_QUICK_ACTIONS.iter().map(quick_action).collect::<String>(),
        activity = RECENT_ACTIVITY
            .iter()
            .map(|a| format!(r#"<div class="recent-activity"><small>{a}</small></div>"#))
            .collect::<String>(),
    )
}

fn quick_action(action: &QuickAction) -> String {
    let href = match action.target {
        QuickTarget::Link(path) => path.to_string(),
        QuickTarget::Notice(key) => format!("/?notice={key}"),
    };
    format!(
        r#"<a class="btn" href="{href}" title="{}">{}</a>"#,
        action.hint, action.label
    )
}

fn impact_card(metric: &super::catalog::ImpactMetric) -> String {
    let degrees = metric.ring_percent as u32 * 360 / 100;
    format!(
        r#"<div class="metric-card">
    <div class="progress-ring" style="background: conic-gradient(#667eea 0deg {degrees}deg, #e9ecef {degrees}deg 360deg);"><div class="progress-inner">{pct}%</div></div>
    <h3>{value}</h3><p style="color: #666;">{label}</p><small style="color: #28a745;">{today}</small>
</div>"#,
        pct = metric.ring_percent,
        value = metric.value,
        label = metric.label,
        today = metric.today,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::catalog::home_notice;

    #[test]
    fn renders_all_impact_metrics() {
        let html = render(None);
        for value in ["1,247", "18,705", "342", "4,980"] {
            assert!(html.contains(value), "missing {value}");
        }
        // 70% of a full ring.
        assert!(html.contains("#667eea 0deg 252deg"));
    }

    #[test]
    fn quick_actions_link_to_routes_and_notices() {
        let html = render(None);
        assert!(html.contains(r#"href="/generator" title="Begin content generation""#));
        assert!(html.contains(r#"href="/landing""#));
        assert!(html.contains(r#"href="/?notice=support""#));
        assert!(!html.contains(r#"class="notice notice-info""#));
    }

    #[test]
    fn renders_requested_notice() {
        let html = render(home_notice("analytics"));
        assert!(html.contains("Analytics coming soon!"));
        assert!(html.contains(r#"class="notice notice-info""#));

        let html = render(home_notice("support"));
        assert!(html.contains("Support: support@podcastagent.com"));
    }
}
