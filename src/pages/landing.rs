// src/pages/landing.rs
//! Marketing page. Pure function of the static catalog.

use super::catalog::{
    Card, PricingTier, Testimonial, FEATURES, PRICING, PROBLEMS, SOLUTION_STATS, TESTIMONIALS,
    USE_CASES, WORKFLOW_STEPS,
};
use super::{shell, Page, Route, APP_TITLE};

const LANDING_STYLES: &str = r#"
.hero-section { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 4rem 2rem; border-radius: 15px; text-align: center; margin: 0 0 2rem; }
.hero-title { font-size: 3.5rem; font-weight: bold; margin-bottom: 1rem; }
.hero-subtitle { font-size: 1.3rem; margin-bottom: 2rem; opacity: 0.9; }
.feature-icon { font-size: 3rem; margin-bottom: 1rem; }
.stat-container { background: linear-gradient(45deg, #667eea, #764ba2); color: white; padding: 2rem; border-radius: 15px; margin: 2rem 0; text-align: center; }
.workflow-step { background: #f8f9fa; padding: 1.5rem; border-radius: 10px; margin: 1rem 0; border-left: 4px solid #667eea; }
.pricing-card { background: white; padding: 2rem; border-radius: 15px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); text-align: center; }
.pricing-card.featured { border: 3px solid #667eea; transform: scale(1.05); }
.pricing-card ul { text-align: left; list-style: none; margin: 1rem 0; }
.pricing-card .btn { width: 100%; }
.testimonial-head { display: flex; align-items: center; margin-bottom: 1rem; }
.testimonial-head span { font-size: 3rem; margin-right: 1rem; }
.cta-section { background: #f8f9fa; padding: 3rem 2rem; border-radius: 15px; text-align: center; margin: 3rem 0 1rem; }
.landing-footer { text-align: center; padding: 2rem; color: #666; background: #f8f9fa; border-radius: 10px; }
.landing-footer a { margin: 0 1rem; text-decoration: none; }
"#;

pub fn render() -> String {
    let generator = Route::Generator.path();

    let problems = PROBLEMS
        .iter()
        .map(|(heading, items)| {
            let items = items.iter().map(|i| format!("<li>{i}</li>")).collect::<String>();
            format!("<div><h3>{heading}</h3><ul style=\"margin-left: 1.5rem;\">{items}</ul></div>")
        })
        .collect::<String>();

    let stats = SOLUTION_STATS
        .iter()
        .map(|s| format!("<div><h2>{}</h2><p>{}</p></div>", s.value, s.label))
        .collect::<String>();

    let workflow = WORKFLOW_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| workflow_step(i + 1, step))
        .collect::<String>();

    let features = FEATURES.iter().map(feature_card).collect::<String>();

    let use_cases = USE_CASES
        .iter()
        .map(|(who, why)| format!("<p><strong>{who}</strong> - {why}</p>"))
        .collect::<String>();

    let pricing = PRICING.iter().map(pricing_card).collect::<String>();
    let testimonials = TESTIMONIALS.iter().map(testimonial).collect::<String>();

    let body = format!(
        r#"<div class="hero-section">
    <div class="hero-title">🎙️ {APP_TITLE}</div>
    <div class="hero-subtitle">Transform your podcasts into viral content across all platforms in minutes, not hours</div>
    <p>Stop spending endless hours manually editing and repurposing your podcast content. Let AI do the heavy lifting while you focus on creating amazing content.</p>
</div>
<div style="text-align: center;"><a class="btn" href="{generator}" title="Start transforming your content today">🚀 Try It Free Now</a></div>
<hr>
<h2>😫 The Content Creator's Dilemma</h2>
<div class="row cols-2">{problems}</div>
<hr>
<h2>✨ Our Solution: AI-Powered Content Transformation</h2>
<div class="stat-container">
    <h3 style="margin-bottom: 2rem;">⚡ From 1 Podcast to 15+ Content Pieces in Under 10 Minutes</h3>
    <div class="row cols-4">{stats}</div>
</div>
<h2>🔄 How It Works</h2>
{workflow}
<hr>
<h2>🎯 Powerful Features</h2>
<div class="row cols-3">{features}</div>
<hr>
<h2>🎯 Perfect For</h2>
<div class="row cols-2">{use_cases}</div>
<hr>
<h2>💰 Simple, Transparent Pricing</h2>
<div class="row cols-3">{pricing}</div>
<hr>
<h2>🌟 What Creators Are Saying</h2>
{testimonials}
<div class="cta-section">
    <h2>🚀 Ready to Transform Your Content Strategy?</h2>
    <p>Join thousands of creators who are already scaling their content with AI</p>
    <p><strong>Start your free trial today - no credit card required!</strong></p>
</div>
<div style="text-align: center; margin-bottom: 2rem;"><a class="btn" href="{generator}" title="Transform your first podcast now">🎯 Start Creating Content Now</a></div>
<hr>
<div class="landing-footer">
    <h3>🎙️ {APP_TITLE}</h3>
    <p>Built with ❤️ for content creators everywhere</p>
    <p><a href="mailto:support@podcastagent.com">📧 Contact</a> | <a href="{home}">🏠 Home</a> | <a href="{generator}">🚀 Generator</a></p>
</div>"#,
        home = Route::Home.path(),
    );

    shell(Page {
        title: "🎙️ Podcast to Content Agent - Landing",
        active: Route::Landing,
        extra_styles: LANDING_STYLES,
        sidebar: String::new(),
        body,
    })
}

fn workflow_step(number: usize, step: &Card) -> String {
    format!(
        r#"<div class="workflow-step"><h3>{} Step {number}: {}</h3><p>{}</p></div>"#,
        step.icon, step.title, step.body
    )
}

fn feature_card(card: &Card) -> String {
    format!(
        r#"<div class="feature-card"><div class="feature-icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
        card.icon, card.title, card.body
    )
}

fn pricing_card(tier: &PricingTier) -> String {
    let class = if tier.featured { "pricing-card featured" } else { "pricing-card" };
    let perks = tier.perks.iter().map(|p| format!("<li>{p}</li>")).collect::<String>();
    format!(
        r#"<div class="{class}"><h3>{}</h3><h2>{}<span style="font-size: 1rem;">/month</span></h2><ul>{perks}</ul><a class="btn" href="{}">{}</a></div>"#,
        tier.name,
        tier.price,
        Route::Generator.path(),
        tier.button
    )
}

fn testimonial(t: &Testimonial) -> String {
    format!(
        r#"<div class="feature-card">
    <div class="testimonial-head"><span>{}</span><div><h4>{}</h4><p style="color: #666;">{}</p></div></div>
    <p style="font-style: italic;">"{}"</p>
</div>"#,
        t.avatar, t.name, t.role, t.quote
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_tiers_render_with_one_featured() {
        let html = render();
        assert!(html.contains("$0<span"));
        assert!(html.contains("$29<span"));
        assert!(html.contains("$99<span"));
        assert_eq!(html.matches(r#"class="pricing-card featured""#).count(), 1);
    }

    #[test]
    fn workflow_steps_are_numbered() {
        let html = render();
        assert!(html.contains("🎵 Step 1: Upload Your Content"));
        assert!(html.contains("📱 Step 4: Publish & Scale"));
    }

    #[test]
    fn features_and_testimonials_come_from_catalog() {
        let html = render();
        assert_eq!(html.matches(r#"<div class="feature-icon">"#).count(), FEATURES.len());
        for t in TESTIMONIALS.iter() {
            assert!(html.contains(t.name));
        }
    }

    #[test]
    fn calls_to_action_point_at_generator() {
        let html = render();
        assert!(html.contains(r#"href="/generator" title="Start transforming your content today""#));
        assert!(html.contains(r#"<a class="nav-link active" href="/landing">"#));
    }
}
