//! Plain-text rendering of studio results.
//!
//! Pure functions from contract to display string, so the terminal surface
//! stays trivially testable. Every field of a successful contract is safe to
//! render directly; absent results get their task's empty-state line in
//! `main` instead.

use promo_core::{
    CampaignStrategy, KeywordDifficulty, LeadScore, OptimizationResult, Persona, SeoResult,
    SwotAnalysis,
};

pub fn posts(posts: &[String], platform: &str) -> String {
    let mut out = String::new();
    for (idx, post) in posts.iter().enumerate() {
        out.push_str(&format!("[{platform} post {}]\n{post}\n\n", idx + 1));
    }
    out.trim_end().to_string()
}

pub fn strategy(strategy: &CampaignStrategy) -> String {
    let mut out = String::new();
    out.push_str("Campaign Strategy\n=================\n\n");
    out.push_str(&format!("Overview: {}\n\n", strategy.overview));
    out.push_str(&format!("Target audience: {}\n\n", strategy.target_audience));
    out.push_str("Key themes:\n");
    for theme in &strategy.key_themes {
        out.push_str(&format!("  - {theme}\n"));
    }
    out.push_str("\nSuggested posts:\n");
    for post in &strategy.suggested_posts {
        out.push_str(&format!(
            "  [{}] {} (best time: {})\n    {}\n",
            post.platform,
            post.hashtags.join(" "),
            post.best_time,
            post.content
        ));
    }
    out.trim_end().to_string()
}

pub fn swot(swot: &SwotAnalysis) -> String {
    let mut out = String::new();
    out.push_str("SWOT Analysis\n=============\n");
    for (title, items) in [
        ("Strengths", &swot.strengths),
        ("Weaknesses", &swot.weaknesses),
        ("Opportunities", &swot.opportunities),
        ("Threats", &swot.threats),
    ] {
        out.push_str(&format!("\n{title}:\n"));
        for item in items {
            out.push_str(&format!("  - {item}\n"));
        }
    }
    out.push_str(&format!("\nStrategic advice: {}", swot.strategic_advice));
    out
}

pub fn persona(persona: &Persona) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {}, {} ({})\n\n",
        persona.name, persona.occupation, persona.age_range, persona.income_level
    ));
    out.push_str(&format!("{}\n", persona.bio));
    for (title, items) in [
        ("Frustrations", &persona.frustrations),
        ("Goals", &persona.goals),
        ("Motivations", &persona.motivations),
        ("Preferred channels", &persona.preferred_channels),
    ] {
        out.push_str(&format!("\n{title}:\n"));
        for item in items {
            out.push_str(&format!("  - {item}\n"));
        }
    }
    out.trim_end().to_string()
}

pub fn optimization(result: &OptimizationResult) -> String {
    format!(
        "Optimized copy\n==============\n\n{}\n\nWhat changed: {}",
        result.optimized, result.changes_made
    )
}

pub fn lead_score(score: &LeadScore) -> String {
    format!("Score: {}/100\nReason: {}", score.score, score.reason)
}

pub fn seo(result: &SeoResult) -> String {
    let mut out = String::new();
    out.push_str("Keyword research\n================\n\n");
    for keyword in &result.keywords {
        let difficulty = match keyword.difficulty {
            KeywordDifficulty::Low => "Low",
            KeywordDifficulty::Medium => "Medium",
            KeywordDifficulty::High => "High",
        };
        out.push_str(&format!(
            "  {:<30} volume {:<12} difficulty {difficulty}\n",
            keyword.term, keyword.volume
        ));
    }
    out.trim_end().to_string()
}
