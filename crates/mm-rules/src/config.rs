//! Built-in rule table and keyword fallbacks.

use crate::rules::RuleTable;
use crate::types::{FallbackGroup, Rule};

/// Label and icon used when neither a rule nor a fallback keyword matches.
pub const DEFAULT_PLAYLIST: (&str, &str) = ("Popular Hits", "🎶");

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn rule(time_slots: &[&str], moods: &[&str], genres: &[&str], playlist: &str, icon: &str) -> Rule {
    Rule {
        time_slots: s(time_slots),
        moods: s(moods),
        genre_keywords: s(genres),
        playlist: playlist.to_string(),
        icon: icon.to_string(),
    }
}

/// Default rules, most specific first.
pub fn default_rules() -> Vec<Rule> {
    vec![
        rule(&["Morning", "Early Morning"], &["Energetic", "Upbeat"], &["Pop", "EDM", "Dance"], "Morning Workout Mix", "🏃"),
        rule(&["Morning"], &["Calm", "Focused"], &["Classical", "Ambient"], "Focused Morning", "☕"),
        rule(&["Afternoon"], &["Relaxed", "Chill"], &["Lo-fi", "Indie"], "Afternoon Chill", "🌤️"),
        rule(
            &["Evening", "Night"],
            &["Sadness or melancholy", "Melancholic", "Reflective"],
            &["Acoustic", "Folk"],
            "Evening Reflective",
            "🌙",
        ),
        rule(&["Night"], &["Excited", "Upbeat"], &["Hip Hop", "Rap", "Pop"], "Night Out Vibes", "🌃"),
        rule(&["Any"], &["Any"], &["Podcast"], "Popular Podcasts", "🎙️"),
    ]
}

/// Keyword groups checked in order against the lowercased genre text.
pub fn default_fallbacks() -> Vec<FallbackGroup> {
    let group = |keywords: &[&str], playlist: &str, icon: &str| FallbackGroup {
        keywords: s(keywords),
        playlist: playlist.to_string(),
        icon: icon.to_string(),
    };
    vec![
        group(&["workout", "upbeat", "energetic"], "High Energy Workout", "🏃"),
        group(&["lo-fi", "chill", "indie"], "Lo-fi & Chill", "🌿"),
        group(&["podcast", "talk"], "Podcast Highlights", "🎧"),
    ]
}

/// Default table built from [`default_rules`].
pub fn default_rule_table() -> RuleTable {
    // The built-in rules all carry keywords and labels.
    match RuleTable::new(default_rules()) {
        Ok(table) => table,
        Err(e) => unreachable!("built-in rule table is invalid: {e}"),
    }
}

/// The default rule table instance.
pub static DEFAULT_RULES: std::sync::LazyLock<RuleTable> = std::sync::LazyLock::new(default_rule_table);
