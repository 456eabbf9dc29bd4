//! Display helpers shared by the dashboard views.

use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Offset-less timestamp shape the backend emits; assumed UTC.
const NAIVE_TIMESTAMP: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

pub fn platform_icon(platform: &str) -> &'static str {
    match platform {
        "instagram" => "📸",
        "twitter" => "𝕏",
        "blog" => "📝",
        _ => "🔗",
    }
}

/// CSS class for the category badge; unknown categories share a neutral
/// style.
pub fn category_class(category: &str) -> &'static str {
    match category {
        "Fitness" => "badge badge-fitness",
        "Coding" => "badge badge-coding",
        "Food" => "badge badge-food",
        "Travel" => "badge badge-travel",
        "Design" => "badge badge-design",
        "Business" => "badge badge-business",
        "Education" => "badge badge-education",
        "Entertainment" => "badge badge-entertainment",
        "Health" => "badge badge-health",
        "Productivity" => "badge badge-productivity",
        _ => "badge badge-other",
    }
}

pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// First three hashtags of the comma-separated tag string.
pub fn hashtag_list(hashtags: &str) -> Vec<String> {
    hashtags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .take(3)
        .map(str::to_string)
        .collect()
}

/// Coarse "x ago" label for a backend timestamp; empty string when the
/// timestamp does not parse.
pub fn format_relative_time(raw: &str) -> String {
    let Some(then) = parse_timestamp(raw) else {
        return String::new();
    };
    let seconds = (OffsetDateTime::now_utc() - then).whole_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }
    if seconds < 3600 {
        return format!("{}m ago", seconds / 60);
    }
    if seconds < 86_400 {
        return format!("{}h ago", seconds / 3600);
    }
    let days = seconds / 86_400;
    if days < 30 {
        return format!("{days}d ago");
    }
    if days < 365 {
        return format!("{}mo ago", days / 30);
    }
    format!("{}y ago", days / 365)
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    // Fractional seconds are not part of the naive format; drop them.
    let trimmed = raw.split('.').next().unwrap_or(raw);
    PrimitiveDateTime::parse(trimmed, NAIVE_TIMESTAMP)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
