use chrono::{DateTime, Utc};
use folio_domain::content::RepositorySummary;

/// Dot colour for unknown languages.
pub const DEFAULT_LANGUAGE_COLOR: &str = "#6b7280";

/// Topics shown on a card.
pub const MAX_TOPICS: usize = 3;

#[must_use]
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f7df1e",
        "TypeScript" => "#3178c6",
        "React" => "#61dafb",
        "Python" => "#3776ab",
        "C++" => "#00599c",
        "HTML" => "#e34f26",
        "CSS" => "#1572b6",
        _ => DEFAULT_LANGUAGE_COLOR,
    }
}

/// `2024-01-15T10:30:00Z` -> `Jan 15, 2024`. Unparseable input is returned as is.
#[must_use]
pub fn format_updated(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp).map_or_else(
        |_| timestamp.to_owned(),
        |parsed| parsed.with_timezone(&Utc).format("%b %-d, %Y").to_string(),
    )
}

#[must_use]
pub fn visible_topics(repository: &RepositorySummary) -> &[String] {
    let end = repository.topics.len().min(MAX_TOPICS);
    &repository.topics[..end]
}

#[must_use]
pub fn description_or_placeholder(repository: &RepositorySummary) -> &str {
    repository
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("No description available")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::fallback_repositories;

    #[test]
    fn known_languages_have_brand_colors() {
        assert_eq!(language_color("JavaScript"), "#f7df1e");
        assert_eq!(language_color("C++"), "#00599c");
        assert_eq!(language_color("Rust"), DEFAULT_LANGUAGE_COLOR);
        assert_eq!(language_color("javascript"), DEFAULT_LANGUAGE_COLOR);
    }

    #[test]
    fn updated_dates_are_short_and_utc() {
        assert_eq!(format_updated("2024-01-15T10:30:00Z"), "Jan 15, 2024");
        assert_eq!(format_updated("2024-03-01T00:30:00+02:00"), "Feb 29, 2024");
        assert_eq!(format_updated("yesterday"), "yesterday");
    }

    #[test]
    fn cards_show_at_most_three_topics() {
        let mut repo = fallback_repositories().remove(0);
        repo.topics.push("dioxus".to_owned());
        assert_eq!(visible_topics(&repo), ["portfolio", "react", "typescript"]);

        repo.topics.clear();
        assert!(visible_topics(&repo).is_empty());
    }

    #[test]
    fn blank_descriptions_get_a_placeholder() {
        let mut repo = fallback_repositories().remove(1);
        repo.description = Some("  ".to_owned());
        assert_eq!(description_or_placeholder(&repo), "No description available");
        repo.description = None;
        assert_eq!(description_or_placeholder(&repo), "No description available");
    }
}
