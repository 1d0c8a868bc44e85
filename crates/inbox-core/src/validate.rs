//! Label parsing for the sidebar's filter and sort widgets.
//!
//! The UI layer deals in display labels ("All", "5 Open", "Newest first").
//! These helpers normalize them into the typed query values and render them
//! back for the widgets.

use crate::conversation::ConversationStatus;
use crate::index::{CategoryFilter, SortKey};

/// Parse a category filter label. Accepts the "all" sentinel, a status name
/// ("open"/"pending"/"closed"), or an open-count label ("5 Open"). Labels
/// are trimmed and case-folded; anything else falls back to `All`, which is
/// the only value the filter widget can't mis-produce.
#[must_use]
pub fn parse_category_filter(label: &str) -> CategoryFilter {
    let normalized = label.trim().to_lowercase();
    if normalized.is_empty() || normalized == "all" {
        return CategoryFilter::All;
    }
    if let Some(status) = ConversationStatus::from_label(&normalized) {
        return CategoryFilter::Status(status);
    }
    let mut parts = normalized.split_whitespace();
    if let (Some(count), Some("open"), None) = (parts.next(), parts.next(), parts.next()) {
        if let Ok(count) = count.parse::<u32>() {
            return CategoryFilter::OpenCount(count);
        }
    }
    CategoryFilter::All
}

/// Parse a sort label. Accepts both the widget labels ("Newest first") and
/// terse keys ("newest"). Unknown labels yield `None`, which the index
/// treats as input order.
#[must_use]
pub fn parse_sort_key(label: &str) -> Option<SortKey> {
    match label.trim().to_lowercase().as_str() {
        "newest" | "newest first" => Some(SortKey::Newest),
        "oldest" | "oldest first" => Some(SortKey::Oldest),
        "unread" | "unread first" | "unread-first" => Some(SortKey::UnreadFirst),
        "alphabetical" | "a-z" => Some(SortKey::Alphabetical),
        "waiting longest" | "waiting-longest" => Some(SortKey::WaitingLongest),
        _ => None,
    }
}

/// Display label for a sort key, as the sidebar widget shows it.
#[must_use]
pub fn sort_key_label(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Newest => "Newest first",
        SortKey::Oldest => "Oldest first",
        SortKey::UnreadFirst => "Unread first",
        SortKey::Alphabetical => "Alphabetical",
        SortKey::WaitingLongest => "Waiting longest",
    }
}

/// Display label for a category filter.
#[must_use]
pub fn category_filter_label(filter: CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "All".to_owned(),
        CategoryFilter::Status(status) => {
            let label = status.as_str();
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
        CategoryFilter::OpenCount(count) => format!("{count} Open"),
    }
}

#[cfg(test)]
mod tests {
    use super::{category_filter_label, parse_category_filter, parse_sort_key, sort_key_label};
    use crate::conversation::ConversationStatus;
    use crate::index::{CategoryFilter, SortKey};

    #[test]
    fn category_labels_parse_to_typed_filters() {
        assert_eq!(parse_category_filter("All"), CategoryFilter::All);
        assert_eq!(parse_category_filter(""), CategoryFilter::All);
        assert_eq!(
            parse_category_filter(" Open "),
            CategoryFilter::Status(ConversationStatus::Open)
        );
        assert_eq!(
            parse_category_filter("CLOSED"),
            CategoryFilter::Status(ConversationStatus::Closed)
        );
        assert_eq!(parse_category_filter("5 Open"), CategoryFilter::OpenCount(5));
        assert_eq!(parse_category_filter("12 open"), CategoryFilter::OpenCount(12));
    }

    #[test]
    fn unknown_category_labels_fall_back_to_all() {
        assert_eq!(parse_category_filter("archived"), CategoryFilter::All);
        assert_eq!(parse_category_filter("five Open"), CategoryFilter::All);
        assert_eq!(parse_category_filter("5 Closed"), CategoryFilter::All);
        assert_eq!(parse_category_filter("5 Open extra"), CategoryFilter::All);
    }

    #[test]
    fn sort_labels_parse_both_families() {
        assert_eq!(parse_sort_key("newest"), Some(SortKey::Newest));
        assert_eq!(parse_sort_key("Newest first"), Some(SortKey::Newest));
        assert_eq!(parse_sort_key("Oldest first"), Some(SortKey::Oldest));
        assert_eq!(parse_sort_key("unread"), Some(SortKey::UnreadFirst));
        assert_eq!(parse_sort_key("alphabetical"), Some(SortKey::Alphabetical));
        assert_eq!(parse_sort_key("Waiting longest"), Some(SortKey::WaitingLongest));
        assert_eq!(parse_sort_key("waiting-longest"), Some(SortKey::WaitingLongest));
        assert_eq!(parse_sort_key("by vibes"), None);
    }

    #[test]
    fn labels_round_trip() {
        for sort in SortKey::ALL {
            assert_eq!(parse_sort_key(sort_key_label(sort)), Some(sort));
        }
        for filter in [
            CategoryFilter::All,
            CategoryFilter::Status(ConversationStatus::Pending),
            CategoryFilter::OpenCount(3),
        ] {
            assert_eq!(parse_category_filter(&category_filter_label(filter)), filter);
        }
    }
}
