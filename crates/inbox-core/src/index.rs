//! Conversation list filter/sort engine backing the inbox sidebar.
//!
//! Pure functions over borrowed [`Conversation`] records: the caller owns the
//! data and the query state, and re-invokes [`filter_and_sort`] whenever
//! either changes. All sorts are stable, so ties preserve input order.

use crate::conversation::{Conversation, ConversationStatus};

/// Sort orders supported by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Descending by timestamp.
    Newest,
    /// Ascending by timestamp.
    Oldest,
    /// Unread conversations before read ones; no secondary key.
    UnreadFirst,
    /// Ascending by lowercased display name.
    Alphabetical,
    /// Descending by waiting minutes; missing counts as 0.
    WaitingLongest,
}

impl SortKey {
    /// All sort keys, in the order the sidebar widget cycles through them.
    pub const ALL: [SortKey; 5] = [
        Self::Newest,
        Self::Oldest,
        Self::UnreadFirst,
        Self::Alphabetical,
        Self::WaitingLongest,
    ];
}

/// Category filter applied to the list. The two non-`All` variants cover the
/// two widget families a deployment can choose between: workflow status or
/// open-conversation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Status(ConversationStatus),
    OpenCount(u32),
}

impl CategoryFilter {
    /// Whether `conversation` passes this filter. A conversation whose
    /// relevant field is absent never matches a non-`All` variant.
    #[must_use]
    pub fn matches(self, conversation: &Conversation) -> bool {
        match self {
            Self::All => true,
            Self::Status(want) => conversation.status == Some(want),
            Self::OpenCount(want) => conversation.open_count == Some(want),
        }
    }
}

/// The full query the sidebar hands to the index. `sort: None` is the
/// defined fallback for an unrecognized sort label and leaves input order
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: Option<SortKey>,
}

impl Default for InboxQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: Some(SortKey::Newest),
        }
    }
}

impl InboxQuery {
    /// Whether `conversation` passes both the search and the category
    /// predicate.
    #[must_use]
    pub fn matches(&self, conversation: &Conversation) -> bool {
        matches_search(&self.search, conversation) && self.category.matches(conversation)
    }
}

/// Case-insensitive substring test against the display name or the last
/// message preview. An empty (or all-whitespace) query matches everything.
#[must_use]
pub fn matches_search(search: &str, conversation: &Conversation) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    conversation.name.to_lowercase().contains(&needle)
        || conversation.last_message.to_lowercase().contains(&needle)
}

/// Produce the ordered sidebar list for `query`: filter by search and
/// category, then stable-sort by the query's sort key. Returns references
/// into the input slice; the input is never mutated.
#[must_use]
pub fn filter_and_sort<'a>(
    conversations: &'a [Conversation],
    query: &InboxQuery,
) -> Vec<&'a Conversation> {
    let mut rows: Vec<&Conversation> = conversations
        .iter()
        .filter(|conversation| query.matches(conversation))
        .collect();
    if let Some(sort) = query.sort {
        sort_rows(&mut rows, sort);
    }
    rows
}

fn sort_rows(rows: &mut [&Conversation], sort: SortKey) {
    match sort {
        SortKey::Newest => rows.sort_by(|lhs, rhs| rhs.timestamp.cmp(&lhs.timestamp)),
        SortKey::Oldest => rows.sort_by(|lhs, rhs| lhs.timestamp.cmp(&rhs.timestamp)),
        SortKey::UnreadFirst => rows.sort_by_key(|conversation| !conversation.is_unread()),
        SortKey::Alphabetical => {
            rows.sort_by_key(|conversation| conversation.name.to_lowercase());
        }
        SortKey::WaitingLongest => {
            rows.sort_by(|lhs, rhs| rhs.waiting_minutes().cmp(&lhs.waiting_minutes()));
        }
    }
}
