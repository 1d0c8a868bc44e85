//! Sidebar list model: query state, visible rows, and selection retention.
//!
//! The model owns the sidebar's query widgets (search box, category filter,
//! sort picker, layout toggle) and recomputes the visible list through the
//! core index on every change. Selection survives re-filtering: first by the
//! previously selected id, then by clamped index.

use inbox_core::conversation::Conversation;
use inbox_core::index::{filter_and_sort, InboxQuery, SortKey};
use inbox_core::validate::{parse_category_filter, parse_sort_key, sort_key_label};

/// Row density of the list; compact hides the preview line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    List,
    Compact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarModel {
    conversations: Vec<Conversation>,
    visible: Vec<Conversation>,
    query: InboxQuery,
    layout: LayoutMode,
    selected_idx: usize,
    selected_id: String,
}

impl SidebarModel {
    /// Build the model over the current working set and select the top row
    /// of the default (newest-first) ordering.
    #[must_use]
    pub fn new(conversations: Vec<Conversation>) -> Self {
        let mut model = Self {
            conversations,
            visible: Vec::new(),
            query: InboxQuery::default(),
            layout: LayoutMode::List,
            selected_idx: 0,
            selected_id: String::new(),
        };
        model.apply("", 0);
        model
    }

    /// Replace the working set (e.g. after a store refresh) and re-filter,
    /// keeping the selection where possible.
    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        self.conversations = conversations;
        self.reapply();
    }

    pub fn set_search(&mut self, text: &str) {
        self.query.search = text.to_owned();
        self.reapply();
    }

    /// Set the category filter from its widget label ("All", "open",
    /// "5 Open", ...).
    pub fn set_category_label(&mut self, label: &str) {
        self.query.category = parse_category_filter(label);
        self.reapply();
    }

    /// Set the sort order from its widget label. Unknown labels leave the
    /// list in input order, per the index contract.
    pub fn set_sort_label(&mut self, label: &str) {
        self.query.sort = parse_sort_key(label);
        self.reapply();
    }

    /// Cycle through the sort options, wrapping at both ends.
    pub fn cycle_sort(&mut self, delta: i32) {
        let current = self
            .query
            .sort
            .and_then(|sort| SortKey::ALL.iter().position(|candidate| *candidate == sort))
            .unwrap_or(0) as i32;
        let len = SortKey::ALL.len() as i32;
        let mut idx = current + delta;
        if idx < 0 {
            idx = len - 1;
        }
        if idx >= len {
            idx = 0;
        }
        self.query.sort = Some(SortKey::ALL[idx as usize]);
        self.reapply();
    }

    pub fn toggle_layout(&mut self) {
        self.layout = match self.layout {
            LayoutMode::List => LayoutMode::Compact,
            LayoutMode::Compact => LayoutMode::List,
        };
    }

    #[must_use]
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    #[must_use]
    pub fn query(&self) -> &InboxQuery {
        &self.query
    }

    /// Label for the current sort, for the picker widget.
    #[must_use]
    pub fn sort_label(&self) -> &'static str {
        self.query.sort.map(sort_key_label).unwrap_or("Unsorted")
    }

    /// The rows the sidebar currently shows, in display order.
    #[must_use]
    pub fn visible(&self) -> &[Conversation] {
        &self.visible
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Conversation> {
        self.visible.get(self.selected_idx)
    }

    #[must_use]
    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    /// Select a visible row by conversation id (a click). Returns whether
    /// the id was visible.
    pub fn select(&mut self, id: &str) -> bool {
        match self.visible.iter().position(|c| c.id == id) {
            Some(idx) => {
                self.selected_idx = idx;
                self.selected_id = id.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_idx = (self.selected_idx + 1).min(self.visible.len() - 1);
        self.selected_id = self.visible[self.selected_idx].id.clone();
    }

    pub fn select_prev(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_idx = self.selected_idx.saturating_sub(1);
        self.selected_id = self.visible[self.selected_idx].id.clone();
    }

    /// Options for the open-count filter widget: "All" plus one entry per
    /// distinct open count in the working set, ascending.
    #[must_use]
    pub fn open_count_options(&self) -> Vec<String> {
        let mut counts: Vec<u32> = self
            .conversations
            .iter()
            .filter_map(|c| c.open_count)
            .collect();
        counts.sort_unstable();
        counts.dedup();
        let mut options = Vec::with_capacity(counts.len() + 1);
        options.push("All".to_owned());
        options.extend(counts.into_iter().map(|count| format!("{count} Open")));
        options
    }

    fn reapply(&mut self) {
        let previous_id = self.selected_id.clone();
        let previous_idx = self.selected_idx;
        self.apply(&previous_id, previous_idx);
    }

    fn apply(&mut self, previous_id: &str, previous_idx: usize) {
        self.visible = filter_and_sort(&self.conversations, &self.query)
            .into_iter()
            .cloned()
            .collect();

        if self.visible.is_empty() {
            self.selected_idx = 0;
            self.selected_id.clear();
            return;
        }

        if !previous_id.trim().is_empty() {
            if let Some(idx) = self.visible.iter().position(|c| c.id == previous_id) {
                self.selected_idx = idx;
                self.selected_id = previous_id.to_owned();
                return;
            }
        }

        let idx = previous_idx.min(self.visible.len() - 1);
        self.selected_idx = idx;
        self.selected_id = self.visible[idx].id.clone();
    }
}
