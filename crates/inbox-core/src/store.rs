//! In-memory conversation store backing the inbox.
//!
//! The store owns the working set the index reads from: conversation heads
//! plus their transcripts. Appending a message keeps the head's preview,
//! timestamp, and unread state in sync, which is all the sidebar needs.
//! There is no persistence layer; the host process owns the lifetime.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::conversation::{
    generate_message_id, preview_text, Conversation, ConversationStatus, Message, Sender,
    PREVIEW_MAX_CHARS,
};

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("conversation {id:?} not found")]
    NotFound { id: String },
    #[error("conversation {id:?} already exists")]
    AlreadyExists { id: String },
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

#[derive(Debug, Clone)]
struct Entry {
    head: Conversation,
    transcript: Vec<Message>,
}

/// Process-local conversation set, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new conversation head with an empty transcript.
    pub fn insert(&mut self, conversation: Conversation) -> Result<(), StoreError> {
        if conversation.id.trim().is_empty() {
            return Err(StoreError::InvalidArgument {
                message: "conversation id required".to_owned(),
            });
        }
        if conversation.name.trim().is_empty() {
            return Err(StoreError::InvalidArgument {
                message: "conversation name required".to_owned(),
            });
        }
        if self.entry(&conversation.id).is_some() {
            return Err(StoreError::AlreadyExists {
                id: conversation.id,
            });
        }
        self.entries.push(Entry {
            head: conversation,
            transcript: Vec::new(),
        });
        Ok(())
    }

    /// Clones of all conversation heads, in stored order. This is the input
    /// set handed to the index.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Conversation> {
        self.entries.iter().map(|entry| entry.head.clone()).collect()
    }

    /// Look up one conversation head.
    #[must_use]
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.entry(id).map(|entry| &entry.head)
    }

    /// Transcript of one conversation, in append (ascending time) order.
    pub fn messages(&self, id: &str) -> Result<Vec<Message>, StoreError> {
        let entry = self.entry(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_owned(),
        })?;
        Ok(entry.transcript.clone())
    }

    /// Append a message and refresh the head: preview and timestamp always,
    /// unread state per sender. A customer message marks the head unread; a
    /// bot or system message clears the unread flag and waiting minutes.
    pub fn append_message(
        &mut self,
        id: &str,
        sender: Sender,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Message, StoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidArgument {
                message: "message text required".to_owned(),
            });
        }
        let entry = self.entry_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_owned(),
        })?;
        let message = Message {
            id: generate_message_id(now, &mut rand::thread_rng()),
            sender,
            text: trimmed.to_owned(),
            timestamp: now,
        };
        entry.transcript.push(message.clone());
        entry.head.last_message = preview_text(trimmed, PREVIEW_MAX_CHARS);
        entry.head.timestamp = now;
        match sender {
            Sender::Customer => entry.head.unread = true,
            Sender::Bot | Sender::System => {
                entry.head.unread = false;
                entry.head.unread_minutes = None;
            }
        }
        Ok(message)
    }

    /// Clear the unread flag and waiting minutes, e.g. when the agent opens
    /// the conversation.
    pub fn mark_read(&mut self, id: &str) -> Result<(), StoreError> {
        let entry = self.entry_mut(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_owned(),
        })?;
        entry.head.unread = false;
        entry.head.unread_minutes = None;
        Ok(())
    }

    /// Distinct `open_count` values across the set, ascending. The sidebar
    /// derives its "N Open" filter options from this.
    #[must_use]
    pub fn open_count_values(&self) -> Vec<u32> {
        let mut values: Vec<u32> = self
            .entries
            .iter()
            .filter_map(|entry| entry.head.open_count)
            .collect();
        values.sort_unstable();
        values.dedup();
        values
    }

    fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.head.id == id)
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.head.id == id)
    }

    /// Demo inbox used by the CLI backend and tests. The index itself never
    /// embeds data; this is the one place sample conversations live.
    #[must_use]
    pub fn seed_inbox(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        store.entries.push(seed_entry(
            "luis-github",
            "Luis - Github",
            now - Duration::minutes(45),
            Some(ConversationStatus::Open),
            true,
            Some(5),
            Some(45),
            &[
                (
                    Sender::Customer,
                    "Hi there, I bought a product from your store last month and it arrived damaged.",
                    20,
                ),
                (
                    Sender::Customer,
                    "Hey! A question about my order refund.",
                    0,
                ),
            ],
        ));
        store.entries.push(seed_entry(
            "ivan-nike",
            "Ivan - Nike",
            now - Duration::minutes(30),
            Some(ConversationStatus::Open),
            true,
            Some(5),
            Some(30),
            &[
                (
                    Sender::Customer,
                    "Hello, I need help tracking my order #NK12345.",
                    20,
                ),
                (
                    Sender::Bot,
                    "I'll help you track your order. Let me check that for you.",
                    18,
                ),
                (Sender::Customer, "All done, I have a question though.", 0),
            ],
        ));
        store.entries.push(seed_entry(
            "lead-new-york",
            "Lead from New York",
            now - Duration::minutes(40),
            Some(ConversationStatus::Pending),
            false,
            Some(2),
            None,
            &[
                (
                    Sender::Customer,
                    "Good morning! I'm interested in your premium package.",
                    15,
                ),
                (
                    Sender::Bot,
                    "Great to hear that! Let me tell you about our premium features.",
                    12,
                ),
                (
                    Sender::Customer,
                    "Good morning, let me know when you're free.",
                    0,
                ),
            ],
        ));
        store.entries.push(seed_entry(
            "miracle-web",
            "Miracle - Exploring our products",
            now - Duration::minutes(120),
            Some(ConversationStatus::Pending),
            false,
            Some(2),
            None,
            &[(
                Sender::Customer,
                "Just browsing for now, thanks for checking in.",
                0,
            )],
        ));
        store
    }
}

fn seed_entry(
    id: &str,
    name: &str,
    timestamp: DateTime<Utc>,
    status: Option<ConversationStatus>,
    unread: bool,
    open_count: Option<u32>,
    unread_minutes: Option<u32>,
    messages: &[(Sender, &str, i64)],
) -> Entry {
    // Offsets are minutes before the head timestamp; the last message lands
    // exactly on it.
    let transcript: Vec<Message> = messages
        .iter()
        .enumerate()
        .map(|(idx, (sender, text, minutes_before))| Message {
            id: format!("{id}-{:04}", idx + 1),
            sender: *sender,
            text: (*text).to_owned(),
            timestamp: timestamp - Duration::minutes(*minutes_before),
        })
        .collect();
    let last_message = transcript
        .last()
        .map(|message| preview_text(&message.text, PREVIEW_MAX_CHARS))
        .unwrap_or_default();
    Entry {
        head: Conversation {
            id: id.to_owned(),
            name: name.to_owned(),
            last_message,
            timestamp,
            status,
            unread,
            open_count,
            unread_minutes,
        },
        transcript,
    }
}
