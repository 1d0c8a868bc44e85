//! Conversation and transcript records for the support inbox.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum characters kept in a sidebar preview before truncation.
pub const PREVIEW_MAX_CHARS: usize = 40;

/// Workflow state of a conversation. Absent means unspecified; only the
/// "all" filter matches an unspecified status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    Open,
    Pending,
    Closed,
}

impl ConversationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Closed => "closed",
        }
    }

    /// Parse a status label, case-insensitively. Unknown labels yield `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "open" => Some(Self::Open),
            "pending" => Some(Self::Pending),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Sidebar record for one conversation. Read-only to the index; only the
/// store mutates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConversationStatus>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unread_minutes: Option<u32>,
}

impl Conversation {
    /// Minutes the customer has been waiting since the last unread message.
    /// Missing means 0.
    #[must_use]
    pub fn waiting_minutes(&self) -> u32 {
        self.unread_minutes.unwrap_or(0)
    }

    /// Whether the conversation counts as unread for the unread-first sort:
    /// either the flag is set or the customer has been waiting.
    #[must_use]
    pub fn is_unread(&self) -> bool {
        self.unread || self.waiting_minutes() > 0
    }
}

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Customer,
    Bot,
    System,
}

impl Sender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Bot => "bot",
            Self::System => "system",
        }
    }
}

/// One message in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Generate a message ID: `YYYYMMDD-HHMMSS-NNNN` (UTC time plus a random
/// four-digit suffix).
pub fn generate_message_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    format!("{}-{:04}", now.format("%Y%m%d-%H%M%S"), rng.gen_range(0..10_000u32))
}

/// Truncate preview text to `max_chars`, char-safe, appending `…` when
/// anything was cut.
#[must_use]
pub fn preview_text(input: &str, max_chars: usize) -> String {
    let line = input
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or("")
        .trim();
    if max_chars == 0 {
        return String::new();
    }
    let chars = line.chars().collect::<Vec<_>>();
    if chars.len() <= max_chars {
        return line.to_owned();
    }
    if max_chars == 1 {
        return "…".to_owned();
    }
    let mut out = chars.into_iter().take(max_chars - 1).collect::<String>();
    out.push('…');
    out
}
