#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use inbox_core::conversation::{Conversation, ConversationStatus, Sender, PREVIEW_MAX_CHARS};
use inbox_core::store::{MemoryStore, StoreError};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap()
}

fn head(id: &str, name: &str) -> Conversation {
    Conversation {
        id: id.to_owned(),
        name: name.to_owned(),
        last_message: String::new(),
        timestamp: base_time(),
        status: Some(ConversationStatus::Open),
        unread: false,
        open_count: None,
        unread_minutes: None,
    }
}

#[test]
fn insert_rejects_duplicates_and_blank_fields() {
    let mut store = MemoryStore::new();
    store.insert(head("a", "Alpha")).expect("insert");
    assert_eq!(store.len(), 1);

    let duplicate = store.insert(head("a", "Alpha again"));
    assert_eq!(
        duplicate,
        Err(StoreError::AlreadyExists { id: "a".to_owned() })
    );

    let blank_id = store.insert(head("  ", "No id"));
    assert!(matches!(blank_id, Err(StoreError::InvalidArgument { .. })));

    let blank_name = store.insert(head("b", "   "));
    assert!(matches!(blank_name, Err(StoreError::InvalidArgument { .. })));
    assert_eq!(store.len(), 1);
}

#[test]
fn snapshot_preserves_insertion_order() {
    let mut store = MemoryStore::new();
    store.insert(head("a", "Alpha")).expect("insert");
    store.insert(head("b", "Beta")).expect("insert");
    store.insert(head("c", "Gamma")).expect("insert");

    let snapshot = store.snapshot();
    let ids: Vec<&str> = snapshot.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn append_customer_message_marks_unread_and_refreshes_head() {
    let mut store = MemoryStore::new();
    store.insert(head("a", "Alpha")).expect("insert");
    let now = base_time() + Duration::minutes(5);

    let message = store
        .append_message("a", Sender::Customer, "  Hey! I need help with my refund.  ", now)
        .expect("append");
    assert_eq!(message.sender, Sender::Customer);
    assert_eq!(message.text, "Hey! I need help with my refund.");
    assert!(message.id.starts_with("20260302-140500-"), "got {}", message.id);

    let updated = store.conversation("a").expect("head");
    assert_eq!(updated.last_message, "Hey! I need help with my refund.");
    assert_eq!(updated.timestamp, now);
    assert!(updated.unread);

    let transcript = store.messages("a").expect("messages");
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0], message);
}

#[test]
fn append_bot_message_clears_unread_state() {
    let mut store = MemoryStore::new();
    let mut waiting = head("a", "Alpha");
    waiting.unread = true;
    waiting.unread_minutes = Some(30);
    store.insert(waiting).expect("insert");

    store
        .append_message("a", Sender::Bot, "On it.", base_time() + Duration::minutes(1))
        .expect("append");

    let updated = store.conversation("a").expect("head");
    assert!(!updated.unread);
    assert_eq!(updated.unread_minutes, None);
    assert_eq!(updated.last_message, "On it.");
}

#[test]
fn long_messages_get_truncated_previews() {
    let mut store = MemoryStore::new();
    store.insert(head("a", "Alpha")).expect("insert");
    let text = "This is a very long customer message that should never fit in the sidebar preview column.";

    store
        .append_message("a", Sender::Customer, text, base_time())
        .expect("append");

    let preview = &store.conversation("a").expect("head").last_message;
    assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
    assert!(preview.ends_with('…'));
}

#[test]
fn append_and_messages_report_unknown_conversations() {
    let mut store = MemoryStore::new();
    let missing = store.append_message("ghost", Sender::Customer, "hi", base_time());
    assert_eq!(
        missing.err(),
        Some(StoreError::NotFound { id: "ghost".to_owned() })
    );
    assert_eq!(
        store.messages("ghost").err(),
        Some(StoreError::NotFound { id: "ghost".to_owned() })
    );
}

#[test]
fn empty_message_text_is_rejected() {
    let mut store = MemoryStore::new();
    store.insert(head("a", "Alpha")).expect("insert");
    let result = store.append_message("a", Sender::Customer, "   \n  ", base_time());
    assert!(matches!(result, Err(StoreError::InvalidArgument { .. })));
    assert!(store.messages("a").expect("messages").is_empty());
}

#[test]
fn mark_read_clears_waiting_state() {
    let mut store = MemoryStore::new();
    let mut waiting = head("a", "Alpha");
    waiting.unread = true;
    waiting.unread_minutes = Some(45);
    store.insert(waiting).expect("insert");

    store.mark_read("a").expect("mark read");
    let updated = store.conversation("a").expect("head");
    assert!(!updated.unread);
    assert_eq!(updated.unread_minutes, None);

    assert_eq!(
        store.mark_read("ghost").err(),
        Some(StoreError::NotFound { id: "ghost".to_owned() })
    );
}

#[test]
fn open_count_values_are_distinct_and_ascending() {
    let mut store = MemoryStore::new();
    for (id, count) in [("a", Some(5)), ("b", Some(2)), ("c", Some(5)), ("d", None)] {
        let mut conversation = head(id, id);
        conversation.open_count = count;
        store.insert(conversation).expect("insert");
    }
    assert_eq!(store.open_count_values(), vec![2, 5]);
}

#[test]
fn seed_inbox_matches_the_demo_data_shape() {
    let store = MemoryStore::seed_inbox(base_time());
    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 4);

    let names: Vec<&str> = snapshot.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Luis - Github"));
    assert!(names.contains(&"Ivan - Nike"));
    assert!(names.contains(&"Lead from New York"));

    for conversation in &snapshot {
        assert!(!conversation.last_message.is_empty());
        assert!(conversation.timestamp <= base_time());
        let transcript = store.messages(&conversation.id).expect("transcript");
        assert!(!transcript.is_empty());
        // Transcripts are ascending and end on the head timestamp.
        for pair in transcript.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
        assert_eq!(
            transcript.last().map(|m| m.timestamp),
            Some(conversation.timestamp)
        );
    }

    assert_eq!(store.open_count_values(), vec![2, 5]);
}

#[test]
fn conversations_serialize_without_absent_optional_fields() {
    let conversation = head("a", "Alpha");
    let value = serde_json::to_value(&conversation).expect("serialize");
    assert_eq!(value["status"], "open");
    assert!(value.get("open_count").is_none());
    assert!(value.get("unread_minutes").is_none());
}
