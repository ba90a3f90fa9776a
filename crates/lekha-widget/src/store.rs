//! Append-only message store.

use lekha_core::types::Message;

/// Ordered, append-only sequence of transcript messages.
///
/// No deletion, no in-place edit, no deduplication. The visible transcript
/// can therefore never diverge from what was actually sent and received:
/// a failed exchange leaves exactly one user message and one failure notice,
/// never a silently discarded entry.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. O(1); validation happened upstream in the state
    /// controller.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in insertion order (= display order = chronological).
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lekha_core::types::Role;

    #[test]
    fn test_new_store_is_empty() {
        let store = MessageStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.last().is_none());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = MessageStore::new();
        store.append(Message::user("first"));
        store.append(Message::assistant("second", vec![]));
        store.append(Message::user("third"));

        let all = store.all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].content, "first");
        assert_eq!(all[1].content, "second");
        assert_eq!(all[2].content, "third");
    }

    #[test]
    fn test_last_is_newest_entry() {
        let mut store = MessageStore::new();
        store.append(Message::user("one"));
        store.append(Message::assistant("two", vec![]));
        assert_eq!(store.last().unwrap().content, "two");
        assert_eq!(store.last().unwrap().role, Role::Assistant);
    }

    #[test]
    fn test_no_deduplication() {
        let mut store = MessageStore::new();
        store.append(Message::user("same"));
        store.append(Message::user("same"));
        assert_eq!(store.len(), 2);
    }
}
