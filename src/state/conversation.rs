//! Conversation history scoped to one video.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::state::clock::Timestamp;

/// Who wrote a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    /// CSS class of the message row.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant => "ai-message",
        }
    }
}

/// A single chat message. Never modified after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub created_at: Timestamp,
    /// `HH:MM` label captured when the message was appended.
    pub time_label: String,
}

/// Ordered message list for the current video.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversationState {
    messages: Vec<Message>,
    next_id: u64,
}

impl ConversationState {
    /// A conversation holding only `greeting`.
    #[must_use]
    pub fn with_greeting(greeting: &str, now: Timestamp) -> Self {
        let mut state = Self::default();
        state.push(Sender::Assistant, greeting, now);
        state
    }

    /// Append a message and return its id.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>, now: Timestamp) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message {
            id,
            sender,
            text: text.into(),
            created_at: now,
            time_label: now.hour_minute_label(),
        });
        id
    }

    /// Drop every message and start over with `greeting`.
    ///
    /// Ids keep increasing across resets so keyed views never confuse an old
    /// row with a new one.
    pub fn reset_with_greeting(&mut self, greeting: &str, now: Timestamp) {
        self.messages.clear();
        self.push(Sender::Assistant, greeting, now);
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
