//! Chat Widget State
//!
//! The floating chat widget keeps an append-only history of user and bot
//! messages for the lifetime of a page. Each send is a single request to the
//! chatbot; whatever happens, exactly one bot entry follows the user entry.
//!
//! Sending is split into [`ChatWidget::begin_send`] and
//! [`ChatWidget::finish_send`] so reactive UIs can hold the widget in a
//! signal across the await point. [`ChatWidget::send_message`] composes the
//! two for callers that own the widget directly.

use serde::{Deserialize, Serialize};

use crate::dto::{ChatReply, ChatRequest};
use crate::settings::ReplyFormat;
use crate::transport::{ChatTransport, TransportError};

/// Bot entry appended when the chatbot answers without a reply
pub const NO_REPLY_TEXT: &str = "🤖 AI did not respond.";

/// Bot entry appended when the chatbot cannot be reached or fails
pub const CONNECT_ERROR_TEXT: &str = "⚠ Could not connect to AI chatbot.";

/// Who wrote a chat entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single chat history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Append-only, ordered chat history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLog {
    entries: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text of the bot entry that follows a send attempt
pub fn reply_text(result: &Result<ChatReply, TransportError>) -> String {
    match result {
        Ok(reply) => reply.text().unwrap_or(NO_REPLY_TEXT).to_string(),
        Err(_) => CONNECT_ERROR_TEXT.to_string(),
    }
}

/// Keep only bullet lines of a bot reply, with the marker stripped.
///
/// A reply without bullet lines yields an empty list.
pub fn bullet_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim_start();
            let rest = if let Some(rest) = line.strip_prefix('•') {
                rest
            } else if let Some(rest) = line.strip_prefix("- ") {
                rest
            } else {
                line.strip_prefix("* ")?
            };
            Some(rest.trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// How a single bot entry should be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyView {
    Text(String),
    Bullets(Vec<String>),
}

/// Display transform for a chat entry. User entries are always plain.
pub fn render_entry(message: &ChatMessage, format: ReplyFormat) -> ReplyView {
    match (message.sender, format) {
        (Sender::Bot, ReplyFormat::Bullets) => ReplyView::Bullets(bullet_lines(&message.text)),
        _ => ReplyView::Text(message.text.clone()),
    }
}

/// Chat widget state: open/closed toggle, input box, loading flag, history
#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    log: ChatLog,
    input: String,
    loading: bool,
    open: bool,
}

impl ChatWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed. History is kept either way.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    /// Whether the send button should be enabled
    pub fn can_send(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Start a send: appends the user entry and raises the loading flag.
    ///
    /// Returns `None` without touching any state when the input is blank.
    pub fn begin_send(&mut self) -> Option<ChatRequest> {
        if self.input.trim().is_empty() {
            return None;
        }

        self.loading = true;
        self.log.push(ChatMessage::user(self.input.clone()));

        Some(ChatRequest {
            message: self.input.clone(),
        })
    }

    /// Complete a send: appends the bot entry, clears the input and drops
    /// the loading flag regardless of outcome.
    pub fn finish_send(&mut self, result: Result<ChatReply, TransportError>) {
        self.log.push(ChatMessage::bot(reply_text(&result)));
        self.input.clear();
        self.loading = false;
    }

    /// Send the current input through `transport`.
    ///
    /// Returns `false` if the input was blank and nothing was sent.
    pub async fn send_message<T>(&mut self, transport: &T) -> bool
    where
        T: ChatTransport + ?Sized,
    {
        let Some(request) = self.begin_send() else {
            return false;
        };

        let result = transport.send_chat(&request).await;
        self.finish_send(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// Fake chatbot returning a canned outcome and recording requests
    struct FakeChatbot {
        outcome: Result<ChatReply, TransportError>,
        calls: Cell<usize>,
        seen: RefCell<Vec<String>>,
    }

    impl FakeChatbot {
        fn replying(reply: ChatReply) -> Self {
            Self {
                outcome: Ok(reply),
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: TransportError) -> Self {
            Self {
                outcome: Err(error),
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatTransport for FakeChatbot {
        async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(request.message.clone());
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn test_hello_round_trip() {
        let bot = FakeChatbot::replying(ChatReply::new("hi there"));
        let mut widget = ChatWidget::new();
        widget.set_input("hello");

        assert!(widget.send_message(&bot).await);

        assert_eq!(
            widget.log().entries(),
            &[ChatMessage::user("hello"), ChatMessage::bot("hi there")]
        );
        assert_eq!(bot.seen.borrow().as_slice(), ["hello"]);
        assert_eq!(widget.log().iter().filter(|m| m.is_user()).count(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let bot = FakeChatbot::replying(ChatReply::new("unused"));
        let mut widget = ChatWidget::new();

        for blank in ["", "   ", "\n\t "] {
            widget.set_input(blank);
            assert!(!widget.send_message(&bot).await);
        }

        assert!(widget.log().is_empty());
        assert_eq!(bot.calls.get(), 0);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn test_failure_appends_error_entry() {
        let bot = FakeChatbot::failing(TransportError::Status {
            status: 500,
            message: "AI chatbot error".to_string(),
        });
        let mut widget = ChatWidget::new();
        widget.set_input("what is OSCC?");

        widget.send_message(&bot).await;

        assert_eq!(widget.log().len(), 2);
        assert_eq!(widget.log().last(), Some(&ChatMessage::bot(CONNECT_ERROR_TEXT)));
        assert_eq!(widget.input(), "");
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn test_missing_reply_uses_fallback() {
        let bot = FakeChatbot::replying(ChatReply::default());
        let mut widget = ChatWidget::new();
        widget.set_input("anyone there?");

        widget.send_message(&bot).await;

        assert_eq!(widget.log().last(), Some(&ChatMessage::bot(NO_REPLY_TEXT)));
    }

    #[tokio::test]
    async fn test_each_send_adds_two_entries() {
        let ok = FakeChatbot::replying(ChatReply::new("sure"));
        let down = FakeChatbot::failing(TransportError::Network("connection refused".into()));
        let mut widget = ChatWidget::new();

        for (i, transport) in [&ok, &down, &ok].into_iter().enumerate() {
            widget.set_input(format!("question {}", i));
            widget.send_message(transport).await;
            assert_eq!(widget.log().len(), (i + 1) * 2);
            assert_eq!(widget.input(), "");
            assert!(!widget.is_loading());
        }
    }

    #[test]
    fn test_begin_send_raises_loading() {
        let mut widget = ChatWidget::new();
        widget.set_input("hello");

        let request = widget.begin_send().unwrap();
        assert_eq!(request.message, "hello");
        assert!(widget.is_loading());
        assert!(!widget.can_send());
        assert_eq!(widget.log().len(), 1);

        widget.finish_send(Err(TransportError::Malformed("eof".into())));
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_toggle_keeps_history() {
        let mut widget = ChatWidget::new();
        assert!(!widget.is_open());

        widget.toggle();
        widget.set_input("hello");
        widget.begin_send();
        widget.finish_send(Ok(ChatReply::new("hi")));

        widget.toggle();
        assert!(!widget.is_open());
        widget.toggle();
        assert!(widget.is_open());
        assert_eq!(widget.log().len(), 2);

        widget.close();
        assert!(!widget.is_open());
    }

    #[test]
    fn test_bullet_lines() {
        let reply = "• Oral cancer can affect the lips.\n\
                     Some intro text\n\
                     •   Tobacco is a major risk factor.\n\
                     - Early detection helps.\n\
                     * Consult a medical professional.\n\
                     •";
        assert_eq!(
            bullet_lines(reply),
            vec![
                "Oral cancer can affect the lips.",
                "Tobacco is a major risk factor.",
                "Early detection helps.",
                "Consult a medical professional.",
            ]
        );
    }

    #[test]
    fn test_unbulleted_reply_renders_empty_list() {
        let message = ChatMessage::bot("Just a sentence.");
        assert_eq!(
            render_entry(&message, ReplyFormat::Bullets),
            ReplyView::Bullets(Vec::new())
        );
        assert_eq!(
            render_entry(&message, ReplyFormat::Plain),
            ReplyView::Text("Just a sentence.".to_string())
        );
    }

    #[test]
    fn test_user_entries_never_bulleted() {
        let message = ChatMessage::user("• not a bot");
        assert_eq!(
            render_entry(&message, ReplyFormat::Bullets),
            ReplyView::Text("• not a bot".to_string())
        );
    }
}
