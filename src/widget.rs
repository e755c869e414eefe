// Chat support widget: visibility, append-only transcript, and the
// simulated reply flow. All timing goes through `tick(now)` so nothing
// here blocks the event loop.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{Config, FALLBACK_RESPONSE, SUPPORT_RESPONSE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Support,
}

#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Scheduled continuation for the simulated support reply. Guarded by the
/// typing flag; cancelled only by `unmount`.
struct PendingReply {
    due: Instant,
}

/// Focus moves into the input a beat after the panel opens.
struct PendingFocus {
    due: Instant,
}

/// A category prompt lands in the input shortly after a card click.
struct PendingPrefill {
    due: Instant,
    text: String,
}

pub struct ChatWidget {
    visible: bool,
    typing: bool,
    transcript: Vec<Entry>,
    pub input: String,
    input_focused: bool,
    pub scroll_offset: usize,
    pending_reply: Option<PendingReply>,
    pending_focus: Option<PendingFocus>,
    pending_prefill: Option<PendingPrefill>,
    focus_delay: Duration,
    prefill_delay: Duration,
}

impl ChatWidget {
    pub fn new(config: &Config) -> Self {
        Self {
            visible: false,
            typing: false,
            transcript: Vec::new(),
            input: String::new(),
            input_focused: false,
            scroll_offset: 0,
            pending_reply: None,
            pending_focus: None,
            pending_prefill: None,
            focus_delay: Duration::from_millis(config.focus_delay_ms),
            prefill_delay: Duration::from_millis(config.prefill_delay_ms),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    /// Direct click into the input field skips the focus delay.
    pub fn focus_input(&mut self) {
        if self.visible {
            self.input_focused = true;
            self.pending_focus = None;
        }
    }

    pub fn transcript(&self) -> &[Entry] {
        &self.transcript
    }

    /// Show the panel. Opening an already-open panel only re-schedules the
    /// input focus; transcript and visibility are untouched.
    pub fn open(&mut self, now: Instant) {
        if !self.visible {
            log::debug!("opening chat widget");
            self.visible = true;
        }
        self.pending_focus = Some(PendingFocus {
            due: now + self.focus_delay,
        });
    }

    /// Hide the panel. A pending simulated reply keeps running and will
    /// land in the transcript once due.
    pub fn close(&mut self) {
        if self.visible {
            log::debug!("closing chat widget");
            self.visible = false;
            self.input_focused = false;
            self.pending_focus = None;
        }
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.visible {
            self.close();
        } else {
            self.open(now);
        }
    }

    /// Submit the current input. Blank input or an already-pending reply is a
    /// no-op. Returns whether a message was actually sent.
    pub fn submit(&mut self, now: Instant, reply_delay: Duration) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.typing {
            return false;
        }

        log::debug!("sending message: {}", text);
        self.push(Author::User, text);
        self.input.clear();
        self.typing = true;
        self.pending_reply = Some(PendingReply {
            due: now + reply_delay,
        });
        self.scroll_offset = 0;
        true
    }

    /// Open the panel for a support category and schedule its prompt to land
    /// in the input.
    pub fn open_with_prompt(&mut self, prompt: &str, now: Instant) {
        self.open(now);
        self.pending_prefill = Some(PendingPrefill {
            due: now + self.prefill_delay,
            text: prompt.to_string(),
        });
    }

    /// Append the fixed apology pointing at the phone line. Used when
    /// something goes wrong while the transcript is active.
    pub fn report_error(&mut self) {
        self.push(Author::Support, FALLBACK_RESPONSE.to_string());
        self.scroll_offset = 0;
    }

    /// Fire any continuation whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.pending_reply.as_ref().is_some_and(|p| now >= p.due) {
            self.pending_reply = None;
            self.typing = false;
            self.push(Author::Support, SUPPORT_RESPONSE.to_string());
            self.scroll_offset = 0;
        }

        if self.pending_focus.as_ref().is_some_and(|p| now >= p.due) {
            self.pending_focus = None;
            self.input_focused = true;
        }

        if self.pending_prefill.as_ref().is_some_and(|p| now >= p.due) {
            if let Some(prefill) = self.pending_prefill.take() {
                self.input = prefill.text;
                self.input_focused = true;
            }
        }
    }

    /// Teardown: hide the panel and cancel every scheduled continuation,
    /// including a pending simulated reply.
    pub fn unmount(&mut self) {
        self.visible = false;
        self.typing = false;
        self.input_focused = false;
        self.pending_reply = None;
        self.pending_focus = None;
        self.pending_prefill = None;
    }

    /// Scroll one line back into the history. The cap comes from the
    /// renderer, which knows how many lines the transcript wraps to.
    pub fn scroll_up(&mut self, max_scroll: usize) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
        }
    }

    fn push(&mut self, author: Author, text: String) {
        self.transcript.push(Entry {
            author,
            text,
            timestamp: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ChatWidget {
        ChatWidget::new(&Config::default())
    }

    const DELAY: Duration = Duration::from_millis(1500);

    #[test]
    fn send_appends_user_entry_then_support_entry_after_delay() {
        let mut w = widget();
        let now = Instant::now();
        w.open(now);
        w.input = "I need help".to_string();

        assert!(w.submit(now, DELAY));
        assert_eq!(w.transcript.len(), 1);
        assert_eq!(w.transcript[0].author, Author::User);
        assert_eq!(w.transcript[0].text, "I need help");
        assert!(w.is_typing());
        assert!(w.input.is_empty());

        // Just before the deadline nothing changes.
        w.tick(now + DELAY - Duration::from_millis(1));
        assert_eq!(w.transcript.len(), 1);
        assert!(w.is_typing());

        w.tick(now + DELAY);
        assert_eq!(w.transcript.len(), 2);
        assert_eq!(w.transcript[1].author, Author::Support);
        assert_eq!(w.transcript[1].text, SUPPORT_RESPONSE);
        assert!(!w.is_typing());
    }

    #[test]
    fn send_while_reply_pending_is_a_noop() {
        let mut w = widget();
        let now = Instant::now();
        w.input = "first".to_string();
        assert!(w.submit(now, DELAY));

        w.input = "second".to_string();
        assert!(!w.submit(now + Duration::from_millis(10), DELAY));
        assert_eq!(w.transcript.len(), 1);
        assert_eq!(w.input, "second");

        // Exactly one support entry arrives, for the first send.
        w.tick(now + DELAY);
        assert_eq!(w.transcript.len(), 2);
    }

    #[test]
    fn blank_or_whitespace_send_is_a_noop() {
        let mut w = widget();
        let now = Instant::now();
        assert!(!w.submit(now, DELAY));
        w.input = "   \t ".to_string();
        assert!(!w.submit(now, DELAY));
        assert!(w.transcript.is_empty());
        assert!(!w.is_typing());
    }

    #[test]
    fn open_is_idempotent() {
        let mut w = widget();
        let now = Instant::now();
        w.open(now);
        w.input = "hi".to_string();
        w.submit(now, DELAY);
        let len = w.transcript.len();

        w.open(now + Duration::from_millis(50));
        assert!(w.is_open());
        assert_eq!(w.transcript.len(), len);
    }

    #[test]
    fn close_only_matters_when_open() {
        let mut w = widget();
        assert!(!w.is_open());
        w.close();
        assert!(!w.is_open());

        w.open(Instant::now());
        assert!(w.is_open());
        w.close();
        assert!(!w.is_open());
        assert!(!w.input_focused());
    }

    #[test]
    fn focus_moves_into_input_after_open_delay() {
        let mut w = widget();
        let now = Instant::now();
        w.open(now);
        assert!(!w.input_focused());

        w.tick(now + Duration::from_millis(299));
        assert!(!w.input_focused());

        w.tick(now + Duration::from_millis(300));
        assert!(w.input_focused());
    }

    #[test]
    fn category_opens_panel_and_prefills_after_delay() {
        let mut w = widget();
        let now = Instant::now();
        w.open_with_prompt("I need technical support.", now);
        assert!(w.is_open());
        assert!(w.input.is_empty());

        w.tick(now + Duration::from_millis(500));
        assert_eq!(w.input, "I need technical support.");
        assert!(w.input_focused());
        assert!(w.transcript.is_empty());
    }

    #[test]
    fn close_keeps_pending_reply_running() {
        let mut w = widget();
        let now = Instant::now();
        w.open(now);
        w.input = "hello".to_string();
        w.submit(now, DELAY);
        w.close();

        w.tick(now + DELAY);
        assert_eq!(w.transcript.len(), 2);
        assert_eq!(w.transcript[1].author, Author::Support);
    }

    #[test]
    fn unmount_cancels_pending_reply() {
        let mut w = widget();
        let now = Instant::now();
        w.open(now);
        w.input = "hello".to_string();
        w.submit(now, DELAY);
        w.unmount();

        w.tick(now + DELAY * 2);
        assert_eq!(w.transcript.len(), 1);
        assert!(!w.is_typing());
        assert!(!w.is_open());
    }

    #[test]
    fn scroll_cap_follows_rendered_lines_not_entry_count() {
        let mut w = widget();
        let mut now = Instant::now();
        for _ in 0..3 {
            w.input = "I need help".to_string();
            w.submit(now, DELAY);
            now += DELAY;
            w.tick(now);
        }
        assert_eq!(w.transcript().len(), 6);

        // The support replies wrap to many lines at panel width, so the
        // usable range runs well past the entry count.
        let max_scroll = 24;
        for _ in 0..100 {
            w.scroll_up(max_scroll);
        }
        assert_eq!(w.scroll_offset, max_scroll);
    }

    #[test]
    fn report_error_appends_fallback_message() {
        let mut w = widget();
        w.report_error();
        assert_eq!(w.transcript.len(), 1);
        assert_eq!(w.transcript[0].author, Author::Support);
        assert_eq!(w.transcript[0].text, FALLBACK_RESPONSE);
    }
}
