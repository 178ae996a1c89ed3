//! Text-editing actions: reply, compose, submit.
//!
//! Checked before everything else in the local cascade - these verbs are
//! imperative and distinct from navigation phrasing, and acting on a focused
//! text surface takes precedence over reinterpreting the same words as a
//! destination. Inserted text keeps the speaker's casing; it is content, not
//! a navigation target.

use std::sync::LazyLock;

use regex::Regex;

use crate::command::dispatch::{dispatch_text_insert, dispatch_text_submit};
use crate::core::types::Outcome;
use crate::providers::TextSurface;

static OPEN_REPLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:open|click|start)\s+reply\b").unwrap());

static REPLY_WITH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:reply|respond)\s+(?:with|saying)\s+(.+)").unwrap());

static WRITE_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:write|type|paste|input)\s+(?:in\s+)?(?:the\s+)?(?:discussion\s+box\s+|text\s+box\s+|input\s+field\s+)?(.+)",
    )
    .unwrap()
});

static SUBMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:submit|send|post)\b").unwrap());

/// Try to interpret the utterance as a text-surface action.
///
/// `NotApplicable` both when no text verb fires and when one fires on a page
/// without the required surface - either way the cascade moves on.
pub fn try_text_action(utterance: &str, surface: &dyn TextSurface) -> Outcome {
    if OPEN_REPLY.is_match(utterance) {
        return if surface.open_reply() {
            tracing::info!("reply surface opened");
            Outcome::Handled
        } else {
            Outcome::NotApplicable
        };
    }

    if let Some(caps) = REPLY_WITH.captures(utterance) {
        let text = caps[1].trim().to_string();
        if !surface.open_reply() {
            return Outcome::NotApplicable;
        }
        return dispatch_text_insert(&text, surface);
    }

    if let Some(caps) = WRITE_TEXT.captures(utterance) {
        let text = caps[1].trim();
        if !text.is_empty() {
            return dispatch_text_insert(text, surface);
        }
    }

    if SUBMIT.is_match(utterance) {
        return dispatch_text_submit(surface);
    }

    Outcome::NotApplicable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FailReason;
    use std::sync::Mutex;

    /// Scriptable text surface that records what was written.
    struct Surface {
        has_surface: bool,
        reply_opens: bool,
        write_succeeds: bool,
        inserted: Mutex<Vec<String>>,
        submitted: Mutex<u32>,
    }

    impl Surface {
        fn present() -> Self {
            Self {
                has_surface: true,
                reply_opens: true,
                write_succeeds: true,
                inserted: Mutex::new(Vec::new()),
                submitted: Mutex::new(0),
            }
        }

        fn absent() -> Self {
            Self {
                has_surface: false,
                reply_opens: false,
                write_succeeds: false,
                inserted: Mutex::new(Vec::new()),
                submitted: Mutex::new(0),
            }
        }
    }

    impl TextSurface for Surface {
        fn has_active_editable_surface(&self) -> bool {
            self.has_surface
        }
        fn open_reply(&self) -> bool {
            self.reply_opens
        }
        fn insert_text(&self, text: &str) -> bool {
            self.inserted.lock().unwrap().push(text.to_string());
            self.write_succeeds
        }
        fn submit(&self) -> bool {
            *self.submitted.lock().unwrap() += 1;
            true
        }
    }

    #[test]
    fn test_open_reply() {
        let surface = Surface::present();
        assert_eq!(try_text_action("open reply", &surface), Outcome::Handled);
        assert_eq!(try_text_action("start reply", &surface), Outcome::Handled);
    }

    #[test]
    fn test_reply_with_inserts_text() {
        let surface = Surface::present();
        assert_eq!(
            try_text_action("reply with Hello World", &surface),
            Outcome::Handled
        );
        assert_eq!(surface.inserted.lock().unwrap().as_slice(), ["Hello World"]);
    }

    #[test]
    fn test_reply_without_surface_is_not_applicable() {
        let surface = Surface::absent();
        assert_eq!(
            try_text_action("reply with hello world", &surface),
            Outcome::NotApplicable
        );
        assert!(surface.inserted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_write_keeps_casing() {
        let surface = Surface::present();
        assert_eq!(
            try_text_action("write in the discussion box See You Monday", &surface),
            Outcome::Handled
        );
        assert_eq!(
            surface.inserted.lock().unwrap().as_slice(),
            ["See You Monday"]
        );
    }

    #[test]
    fn test_failed_write_is_partial() {
        let mut surface = Surface::present();
        surface.write_succeeds = false;
        assert_eq!(
            try_text_action("type hello", &surface),
            Outcome::Failed(FailReason::PartialWrite)
        );
    }

    #[test]
    fn test_submit() {
        let surface = Surface::present();
        assert_eq!(try_text_action("submit", &surface), Outcome::Handled);
        assert_eq!(*surface.submitted.lock().unwrap(), 1);
    }

    #[test]
    fn test_submit_needs_word_boundary() {
        let surface = Surface::present();
        // "posts" is not the submit verb "post"
        assert_eq!(
            try_text_action("open posts", &surface),
            Outcome::NotApplicable
        );
    }

    #[test]
    fn test_navigation_phrasing_passes_through() {
        let surface = Surface::present();
        assert_eq!(
            try_text_action("go to dashboard", &surface),
            Outcome::NotApplicable
        );
    }
}
