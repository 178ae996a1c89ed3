//! Inbox-context actions: opening messages by recency or by title.
//!
//! Only consulted while the current page is the messaging view; everywhere
//! else the stage is a no-op and the cascade moves on.

use std::sync::LazyLock;

use regex::Regex;

use crate::command::patterns::clean_target;
use crate::core::types::Intent;

static OPEN_LAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bopen\s+(?:the\s+)?(?:last|latest|newest|most\s+recent)\s+message\b")
        .unwrap()
});

static OPEN_BY_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bopen\s+(?:the\s+)?message\s+(?:about|from|titled)?\s*(.+)").unwrap()
});

/// Extract an inbox intent from the utterance, if any.
///
/// Pure, like the main classifier; the caller gates on the messaging context
/// and routes the intent through the dispatch table.
pub fn extract_inbox_intent(utterance: &str) -> Option<Intent> {
    if OPEN_LAST.is_match(utterance) {
        return Some(Intent::InboxOpenLast);
    }

    if let Some(caps) = OPEN_BY_TITLE.captures(utterance) {
        let title = clean_target(caps[1].trim());
        if !title.is_empty() {
            return Some(Intent::InboxOpenByTitle(title));
        }
    }

    None
}
