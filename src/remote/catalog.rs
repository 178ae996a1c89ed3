//! The destination catalog offered to the remote classifier.
//!
//! Rebuilt fresh on every remote call so the snapshot can never go stale;
//! nothing here is persisted.

use crate::providers::{MessagingContext, PageNavigator};

/// App sections the fixed-destination router knows about.
pub const SIDEBAR_DESTINATIONS: [&str; 9] = [
    "home",
    "dashboard",
    "calendar",
    "courses",
    "classes",
    "groups",
    "inbox",
    "messages",
    "back",
];

/// Extension-action names the remote classifier may answer with. The volume
/// entry is a pattern, telling the classifier any level in range is valid.
pub const EXTENSION_ACTIONS: [&str; 6] = [
    "micmute",
    "volume up",
    "volume down",
    "volume mute",
    "volume [0-9]{1,3}",
    "toggletranscript",
];

/// Ordered set of currently valid targets: fixed sidebar destinations,
/// extension actions, the live page-link scrape and, inside the messaging
/// view, one formatted line per indexed message.
///
/// Invariant: no entry is a strict substring of another entry, so the
/// classifier cannot answer with an ambiguous partial match.
#[derive(Debug, Clone)]
pub struct DestinationCatalog {
    entries: Vec<String>,
}

impl DestinationCatalog {
    pub fn build(nav: &dyn PageNavigator, messaging: &dyn MessagingContext) -> Self {
        let mut raw: Vec<String> = SIDEBAR_DESTINATIONS
            .iter()
            .chain(EXTENSION_ACTIONS.iter())
            .map(|s| s.to_string())
            .collect();

        raw.extend(
            nav.link_texts()
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty()),
        );

        if messaging.is_in_messaging_context() {
            for message in messaging.list_messages() {
                raw.push(format!(
                    "message {} from {} on {}",
                    message.header.to_lowercase(),
                    message.participants.to_lowercase(),
                    message.date.to_lowercase(),
                ));
            }
        }

        Self {
            entries: dedup_superstrings(raw),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// Deduplicate, drop entries of length <= 2 (too short to be useful), and
/// drop every entry that is a strict substring of another entry.
fn dedup_superstrings(texts: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(texts.len());
    for text in texts {
        if !unique.contains(&text) {
            unique.push(text);
        }
    }

    let snapshot = unique.clone();
    unique.retain(|t| {
        t.len() > 2
            && !snapshot
                .iter()
                .any(|other| other.len() > t.len() && other.contains(t.as_str()))
    });
    unique
}
