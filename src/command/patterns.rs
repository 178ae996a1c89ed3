//! The pattern library: an ordered table of recognizer rules.
//!
//! Each rule pairs a regex with an intent builder. Table order IS the match
//! priority: unambiguous lexical triggers (microphone, volume, transcript)
//! come before the navigation forms, and the broad "go to X / open X"
//! catch-all comes last among them so it cannot absorb words like "mic".
//! Narration phrasing closes the table.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::core::types::Intent;

/// One recognizer rule: a predicate over the utterance plus an extractor.
pub struct Rule {
    pub name: &'static str,
    regex: Regex,
    build: fn(&Captures) -> Option<Intent>,
}

impl Rule {
    /// Apply this rule. The outer `Option` is "did the predicate fire"; the
    /// inner builder may still decline (e.g. an empty navigation target).
    pub fn apply(&self, utterance: &str) -> Option<Option<Intent>> {
        self.regex
            .captures(utterance)
            .map(|caps| (self.build)(&caps))
    }
}

fn rule(name: &'static str, pattern: &str, build: fn(&Captures) -> Option<Intent>) -> Rule {
    Rule {
        name,
        regex: Regex::new(pattern).expect("invalid rule pattern"),
        build,
    }
}

/// Build a Navigate intent from capture group 1, declining when the cleaned
/// target is empty (bare "go back" carries no destination).
fn navigate_from(caps: &Captures) -> Option<Intent> {
    let target = clean_target(caps.get(1)?.as_str());
    if target.is_empty() {
        return None;
    }
    Some(Intent::Navigate(target))
}

/// The recognizer rules, in match-priority order. First match wins.
pub static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule("microphone-mute", r"(?i)\bmic(?:rophone)?\b", |_| {
            Some(Intent::MicMute)
        }),
        rule(
            "volume-shift",
            r"(?i)(?:turn|change)?\s*volume\s+(up|down|mute)\b",
            |caps| match caps[1].to_lowercase().as_str() {
                "up" => Some(Intent::VolumeUp),
                "down" => Some(Intent::VolumeDown),
                _ => Some(Intent::VolumeMute),
            },
        ),
        rule(
            "volume-set",
            r"(?i)(?:set|change)?\s*volume\s*(?:to|set)?\s*(\d+)",
            |caps| {
                let level: u64 = caps[1].parse().unwrap_or(u64::MAX);
                Some(Intent::volume_set(level))
            },
        ),
        rule(
            "transcript-toggle",
            r"(?i)\b(?:show|hide|toggle)\s+transcript\b",
            |_| Some(Intent::ToggleTranscript),
        ),
        rule(
            "context-navigation",
            r"(?i)(?:return\s+to|back\s+to|switch\s+to|change\s+to|go\s+back(?:\s+to)?)\s+([a-z0-9\s]+)",
            navigate_from,
        ),
        rule(
            "click-press",
            r"(?i)(?:click|press|select|choose|tap(?:\s+on)?|hit)\s+(?:the\s+)?([a-z0-9\s]+?)(?:\s+(?:button|link))?\s*$",
            navigate_from,
        ),
        rule(
            "specific-needs",
            r"(?i)(?:show\s+(?:all|my)(?:\s+my)?|list\s+my(?:\s+current)?|display\s+my(?:\s+enrolled)?|find\s+my)\s+([a-z0-9\s]+)",
            navigate_from,
        ),
        rule(
            "conversational",
            r"(?i)(?:i\s+(?:need|want)\s+to\s+(?:see|check)(?:\s+my)?|let\s+me\s+see(?:\s+what)?|show\s+me\s+what)\s+([a-z0-9\s]+)",
            navigate_from,
        ),
        rule(
            "question-form",
            r"(?i)(?:where\s+(?:are|is)(?:\s+my)?|can\s+i\s+see(?:\s+my)?|how\s+do\s+i\s+get\s+to(?:\s+my)?)\s+([a-z0-9\s]+)",
            navigate_from,
        ),
        rule(
            "direct-command",
            r"(?i)(?:go(?:\s+to)?|open|show(?:\s+me)?|navigate\s+to|take\s+me\s+to|view|access|display)(?:\s+my)?\s+([a-z0-9\s]+?)(?:\s+courses?)?\s*$",
            navigate_from,
        ),
        rule(
            "narration",
            r"(?i)\b(?:read|speak|narrate|tell\s+me\s+about)\b|\b(?:what'?s|what\s+is)\b(?:\s+on)?(?:\s+(?:my|this|the))?\s+(?:screen|page|window|display)\b",
            |_| Some(Intent::Narrate),
        ),
    ]
});

static FILLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)please|pls|plz").unwrap());

/// Normalize an extracted target: strip politeness filler, trim, lowercase.
///
/// Filler removal runs to a fixpoint so that removals cannot splice a new
/// filler word together; the result is idempotent under `clean_target`.
pub fn clean_target(raw: &str) -> String {
    let mut text = raw.to_string();
    loop {
        let next = FILLER.replace_all(&text, "").into_owned();
        if next == text {
            break;
        }
        text = next;
    }
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clean_strips_filler_words() {
        assert_eq!(clean_target(" Dashboard please "), "dashboard");
        assert_eq!(clean_target("grades pls"), "grades");
        assert_eq!(clean_target("plz inbox"), "inbox");
    }

    #[test]
    fn test_clean_spliced_filler() {
        // Removing "pls" must not leave a freshly spliced "plz" behind
        assert_eq!(clean_target("plplsz"), "");
    }

    #[test]
    fn test_rule_order_is_the_documented_priority() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "microphone-mute",
                "volume-shift",
                "volume-set",
                "transcript-toggle",
                "context-navigation",
                "click-press",
                "specific-needs",
                "conversational",
                "question-form",
                "direct-command",
                "narration",
            ]
        );
    }

    #[test]
    fn test_empty_navigation_target_declines() {
        let rule = RULES
            .iter()
            .find(|r| r.name == "context-navigation")
            .unwrap();
        // Fires, but the cleaned capture is pure filler
        assert_eq!(rule.apply("return to please"), Some(None));
    }

    proptest! {
        #[test]
        fn prop_clean_is_idempotent(input in ".{0,64}") {
            let once = clean_target(&input);
            prop_assert_eq!(clean_target(&once), once);
        }
    }
}
