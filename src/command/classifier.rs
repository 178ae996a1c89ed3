//! Intent classification: run the pattern library in priority order.

use crate::command::patterns::RULES;
use crate::core::types::Intent;

/// Classify one utterance into an intent.
///
/// Pure function of the utterance: no I/O, no side effects. Runs the rules
/// strictly in table order and returns the intent built from the first rule
/// whose predicate fires, or `None` when nothing matches. A rule that fires
/// but declines (empty navigation target) ends classification - later, even
/// broader rules must not reinterpret an utterance a more specific rule
/// already claimed.
pub fn classify(utterance: &str) -> Option<Intent> {
    for rule in RULES.iter() {
        if let Some(built) = rule.apply(utterance) {
            tracing::trace!(rule = rule.name, intent = ?built, "pattern fired");
            return built;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microphone_phrases() {
        assert_eq!(classify("mute mic"), Some(Intent::MicMute));
        assert_eq!(classify("mic mute"), Some(Intent::MicMute));
        assert_eq!(classify("microphone"), Some(Intent::MicMute));
        assert_eq!(classify("mute the microphone please"), Some(Intent::MicMute));
    }

    #[test]
    fn test_microphone_beats_direct_command() {
        // "open X" must not absorb the mic trigger
        assert_eq!(classify("open the mic"), Some(Intent::MicMute));
    }

    #[test]
    fn test_volume_shift_phrases() {
        assert_eq!(classify("volume up"), Some(Intent::VolumeUp));
        assert_eq!(classify("turn volume down"), Some(Intent::VolumeDown));
        assert_eq!(classify("change volume mute"), Some(Intent::VolumeMute));
    }

    #[test]
    fn test_volume_set_clamps() {
        assert_eq!(classify("set volume to 40"), Some(Intent::VolumeSet(40)));
        assert_eq!(classify("set volume to 150"), Some(Intent::VolumeSet(100)));
        assert_eq!(classify("volume 0"), Some(Intent::VolumeSet(0)));
    }

    #[test]
    fn test_volume_beats_direct_command() {
        assert_eq!(classify("open volume up"), Some(Intent::VolumeUp));
    }

    #[test]
    fn test_transcript_toggle() {
        assert_eq!(classify("show transcript"), Some(Intent::ToggleTranscript));
        assert_eq!(classify("hide transcript"), Some(Intent::ToggleTranscript));
        assert_eq!(classify("toggle transcript"), Some(Intent::ToggleTranscript));
    }

    #[test]
    fn test_context_navigation() {
        assert_eq!(
            classify("return to grades"),
            Some(Intent::Navigate("grades".into()))
        );
        assert_eq!(
            classify("switch to assignments"),
            Some(Intent::Navigate("assignments".into()))
        );
        assert_eq!(
            classify("go back to modules"),
            Some(Intent::Navigate("modules".into()))
        );
    }

    #[test]
    fn test_click_press() {
        assert_eq!(
            classify("click the announcements link"),
            Some(Intent::Navigate("announcements".into()))
        );
        assert_eq!(
            classify("press the submit button"),
            Some(Intent::Navigate("submit".into()))
        );
    }

    #[test]
    fn test_specific_needs() {
        assert_eq!(
            classify("show all my assignments"),
            Some(Intent::Navigate("assignments".into()))
        );
        // The optional "current" qualifier is part of the verb phrase
        assert_eq!(
            classify("list my current courses"),
            Some(Intent::Navigate("courses".into()))
        );
    }

    #[test]
    fn test_conversational() {
        assert_eq!(
            classify("I need to see my grades"),
            Some(Intent::Navigate("grades".into()))
        );
    }

    #[test]
    fn test_question_forms() {
        assert_eq!(
            classify("where are my announcements"),
            Some(Intent::Navigate("announcements".into()))
        );
        assert_eq!(
            classify("can I see my files"),
            Some(Intent::Navigate("files".into()))
        );
    }

    #[test]
    fn test_direct_commands() {
        assert_eq!(
            classify("go to dashboard"),
            Some(Intent::Navigate("dashboard".into()))
        );
        assert_eq!(
            classify("open inbox please"),
            Some(Intent::Navigate("inbox".into()))
        );
        assert_eq!(
            classify("show me grades"),
            Some(Intent::Navigate("grades".into()))
        );
        // Trailing "courses" qualifier is dropped
        assert_eq!(
            classify("open biology courses"),
            Some(Intent::Navigate("biology".into()))
        );
    }

    #[test]
    fn test_narration_phrases() {
        assert_eq!(classify("read the main content"), Some(Intent::Narrate));
        assert_eq!(classify("what's on my screen"), Some(Intent::Narrate));
        assert_eq!(classify("narrate this page"), Some(Intent::Narrate));
    }

    #[test]
    fn test_narration_requires_word_boundary() {
        // "bread" must not trigger narration
        assert_eq!(classify("bread"), None);
    }

    #[test]
    fn test_filler_independence() {
        assert_eq!(
            classify("please go to dashboard"),
            Some(Intent::Navigate("dashboard".into()))
        );
        assert_eq!(
            classify("go to dashboard pls"),
            Some(Intent::Navigate("dashboard".into()))
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("xyzzy nonsense"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_bare_go_back_is_navigate_back() {
        // "go" is a direct-command verb and "back" survives as the target
        assert_eq!(classify("go back"), Some(Intent::Navigate("back".into())));
    }
}
