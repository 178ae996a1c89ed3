//! The action dispatch table: one handler per intent variant.

use crate::core::config::{HomePolicy, RouterConfig};
use crate::core::types::{FailReason, Intent, Outcome, VolumeDirection};
use crate::providers::confirm::now_ms;
use crate::providers::{Collaborators, TextSurface};

/// Dispatch a resolved intent to its side-effecting handler.
///
/// The original utterance rides along for the narration handler, which
/// forwards it as an emphasis hint. Every arm reports back through the
/// tri-state [`Outcome`] so the caller can decide whether to escalate.
pub async fn dispatch(
    intent: &Intent,
    utterance: &str,
    collab: &Collaborators,
    config: &RouterConfig,
) -> Outcome {
    match intent {
        Intent::Navigate(target) => dispatch_navigate(target, collab, config),
        Intent::MicMute => {
            collab.audio.toggle_microphone();
            Outcome::Handled
        }
        Intent::VolumeUp => {
            collab.audio.shift_volume(VolumeDirection::Up);
            Outcome::Handled
        }
        Intent::VolumeDown => {
            collab.audio.shift_volume(VolumeDirection::Down);
            Outcome::Handled
        }
        Intent::VolumeMute => {
            collab.audio.shift_volume(VolumeDirection::Mute);
            Outcome::Handled
        }
        Intent::VolumeSet(level) => {
            collab.audio.set_volume(*level);
            Outcome::Handled
        }
        Intent::ToggleTranscript => {
            let visible = collab.audio.toggle_transcript_panel();
            tracing::debug!(visible, "transcript panel toggled");
            Outcome::Handled
        }
        Intent::Narrate => {
            let page_text = collab.nav.page_text();
            if !collab.narrator.narrate(&page_text, utterance).await {
                tracing::warn!("narration playback did not start");
            }
            Outcome::Handled
        }
        Intent::TextInsert(text) => dispatch_text_insert(text, collab.text.as_ref()),
        Intent::TextSubmit => dispatch_text_submit(collab.text.as_ref()),
        Intent::InboxOpenLast => {
            if !collab.messaging.is_in_messaging_context() {
                return Outcome::NotApplicable;
            }
            if collab.messaging.open_last() {
                collab
                    .confirm
                    .write_confirmation("Opened last message", now_ms());
                Outcome::Handled
            } else {
                Outcome::Failed(FailReason::TargetNotFound)
            }
        }
        Intent::InboxOpenByTitle(title) => {
            if !collab.messaging.is_in_messaging_context() {
                return Outcome::NotApplicable;
            }
            if collab.messaging.open_by_title(title) {
                collab
                    .confirm
                    .write_confirmation(&format!("Opened message {title}"), now_ms());
                Outcome::Handled
            } else {
                Outcome::Failed(FailReason::TargetNotFound)
            }
        }
    }
}

/// Navigate handler: fixed-destination router first, page scan second.
///
/// Under [`HomePolicy::SuppressInCourse`] a target mentioning "home" skips
/// the fixed router while inside a course, so the on-page "Home" tab wins
/// over the app dashboard.
fn dispatch_navigate(target: &str, collab: &Collaborators, config: &RouterConfig) -> Outcome {
    let suppress_fixed = target.contains("home")
        && config.home_policy == HomePolicy::SuppressInCourse
        && collab.nav.in_course_context();

    if !suppress_fixed && collab.nav.match_fixed_destination(target) {
        tracing::info!(target, "fixed destination matched");
        collab
            .confirm
            .write_confirmation(&format!("Opened {target}"), now_ms());
        return Outcome::Handled;
    }

    if collab.nav.scan_and_activate(target) {
        tracing::info!(target, "page link activated");
        collab
            .confirm
            .write_confirmation(&format!("Opened {target}"), now_ms());
        return Outcome::Handled;
    }

    tracing::debug!(target, "no destination matched");
    Outcome::NotApplicable
}

/// Shared by the dispatch table and the text-action stage, which reaches the
/// same handler without going through intent classification.
pub(crate) fn dispatch_text_insert(text: &str, surface: &dyn TextSurface) -> Outcome {
    if !surface.has_active_editable_surface() {
        return Outcome::NotApplicable;
    }
    if surface.insert_text(text) {
        Outcome::Handled
    } else {
        tracing::warn!("text insert did not take effect");
        Outcome::Failed(FailReason::PartialWrite)
    }
}

pub(crate) fn dispatch_text_submit(surface: &dyn TextSurface) -> Outcome {
    if !surface.has_active_editable_surface() {
        return Outcome::NotApplicable;
    }
    if surface.submit() {
        Outcome::Handled
    } else {
        tracing::warn!("submit did not take effect");
        Outcome::Failed(FailReason::PartialWrite)
    }
}
