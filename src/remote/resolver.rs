//! The remote fallback resolver: the network-dependent second pass.
//!
//! Invoked only after every local path has failed. The classifier is an
//! opaque oracle: utterance and destination snapshot in, one string out.
//! Whatever comes back re-enters the same dispatch table the local pass
//! uses; a transport failure ends the cycle quietly because there is no
//! further tier to fall back to.

use std::sync::LazyLock;

use regex::Regex;

use crate::command::dispatch::dispatch;
use crate::core::config::RouterConfig;
use crate::core::types::{FailReason, Intent, Outcome};
use crate::providers::{ClassifierTransport, Collaborators};
use crate::remote::catalog::DestinationCatalog;

/// Reserved answer that requests page narration instead of navigation.
const NARRATE_TOKEN: &str = "narrate";

static VOLUME_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^volume\s+(\d{1,3})$").unwrap());

/// Resolve an utterance through the remote classifier.
///
/// `still_current` is consulted after the answer arrives and before any side
/// effect: a stale answer (a newer cycle has started meanwhile) is discarded
/// instead of clobbering newer UI state.
pub async fn resolve_remotely(
    utterance: &str,
    collab: &Collaborators,
    transport: &dyn ClassifierTransport,
    config: &RouterConfig,
    still_current: &(dyn Fn() -> bool + Send + Sync),
) -> Outcome {
    let catalog = DestinationCatalog::build(collab.nav.as_ref(), collab.messaging.as_ref());
    tracing::debug!(
        destinations = catalog.entries().len(),
        "asking remote classifier"
    );

    let raw = match transport.classify(utterance, catalog.entries()).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "remote classification failed");
            return Outcome::Failed(FailReason::Transport(e.to_string()));
        }
    };

    if !still_current() {
        tracing::debug!("stale remote answer discarded");
        return Outcome::NotApplicable;
    }

    let answer = parse_answer(&raw);
    if answer.is_empty() {
        tracing::warn!("remote classifier returned an empty answer");
        return Outcome::Failed(FailReason::Transport("empty answer".into()));
    }
    tracing::debug!(%answer, "remote classifier answered");

    let intent = answer_to_intent(&answer, collab.messaging.is_in_messaging_context());
    dispatch(&intent, utterance, collab, config).await
}

/// Normalize the classifier's answer: trim, strip one layer of wrapping
/// quotes, lowercase.
fn parse_answer(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix(['"', '\'']).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(['"', '\'']).unwrap_or(trimmed);
    trimmed.trim().to_lowercase()
}

/// Map a normalized answer onto the dispatch table.
///
/// An answer referencing a message line routes to open-by-title, but only
/// inside the messaging view - "messages" itself stays the sidebar
/// destination. Extension-action names route to the audio/UI handlers;
/// anything else is a navigation target.
fn answer_to_intent(answer: &str, in_messaging_context: bool) -> Intent {
    if answer == NARRATE_TOKEN {
        return Intent::Narrate;
    }

    if in_messaging_context && answer.contains("message") && answer != "messages" {
        return Intent::InboxOpenByTitle(answer.to_string());
    }

    match answer {
        "micmute" => Intent::MicMute,
        "volume up" => Intent::VolumeUp,
        "volume down" => Intent::VolumeDown,
        "volume mute" => Intent::VolumeMute,
        "toggletranscript" => Intent::ToggleTranscript,
        _ => {
            if let Some(caps) = VOLUME_LEVEL.captures(answer) {
                let level: u64 = caps[1].parse().unwrap_or(u64::MAX);
                return Intent::volume_set(level);
            }
            Intent::Navigate(answer.to_string())
        }
    }
}
