//! The local resolver: the deterministic, offline-only first pass.

use crate::command::classifier::classify;
use crate::command::dispatch::dispatch;
use crate::command::inbox::extract_inbox_intent;
use crate::command::text::try_text_action;
use crate::core::config::RouterConfig;
use crate::core::types::{FailReason, Intent, Outcome};
use crate::providers::Collaborators;

/// Resolve an utterance without touching the network.
///
/// Stage order, short-circuiting on the first stage that handles (or
/// terminally fails) the utterance:
///  1. text-editing actions (reply/compose/submit)
///  2. inbox actions, only inside the messaging view
///  3. intent classification -> dispatch table
///
/// A `Navigate` intent that dispatch could not place anywhere comes back as
/// `Failed(TargetNotFound)` rather than `NotApplicable`: a destination was
/// named but not found, which must escalate instead of silently no-opping.
pub async fn resolve_locally(
    utterance: &str,
    collab: &Collaborators,
    config: &RouterConfig,
) -> Outcome {
    let text_outcome = try_text_action(utterance, collab.text.as_ref());
    if !matches!(text_outcome, Outcome::NotApplicable) {
        tracing::debug!(outcome = ?text_outcome, "text stage settled the cycle");
        return text_outcome;
    }

    if collab.messaging.is_in_messaging_context() {
        if let Some(intent) = extract_inbox_intent(utterance) {
            tracing::debug!(intent = ?intent, "inbox stage fired");
            return dispatch(&intent, utterance, collab, config).await;
        }
    }

    match classify(utterance) {
        None => {
            tracing::debug!(utterance, "no pattern fired");
            Outcome::Failed(FailReason::NoMatch)
        }
        Some(intent) => {
            let named_destination = matches!(intent, Intent::Navigate(_));
            let outcome = dispatch(&intent, utterance, collab, config).await;
            if named_destination && outcome == Outcome::NotApplicable {
                Outcome::Failed(FailReason::TargetNotFound)
            } else {
                outcome
            }
        }
    }
}
