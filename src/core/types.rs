//! Core vocabulary for the routing pipeline: intents and outcomes.

use serde::{Deserialize, Serialize};

/// The classified meaning of one utterance.
///
/// Produced by the local classifier or by the remote fallback's answer
/// parsing; consumed exactly once by the action dispatch table. "No intent"
/// is expressed as `Option<Intent>::None` by the classifier rather than a
/// sentinel variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Navigate to a named destination (fixed app section or page link)
    Navigate(String),
    /// Read the page's main content aloud
    Narrate,
    /// Toggle the microphone on/off
    MicMute,
    VolumeUp,
    VolumeDown,
    VolumeMute,
    /// Set the output volume to an absolute level, already clamped to 0..=100
    VolumeSet(u8),
    /// Toggle the on-page transcript panel
    ToggleTranscript,
    /// Insert text into the active editable surface
    TextInsert(String),
    /// Submit the active editable surface
    TextSubmit,
    /// Open the most recent message in the messaging view
    InboxOpenLast,
    /// Open the first message whose header contains the given text
    InboxOpenByTitle(String),
}

impl Intent {
    /// Build a `VolumeSet`, clamping the requested level into 0..=100.
    pub fn volume_set(level: u64) -> Self {
        Intent::VolumeSet(level.min(100) as u8)
    }
}

/// Direction of a relative volume change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    Up,
    Down,
    Mute,
}

/// Why a resolution stage (or the whole cycle) failed.
///
/// Only `NoMatch` and `TargetNotFound` escalate from the local resolver to
/// the remote fallback; the others are terminal for the cycle. A missing
/// collaborator surface is not a failure at all - it is
/// [`Outcome::NotApplicable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailReason {
    /// No pattern fired for the utterance
    NoMatch,
    /// A pattern fired but the named target is absent from the page/catalog
    TargetNotFound,
    /// The remote call failed or returned an unusable payload
    Transport(String),
    /// An action was attempted but its side effect could not be confirmed
    PartialWrite,
}

/// Tri-state result threaded through every stage of the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The stage performed the action
    Handled,
    /// The stage does not apply here (e.g. required surface missing)
    NotApplicable,
    /// The stage applied but could not complete
    Failed(FailReason),
}

impl Outcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled)
    }

    /// True for the failure reasons that escalate to the remote tier.
    pub fn escalates(&self) -> bool {
        matches!(
            self,
            Outcome::Failed(FailReason::NoMatch) | Outcome::Failed(FailReason::TargetNotFound)
        )
    }
}
