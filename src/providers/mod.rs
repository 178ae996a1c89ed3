//! Capability interfaces for the page, audio, messaging and narration
//! collaborators.
//!
//! The resolvers never touch the host page directly; every side effect goes
//! through one of these traits, injected as a [`Collaborators`] bundle. A
//! collaborator that is not available on the current page answers through its
//! own interface (`has_active_editable_surface`, `is_in_messaging_context`),
//! which the dispatch table turns into a typed `NotApplicable` instead of a
//! crash.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::VolumeDirection;

pub mod confirm;

pub use confirm::InMemoryConfirmation;

/// One indexed message in the messaging view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Subject/header line
    pub header: String,
    /// Participant names, already joined for display
    pub participants: String,
    /// Display date of the latest activity
    pub date: String,
}

/// Access to the host page's navigation surface.
pub trait PageNavigator: Send + Sync {
    /// Route `name` through the fixed-destination table (known app sections
    /// with hardcoded URLs). Navigates and returns true on a match.
    fn match_fixed_destination(&self, name: &str) -> bool;

    /// Scan visible link text/titles for a case-insensitive substring match
    /// and activate the first hit, one level of nested children deep.
    fn scan_and_activate(&self, substring: &str) -> bool;

    /// All visible link texts/titles, for the destination catalog scrape.
    fn link_texts(&self) -> Vec<String>;

    /// The page's extracted main-content text, for narration.
    fn page_text(&self) -> String;

    /// Whether the current page is inside a course context (home policy).
    fn in_course_context(&self) -> bool;
}

/// Microphone, volume and transcript-panel controls.
pub trait AudioControls: Send + Sync {
    fn toggle_microphone(&self);

    /// Relative volume change, stepping by the configured amount and
    /// saturating at 0 and 100; `Mute` drops straight to 0.
    fn shift_volume(&self, direction: VolumeDirection);

    /// Absolute volume; callers pass a level already clamped to 0..=100.
    fn set_volume(&self, level: u8);

    /// Returns the new visibility of the transcript panel.
    fn toggle_transcript_panel(&self) -> bool;
}

/// Text-to-speech narration of page content.
#[async_trait]
pub trait Narrator: Send + Sync {
    /// Narrate `page_text`, using the original utterance for emphasis hints.
    /// Returns false when playback could not be started.
    async fn narrate(&self, page_text: &str, utterance: &str) -> bool;
}

/// The messaging (inbox) view, when the current page is one.
pub trait MessagingContext: Send + Sync {
    fn is_in_messaging_context(&self) -> bool;

    /// Messages currently indexed by the view, newest last.
    fn list_messages(&self) -> Vec<MessageSummary>;

    /// Open the most recent message. False when there is none.
    fn open_last(&self) -> bool;

    /// Open the first message whose header contains `substring`
    /// (case-insensitive). False when nothing matches.
    fn open_by_title(&self, substring: &str) -> bool;
}

/// An editable reply/compose surface on the page.
pub trait TextSurface: Send + Sync {
    fn has_active_editable_surface(&self) -> bool;

    /// Activate the reply surface (click the reply control). False when no
    /// such control exists on this page.
    fn open_reply(&self) -> bool;

    /// Write `text` into the active surface. False when the write did not
    /// take effect.
    fn insert_text(&self, text: &str) -> bool;

    /// Submit the active surface. False when no submit control exists.
    fn submit(&self) -> bool;
}

/// Ephemeral cross-navigation storage for confirmation messages.
///
/// Navigation destroys the app's in-memory state, so "Opened X" has to
/// survive the reload out-of-band: write-then-read-once, cleared on read.
pub trait ConfirmationChannel: Send + Sync {
    fn write_confirmation(&self, message: &str, timestamp_ms: u64);

    /// Take the stored confirmation if it is younger than `max_age_ms`.
    /// Clears the record either way.
    fn read_and_clear_if_fresh(&self, max_age_ms: u64) -> Option<String>;
}

/// The remote natural-language classifier.
#[async_trait]
pub trait ClassifierTransport: Send + Sync {
    /// Submit the utterance plus the currently valid destinations; the
    /// answer is a single destination string.
    async fn classify(&self, utterance: &str, catalog: &[String]) -> Result<String>;
}

/// The full set of collaborators one resolution cycle works against.
pub struct Collaborators {
    pub nav: Box<dyn PageNavigator>,
    pub audio: Box<dyn AudioControls>,
    pub narrator: Box<dyn Narrator>,
    pub messaging: Box<dyn MessagingContext>,
    pub text: Box<dyn TextSurface>,
    pub confirm: Box<dyn ConfirmationChannel>,
}
