//! Voxroute - Demo Entry Point
//!
//! Routes typed utterances through the full resolution pipeline against a
//! small in-memory page, standing in for the host application. Useful for
//! exercising the cascade by hand; the remote tier activates when
//! VOXROUTE_API_URL is set.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;

use voxroute::core::config::RouterConfig;
use voxroute::core::error::Result;
use voxroute::core::types::VolumeDirection;
use voxroute::providers::{
    AudioControls, Collaborators, InMemoryConfirmation, MessageSummary, MessagingContext,
    Narrator, PageNavigator, TextSurface,
};
use voxroute::remote::HttpClassifier;
use voxroute::router::VoiceRouter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "voxroute=debug".into()),
        )
        .init();

    tracing::info!("Voxroute demo starting...");

    let config = RouterConfig::default();
    let collab = Collaborators {
        nav: Box::new(DemoPage::new()),
        audio: Box::new(DemoAudio::new(config.volume_step)),
        narrator: Box::new(DemoNarrator),
        messaging: Box::new(DemoMessaging),
        text: Box::new(DemoText),
        confirm: Box::new(InMemoryConfirmation::new()),
    };

    let confirmation_max_age_ms = config.confirmation_max_age_ms;
    let mut router = VoiceRouter::new(collab, config);
    match HttpClassifier::from_env() {
        Ok(transport) => router = router.with_transport(Box::new(transport)),
        Err(_) => {
            tracing::warn!("VOXROUTE_API_URL not set - running without the remote fallback tier")
        }
    }

    println!("\n=== VOXROUTE ===");
    println!("Type an utterance to route it, e.g.:");
    println!("  go to dashboard");
    println!("  mute the microphone");
    println!("  set volume to 40");
    println!("  read the main content");
    println!("  quit / q");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let outcome = router.route(input).await;
        println!("outcome: {outcome:?}");

        if let Some(message) = router
            .collaborators()
            .confirm
            .read_and_clear_if_fresh(confirmation_max_age_ms)
        {
            println!("confirmation: {message}");
        }
    }

    Ok(())
}

/// A tiny fake page: a handful of sidebar sections plus course links.
struct DemoPage {
    links: Vec<String>,
    location: Mutex<String>,
}

impl DemoPage {
    fn new() -> Self {
        Self {
            links: vec![
                "announcements".into(),
                "assignments".into(),
                "discussions".into(),
                "grades".into(),
                "course home".into(),
            ],
            location: Mutex::new("/".into()),
        }
    }
}

impl PageNavigator for DemoPage {
    fn match_fixed_destination(&self, name: &str) -> bool {
        let path = match name {
            n if n.contains("dashboard") => "/",
            n if n.contains("calendar") => "/calendar",
            n if n.contains("courses") || n.contains("classes") => "/",
            n if n.contains("groups") => "/groups",
            n if n.contains("inbox") || n.contains("messages") => "/conversations",
            n if n.contains("home") => "/",
            n if n.contains("back") => "(back)",
            _ => return false,
        };
        *self.location.lock().unwrap() = path.into();
        println!("[page] navigated to {path}");
        true
    }

    fn scan_and_activate(&self, substring: &str) -> bool {
        let needle = substring.to_lowercase();
        if let Some(link) = self.links.iter().find(|l| l.contains(&needle)) {
            *self.location.lock().unwrap() = format!("/{link}");
            println!("[page] clicked link '{link}'");
            true
        } else {
            false
        }
    }

    fn link_texts(&self) -> Vec<String> {
        self.links.clone()
    }

    fn page_text(&self) -> String {
        format!(
            "You are looking at {}. Nothing else is on this demo page.",
            self.location.lock().unwrap()
        )
    }

    fn in_course_context(&self) -> bool {
        self.location.lock().unwrap().contains("/courses/")
    }
}

struct DemoAudio {
    volume: Mutex<u8>,
    microphone: Mutex<bool>,
    transcript: Mutex<bool>,
    step: u8,
}

impl DemoAudio {
    fn new(step: u8) -> Self {
        Self {
            volume: Mutex::new(100),
            microphone: Mutex::new(false),
            transcript: Mutex::new(true),
            step,
        }
    }
}

impl AudioControls for DemoAudio {
    fn toggle_microphone(&self) {
        let mut mic = self.microphone.lock().unwrap();
        *mic = !*mic;
        println!("[audio] microphone {}", if *mic { "on" } else { "off" });
    }

    fn shift_volume(&self, direction: VolumeDirection) {
        let mut volume = self.volume.lock().unwrap();
        *volume = match direction {
            VolumeDirection::Up => volume.saturating_add(self.step).min(100),
            VolumeDirection::Down => volume.saturating_sub(self.step),
            VolumeDirection::Mute => 0,
        };
        println!("[audio] volume now {}", *volume);
    }

    fn set_volume(&self, level: u8) {
        *self.volume.lock().unwrap() = level.min(100);
        println!("[audio] volume now {level}");
    }

    fn toggle_transcript_panel(&self) -> bool {
        let mut transcript = self.transcript.lock().unwrap();
        *transcript = !*transcript;
        println!(
            "[ui] transcript panel {}",
            if *transcript { "shown" } else { "hidden" }
        );
        *transcript
    }
}

struct DemoNarrator;

#[async_trait]
impl Narrator for DemoNarrator {
    async fn narrate(&self, page_text: &str, _utterance: &str) -> bool {
        println!("[narrator] {page_text}");
        true
    }
}

/// The demo page is never the messaging view.
struct DemoMessaging;

impl MessagingContext for DemoMessaging {
    fn is_in_messaging_context(&self) -> bool {
        false
    }
    fn list_messages(&self) -> Vec<MessageSummary> {
        Vec::new()
    }
    fn open_last(&self) -> bool {
        false
    }
    fn open_by_title(&self, _substring: &str) -> bool {
        false
    }
}

/// The demo page has no editable surface.
struct DemoText;

impl TextSurface for DemoText {
    fn has_active_editable_surface(&self) -> bool {
        false
    }
    fn open_reply(&self) -> bool {
        false
    }
    fn insert_text(&self, _text: &str) -> bool {
        false
    }
    fn submit(&self) -> bool {
        false
    }
}
