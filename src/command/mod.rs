//! Local command interpretation pipeline
//!
//! Utterance -> pattern library -> intent -> dispatch table:
//! text stage -> inbox stage -> classify -> dispatch, first success wins.

pub mod classifier;
pub mod dispatch;
pub mod inbox;
pub mod patterns;
pub mod resolver;
pub mod text;

pub use classifier::classify;
pub use dispatch::dispatch;
pub use resolver::resolve_locally;
