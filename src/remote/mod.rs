//! Remote fallback tier
//!
//! Destination catalog snapshot -> HTTP classifier -> answer parsing ->
//! re-entry into the action dispatch table.

pub mod catalog;
pub mod client;
pub mod resolver;

pub use catalog::DestinationCatalog;
pub use client::HttpClassifier;
pub use resolver::resolve_remotely;
