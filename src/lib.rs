//! Voxroute - Voice-Command Interpreter and Routing Pipeline
//!
//! Converts a finalized speech (or typed) transcript into a typed intent and
//! dispatches it to the matching side-effecting handler. Resolution is
//! two-tier: a deterministic, precedence-ordered local pattern cascade runs
//! first, and a remote natural-language classifier is consulted only when
//! every local path fails.

pub mod command;
pub mod core;
pub mod providers;
pub mod remote;
pub mod router;
