//! Core types for the lead agent
//!
//! Shared data model used by every other crate:
//! - Conversation turns and the append-only transcript
//! - The per-session profile of extracted visitor details
//! - The session object that owns both
//! - Lead status labels used when escalating to the notification sink

pub mod conversation;
pub mod profile;
pub mod session;

pub use conversation::{Transcript, Turn, TurnRole};
pub use profile::{LeadStatus, SessionProfile};
pub use session::Session;
