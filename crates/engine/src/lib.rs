//! Lead qualification and response engine
//!
//! Per-message pipeline:
//! user message → detail extraction (mutates the session profile) →
//! response resolution (delegate or scripted fallback) → interest
//! classification → conditional lead dispatch.
//!
//! Every operation takes the session explicitly; there is no ambient state.

pub mod engine;
pub mod extractor;
pub mod fallback;
pub mod interest;
pub mod resolver;

pub use engine::{EngineReply, LeadEngine};
pub use extractor::DetailExtractor;
pub use fallback::FallbackScript;
pub use interest::InterestClassifier;
pub use resolver::{Resolution, ResponseResolver};
