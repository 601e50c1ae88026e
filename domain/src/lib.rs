//! Domain layer for butler
//!
//! This crate contains the core business logic, entities, and value objects
//! for The Butler, the Scaters Raptor Roadshow 2026 chatbot.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Response selection
//!
//! Every user message flows through a layered decision process:
//!
//! - **Rules**: keyword-triggered canned responses that short-circuit
//!   the remote model path entirely
//! - **Remote**: a hosted language model queried within the fixed
//!   roadshow topic scope
//! - **Fallback**: a deterministic keyword-matched response used when no
//!   rule fires and the remote path is unavailable or invalid
//!
//! The fallback is total: for any input it produces non-empty text, so
//! the user is never left without an answer.

pub mod conversation;
pub mod core;
pub mod event;
pub mod fallback;
pub mod providers;
pub mod rules;
pub mod sentiment;
pub mod util;
pub mod validation;

// Re-export commonly used types
pub use conversation::entities::{ChatHistory, Role, Turn};
pub use core::error::DomainError;
pub use event::{REGISTRATION_URL, SCOPE_CONTEXT, SUPPORT_EMAIL};
pub use fallback::fallback_response;
pub use providers::{ProviderKind, ProviderRole, is_valid_credential};
pub use rules::{RuleDispatcher, RuleGroup, RuleMatch};
pub use sentiment::SentimentScore;
pub use util::truncate_str;
pub use validation::{MIN_RESPONSE_LEN, validate_response};
