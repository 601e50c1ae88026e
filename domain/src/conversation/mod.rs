//! Conversation entities: turns and session history

pub mod entities;

pub use entities::{ChatHistory, Role, Turn};
