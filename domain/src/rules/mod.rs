//! Rule-based response dispatch.
//!
//! A fixed, ordered list of keyword-triggered rule groups that can answer a
//! message without touching the remote model path. Priority is total and
//! deterministic: location > safety > prize > technical support >
//! frustration. The first matching group wins.

pub mod dispatcher;
pub mod responses;

pub use dispatcher::{RuleDispatcher, RuleGroup, RuleMatch};
