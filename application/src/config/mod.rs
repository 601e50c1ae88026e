//! Application-layer configuration

pub mod chat_params;

pub use chat_params::ChatParams;
