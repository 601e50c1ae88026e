//! Port definitions (interfaces to the infrastructure layer)

pub mod conversation_logger;
pub mod llm_gateway;
pub mod sentiment;
