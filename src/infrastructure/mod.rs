//! Infrastructure layer - External service implementations

pub mod knowledge_base;
pub mod logging;
