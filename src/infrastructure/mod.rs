//! Infrastructure layer - Process-level wiring

pub mod logging;
