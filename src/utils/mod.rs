//! # Utility Modules
//!
//! Supporting utilities shared by the codec and its callers.
//!
//! ## Components
//! - **Logging**: structured logging setup from [`LoggingConfig`](crate::config::LoggingConfig)

pub mod logging;
