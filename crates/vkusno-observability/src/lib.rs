//! Structured logging for the Vkusno storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every entry of one storefront session
//! - `StructuredLogger` - Structured logging with session and component context
//! - `LogTarget` - Where entries go (stderr, `tracing` events, or memory)

mod logging;
mod session;

pub use logging::*;
pub use session::*;
