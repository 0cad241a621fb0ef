//! Core use-case services.
//!
//! # Responsibility
//! - Validate user input above the repository layer.
//! - Expose the call contract a presentation layer drives.

pub mod store;
