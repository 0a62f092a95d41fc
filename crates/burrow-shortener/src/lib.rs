//! URL shortener service implementation.
//!
//! This crate ties an alias [`Generator`](burrow_generator::Generator) to a
//! [`Repository`](burrow_core::Repository) and exposes the operations an
//! outer layer (CLI, HTTP handlers) calls.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use service::{ShortenerService, ShortenerSettings};
pub use shortener::Shortener;
