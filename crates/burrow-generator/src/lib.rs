pub mod error;
pub mod random;

use burrow_core::Alias;

pub use error::Error;
pub use random::{generate, RandomGenerator, DEFAULT_ALIAS_LENGTH};

/// Trait for generating aliases.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated alias may collide with one already stored; callers are
/// expected to retry when the insert is rejected.
pub trait Generator: Send + Sync + 'static {
    /// Produces a fresh alias.
    fn generate(&self) -> Alias;
}
