use crate::error::{Error, Result};
use crate::Generator;
use burrow_core::{Alias, MAX_ALIAS_LENGTH};
use parking_lot::Mutex;
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Draws `length` characters uniformly from `[A-Za-z0-9]` using `rng`.
///
/// Each character is sampled independently. A `length` of zero yields an
/// empty string.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// A random alias generator over an injected RNG.
///
/// The RNG is behind a mutex so one generator can be shared by every
/// request task. The length is bounded by [`MAX_ALIAS_LENGTH`], so every
/// generated alias also passes [`Alias::new`].
#[derive(Debug)]
pub struct RandomGenerator<R = StdRng> {
    rng: Mutex<R>,
    length: usize,
}

impl RandomGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new(length: usize) -> Result<Self> {
        Self::with_rng(StdRng::from_os_rng(), length)
    }
}

impl Default for RandomGenerator<StdRng> {
    fn default() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            length: DEFAULT_ALIAS_LENGTH,
        }
    }
}

impl<R: Rng> RandomGenerator<R> {
    /// Creates a generator drawing from the given RNG.
    ///
    /// Pass a seeded RNG for reproducible output. Fails unless
    /// `1 <= length <= MAX_ALIAS_LENGTH`.
    pub fn with_rng(rng: R, length: usize) -> Result<Self> {
        if !(1..=MAX_ALIAS_LENGTH).contains(&length) {
            return Err(Error::InvalidLength {
                length,
                max: MAX_ALIAS_LENGTH,
            });
        }

        Ok(Self {
            rng: Mutex::new(rng),
            length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl<R: Rng + Send + 'static> Generator for RandomGenerator<R> {
    fn generate(&self) -> Alias {
        let mut rng = self.rng.lock();
        Alias::new_unchecked(generate(&mut *rng, self.length))
    }
}
