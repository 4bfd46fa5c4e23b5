// src/core/id_generator.rs

//! Short random identifiers that are safe to use as DNS-1035 label characters.
//!
//! Each 63-bit draw from an [`EntropySource`] is split into 6-bit groups, and
//! every group is one candidate alphabet index. Candidates outside the alphabet
//! are rejected and the next group is tried, so every symbol stays equally
//! likely while one draw usually covers several characters.
//!
//! The process-wide source used by [`rand_string`] sits behind a mutex that is
//! held for the whole string. Callers that want reproducible output or no
//! locking own a source and go through [`rand_string_with`] or [`IdGenerator`].

use crate::constants::{ID_ALPHABET, ID_INDEX_BITS, ID_INDEX_MASK, ID_INDICES_PER_DRAW};
use lazy_static::lazy_static;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

lazy_static! {
    // Seeded from the clock on first use, never reseeded.
    static ref SHARED_SOURCE: Mutex<SeededSource> = Mutex::new(SeededSource::from_time());
}

/// A pseudo-random source of non-negative 63-bit integers.
pub trait EntropySource {
    /// Returns the next value; only the low 63 bits may be set.
    fn int63(&mut self) -> u64;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn int63(&mut self) -> u64 {
        (**self).int63()
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn int63(&mut self) -> u64 {
        (**self).int63()
    }
}

/// The default source: a seeded `StdRng` with the top bit of every draw dropped.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Creates a source with a fixed seed. The same seed yields the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the current wall-clock time in nanoseconds.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| {
                d.as_secs()
                    .wrapping_mul(1_000_000_000)
                    .wrapping_add(u64::from(d.subsec_nanos()))
            })
            .unwrap_or_default();
        log::debug!("Seeding random identifier source with {}", seed);
        Self::from_seed(seed)
    }
}

impl EntropySource for SeededSource {
    fn int63(&mut self) -> u64 {
        self.rng.next_u64() >> 1
    }
}

/// An identifier generator that owns its entropy source.
#[derive(Debug)]
pub struct IdGenerator<S> {
    source: S,
}

impl<S: EntropySource> IdGenerator<S> {
    /// Wraps the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generates a random string of exactly `length` alphabet symbols.
    pub fn generate(&mut self, length: usize) -> String {
        rand_string_with(&mut self.source, length)
    }

    /// Returns the wrapped source.
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl IdGenerator<SeededSource> {
    /// A generator with its own clock-seeded source, independent of the shared one.
    pub fn from_time() -> Self {
        Self::new(SeededSource::from_time())
    }
}

/// Generates a random string of the desired length from the shared source.
///
/// The result only contains `[0-9a-z]`, so it is DNS-1035 label compliant
/// character-wise. Label length rules are up to the caller.
pub fn rand_string(length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    // The source has no invariant a panicking holder could have broken.
    let mut source = SHARED_SOURCE.lock().unwrap_or_else(PoisonError::into_inner);
    rand_string_with(&mut *source, length)
}

/// Generates a random string of the desired length from `source`.
///
/// The buffer is filled from the last position to the first. A draw is only
/// taken once the previous one has no 6-bit groups left, so a zero length
/// consumes nothing.
pub fn rand_string_with<S>(source: &mut S, length: usize) -> String
where
    S: EntropySource + ?Sized,
{
    let mut buffer = vec![0u8; length];
    let mut cache = 0u64;
    let mut remain = 0u32;

    for slot in buffer.iter_mut().rev() {
        loop {
            if remain == 0 {
                cache = source.int63();
                remain = ID_INDICES_PER_DRAW;
            }
            let candidate = usize::try_from(cache & ID_INDEX_MASK)
                .ok()
                .and_then(|idx| ID_ALPHABET.get(idx));
            cache >>= ID_INDEX_BITS;
            remain -= 1;

            if let Some(&symbol) = candidate {
                *slot = symbol;
                break;
            }
        }
    }

    buffer.into_iter().map(char::from).collect()
}
