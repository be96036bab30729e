//! Probe sequence generator: double hashing over a prime bucket count.
//!
//! Two polynomial string hashes with distinct multipliers give a start slot
//! `h1` and a step `h2 + 1`. The secondary hash is reduced modulo
//! `modulus - 1`, so the step lies in `[1, modulus)`. With a prime modulus
//! the step is coprime with it and the sequence visits every slot exactly
//! once in `modulus` attempts.

use core::iter::FusedIterator;

/// Multiplier for the start-slot hash.
pub const DEFAULT_PRIMARY_MULTIPLIER: u64 = 151;
/// Multiplier for the step hash.
pub const DEFAULT_SECONDARY_MULTIPLIER: u64 = 163;

/// The pair of multipliers feeding the two hash functions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Multipliers {
    pub primary: u64,
    pub secondary: u64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_MULTIPLIER,
            secondary: DEFAULT_SECONDARY_MULTIPLIER,
        }
    }
}

/// Horner accumulation of `key`'s bytes, reduced modulo `modulus` at every
/// step. Result lies in `[0, modulus)`.
pub fn hash(key: &str, multiplier: u64, modulus: usize) -> usize {
    debug_assert!(modulus > 0, "modulus must be positive");
    let m = modulus as u128;
    let a = u128::from(multiplier);
    key.bytes()
        .fold(0u128, |h, b| (h * a + u128::from(b)) % m) as usize
}

fn start_and_step(key: &str, modulus: usize, multipliers: &Multipliers) -> (usize, usize) {
    let start = hash(key, multipliers.primary, modulus);
    let step_modulus = modulus.saturating_sub(1).max(1);
    let step = hash(key, multipliers.secondary, step_modulus) + 1;
    (start, step)
}

/// Slot for `key` on probe `attempt` in a table of `modulus` buckets:
/// `(h1 + attempt * (h2 + 1)) mod modulus`.
pub fn probe_index(key: &str, modulus: usize, attempt: usize, multipliers: &Multipliers) -> usize {
    let (start, step) = start_and_step(key, modulus, multipliers);
    let m = modulus as u128;
    let offset = (attempt as u128 % m) * (step as u128) % m;
    ((start as u128 + offset) % m) as usize
}

/// The probe sequence for one key, attempts `0 .. modulus`.
///
/// Hashes the key once up front and holds neither the key nor the table, so
/// callers can mutate slots while walking it.
#[derive(Clone, Debug)]
pub struct ProbeSeq {
    index: usize,
    step: usize,
    modulus: usize,
    remaining: usize,
}

impl ProbeSeq {
    pub fn new(key: &str, modulus: usize, multipliers: &Multipliers) -> Self {
        let (start, step) = start_and_step(key, modulus, multipliers);
        Self {
            index: start,
            step: step % modulus,
            modulus,
            remaining: modulus,
        }
    }
}

impl Iterator for ProbeSeq {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        // index + step, wrapped without overflowing for huge moduli
        let gap = self.modulus - self.step;
        self.index = if current >= gap {
            current - gap
        } else {
            current + self.step
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSeq {}
impl FusedIterator for ProbeSeq {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::SizingPolicy;
    use std::collections::BTreeSet;

    const KEYS: &[&str] = &["", "a", "chien", "dog", "k0000000000000001", "zzzzzzzzzz", "é"];

    #[test]
    fn hash_is_horner() {
        let m = 1_000_003;
        assert_eq!(hash("", 151, m), 0);
        assert_eq!(hash("a", 151, m), 97);
        assert_eq!(hash("ab", 151, m), 97 * 151 + 98);
        assert_eq!(hash("a", 151, 53), 97 % 53);
    }

    #[test]
    fn hash_stays_below_modulus() {
        for &k in KEYS {
            for m in [1usize, 2, 53, 107, 1_000_003] {
                assert!(hash(k, 163, m) < m);
            }
        }
    }

    /// Invariant: with a prime modulus every key's sequence is a permutation
    /// of all slots.
    #[test]
    fn full_period_on_prime_moduli() {
        let policy = SizingPolicy::default();
        for size_index in 0..5 {
            let m = policy.capacity_for(size_index).unwrap();
            for &k in KEYS {
                let seen: BTreeSet<usize> = ProbeSeq::new(k, m, &Multipliers::default()).collect();
                assert_eq!(seen.len(), m, "key {k:?} modulus {m}");
            }
        }
        let seen: BTreeSet<usize> = ProbeSeq::new("x", 2, &Multipliers::default()).collect();
        assert_eq!(seen, BTreeSet::from([0, 1]));
    }

    /// Invariant: the iterator is the closed-form sequence, attempt by attempt.
    #[test]
    fn iterator_matches_closed_form() {
        let mults = Multipliers::default();
        for &k in KEYS {
            for m in [53usize, 107, 223] {
                for (attempt, index) in ProbeSeq::new(k, m, &mults).enumerate() {
                    assert_eq!(index, probe_index(k, m, attempt, &mults));
                }
            }
        }
    }

    #[test]
    fn empty_key_walks_linearly() {
        let got: Vec<usize> = ProbeSeq::new("", 7, &Multipliers::default()).collect();
        assert_eq!(got, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn exact_size_and_fused() {
        let mut seq = ProbeSeq::new("chien", 53, &Multipliers::default());
        assert_eq!(seq.len(), 53);
        seq.nth(51);
        assert_eq!(seq.len(), 1);
        assert!(seq.next().is_some());
        assert!(seq.next().is_none());
        assert!(seq.next().is_none());
    }

    #[test]
    fn multipliers_change_the_sequence() {
        let a = Multipliers::default();
        let b = Multipliers { primary: 31, secondary: 37 };
        let sa: Vec<usize> = ProbeSeq::new("chien", 53, &a).take(4).collect();
        let sb: Vec<usize> = ProbeSeq::new("chien", 53, &b).take(4).collect();
        assert_ne!(sa, sb);
    }
}
