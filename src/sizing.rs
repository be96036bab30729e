//! Sizing policy: size index to prime bucket count.
//!
//! Capacity doubles with each size index and is rounded up to the next
//! prime, so the secondary hash step is always coprime with the bucket
//! count.

/// Minimum bucket count scale used when no configuration overrides it.
pub const DEFAULT_BASE_CAPACITY: usize = 53;

/// Maps a size index to a bucket count: the smallest prime at least
/// `base_capacity << size_index`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SizingPolicy {
    base_capacity: usize,
}

impl SizingPolicy {
    pub const fn new(base_capacity: usize) -> Self {
        Self { base_capacity }
    }

    pub fn base_capacity(&self) -> usize {
        self.base_capacity
    }

    /// Bucket count for `size_index`, or `None` if it overflows `usize`.
    pub fn capacity_for(&self, size_index: u32) -> Option<usize> {
        let scale = 1usize.checked_shl(size_index)?;
        let scaled = self.base_capacity.checked_mul(scale)?;
        next_prime(scaled)
    }
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_CAPACITY)
    }
}

/// Trial division up to `√n`.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d = 3;
    // `d <= n / d` is `d * d <= n` without the overflow.
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime `>= n`, or `None` if the search runs past `usize::MAX`.
pub fn next_prime(n: usize) -> Option<usize> {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}
