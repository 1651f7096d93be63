//! RandomSource port - Injectable source of uniform random numbers.
//!
//! The diagnosis selector draws through this port instead of a global
//! generator so tests can script the exact sequence of draws.

/// Port for uniform random draws.
///
/// # Example
///
/// ```ignore
/// let index = rng.pick_index(CATALOG.len());
/// let goes_to_hell = rng.next_unit() < probability;
/// ```
pub trait RandomSource: Send {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Picks an index in `0..len` from a single `next_unit` draw.
    ///
    /// `len` must be non-zero. Out-of-range draws are clamped so a
    /// misbehaving source can never index past the end.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index called with empty range");
        let scaled = (self.next_unit() * len as f64).floor();
        // `as` saturates: NaN and negatives become 0
        (scaled as usize).min(len.saturating_sub(1))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}
