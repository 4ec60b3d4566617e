//! Shuffle selection for "next" under shuffle mode
//!
//! Shuffle does not reorder the playlist. Each "next" draws a fresh index
//! uniformly from the whole list, so the same episode can come up again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random index picker
#[derive(Debug, Clone)]
pub struct ShufflePicker {
    rng: StdRng,

    /// Exclude the current index from the draw
    avoid_current: bool,
}

impl ShufflePicker {
    /// Create a picker, seeded from entropy unless `seed` is given
    pub fn new(seed: Option<u64>, avoid_current: bool) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self { rng, avoid_current }
    }

    /// Pick an index in `[0, len)`
    ///
    /// With `avoid_current`, the draw is uniform over every index except
    /// `current`. Lists of zero or one episode always yield 0.
    pub fn pick(&mut self, len: usize, current: usize) -> usize {
        if len <= 1 {
            return 0;
        }

        if self.avoid_current && current < len {
            // Draw from len - 1 slots and skip over the current one
            let drawn = self.rng.gen_range(0..len - 1);
            if drawn >= current {
                drawn + 1
            } else {
                drawn
            }
        } else {
            self.rng.gen_range(0..len)
        }
    }
}

impl Default for ShufflePicker {
    fn default() -> Self {
        Self::new(None, false)
    }
}
