//! xorshift64* generator for synthetic rosters.
//!
//! Same seed, same roster. Nothing in the engine draws randomness; only the
//! synthetic source does.

/// Deterministic pseudo-random generator (xorshift64*).
///
/// # Example
///
/// ```
/// use leave_engine::roster::DemoRng;
///
/// let mut a = DemoRng::new(42);
/// let mut b = DemoRng::new(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// assert!((10..20).contains(&a.range(10, 20)));
/// ```
#[derive(Debug, Clone)]
pub struct DemoRng {
    state: u64,
}

impl DemoRng {
    /// Creates a generator from a seed. A zero seed is replaced by 1.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advances the state and returns the next value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Returns a value in `[min, max)`, or `min` when the range is empty.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        let span = max.abs_diff(min);
        min.wrapping_add((self.next_u64() % span) as i64)
    }

    /// True with the given percent probability.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_u64() % 100 < u64::from(percent)
    }

    /// Picks one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = (self.next_u64() % items.len() as u64) as usize;
        items.get(index)
    }
}
