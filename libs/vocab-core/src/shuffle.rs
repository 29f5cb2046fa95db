//! Fisher-Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place with a uniform Fisher-Yates pass.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
