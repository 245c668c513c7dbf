use rand::Rng;

/// Returns a uniformly random permutation of `0..size`.
///
/// Single Fisher–Yates pass: each step picks one of the not-yet-placed values and
/// swaps it into the shrinking tail of the buffer.
pub fn random_permutation<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<usize> {
    let mut indices = (0..size).collect::<Vec<_>>();
    for last in (1..size).rev() {
        let chosen = rng.random_range(0..=last);
        indices.swap(chosen, last);
    }
    indices
}
