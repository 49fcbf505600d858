use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Inputs of a run: the two vectors and the scalar coefficient.
///
/// `x` and `a` stay read-only once built; `y` is updated in place by the
/// parallel phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub a: f64,
}

/// Builds `x`, `y` and `a` from a seeded generator, all uniform in `[0, 1)`.
///
/// The draw order is fixed: `x[i]` and `y[i]` interleaved for each index in
/// turn, then `a` last. Same seed and length always produce the same inputs,
/// so runs are reproducible bit for bit.
///
/// # Arguments
/// * `seed` - Seed for the generator.
/// * `len` - Number of elements in each vector.
pub fn seeded_inputs(seed: u64, len: usize) -> Inputs {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut x = Vec::with_capacity(len);
    let mut y = Vec::with_capacity(len);
    for _ in 0..len {
        x.push(rng.random::<f64>());
        y.push(rng.random::<f64>());
    }
    let a = rng.random::<f64>();

    Inputs { x, y, a }
}
