//! Seeded train/test partitioning.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{Error, Result};

/// Split items into (train, test) partitions
///
/// Indices are shuffled with a seeded RNG so the same seed always produces
/// the same partition. `test_size` is the fraction assigned to the test
/// side, rounded to the nearest whole item; it must lie strictly between
/// 0 and 1.
pub fn train_test_split<T: Clone>(
    items: &[T],
    test_size: f64,
    seed: u64,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "test_size must be in (0, 1), got {test_size}"
        )));
    }

    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    let n_test = ((items.len() as f64) * test_size).round() as usize;
    let n_test = n_test.min(items.len());

    let test = indices[..n_test]
        .iter()
        .map(|&i| items[i].clone())
        .collect();
    let train = indices[n_test..]
        .iter()
        .map(|&i| items[i].clone())
        .collect();
    Ok((train, test))
}
