//! Deterministic input generators for tests and benches.
//!
//! All generators derive from a single process-wide seed so that a failing
//! run can be reproduced by setting the `SORT_SEED` environment variable to
//! the value reported in the assertion message.

use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::Distribution;
use rand::prelude::*;

static SEED: OnceCell<u64> = OnceCell::new();

/// The seed shared by every generator in this module.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("SORT_SEED") {
        Ok(val) => val
            .parse()
            .unwrap_or_else(|_| panic!("SORT_SEED must be a u64, got: {val}")),
        Err(_) => thread_rng().gen(),
    })
}

// Mixing the size in keeps differently sized inputs from sharing a prefix.
fn rng_for(size: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed() ^ (size as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Uniformly random values over the full `i32` range.
pub fn random(size: usize) -> Vec<i32> {
    let mut rng = rng_for(size);

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

/// Zipfian-distributed values, i.e. few distinct values with heavily skewed
/// frequencies. Exercises the duplicate-handling paths.
pub fn random_zipf(size: usize) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let mut rng = rng_for(size);
    let dist = zipf::ZipfDistribution::new(size, 1.0).unwrap();

    (0..size).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// `0, 1, .., size - 1`, already sorted.
pub fn ascending(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

/// `size - 1, .., 1, 0`, fully reversed.
pub fn descending(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

/// Random values arranged into alternating ascending and descending runs of
/// roughly sqrt(size) length.
pub fn saw_mixed(size: usize) -> Vec<i32> {
    let mut v = random(size);
    if size < 2 {
        return v;
    }

    let run_len = (size as f64).sqrt() as usize + 2;
    for (i, chunk) in v.chunks_mut(run_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// A single repeated value.
pub fn all_equal(size: usize) -> Vec<i32> {
    vec![42; size]
}
