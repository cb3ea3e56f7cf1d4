//! Benchmark inputs for the remold reshaping engine.
//!
//! Provides deterministic, seeded value generators so benchmark runs
//! are comparable across machines and commits:
//!
//! - [`int_grid`]: a two-dimensional int array
//! - [`float_row`]: a one-dimensional float array
//! - [`mixed_tree`]: a nested tuple/array structure with mixed scalar types
//! - [`range_row`]: a tuple of opaque integer ranges

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use remold_core::{ArrayValue, Value};
use smallvec::smallvec;

/// Build a `rows x cols` int array with pseudo-random contents.
pub fn int_grid(rows: usize, cols: usize, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let elements: Vec<i64> = (0..rows * cols).map(|_| rng.random_range(-1000..1000)).collect();
    Value::Array(
        ArrayValue::from_ints(smallvec![rows, cols], &elements)
            .unwrap_or_else(|_| unreachable!("element count matches rows * cols")),
    )
}

/// Build a length-`n` float array with pseudo-random contents.
pub fn float_row(n: usize, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let elements: Vec<f64> = (0..n).map(|_| rng.random_range(-1.0e6..1.0e6)).collect();
    Value::Array(
        ArrayValue::from_floats(smallvec![n], &elements)
            .unwrap_or_else(|_| unreachable!("element count matches n")),
    )
}

/// Build a nested tuple/array tree of the given depth.
///
/// Each level is a tuple of `width` children; leaves alternate between
/// ints, floats, bools, and small int arrays. Total leaf count grows as
/// roughly `width.pow(depth)`.
pub fn mixed_tree(depth: u32, width: usize, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    build_tree(depth, width, &mut rng)
}

fn build_tree(depth: u32, width: usize, rng: &mut ChaCha8Rng) -> Value {
    if depth == 0 {
        return match rng.random_range(0..4u8) {
            0 => Value::int(rng.random_range(-1000..1000)),
            1 => Value::float(rng.random_range(-1.0e6..1.0e6)),
            2 => Value::bool(rng.random()),
            _ => {
                let elements: Vec<i64> = (0..4).map(|_| rng.random_range(-100..100)).collect();
                Value::Array(
                    ArrayValue::from_ints(smallvec![2, 2], &elements)
                        .unwrap_or_else(|_| unreachable!("four elements fill a 2x2 array")),
                )
            }
        };
    }
    Value::tuple((0..width).map(|_| build_tree(depth - 1, width, rng)).collect())
}

/// Build a tuple of `n` integer ranges with pseudo-random bounds.
pub fn range_row(n: usize, seed: u64) -> Value {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Value::tuple(
        (0..n)
            .map(|_| {
                let start = rng.random_range(-100..100);
                let span = rng.random_range(0..32);
                Value::range(start, start + span)
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use remold_core::DefaultDescent;
    use remold_engine::{describe, produce};

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(int_grid(8, 8, 42), int_grid(8, 8, 42));
        assert_eq!(float_row(64, 42), float_row(64, 42));
        assert_eq!(mixed_tree(3, 4, 42), mixed_tree(3, 4, 42));
        assert_eq!(range_row(16, 42), range_row(16, 42));
    }

    #[test]
    fn int_grid_has_expected_shape() {
        let grid = int_grid(10, 20, 7);
        let array = grid.as_array().unwrap();
        assert_eq!(array.dims(), &[10, 20]);
        assert_eq!(array.len(), 200);
    }

    #[test]
    fn mixed_tree_production_matches_its_description() {
        let tree = mixed_tree(4, 3, 7);
        assert_eq!(
            produce(&tree, &DefaultDescent).len(),
            describe(&tree).leaf_count()
        );
    }
}
