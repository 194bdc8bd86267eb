//! Random data generation and brute-force range search, shared by tests and benches.
use std::array;
use std::ops::Range;

use az::Az;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::distance_metric::DistanceMetric;
use crate::float::distance::SquaredEuclidean;
use crate::float::kdtree::Axis;
use crate::float::point::Point;
use crate::types::Content;

/// Deterministic RNG, so that randomised tests are reproducible.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Co-ordinates drawn uniformly from `range` on every axis.
pub fn rand_coords<A, R, const K: usize>(rng: &mut R, range: Range<A>) -> [A; K]
where
    A: Axis + SampleUniform,
    R: Rng,
{
    array::from_fn(|_| rng.random_range(range.clone()))
}

/// `n` points with uniformly distributed co-ordinates, with ids `0..n` in order.
pub fn rand_points<A, R, const K: usize>(
    rng: &mut R,
    n: usize,
    range: Range<A>,
) -> Vec<Point<A, u32, K>>
where
    A: Axis + SampleUniform,
    R: Rng,
{
    (0..n)
        .map(|idx| Point::new(idx.az::<u32>(), rand_coords(rng, range.clone())))
        .collect()
}

/// Sorted ids of every point within Euclidean `radius` of `query`, found by checking them all.
pub fn linear_search<A: Axis, T: Content, const K: usize>(
    points: &[Point<A, T, K>],
    query: &[A; K],
    radius: A,
) -> Vec<T> {
    if radius < A::zero() {
        return Vec::new();
    }
    linear_search_within::<SquaredEuclidean, A, T, K>(points, query, radius * radius)
}

/// Sorted ids of every point within `dist` of `query` under `D`, found by checking them all.
pub fn linear_search_within<D, A, T, const K: usize>(
    points: &[Point<A, T, K>],
    query: &[A; K],
    dist: A,
) -> Vec<T>
where
    D: DistanceMetric<A, K>,
    A: Axis,
    T: Content,
{
    let mut matching_items: Vec<T> = points
        .iter()
        .filter(|point| D::dist(query, point.coords()) <= dist)
        .map(|point| point.id())
        .collect();
    matching_items.sort_unstable();

    matching_items
}

/// Sorted ids of `points`, for order-independent comparison of query results.
pub fn sorted_ids<A: Copy, T: Content, const K: usize>(points: &[Point<A, T, K>]) -> Vec<T> {
    let mut ids: Vec<T> = points.iter().map(|point| point.id()).collect();
    ids.sort_unstable();
    ids
}
