//! The trait that needs to be implemented by any distance metrics

/// Trait that needs to be implemented by any potential distance
/// metric to be used within range queries
pub trait DistanceMetric<A, const K: usize> {
    /// returns the distance between two K-d points, as measured
    /// by a particular distance metric
    fn dist(a: &[A; K], b: &[A; K]) -> A;

    /// returns the distance between two points along a single axis,
    /// as measured by a particular distance metric.
    ///
    /// Range queries compare this against the query distance to decide whether
    /// the query volume reaches across a node's splitting hyperplane, so it must never
    /// exceed `dist` for any pair of points that differ by the same amount on that axis.
    fn dist1(a: A, b: A) -> A;
}
