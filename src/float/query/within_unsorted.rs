use az::Cast;

use crate::distance_metric::DistanceMetric;
use crate::float::kdtree::{Axis, KdTree};
use crate::neighbour::Neighbour;
use crate::types::{Content, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Finds all elements within `dist` of `query`, using the specified
    /// distance metric function.
    ///
    /// `dist` is in the units of the metric: with [`SquaredEuclidean`](crate::SquaredEuclidean)
    /// it is the square of the search radius. The boundary is inclusive.
    ///
    /// Results are returned in arbitrary order. Faster than [`within`](KdTree::within).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point, SquaredEuclidean};
    ///
    /// let mut tree: KdTree<f64, u32, 3> = KdTree::new(Point::new(100, [1.0, 2.0, 5.0]));
    ///
    /// tree.add(&[2.0, 3.0, 6.0], 101);
    /// tree.add(&[200.0, 300.0, 600.0], 102);
    ///
    /// let within = tree.within_unsorted::<SquaredEuclidean>(&[1.0, 2.0, 5.0], 10f64);
    ///
    /// assert_eq!(within.len(), 2);
    /// ```
    #[inline]
    pub fn within_unsorted<D>(&self, query: &[A; K], dist: A) -> Vec<Neighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        let mut matching_items = Vec::new();

        self.visit_within::<D, _>(query, dist, |point, distance| {
            matching_items.push(Neighbour {
                distance,
                item: point.id(),
            })
        });

        matching_items
    }
}
