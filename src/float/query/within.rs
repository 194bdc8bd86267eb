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
    /// Results are returned sorted nearest-first. Ties are broken by id.
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
    /// let within = tree.within::<SquaredEuclidean>(&[1.0, 2.0, 5.0], 10f64);
    ///
    /// assert_eq!(within.len(), 2);
    /// assert_eq!(within[0].item, 100);
    /// ```
    #[inline]
    pub fn within<D>(&self, query: &[A; K], dist: A) -> Vec<Neighbour<A, T>>
    where
        D: DistanceMetric<A, K>,
    {
        let mut matching_items = self.within_unsorted::<D>(query, dist);
        matching_items.sort_unstable();
        matching_items
    }
}
