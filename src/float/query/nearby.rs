use az::Cast;

use crate::float::distance::SquaredEuclidean;
use crate::float::kdtree::{Axis, KdTree};
use crate::float::point::Point;
use crate::types::{Content, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Finds all points whose Euclidean distance from `query` is at most `radius`.
    ///
    /// The boundary is inclusive: a point exactly `radius` away is returned. A negative
    /// radius returns nothing. Results are returned in arbitrary order, as copies of the
    /// stored points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64, u32, 2> = KdTree::new(Point::new(1, [1.0, 0.0]));
    /// tree.add(&[10.0, 10.0], 2);
    ///
    /// let nearby = tree.query(&[0.0, 0.0], 1.0);
    ///
    /// assert_eq!(nearby.len(), 1);
    /// assert_eq!(nearby[0].id(), 1);
    /// ```
    #[inline]
    pub fn query(&self, query: &[A; K], radius: A) -> Vec<Point<A, T, K>> {
        let mut matching_points = Vec::new();

        if radius >= A::zero() {
            self.visit_within::<SquaredEuclidean, _>(query, radius * radius, |point, _| {
                matching_points.push(*point)
            });
        }

        matching_points
    }

    /// Finds the ids of all points whose Euclidean distance from `query` is at most `radius`.
    ///
    /// Same semantics as [`query`](KdTree::query), returning just the ids.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64, u32, 2> = KdTree::new(Point::new(1, [0.0, 0.0]));
    /// tree.add(&[0.5, 0.5], 2);
    /// tree.add(&[5.0, 5.0], 3);
    ///
    /// let mut ids = tree.query_ids(&[0.0, 0.0], 1.0);
    /// ids.sort();
    ///
    /// assert_eq!(ids, vec![1, 2]);
    /// ```
    #[inline]
    pub fn query_ids(&self, query: &[A; K], radius: A) -> Vec<T> {
        let mut matching_items = Vec::new();

        if radius >= A::zero() {
            self.visit_within::<SquaredEuclidean, _>(query, radius * radius, |point, _| {
                matching_items.push(point.id())
            });
        }

        matching_items
    }
}
