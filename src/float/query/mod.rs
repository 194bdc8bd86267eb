pub mod nearby;
pub mod within;
pub mod within_unsorted;

use az::{Az, Cast};

#[cfg(feature = "tracing")]
use tracing::{event, span, Level};

use crate::distance_metric::DistanceMetric;
use crate::float::kdtree::{Axis, KdTree};
use crate::float::point::Point;
use crate::types::{Content, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Walks every node whose subtree may hold a point within `max_dist` of `query`,
    /// calling `on_match` with each point that does and its distance.
    ///
    /// A child is visited when the query falls on its side of the parent's splitting
    /// hyperplane, or when the hyperplane itself is within `max_dist` of the query
    /// along the split axis. Any other child is pruned.
    ///
    /// Nothing matches a negative or NaN `max_dist`.
    pub(crate) fn visit_within<D, F>(&self, query: &[A; K], max_dist: A, mut on_match: F)
    where
        D: DistanceMetric<A, K>,
        F: FnMut(&Point<A, T, K>, A),
    {
        if max_dist.is_nan() || max_dist < A::zero() {
            return;
        }

        #[cfg(feature = "tracing")]
        let span = span!(Level::TRACE, "within", max_dist = ?max_dist);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        #[cfg(feature = "tracing")]
        let (mut visited, mut matched) = (0usize, 0usize);

        let mut stack: Vec<IDX> = vec![IDX::zero()];

        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx.az::<usize>()];

            let distance = D::dist(query, node.point.coords());
            if distance <= max_dist {
                on_match(&node.point, distance);
                #[cfg(feature = "tracing")]
                {
                    matched += 1;
                }
            }

            let query_val = query[node.split_axis];
            let split_val = node.split_val();
            let straddles = D::dist1(query_val, split_val) <= max_dist;
            let falls_left = query_val < split_val;

            if let Some(right) = node.right() {
                if straddles || !falls_left {
                    stack.push(right);
                }
            }
            if let Some(left) = node.left() {
                if straddles || falls_left {
                    stack.push(left);
                }
            }

            #[cfg(feature = "tracing")]
            {
                visited += 1;
            }
        }

        #[cfg(feature = "tracing")]
        event!(Level::TRACE, visited, matched, size = self.nodes.len(), "within query complete");
    }
}
