//! Floating point k-d tree, for use when the co-ordinates of the points being stored in the tree
//! are floats. f64 or f32 are supported currently.

use az::{Az, Cast};
use num_traits::float::FloatCore;
use std::fmt::Debug;

use crate::float::point::Point;
use crate::types::{Content, Index};

/// Axis trait represents the traits that must be implemented
/// by the type that is used as the first generic parameter, `A`,
/// on the float [`KdTree`]. This will be [`f64`] or [`f32`].
pub trait Axis: FloatCore + Default + Debug + Copy + Sync + Send {}
impl<T: FloatCore + Default + Debug + Copy + Sync + Send> Axis for T {}

/// Floating point k-d tree
///
/// Points are added one at a time and are never moved once placed: each node
/// holds exactly one point and splits space along a single axis, cycling through the
/// axes by depth. The tree is never rebalanced, so its shape is purely a function of
/// insertion order.
///
/// Nodes are stored in a single arena and refer to their children by index
/// (of type `IDX`, `u32` by default), so a tree that has degenerated into a long chain
/// can still be traversed and dropped without deep recursion.
///
/// A tree always holds at least one point: it is created from its root.
///
/// # Examples
///
/// ```rust
/// use kdrange::{KdTree, Point};
///
/// let mut tree: KdTree<f64, u32, 2> = KdTree::new(Point::new(1, [0.3, 0.5]));
///
/// tree.insert(Point::new(2, [-0.3, 0.5]));
/// tree.add(&[0.9, 1.5], 3);
///
/// assert_eq!(tree.size(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct KdTree<A, T, const K: usize, IDX = u32> {
    pub(crate) nodes: Vec<Node<A, T, K, IDX>>,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<A, T, const K: usize, IDX> {
    pub(crate) point: Point<A, T, K>,
    pub(crate) split_axis: usize,
    pub(crate) left: IDX,
    pub(crate) right: IDX,
}

impl<A: Axis, T: Content, const K: usize, IDX: Index> Node<A, T, K, IDX> {
    pub(crate) fn new(point: Point<A, T, K>, split_axis: usize) -> Self {
        Self {
            point,
            split_axis,
            left: <IDX as Index>::max(),
            right: <IDX as Index>::max(),
        }
    }

    /// The stored point's co-ordinate along this node's split axis.
    #[inline]
    pub(crate) fn split_val(&self) -> A {
        self.point.coords()[self.split_axis]
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<IDX> {
        (self.left != <IDX as Index>::max()).then_some(self.left)
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<IDX> {
        (self.right != <IDX as Index>::max()).then_some(self.right)
    }
}

impl<A, T, const K: usize, IDX> KdTree<A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index,
    usize: Cast<IDX>,
{
    /// Creates a new float KdTree holding just `root`, which splits on axis 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let tree: KdTree<f64, u32, 3> = KdTree::new(Point::new(100, [1.0, 2.0, 5.0]));
    ///
    /// assert_eq!(tree.size(), 1);
    /// assert_eq!(tree.root().id(), 100);
    /// ```
    #[inline]
    pub fn new(root: Point<A, T, K>) -> Self {
        Self::with_axis(root, 0)
    }

    /// Creates a new float KdTree holding just `root`, which splits on `axis`.
    /// Every level below the root then cycles on through the remaining axes.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not less than `K`.
    #[inline]
    pub fn with_axis(root: Point<A, T, K>, axis: usize) -> Self {
        Self::build(root, axis, 1)
    }

    /// Creates a new float KdTree holding just `root`, reserving arena space for
    /// `capacity` points in total.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is larger than the number of nodes that `IDX` can address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64, u32, 3> = KdTree::with_capacity(Point::new(0, [0.0; 3]), 1_000_000);
    ///
    /// tree.add(&[1.0, 2.0, 5.0], 100);
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn with_capacity(root: Point<A, T, K>, capacity: usize) -> Self {
        Self::build(root, 0, capacity)
    }

    /// Builds a tree from a sequence of points. The first point becomes the root and the
    /// rest are inserted in iteration order.
    ///
    /// Returns `None` if `points` is empty.
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let points = vec![Point::new(1, [0.0, 0.0]), Point::new(2, [1.0, 1.0])];
    /// let tree: KdTree<f32, u32, 2> = KdTree::from_points(points).unwrap();
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert!(KdTree::<f32, u32, 2>::from_points(Vec::new()).is_none());
    /// ```
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<A, T, K>>,
    {
        let mut points = points.into_iter();
        let root = points.next()?;
        let capacity = (points.size_hint().0 + 1).min(<IDX as Index>::capacity());

        let mut tree = Self::with_capacity(root, capacity);
        tree.extend(points);

        Some(tree)
    }

    fn build(root: Point<A, T, K>, axis: usize, capacity: usize) -> Self {
        const { assert!(K > 0, "a KdTree needs at least one dimension") };
        assert!(
            axis < K,
            "split axis {axis} is out of range for a {K}-dimensional tree"
        );
        assert!(
            capacity <= <IDX as Index>::capacity(),
            "capacity {capacity} exceeds the {} nodes addressable by the index type",
            <IDX as Index>::capacity()
        );

        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::new(root, axis));

        Self { nodes }
    }

    /// Returns the current number of points stored in the tree. Never zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64, u32, 3> = KdTree::new(Point::new(100, [1.0, 2.0, 5.0]));
    ///
    /// tree.add(&[1.1, 2.1, 5.1], 101);
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the point the tree was created with.
    #[inline]
    pub fn root(&self) -> &Point<A, T, K> {
        &self.nodes[0].point
    }

    /// Iterate over all stored points, in insertion order.
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64, u32, 2> = KdTree::new(Point::new(10, [1.0, 2.0]));
    /// tree.add(&[-1.0, 0.0], 11);
    ///
    /// let ids: Vec<_> = tree.iter().map(|p| p.id()).collect();
    /// assert_eq!(ids, vec![10, 11]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Point<A, T, K>> + '_ {
        self.nodes.iter().map(|node| &node.point)
    }

    /// Returns the number of nodes on the longest path from the root down to a leaf.
    ///
    /// This is `size()` in the worst case, e.g. when points are added in sorted order
    /// along the root's split axis.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(IDX, usize)> = vec![(IDX::zero(), 1)];

        while let Some((node_idx, depth)) = stack.pop() {
            let node = &self.nodes[node_idx.az::<usize>()];
            max_depth = max_depth.max(depth);

            stack.extend(node.left().map(|idx| (idx, depth + 1)));
            stack.extend(node.right().map(|idx| (idx, depth + 1)));
        }

        max_depth
    }
}

impl<A, T, const K: usize, IDX> Extend<Point<A, T, K>> for KdTree<A, T, K, IDX>
where
    A: Axis,
    T: Content,
    IDX: Index,
    usize: Cast<IDX>,
{
    fn extend<I: IntoIterator<Item = Point<A, T, K>>>(&mut self, points: I) {
        for point in points {
            self.insert(point);
        }
    }
}
