use az::{Az, Cast};
use std::ops::Rem;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

use crate::float::kdtree::{Axis, KdTree, Node};
use crate::float::point::Point;
use crate::types::{Content, Index};

impl<A: Axis, T: Content, const K: usize, IDX: Index> KdTree<A, T, K, IDX>
where
    usize: Cast<IDX>,
{
    /// Adds a point to the tree.
    ///
    /// Starting at the root, the point descends left when its co-ordinate along a node's
    /// split axis is strictly less than that node's, and right otherwise. It is stored in a
    /// new leaf at the first empty child slot it reaches, splitting on the axis after its
    /// parent's. Existing nodes are never moved or modified, and there is no duplicate
    /// detection: points with equal co-ordinates are all kept.
    ///
    /// # Panics
    ///
    /// Panics if the tree already holds as many points as `IDX` can address.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdrange::{KdTree, Point};
    ///
    /// let mut tree: KdTree<f64, u32, 3> = KdTree::new(Point::new(100, [1.0, 2.0, 5.0]));
    ///
    /// tree.insert(Point::new(101, [1.0, 2.0, 5.0]));
    ///
    /// assert_eq!(tree.size(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, point: Point<A, T, K>) {
        assert!(
            self.nodes.len() < <IDX as Index>::capacity(),
            "KdTree is full: the index type can address at most {} nodes",
            <IDX as Index>::capacity()
        );

        let new_idx: IDX = self.nodes.len().az::<IDX>();
        let mut curr_idx = 0usize;
        #[cfg(feature = "tracing")]
        let mut depth = 1usize;

        loop {
            let node = &mut self.nodes[curr_idx];
            let split_axis = node.split_axis;

            let child = if point.coords()[split_axis] < node.split_val() {
                &mut node.left
            } else {
                &mut node.right
            };

            if *child == <IDX as Index>::max() {
                *child = new_idx;
                let child_axis = (split_axis + 1).rem(K);
                self.nodes.push(Node::new(point, child_axis));

                #[cfg(feature = "tracing")]
                event!(
                    Level::TRACE,
                    depth = depth + 1,
                    split_axis = child_axis,
                    size = self.nodes.len(),
                    "point inserted"
                );

                return;
            }

            curr_idx = (*child).az::<usize>();
            #[cfg(feature = "tracing")]
            {
                depth += 1;
            }
        }
    }

    /// Adds a point with co-ordinates `query` and id `item` to the tree.
    ///
    /// Shorthand for `insert(Point::new(item, *query))`.
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
    pub fn add(&mut self, query: &[A; K], item: T) {
        self.insert(Point::new(item, *query));
    }
}

#[cfg(test)]
mod tests {
    use crate::float::kdtree::KdTree;
    use crate::float::point::Point;
    use crate::test_utils::{rand_points, seeded_rng};
    use az::Az;

    type FLT = f32;

    fn child_ids(tree: &KdTree<FLT, u32, 2>, idx: usize) -> (Option<u32>, Option<u32>) {
        let node = &tree.nodes[idx];
        (
            node.left().map(|i| tree.nodes[i.az::<usize>()].point.id()),
            node.right().map(|i| tree.nodes[i.az::<usize>()].point.id()),
        )
    }

    #[test]
    fn can_add_an_item() {
        let mut tree: KdTree<FLT, u32, 4> = KdTree::new(Point::new(1, [0.5; 4]));

        let point: [FLT; 4] = [0.1, 0.2, 0.3, 0.4];
        let item = 123;

        tree.add(&point, item);

        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn strictly_less_goes_left_and_equal_goes_right() {
        let mut tree: KdTree<FLT, u32, 2> = KdTree::new(Point::new(1, [1.0, 1.0]));

        tree.add(&[0.5, 9.0], 2);
        tree.add(&[1.0, -9.0], 3);

        assert_eq!(child_ids(&tree, 0), (Some(2), Some(3)));
    }

    #[test]
    fn split_axis_cycles_through_the_dimensions() {
        let mut tree: KdTree<FLT, u32, 3> = KdTree::new(Point::new(0, [0.0; 3]));

        for i in 1..=4 {
            tree.add(&[i as FLT; 3], i);
        }

        let axes: Vec<_> = tree.nodes.iter().map(|node| node.split_axis).collect();
        assert_eq!(axes, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn split_axis_cycles_from_a_custom_root_axis() {
        let mut tree: KdTree<FLT, u32, 3> = KdTree::with_axis(Point::new(0, [0.0; 3]), 2);

        tree.add(&[1.0; 3], 1);
        tree.add(&[2.0; 3], 2);

        let axes: Vec<_> = tree.nodes.iter().map(|node| node.split_axis).collect();
        assert_eq!(axes, vec![2, 0, 1]);
    }

    #[test]
    fn placement_follows_the_split_axis_at_each_level() {
        // root splits on x, its children on y
        let mut tree: KdTree<FLT, u32, 2> = KdTree::new(Point::new(1, [5.0, 5.0]));

        tree.add(&[2.0, 5.0], 2);
        tree.add(&[1.0, 1.0], 3);
        tree.add(&[3.0, 8.0], 4);
        tree.add(&[7.0, 0.0], 5);

        assert_eq!(child_ids(&tree, 0), (Some(2), Some(5)));
        assert_eq!(child_ids(&tree, 1), (Some(3), Some(4)));
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn existing_nodes_are_never_modified() {
        let mut tree: KdTree<FLT, u32, 2> = KdTree::new(Point::new(1, [0.0, 0.0]));
        tree.add(&[-1.0, 0.0], 2);

        let before: Vec<_> = tree
            .nodes
            .iter()
            .map(|node| (node.point.id(), *node.point.coords(), node.split_axis))
            .collect();

        tree.add(&[-2.0, 3.0], 3);

        let after: Vec<_> = tree
            .nodes
            .iter()
            .take(2)
            .map(|node| (node.point.id(), *node.point.coords(), node.split_axis))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn duplicates_form_a_chain_on_the_right() {
        let mut tree: KdTree<FLT, u32, 2> = KdTree::new(Point::new(0, [1.0, 1.0]));

        for i in 1..10 {
            tree.add(&[1.0, 1.0], i);
        }

        assert_eq!(tree.size(), 10);
        assert_eq!(tree.depth(), 10);
        assert!(tree.nodes.iter().all(|node| node.left().is_none()));
    }

    #[test]
    fn sorted_insertion_degenerates_to_a_chain() {
        let mut tree: KdTree<FLT, u32, 1> = KdTree::new(Point::new(0, [0.0]));

        for i in 1..100u32 {
            tree.add(&[i as FLT], i);
        }

        assert_eq!(tree.depth(), tree.size());
    }

    #[test]
    fn very_deep_chains_do_not_overflow_the_stack() {
        let mut tree: KdTree<f64, u32, 2> =
            KdTree::with_capacity(Point::new(0, [0.0, 0.0]), 25_000);

        for i in 1..25_000u32 {
            tree.add(&[i as f64, i as f64], i);
        }

        assert_eq!(tree.size(), 25_000);
        assert_eq!(tree.depth(), 25_000);
        drop(tree);
    }

    #[test]
    #[should_panic(expected = "KdTree is full")]
    fn panics_when_the_index_type_is_exhausted() {
        let mut rng = seeded_rng(3);
        let mut tree: KdTree<FLT, u32, 2, u16> = KdTree::new(Point::new(0, [0.0, 0.0]));

        tree.extend(rand_points::<FLT, _, 2>(&mut rng, u16::MAX as usize, -1.0..1.0));
    }

    #[test]
    fn can_add_lots_of_random_points() {
        let mut rng = seeded_rng(7);
        let points = rand_points::<f64, _, 4>(&mut rng, 10_000, -1.0..1.0);

        let tree: KdTree<f64, u32, 4> = KdTree::from_points(points).unwrap();

        assert_eq!(tree.size(), 10_000);
        assert!(tree.depth() < 100);
    }
}
