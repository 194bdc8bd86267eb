//! A result item returned by a distance-reporting range query
use crate::types::Content;
use std::cmp::Ordering;

/// Represents an entry in the results of a [`within`](crate::KdTree::within) or
/// [`within_unsorted`](crate::KdTree::within_unsorted) query, with `distance` being the
/// distance of this particular point from the query point, and `item` being the id of the
/// point that was found.
#[derive(Debug, Copy, Clone)]
pub struct Neighbour<A, T> {
    /// the distance of the found point from the query point according to the supplied distance metric
    pub distance: A,
    /// the id of the point that was found in the query
    pub item: T,
}

impl<A: PartialOrd, T: Content> Ord for Neighbour<A, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

#[allow(unknown_lints)]
#[allow(clippy::non_canonical_partial_ord_impl)]
impl<A: PartialOrd, T: Content> PartialOrd for Neighbour<A, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.distance.partial_cmp(&other.distance) {
            Some(Ordering::Equal) => Some(self.item.cmp(&other.item)),
            ordering => ordering,
        }
    }
}

impl<A: PartialEq, T: Content> Eq for Neighbour<A, T> {}

impl<A: PartialEq, T: Content> PartialEq for Neighbour<A, T> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.item == other.item
    }
}

impl<A, T: Content> From<Neighbour<A, T>> for (A, T) {
    fn from(elem: Neighbour<A, T>) -> Self {
        (elem.distance, elem.item)
    }
}

#[cfg(test)]
mod tests {
    use crate::neighbour::Neighbour;
    use std::cmp::Ordering;

    #[test]
    fn test_into_tuple() {
        let nn: (f32, u32) = Neighbour::<f32, u32> {
            distance: 1.0f32,
            item: 1u32,
        }
        .into();

        assert_eq!(nn.0, 1.0f32);
        assert_eq!(nn.1, 1u32);
    }

    #[test]
    fn test_partial_cmp() {
        let a = Neighbour {
            distance: 1.0f32,
            item: 10u32,
        };
        let b = Neighbour {
            distance: 2.0f32,
            item: 5u32,
        };

        assert_eq!(a.partial_cmp(&b).unwrap(), Ordering::Less)
    }

    #[test]
    fn equal_distances_are_ordered_by_item() {
        let a = Neighbour {
            distance: 1.0f32,
            item: 7u32,
        };
        let b = Neighbour {
            distance: 1.0f32,
            item: 3u32,
        };

        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert_ne!(a, b);
    }
}
