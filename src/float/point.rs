//! An immutable, id-bearing point with a fixed number of float co-ordinates.

use std::fmt;

/// A point in `K`-dimensional space, tagged with an opaque id.
///
/// Points are immutable once constructed. Ids are not required to be unique, and
/// two points with identical co-ordinates are still distinct points: a [`KdTree`](crate::KdTree)
/// stores and returns both of them. No equality or ordering is defined on `Point` itself.
///
/// The dimensionality `K` is part of the type, so a tree can only ever be handed points
/// (and query co-ordinates) with the same number of dimensions as the tree itself.
///
/// # Examples
///
/// ```rust
/// use kdrange::Point;
///
/// let p: Point<f32, u32, 3> = Point::new(7, [1.0, 2.0, 3.0]);
///
/// assert_eq!(p.id(), 7);
/// assert_eq!(p.coord(1), 2.0);
/// assert_eq!(p.z(), 3.0);
/// assert_eq!(Point::<f32, u32, 3>::dimensions(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Point<A, T, const K: usize> {
    id: T,
    coords: [A; K],
}

impl<A: Copy, T: Copy, const K: usize> Point<A, T, K> {
    /// Creates a new point with the given id and co-ordinates.
    #[inline]
    pub fn new(id: T, coords: [A; K]) -> Self {
        Self { id, coords }
    }

    /// Returns the id this point was created with.
    #[inline]
    pub fn id(&self) -> T {
        self.id
    }

    /// Returns the co-ordinate of this point along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not less than `K`. Use [`Point::get`] for a checked alternative.
    #[inline]
    pub fn coord(&self, axis: usize) -> A {
        assert!(
            axis < K,
            "axis {axis} is out of range for a {K}-dimensional point"
        );
        self.coords[axis]
    }

    /// Returns the co-ordinate of this point along `axis`, or `None` if `axis` is not less than `K`.
    ///
    /// ```rust
    /// use kdrange::Point;
    ///
    /// let p: Point<f64, u32, 2> = Point::new(1, [0.5, -0.5]);
    ///
    /// assert_eq!(p.get(0), Some(0.5));
    /// assert_eq!(p.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, axis: usize) -> Option<A> {
        self.coords.get(axis).copied()
    }

    /// Returns all of this point's co-ordinates.
    #[inline]
    pub fn coords(&self) -> &[A; K] {
        &self.coords
    }

    /// Returns the number of dimensions, `K`, shared by every point of this type.
    #[inline]
    pub const fn dimensions() -> usize {
        K
    }

    /// Co-ordinate along axis 0.
    #[inline]
    pub fn x(&self) -> A {
        const { assert!(K >= 1, "x() requires at least 1 dimension") };
        self.coords[0]
    }

    /// Co-ordinate along axis 1.
    #[inline]
    pub fn y(&self) -> A {
        const { assert!(K >= 2, "y() requires at least 2 dimensions") };
        self.coords[1]
    }

    /// Co-ordinate along axis 2.
    #[inline]
    pub fn z(&self) -> A {
        const { assert!(K >= 3, "z() requires at least 3 dimensions") };
        self.coords[2]
    }
}

impl<A: Copy, T: Copy, const K: usize> From<([A; K], T)> for Point<A, T, K> {
    fn from((coords, id): ([A; K], T)) -> Self {
        Point::new(id, coords)
    }
}

impl<A: fmt::Display, T: fmt::Display, const K: usize> fmt::Display for Point<A, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point{K}D(id={}, coords=[", self.id)?;
        for (idx, val) in self.coords.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{val}")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn exposes_id_and_coords() {
        let p: Point<f32, i32, 2> = Point::new(-4, [0.3, 0.5]);

        assert_eq!(p.id(), -4);
        assert_eq!(p.coord(0), 0.3);
        assert_eq!(p.coord(1), 0.5);
        assert_eq!(p.coords(), &[0.3, 0.5]);
        assert_eq!(p.x(), 0.3);
        assert_eq!(p.y(), 0.5);
    }

    #[test]
    fn dimensions_is_k() {
        assert_eq!(Point::<f32, u32, 2>::dimensions(), 2);
        assert_eq!(Point::<f64, u32, 5>::dimensions(), 5);
    }

    #[test]
    fn get_returns_none_out_of_range() {
        let p: Point<f64, u32, 3> = Point::new(1, [1.0, 2.0, 3.0]);

        assert_eq!(p.get(2), Some(3.0));
        assert_eq!(p.get(3), None);
        assert_eq!(p.get(usize::MAX), None);
    }

    #[test]
    #[should_panic(expected = "axis 3 is out of range for a 3-dimensional point")]
    fn coord_panics_out_of_range() {
        let p: Point<f64, u32, 3> = Point::new(1, [1.0, 2.0, 3.0]);

        p.coord(3);
    }

    #[test]
    fn can_be_built_from_a_tuple() {
        let p: Point<f64, u32, 2> = ([1.5, -2.5], 9).into();

        assert_eq!(p.id(), 9);
        assert_eq!(p.coords(), &[1.5, -2.5]);
    }

    #[test]
    fn display_lists_id_and_coords() {
        let p: Point<f32, u32, 2> = Point::new(1, [0.3, 0.5]);

        assert_eq!(p.to_string(), "Point2D(id=1, coords=[0.3, 0.5])");
    }
}
