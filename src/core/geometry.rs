//=========================================================================
// Geometry Helpers
//=========================================================================
//
// Axis-aligned rectangles and their bounding union.
//
// Rect stores its min/max corners rather than origin + size, so union is
// exact in floating point: union(a, a) == a and union(a, b) == union(b, a)
// hold bit-for-bit.
//
//=========================================================================

//=== Rect ================================================================

/// Immutable axis-aligned rectangle.
///
/// Width and height are never negative: inverted corners and negative
/// sizes are normalized at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Rect {
    //--- Construction -----------------------------------------------------

    /// Creates a rectangle from its min corner and size.
    ///
    /// A negative width or height extends the rectangle to the left or
    /// upward of `(x, y)` instead.
    ///
    /// Only the corners are stored: `width()` and `height()` are recomputed
    /// as `max - min` and may differ from the given size by rounding.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(x, y, x + width, y + height)
    }

    /// Creates a rectangle spanning two opposite corners, in any order.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    //--- Accessors --------------------------------------------------------

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if the point lies inside or on the border.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Returns `true` if `other` lies entirely inside `self` (borders
    /// may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    //--- Operations -------------------------------------------------------

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// ```
    /// use sketch_utils::prelude::*;
    ///
    /// let a = Rect::from_origin_size(0.0, 0.0, 2.0, 2.0);
    /// let b = Rect::from_origin_size(1.0, 1.0, 2.0, 2.0);
    /// let u = a.union(&b);
    ///
    /// assert_eq!((u.min_x(), u.min_y()), (0.0, 0.0));
    /// assert_eq!((u.width(), u.height()), (3.0, 3.0));
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

//=== Free Functions ======================================================

/// Smallest axis-aligned rectangle containing both `a` and `b`.
///
/// Equivalent to [`Rect::union`].
#[inline]
pub fn union(a: &Rect, b: &Rect) -> Rect {
    a.union(b)
}

/// Bounding union of every rectangle in `rects`, or `None` if empty.
pub fn union_all<'a, I>(rects: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Rect>,
{
    rects.into_iter().copied().reduce(|acc, r| acc.union(&r))
}

//=========================================================================
// Unit Tests
//=========================================================================
