//! Geometric primitives: points, rings and spatial extents.

/// The sentinel separating the sub-parts of a compound geometry.
///
/// A geometry whose `x` and `y` sequences contain a `BREAK` at the same
/// position is a multi-part geometry; each run between breaks is one sub-part.
pub const BREAK: f64 = f64::NAN;

/// A two-dimensional point.
#[derive(Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl std::fmt::Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Is this point a sub-part break?
    pub fn is_break(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Convert to a kurbo point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A closed coordinate sequence whose first and last points coincide.
///
/// Rings are used for hole boundaries and for the output of the shape generators.
pub type Ring = Vec<Point>;

/// Returns true if `ring` has at least two points and its ends coincide.
pub fn is_closed(ring: &[Point]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => ring.len() > 1 && first == last,
        _ => false,
    }
}

/// A declared spatial extent, as `(left, bottom, right, top)`.
///
/// Any side may be open, in which case it is `None`. Extents are metadata:
/// they never filter the stored geometries.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Extents {
    /// Smallest `x`.
    pub left: Option<f64>,
    /// Smallest `y`.
    pub bottom: Option<f64>,
    /// Largest `x`.
    pub right: Option<f64>,
    /// Largest `y`.
    pub top: Option<f64>,
}

impl Extents {
    /// Extents with all four sides given.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Extents {
            left: Some(left),
            bottom: Some(bottom),
            right: Some(right),
            top: Some(top),
        }
    }

    /// Are all four sides open?
    pub fn is_unbounded(&self) -> bool {
        self.left.is_none() && self.bottom.is_none() && self.right.is_none() && self.top.is_none()
    }

    /// Converts to a rectangle, if all four sides are given.
    pub fn to_rect(&self) -> Option<kurbo::Rect> {
        Some(kurbo::Rect::new(
            self.left?,
            self.bottom?,
            self.right?,
            self.top?,
        ))
    }
}

/// The bounding box of all non-break points, or `None` if there are none.
pub fn bounding_box(points: impl IntoIterator<Item = Point>) -> Option<kurbo::Rect> {
    points
        .into_iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| kurbo::Rect::from_points(p.to_kurbo(), p.to_kurbo()))
        .reduce(|a, b| a.union(b))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub fn reasonable_f64() -> BoxedStrategy<f64> {
        (-1e6..1e6).boxed()
    }

    pub fn reasonable_point() -> BoxedStrategy<Point> {
        (reasonable_f64(), reasonable_f64())
            .prop_map(|(x, y)| Point::new(x, y))
            .boxed()
    }

    #[test]
    fn closed_rings() {
        let p = Point::new;
        assert!(is_closed(&[p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)]));
        assert!(!is_closed(&[p(0.0, 0.0), p(1.0, 0.0)]));
        assert!(!is_closed(&[p(0.0, 0.0)]));
        assert!(!is_closed(&[]));
    }

    #[test]
    fn bounding_box_skips_breaks() {
        let points = [
            Point::new(0.0, 1.0),
            Point::new(BREAK, BREAK),
            Point::new(-2.0, 3.0),
        ];
        let bbox = bounding_box(points).unwrap();
        assert_eq!(bbox, kurbo::Rect::new(-2.0, 1.0, 0.0, 3.0));
        assert_eq!(bounding_box([Point::new(BREAK, BREAK)]), None);
    }

    #[test]
    fn partial_extents_have_no_rect() {
        let ext = Extents {
            left: Some(0.0),
            right: Some(5.0),
            ..Extents::default()
        };
        assert!(!ext.is_unbounded());
        assert_eq!(ext.to_rect(), None);
        assert_eq!(
            Extents::new(0.0, 0.0, 5.0, 10.0).to_rect(),
            Some(kurbo::Rect::new(0.0, 0.0, 5.0, 10.0))
        );
    }

    proptest! {
    #[test]
    fn bounding_box_contains_points(points in prop::collection::vec(reasonable_point(), 1..20)) {
        let bbox = bounding_box(points.iter().copied()).unwrap();
        for p in points {
            prop_assert!(bbox.x0 <= p.x && p.x <= bbox.x1);
            prop_assert!(bbox.y0 <= p.y && p.y <= bbox.y1);
        }
    }
    }
}
