//! Parametric shapes: paths defined by a handful of numbers.
//!
//! A [`Shape`] holds its parameters (a [`ShapeSpec`]) together with the
//! single-geometry [`Path`] they produce. The path is always derived from the
//! parameters, so the way to change a shape is [`Shape::clone_with`], which
//! recomputes the ring.

use std::f64::consts::TAU;
use std::ops::Deref;

use kurbo::Affine;

use crate::{
    geom::{Point, Ring},
    geometry::Geometry,
    interface::StoreKind,
    path::Path,
    Error,
};

const ASPECT_CONFLICT: &str =
    "Aspect parameter not supported when supplying (width, height) specification";

/// The size of a box or an ellipse.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Size {
    /// The height; the width is the same, unless overridden, times the aspect.
    Scalar(f64),
    /// An explicit `(width, height)`.
    Pair(f64, f64),
}

impl From<f64> for Size {
    fn from(s: f64) -> Self {
        Size::Scalar(s)
    }
}

impl From<(f64, f64)> for Size {
    fn from((w, h): (f64, f64)) -> Self {
        Size::Pair(w, h)
    }
}

/// Resolves to `(width, height)`, with the aspect already applied to the width.
fn resolve_size(size: Size, width: Option<f64>, aspect: Option<f64>) -> Result<(f64, f64), Error> {
    let (w, h) = match size {
        Size::Scalar(s) => (s, s),
        Size::Pair(..) if aspect.is_some() => {
            return Err(Error::ConfigurationConflict(ASPECT_CONFLICT.to_owned()))
        }
        Size::Pair(w, h) => (w, h),
    };
    Ok((width.unwrap_or(w) * aspect.unwrap_or(1.0), h))
}

/// The parameters of a shape.
pub trait ShapeSpec: Clone + std::fmt::Debug {
    /// The group label of the resulting path.
    const GROUP: &'static str;

    /// Computes the shape's coordinates.
    fn ring(&self) -> Result<Ring, Error>;
}

/// A shape together with the path it defines.
#[derive(Clone, Debug)]
pub struct Shape<S> {
    spec: S,
    path: Path,
}

impl<S: ShapeSpec> Shape<S> {
    /// Builds the shape's path from `spec`.
    pub fn new(spec: S) -> Result<Self, Error> {
        let ring = spec.ring()?;
        let path = Path::builder()
            .group(S::GROUP)
            .store(StoreKind::Multi)
            .build(Geometry::from_points(ring))?;
        Ok(Shape { spec, path })
    }

    /// The parameters.
    pub fn spec(&self) -> &S {
        &self.spec
    }

    /// The path holding the shape's ring.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unwraps into the path.
    pub fn into_path(self) -> Path {
        self.path
    }

    /// The coordinates of the shape's ring.
    pub fn points(&self) -> Vec<Point> {
        self.path
            .geometries()
            .iter()
            .flat_map(Geometry::points)
            .collect()
    }

    /// Re-derives the shape from modified parameters.
    ///
    /// ```
    /// use pathframe::BoxSpec;
    ///
    /// let unit = BoxSpec::new(0.0, 0.0, 1.0).build().unwrap();
    /// let turned = unit.clone_with(|s| s.orientation(0.5)).unwrap();
    /// assert_eq!(turned.spec().orientation, 0.5);
    /// ```
    pub fn clone_with(&self, f: impl FnOnce(S) -> S) -> Result<Self, Error> {
        Shape::new(f(self.spec.clone()))
    }
}

impl<S> Deref for Shape<S> {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

/// A rectangle centered at `(x, y)`, rotated about its center.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxSpec {
    /// The center's `x`.
    pub x: f64,
    /// The center's `y`.
    pub y: f64,
    /// The height, or the explicit `(width, height)`.
    pub size: Size,
    /// Overrides the width given by a scalar size.
    pub width: Option<f64>,
    /// Counter-clockwise, in radians.
    pub orientation: f64,
    /// Multiplies the width. Can't be combined with a `(width, height)` size.
    pub aspect: Option<f64>,
}

impl BoxSpec {
    /// A shape of the given size centered at `(x, y)`.
    pub fn new(x: f64, y: f64, size: impl Into<Size>) -> Self {
        BoxSpec {
            x,
            y,
            size: size.into(),
            width: None,
            orientation: 0.0,
            aspect: None,
        }
    }

    /// Overrides the width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the rotation, in radians.
    pub fn orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the aspect ratio.
    pub fn aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Builds the shape.
    pub fn build(self) -> Result<Shape<BoxSpec>, Error> {
        Shape::new(self)
    }
}

impl ShapeSpec for BoxSpec {
    const GROUP: &'static str = "Box";

    fn ring(&self) -> Result<Ring, Error> {
        let (w, h) = resolve_size(self.size, self.width, self.aspect)?;
        let (hw, hh) = (w / 2.0, h / 2.0);
        let transform = Affine::translate((self.x, self.y)) * Affine::rotate(self.orientation);
        Ok([(-hw, -hh), (-hw, hh), (hw, hh), (hw, -hh), (-hw, -hh)]
            .into_iter()
            .map(|p| (transform * kurbo::Point::from(p)).into())
            .collect())
    }
}

/// An ellipse centered at `(x, y)`, sampled at evenly spaced angles.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EllipseSpec {
    /// The center's `x`.
    pub x: f64,
    /// The center's `y`.
    pub y: f64,
    /// The diameter(s).
    pub size: Size,
    /// Overrides the width given by a scalar size.
    pub width: Option<f64>,
    /// Counter-clockwise, in radians.
    pub orientation: f64,
    /// Multiplies the width. Can't be combined with a `(width, height)` size.
    pub aspect: Option<f64>,
    /// The number of points on the ring.
    pub samples: usize,
}

impl EllipseSpec {
    /// A shape of the given size centered at `(x, y)`.
    pub fn new(x: f64, y: f64, size: impl Into<Size>) -> Self {
        EllipseSpec {
            x,
            y,
            size: size.into(),
            width: None,
            orientation: 0.0,
            aspect: None,
            samples: 100,
        }
    }

    /// Overrides the width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the rotation, in radians.
    pub fn orientation(mut self, orientation: f64) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the aspect ratio.
    pub fn aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Sets the number of points on the ring.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Builds the shape.
    pub fn build(self) -> Result<Shape<EllipseSpec>, Error> {
        Shape::new(self)
    }
}

impl ShapeSpec for EllipseSpec {
    const GROUP: &'static str = "Ellipse";

    /// Samples the angles `k * 2π / samples`; the ring isn't explicitly closed.
    fn ring(&self) -> Result<Ring, Error> {
        let (w, h) = resolve_size(self.size, self.width, self.aspect)?;
        let (hw, hh) = (w / 2.0, h / 2.0);
        let transform = Affine::translate((self.x, self.y)) * Affine::rotate(self.orientation);
        Ok((0..self.samples)
            .map(|k| {
                let theta = TAU * k as f64 / self.samples as f64;
                let local = kurbo::Point::new(hw * theta.sin(), hh * theta.cos());
                (transform * local).into()
            })
            .collect())
    }
}

/// An axis-aligned rectangle given by its sides.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoundsSpec {
    /// The smallest `x`.
    pub left: f64,
    /// The smallest `y`.
    pub bottom: f64,
    /// The largest `x`.
    pub right: f64,
    /// The largest `y`.
    pub top: f64,
}

impl BoundsSpec {
    /// The rectangle with the given sides.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        BoundsSpec {
            left,
            bottom,
            right,
            top,
        }
    }

    /// The square `(-r, -r, r, r)`.
    pub fn radius(r: f64) -> Self {
        BoundsSpec::new(-r, -r, r, r)
    }

    /// Builds the shape.
    pub fn build(self) -> Result<Shape<BoundsSpec>, Error> {
        Shape::new(self)
    }
}

impl From<f64> for BoundsSpec {
    fn from(r: f64) -> Self {
        BoundsSpec::radius(r)
    }
}

impl From<(f64, f64, f64, f64)> for BoundsSpec {
    fn from((l, b, r, t): (f64, f64, f64, f64)) -> Self {
        BoundsSpec::new(l, b, r, t)
    }
}

impl From<kurbo::Rect> for BoundsSpec {
    fn from(rect: kurbo::Rect) -> Self {
        BoundsSpec::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

impl ShapeSpec for BoundsSpec {
    const GROUP: &'static str = "Bounds";

    fn ring(&self) -> Result<Ring, Error> {
        let BoundsSpec {
            left: l,
            bottom: b,
            right: r,
            top: t,
        } = *self;
        Ok(vec![
            Point::new(l, b),
            Point::new(l, t),
            Point::new(r, t),
            Point::new(r, b),
            Point::new(l, b),
        ])
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;
    use crate::geom::{is_closed, tests::reasonable_f64};

    #[test]
    fn size_resolution() {
        assert_eq!(resolve_size(2.0.into(), None, None).unwrap(), (2.0, 2.0));
        assert_eq!(resolve_size(2.0.into(), None, Some(3.0)).unwrap(), (6.0, 2.0));
        assert_eq!(resolve_size(2.0.into(), Some(1.0), None).unwrap(), (1.0, 2.0));
        assert_eq!(resolve_size((4.0, 2.0).into(), None, None).unwrap(), (4.0, 2.0));
        assert_eq!(resolve_size((4.0, 2.0).into(), Some(1.0), None).unwrap(), (1.0, 2.0));
        assert_matches!(
            resolve_size((4.0, 2.0).into(), None, Some(1.0)),
            Err(Error::ConfigurationConflict(msg)) if msg == ASPECT_CONFLICT
        );
    }

    #[test]
    fn shapes_are_single_geometry_paths() {
        let shape = BoxSpec::new(1.0, 2.0, 3.0).build().unwrap();
        assert_eq!(shape.geometry_count(), 1);
        assert_eq!(shape.group(), "Box");
        assert_eq!(shape.geometries().len(), 1);
        assert_eq!(EllipseSpec::new(0.0, 0.0, 1.0).build().unwrap().group(), "Ellipse");
        assert_eq!(BoundsSpec::radius(1.0).build().unwrap().group(), "Bounds");
    }

    #[test]
    fn clone_rederives_ring() {
        let shape = BoundsSpec::radius(1.0).build().unwrap();
        let moved = shape.clone_with(|s| BoundsSpec { left: -2.0, ..s }).unwrap();
        assert_eq!(moved.points()[0], Point::new(-2.0, -1.0));
        assert_eq!(shape.points()[0], Point::new(-1.0, -1.0));
    }

    #[test]
    fn default_ellipse_samples() {
        let ellipse = EllipseSpec::new(0.0, 0.0, 1.0).build().unwrap();
        assert_eq!(ellipse.points().len(), 100);
        assert_eq!(ellipse.len(), 100);
    }

    #[test]
    fn box_aspect_stretches_width() {
        let shape = BoxSpec::new(0.0, 0.0, 2.0).aspect(2.0).build().unwrap();
        let bbox = shape.bounding_box().unwrap();
        assert_eq!(bbox, kurbo::Rect::new(-2.0, -1.0, 2.0, 1.0));
    }

    proptest! {
    #[test]
    fn boxes_are_closed_about_center(
        x in reasonable_f64(),
        y in reasonable_f64(),
        size in 0.1f64..100.0,
        orientation in -10.0f64..10.0,
    ) {
        let shape = BoxSpec::new(x, y, size).orientation(orientation).build().unwrap();
        let points = shape.points();
        prop_assert_eq!(points.len(), 5);
        prop_assert!(is_closed(&points));
        let cx = points[..4].iter().map(|p| p.x).sum::<f64>() / 4.0;
        let cy = points[..4].iter().map(|p| p.y).sum::<f64>() / 4.0;
        prop_assert!((cx - x).abs() < 1e-6);
        prop_assert!((cy - y).abs() < 1e-6);
    }

    #[test]
    fn ellipse_points_on_curve(
        w in 0.1f64..100.0,
        h in 0.1f64..100.0,
        samples in 1usize..200,
    ) {
        let shape = EllipseSpec::new(0.0, 0.0, (w, h)).samples(samples).build().unwrap();
        let points = shape.points();
        prop_assert_eq!(points.len(), samples);
        for p in points {
            let r = (p.x / (w / 2.0)).powi(2) + (p.y / (h / 2.0)).powi(2);
            prop_assert!((r - 1.0).abs() < 1e-9);
        }
    }
    }
}
