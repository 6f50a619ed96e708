//! Contours and polygons: paths whose values are constant per geometry.

use std::ops::Deref;

use crate::{
    geom::Ring,
    interface::Interface,
    path::{concat_elements, sealed, Builder, Element, Kind, Path, PathData},
    Error,
};

/// Iso-lines: every value dimension is scalar over each geometry.
///
/// Everything a [`Path`] can do is available through `Deref`. Operations that
/// return a new element (like [`Path::with_data`]) keep the contour checks but
/// return a plain `Path`; use `Contours::try_from` to get the wrapper back.
#[derive(Clone, Debug)]
pub struct Contours(Path);

/// Filled regions: contours whose geometries may have holes.
#[derive(Clone, Debug)]
pub struct Polygons(Path);

macro_rules! scalar_element {
    ($name:ident, $kind:expr) => {
        impl sealed::Sealed for $name {
            fn wrap(path: Path) -> Self {
                $name(path)
            }
        }

        impl Element for $name {
            const KIND: Kind = $kind;

            fn as_path(&self) -> &Path {
                &self.0
            }

            fn into_path(self) -> Path {
                self.0
            }
        }

        impl $name {
            /// Builds an element with no value dimensions on the multi-geometry store.
            pub fn new(data: impl Into<PathData>) -> Result<Self, Error> {
                Self::builder().build(data)
            }

            /// A builder for this element type.
            pub fn builder() -> Builder<Self> {
                Builder::new()
            }

            /// Concatenates the geometries of `items`, taking everything else
            /// from the first one.
            pub fn concat(items: &[Self]) -> Result<Self, Error> {
                concat_elements(items)
            }

            /// A copy holding different data, checked like the original.
            pub fn with_data(&self, data: impl Into<PathData>) -> Result<Self, Error> {
                let path = self.0.with_data(data)?;
                Ok($name(path))
            }

            /// The legacy single level, if this element was built with one.
            pub fn level(&self) -> Option<f64> {
                self.0.vdims().iter().find_map(|v| v.synthesized_value())
            }
        }

        impl Deref for $name {
            type Target = Path;

            fn deref(&self) -> &Path {
                &self.0
            }
        }

        impl AsRef<Path> for $name {
            fn as_ref(&self) -> &Path {
                &self.0
            }
        }

        impl From<$name> for Path {
            fn from(element: $name) -> Path {
                element.0
            }
        }

        /// Re-checks a path's data under this kind's rules.
        impl TryFrom<Path> for $name {
            type Error = Error;

            fn try_from(path: Path) -> Result<Self, Error> {
                if path.kind() == $kind {
                    return Ok($name(path));
                }
                let data = path.geometries().to_vec();
                let mut ret = path.rebuild::<$name>($kind).build(data)?;
                ret.0 = ret.0.with_extents(path.extents());
                Ok(ret)
            }
        }
    };
}

scalar_element!(Contours, Kind::Contours);
scalar_element!(Polygons, Kind::Polygons);

impl Polygons {
    /// Does any geometry have at least one hole?
    pub fn has_holes(&self) -> bool {
        self.interface().has_holes()
    }

    /// Holes by geometry, then by sub-part.
    ///
    /// Geometries without holes get one empty list per sub-part, so the outer
    /// list always has one entry per geometry.
    pub fn holes(&self) -> Vec<Vec<Vec<Ring>>> {
        self.interface().holes()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{
        column::Column,
        geom::Point,
        geometry::Geometry,
        interface::StoreKind,
        path::ValueDim,
    };

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square(x0: f64, y0: f64, size: f64) -> Ring {
        vec![
            p(x0, y0),
            p(x0 + size, y0),
            p(x0 + size, y0 + size),
            p(x0, y0 + size),
            p(x0, y0),
        ]
    }

    fn four_points() -> Geometry {
        Geometry::from_points([p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)])
    }

    #[test]
    fn level_is_synthesized() {
        let contours = Contours::builder().level(5.0).build(vec![four_points()]).unwrap();
        assert_eq!(contours.level(), Some(5.0));
        assert_matches!(
            contours.vdims(),
            [ValueDim::Synthesized { dim, value }] if dim.name() == "Level" && *value == 5.0
        );
        assert_eq!(
            contours.dimension_values("Level", true).unwrap(),
            vec![5.0, 5.0, 5.0, 5.0]
        );
        assert_eq!(contours.dimension_values("Level", false).unwrap(), vec![5.0]);
    }

    #[test]
    fn level_with_declared_vdims() {
        let contours = Contours::builder()
            .vdim("height")
            .vdim("depth")
            .level(2.0)
            .build(vec![four_points()])
            .unwrap();
        assert!(contours
            .vdims()
            .iter()
            .all(|v| v.synthesized_value() == Some(2.0)));
        assert_eq!(contours.dimension_values("depth", false).unwrap(), vec![2.0]);

        let polygons = Polygons::builder().level(1.0).build(vec![four_points()]).unwrap();
        assert_eq!(polygons.vdims()[0].name(), "Value");
    }

    #[test]
    fn degenerate_scalars_accepted() {
        let geom = four_points().with_value("z", vec![3.0; 4]).unwrap();
        let contours = Contours::builder().vdim("z").build(vec![geom]).unwrap();
        assert_eq!(contours.dimension_values("z", false).unwrap(), vec![3.0]);

        let scalar = four_points().with_value("z", 3.0).unwrap();
        assert!(Contours::builder().vdim("z").build(vec![scalar]).is_ok());
    }

    #[test]
    fn all_nan_values_are_degenerate_scalars() {
        let geom = four_points().with_value("z", vec![f64::NAN; 4]).unwrap();
        let contours = Contours::builder().vdim("z").build(vec![geom]).unwrap();
        let values = contours.dimension_values("z", false).unwrap();
        assert_eq!(values.len(), 1);
        assert!(values[0].is_nan());

        let partly = four_points()
            .with_value("z", vec![1.0, f64::NAN, 1.0, 1.0])
            .unwrap();
        assert_matches!(
            Contours::builder().vdim("z").build(vec![partly]),
            Err(Error::NonScalarValue { .. })
        );
    }

    #[test]
    fn varying_values_rejected() {
        let geom = four_points().with_value("z", vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let err = Contours::builder().vdim("z").build(vec![geom.clone()]).unwrap_err();
        assert_matches!(&err, Error::NonScalarValue { kind: Kind::Contours, dimension } if dimension == "z");
        assert_eq!(
            err.to_string(),
            "All value dimensions on a Contours element must be scalar"
        );

        // Plain paths take anything.
        assert!(Path::builder().vdim("z").build(vec![geom]).is_ok());
    }

    #[test]
    fn values_may_differ_between_geometries() {
        let a = four_points().with_value("z", 1.0).unwrap();
        let b = four_points().with_value("z", 2.0).unwrap();
        let contours = Contours::builder().vdim("z").build(vec![a, b]).unwrap();
        assert_eq!(contours.dimension_values("z", false).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn flat_store_needs_one_value() {
        let a = four_points().with_value("z", 1.0).unwrap();
        let b = four_points().with_value("z", 2.0).unwrap();
        assert_matches!(
            Contours::builder()
                .vdim("z")
                .store(StoreKind::Flat)
                .build(vec![a.clone(), b]),
            Err(Error::NonScalarValue { .. })
        );
        let flat = Contours::builder()
            .vdim("z")
            .store(StoreKind::Flat)
            .build(vec![a.clone(), a])
            .unwrap();
        assert_eq!(flat.geometry_count(), 1);
        assert_eq!(flat.len(), 9);
    }

    #[test]
    fn split_keeps_kind() {
        let a = four_points().with_value("z", 1.0).unwrap();
        let b = four_points().with_value("z", 2.0).unwrap();
        let contours = Contours::builder().vdim("z").build(vec![a, b]).unwrap();
        let parts = contours.split(None, None, None).unwrap();
        assert_eq!(parts.len(), 2);
        let second = Contours::try_from(parts[1].as_element().unwrap().clone()).unwrap();
        assert_eq!(second.geometries()[0].value("z"), Some(&Column::Scalar(2.0)));
    }

    #[test]
    fn try_from_checks() {
        let varying = four_points().with_value("z", vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let path = Path::builder().vdim("z").build(vec![varying]).unwrap();
        assert_matches!(Contours::try_from(path), Err(Error::NonScalarValue { .. }));

        let path = Path::new(vec![four_points()]).unwrap().slice(0.0..1.0, ..);
        let contours = Contours::try_from(path).unwrap();
        assert_eq!(contours.kind(), Kind::Contours);
        assert_eq!(contours.extents().right, Some(1.0));
    }

    #[test]
    fn concat_contours() {
        let a = Contours::builder().level(1.0).build(vec![four_points()]).unwrap();
        let b = Contours::new(vec![four_points(), four_points()]).unwrap();
        let joined = Contours::concat(&[a, b]).unwrap();
        assert_eq!(joined.geometry_count(), 3);
        assert_eq!(joined.level(), Some(1.0));
        assert_eq!(Contours::concat(&[]).unwrap().geometry_count(), 0);
    }

    #[test]
    fn polygon_holes() {
        let outer = Geometry::from_points(square(0.0, 0.0, 10.0))
            .with_holes(vec![vec![square(1.0, 1.0, 1.0), square(5.0, 5.0, 2.0)]]);
        let plain = Geometry::from_points(square(20.0, 0.0, 1.0));
        let compound = Geometry::from_parts([square(30.0, 0.0, 1.0), square(40.0, 0.0, 1.0)]);

        let polygons = Polygons::new(vec![outer, plain, compound]).unwrap();
        assert!(polygons.has_holes());
        let holes = polygons.holes();
        assert_eq!(holes.len(), 3);
        assert_eq!(holes[0].len(), 1);
        assert_eq!(holes[0][0].len(), 2);
        assert_eq!(holes[1], vec![Vec::<Ring>::new()]);
        assert_eq!(holes[2].len(), 2);

        let none = Polygons::new(vec![Geometry::from_points(square(0.0, 0.0, 1.0))]).unwrap();
        assert!(!none.has_holes());
        assert_eq!(none.holes().len(), 1);
    }

    #[test]
    fn hole_count_must_match_parts() {
        let compound = Geometry::from_parts([square(0.0, 0.0, 1.0), square(4.0, 0.0, 1.0)])
            .with_holes(vec![vec![]]);
        assert_matches!(
            Polygons::new(vec![compound.clone()]),
            Err(Error::HoleMismatch { geometry: 0, parts: 2, holes: 1 })
        );
        // Contours don't look at holes.
        assert!(Contours::new(vec![compound]).is_ok());
    }

    #[test]
    fn holes_need_multi_store() {
        let outer = Geometry::from_points(square(0.0, 0.0, 10.0))
            .with_holes(vec![vec![square(1.0, 1.0, 1.0)]]);
        assert_matches!(
            Polygons::builder().store(StoreKind::Flat).build(vec![outer]),
            Err(Error::ConfigurationConflict(_))
        );

        let flat = Polygons::builder()
            .store(StoreKind::Flat)
            .build(vec![
                Geometry::from_points(square(0.0, 0.0, 1.0)),
                Geometry::from_points(square(5.0, 0.0, 1.0)),
            ])
            .unwrap();
        assert!(!flat.has_holes());
        assert_eq!(flat.holes(), vec![vec![Vec::<Ring>::new(), Vec::new()]]);
    }
}
