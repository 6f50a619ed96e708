use crate::{geom::Ring, geometry::Geometry, path::Path, Error};

use super::{convert, Interface, OutputFormat, Split};

/// A store holding one record per geometry.
#[derive(Clone, Debug, Default)]
pub struct MultiGeometryStore {
    geometries: Vec<Geometry>,
}

impl MultiGeometryStore {
    /// A store holding `geometries`, in order.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        MultiGeometryStore { geometries }
    }

    /// Clips `start..end` to the stored geometries.
    fn clip(&self, start: Option<usize>, end: Option<usize>) -> std::ops::Range<usize> {
        let len = self.geometries.len();
        let end = end.map_or(len, |e| e.min(len));
        let start = start.map_or(0, |s| s.min(end));
        if (start, end) != (0, len) {
            log::trace!("splitting geometries {start}..{end} of {len}");
        }
        start..end
    }
}

impl Interface for MultiGeometryStore {
    fn multi(&self) -> bool {
        true
    }

    fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    fn length(&self) -> usize {
        let coords: usize = self.geometries.iter().map(Geometry::len).sum();
        coords + self.geometries.len().saturating_sub(1)
    }

    fn split(
        &self,
        element: &Path,
        start: Option<usize>,
        end: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<Vec<Split>, Error> {
        self.geometries[self.clip(start, end)]
            .iter()
            .map(|geom| match format {
                None => Ok(Split::Element(element.child(vec![geom.clone()]))),
                Some(format) => convert(geom, element.vdims(), format),
            })
            .collect()
    }

    fn is_scalar(&self, column: &str, per_geometry: bool) -> bool {
        let mut shared: Option<f64> = None;
        for geom in &self.geometries {
            if !geom.is_scalar(column) {
                return false;
            }
            if per_geometry {
                continue;
            }
            // Empty arrays are scalar but have no value to compare.
            if let Some(v) = geom.scalar_value(column) {
                match shared {
                    None => shared = Some(v),
                    Some(s) if s == v || (s.is_nan() && v.is_nan()) => {}
                    Some(_) => return false,
                }
            }
        }
        true
    }

    fn has_holes(&self) -> bool {
        self.geometries.iter().any(Geometry::has_holes)
    }

    fn holes(&self) -> Vec<Vec<Vec<Ring>>> {
        self.geometries.iter().map(Geometry::holes_per_part).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn line(y: f64, level: f64) -> Geometry {
        Geometry::from_points([Point::new(0.0, y), Point::new(1.0, y)])
            .with_value("level", level)
            .unwrap()
    }

    #[test]
    fn clipping() {
        let store = MultiGeometryStore::new(vec![line(0.0, 0.0), line(1.0, 1.0), line(2.0, 2.0)]);
        assert_eq!(store.clip(None, None), 0..3);
        assert_eq!(store.clip(Some(1), Some(10)), 1..3);
        assert_eq!(store.clip(Some(5), None), 3..3);
        assert_eq!(store.clip(Some(2), Some(1)), 1..1);
    }

    #[test]
    fn scalar_per_geometry_or_across() {
        let store = MultiGeometryStore::new(vec![line(0.0, 1.0), line(1.0, 2.0)]);
        assert!(store.is_scalar("level", true));
        assert!(!store.is_scalar("level", false));
        assert!(!store.is_scalar("missing", true));

        let same = MultiGeometryStore::new(vec![line(0.0, 1.0), line(1.0, 1.0)]);
        assert!(same.is_scalar("level", false));

        let nan = MultiGeometryStore::new(vec![line(0.0, f64::NAN), line(1.0, f64::NAN)]);
        assert!(nan.is_scalar("level", false));
    }

    #[test]
    fn length_counts_breaks() {
        let store = MultiGeometryStore::new(vec![line(0.0, 1.0), line(1.0, 2.0)]);
        assert_eq!(store.length(), 5);
        assert_eq!(MultiGeometryStore::default().length(), 0);
    }
}
