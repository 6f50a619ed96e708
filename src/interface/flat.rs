use crate::{geom::Ring, geometry::Geometry, path::Path, Error};

use super::{Interface, OutputFormat, Split};

/// A store holding a single geometry.
///
/// Several geometries can be packed into it, separated by breaks, but once
/// packed they are indistinguishable from the sub-parts of one compound
/// geometry. Scalar values are expanded to arrays and holes are not kept.
#[derive(Clone, Debug, Default)]
pub struct FlatGeometryStore {
    geometry: Geometry,
}

impl FlatGeometryStore {
    /// A store holding one (possibly compound) geometry.
    pub fn new(geometry: Geometry) -> Self {
        FlatGeometryStore { geometry }
    }

    /// Packs several geometries into one, keeping only the named value columns.
    pub fn from_geometries(geometries: &[Geometry], columns: &[&str]) -> Result<Self, Error> {
        log::debug!(
            "flattening {} geometries with columns {columns:?}",
            geometries.len()
        );
        Ok(FlatGeometryStore {
            geometry: Geometry::flatten(geometries, columns)?,
        })
    }

    /// The stored geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl Interface for FlatGeometryStore {
    fn multi(&self) -> bool {
        false
    }

    fn geometries(&self) -> &[Geometry] {
        std::slice::from_ref(&self.geometry)
    }

    fn length(&self) -> usize {
        self.geometry.len()
    }

    fn split(
        &self,
        element: &Path,
        start: Option<usize>,
        end: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<Vec<Split>, Error> {
        if start.is_some() || end.is_some() {
            log::debug!("flat store ignores split bounds {start:?}..{end:?}");
        }
        Ok(vec![element.convert_whole(format)?])
    }

    // There's only one geometry, so `per_geometry` makes no difference.
    fn is_scalar(&self, column: &str, _per_geometry: bool) -> bool {
        self.geometry.is_scalar(column)
    }

    fn has_holes(&self) -> bool {
        false
    }

    fn holes(&self) -> Vec<Vec<Vec<Ring>>> {
        vec![self.geometry.holes_per_part()]
    }
}
