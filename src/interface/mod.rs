//! Storage interfaces for collections of geometries.
//!
//! A [`Path`](crate::Path) never looks at how its geometries are stored: it
//! asks its [`Storage`] to split, query scalar-ness and report holes. There
//! are two stores:
//!
//! - [`MultiGeometryStore`] keeps every geometry as a separate record and
//!   splits natively.
//! - [`FlatGeometryStore`] keeps a single geometry with the original
//!   geometries separated by breaks. It can't split; asking it to gives back
//!   the whole container.

mod flat;
mod format;
mod multi;

pub use flat::FlatGeometryStore;
pub use format::{Array2, OutputFormat, Split, Table};
pub use multi::MultiGeometryStore;

pub(crate) use format::convert;

use crate::{geom::Ring, geometry::Geometry, path::Path, Error};

/// The contract between a path element and its backing storage.
pub trait Interface {
    /// Does this store represent multiple discrete geometries?
    fn multi(&self) -> bool;

    /// The stored geometries, in order.
    fn geometries(&self) -> &[Geometry];

    /// The number of rows in the flattened representation: all coordinates,
    /// plus one break between consecutive geometries.
    fn length(&self) -> usize;

    /// Splits `element` (which must be backed by this store) into one
    /// sub-container per geometry in `start..end`, converted to `format`.
    ///
    /// Out-of-range bounds are clipped.
    fn split(
        &self,
        element: &Path,
        start: Option<usize>,
        end: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<Vec<Split>, Error>;

    /// Does the column hold a single repeated value?
    ///
    /// If `per_geometry` is true, each geometry may have its own value; otherwise
    /// the value must be the same across the whole collection. A column missing
    /// from any geometry is not scalar.
    fn is_scalar(&self, column: &str, per_geometry: bool) -> bool;

    /// Does any geometry carry a non-empty holes structure?
    fn has_holes(&self) -> bool;

    /// Holes by geometry, then by sub-part.
    fn holes(&self) -> Vec<Vec<Vec<Ring>>>;
}

/// Which store a path element is built on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum StoreKind {
    /// One record per geometry.
    #[default]
    Multi,
    /// A single flattened geometry.
    Flat,
}

/// A store, chosen when the element is constructed.
#[derive(Clone, Debug)]
pub enum Storage {
    /// See [`MultiGeometryStore`].
    Multi(MultiGeometryStore),
    /// See [`FlatGeometryStore`].
    Flat(FlatGeometryStore),
}

impl Storage {
    /// Builds a store of the given kind.
    ///
    /// `columns` are the value columns that must survive flattening; the
    /// multi-geometry store keeps everything.
    pub fn new(kind: StoreKind, geometries: Vec<Geometry>, columns: &[&str]) -> Result<Self, Error> {
        Ok(match kind {
            StoreKind::Multi => Storage::Multi(MultiGeometryStore::new(geometries)),
            StoreKind::Flat => Storage::Flat(FlatGeometryStore::from_geometries(&geometries, columns)?),
        })
    }

    /// Which kind of store this is.
    pub fn kind(&self) -> StoreKind {
        match self {
            Storage::Multi(_) => StoreKind::Multi,
            Storage::Flat(_) => StoreKind::Flat,
        }
    }

    fn inner(&self) -> &dyn Interface {
        match self {
            Storage::Multi(s) => s,
            Storage::Flat(s) => s,
        }
    }
}

impl Interface for Storage {
    fn multi(&self) -> bool {
        self.inner().multi()
    }

    fn geometries(&self) -> &[Geometry] {
        self.inner().geometries()
    }

    fn length(&self) -> usize {
        self.inner().length()
    }

    fn split(
        &self,
        element: &Path,
        start: Option<usize>,
        end: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<Vec<Split>, Error> {
        self.inner().split(element, start, end, format)
    }

    fn is_scalar(&self, column: &str, per_geometry: bool) -> bool {
        self.inner().is_scalar(column, per_geometry)
    }

    fn has_holes(&self) -> bool {
        self.inner().has_holes()
    }

    fn holes(&self) -> Vec<Vec<Vec<Ring>>> {
        self.inner().holes()
    }
}
