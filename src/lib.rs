#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod column;
pub mod contours;
pub mod dimension;
pub mod geom;
pub mod geometry;
pub mod index;
pub mod interface;
pub mod path;
pub mod shapes;

#[cfg(feature = "generators")]
pub mod generators;

pub use column::Column;
pub use contours::{Contours, Polygons};
pub use dimension::Dimension;
pub use geom::{Extents, Point, Ring, BREAK};
pub use geometry::Geometry;
pub use index::{Key, Selection, Slice};
pub use interface::{Interface, OutputFormat, Split, StoreKind};
pub use path::{Builder, Element, Kind, Path, PathData, ValueDim};
pub use shapes::{BoundsSpec, BoxSpec, EllipseSpec, Shape, ShapeSpec, Size};

/// Something was wrong with the data or the configuration of an element.
///
/// Every error is raised while building or querying an element; nothing is
/// partially constructed when one occurs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Coordinate sequences of different lengths.
    #[error("x has {x} entries but y has {y}")]
    ShapeMismatch {
        /// Length of the `x` data.
        x: usize,
        /// Length of the `y` data.
        y: usize,
    },

    /// A block of `y` values whose rows have different lengths.
    #[error("row {row} of the y block has {found} entries, expected {expected}")]
    RaggedBlock {
        /// The first row with the wrong length.
        row: usize,
        /// The length of the first row.
        expected: usize,
        /// The length of the offending row.
        found: usize,
    },

    /// An array column whose length doesn't match the coordinates.
    #[error("column {column:?} has {found} entries, expected {expected}")]
    ColumnLength {
        /// The column name.
        column: String,
        /// The number of coordinates.
        expected: usize,
        /// The number of values.
        found: usize,
    },

    /// A declared value dimension without a column in some geometry.
    #[error("geometry {geometry} has no column {column:?}")]
    MissingColumn {
        /// Index of the geometry.
        geometry: usize,
        /// The missing column.
        column: String,
    },

    /// A value that varies along a geometry, on an element that requires one value per geometry.
    #[error("All value dimensions on a {kind} element must be scalar")]
    NonScalarValue {
        /// The element kind.
        kind: Kind,
        /// The offending value dimension.
        dimension: String,
    },

    /// A holes structure that doesn't have one entry per sub-part.
    #[error("geometry {geometry} has {parts} sub-parts but {holes} hole lists")]
    HoleMismatch {
        /// Index of the geometry.
        geometry: usize,
        /// The number of sub-parts.
        parts: usize,
        /// The number of hole lists.
        holes: usize,
    },

    /// Options that can't be used together.
    #[error("{0}")]
    ConfigurationConflict(String),

    /// A dimension name that isn't declared on the element.
    #[error("dimension {0:?} not found")]
    DimensionNotFound(String),

    /// An index that isn't a dimension name, a slice or a pair of slices.
    #[error("{kind} elements only support indexing by a dimension name, a slice, or a pair of slices")]
    UnsupportedKey {
        /// The element kind.
        kind: Kind,
    },

    /// An output format that isn't recognized.
    #[error("unsupported output format {0:?}")]
    UnsupportedFormat(String),

    /// An operation that can never succeed on this kind of data.
    #[error("{0}")]
    UnsupportedOperation(String),
}
