//! The path element: an ordered collection of geometries with value dimensions.
//!
//! [`Path`] is the only container type. [`Contours`](crate::Contours) and
//! [`Polygons`](crate::Polygons) wrap a `Path` whose [`Kind`] tightens what
//! the data may look like; the checks run once, in [`Builder::build`].

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::{
    column::Column,
    dimension::{self, Dimension, X, Y},
    geom::{self, Extents},
    geometry::Geometry,
    index::{Key, Selection, Slice},
    interface::{self, Array2, Interface, MultiGeometryStore, OutputFormat, Split, Storage, StoreKind, Table},
    Error,
};

/// The kind of a path element, which decides the invariants its data must satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    /// Values may vary along each geometry.
    Path,
    /// Every value dimension is constant over each geometry.
    Contours,
    /// Like `Contours`, and geometries may have holes.
    Polygons,
}

/// What value dimensions may look like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueConstraint {
    /// Anything goes.
    Unconstrained,
    /// Scalar or degenerate-scalar within each geometry.
    ScalarOnly,
}

/// Whether holes are checked and exposed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HoleSupport {
    /// Holes are neither checked nor exposed.
    Unsupported,
    /// Holes must match the sub-parts of each geometry.
    Supported,
}

impl Kind {
    /// What this kind requires of value dimensions.
    pub fn constraint(self) -> ValueConstraint {
        match self {
            Kind::Path => ValueConstraint::Unconstrained,
            Kind::Contours | Kind::Polygons => ValueConstraint::ScalarOnly,
        }
    }

    /// Whether this kind checks and exposes holes.
    pub fn hole_support(self) -> HoleSupport {
        match self {
            Kind::Polygons => HoleSupport::Supported,
            Kind::Path | Kind::Contours => HoleSupport::Unsupported,
        }
    }

    /// The value dimension that a legacy `level` is exposed as.
    pub fn level_dimension(self) -> Option<&'static str> {
        match self {
            Kind::Path => None,
            Kind::Contours => Some("Level"),
            Kind::Polygons => Some("Value"),
        }
    }

    /// The kind's name, which is also the default group label.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Path => "Path",
            Kind::Contours => "Contours",
            Kind::Polygons => "Polygons",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared value dimension.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueDim {
    /// Read from the column of the same name in each geometry.
    Stored(Dimension),
    /// A constant that isn't stored anywhere, from the legacy `level` parameter.
    Synthesized {
        /// The declared dimension.
        dim: Dimension,
        /// Its value, shared by every geometry.
        value: f64,
    },
}

impl ValueDim {
    /// The declared dimension.
    pub fn dimension(&self) -> &Dimension {
        match self {
            ValueDim::Stored(dim) | ValueDim::Synthesized { dim, .. } => dim,
        }
    }

    /// The dimension's name.
    pub fn name(&self) -> &str {
        self.dimension().name()
    }

    /// The constant value, if this dimension is synthesized.
    pub fn synthesized_value(&self) -> Option<f64> {
        match self {
            ValueDim::Stored(_) => None,
            ValueDim::Synthesized { value, .. } => Some(*value),
        }
    }

    /// This dimension's column over `geom`, if it has one.
    pub fn column(&self, geom: &Geometry) -> Option<Column> {
        match self {
            ValueDim::Stored(dim) => geom.value(dim.name()).cloned(),
            ValueDim::Synthesized { value, .. } => Some(Column::Scalar(*value)),
        }
    }
}

/// The `y` half of a coordinate-pair input.
#[derive(Clone, Debug, PartialEq)]
pub enum YData {
    /// One `y` per `x`: a single geometry.
    Single(Vec<f64>),
    /// `N` rows of `M` values: `M` geometries sharing the same `x`.
    Block(Vec<Vec<f64>>),
}

impl From<Vec<f64>> for YData {
    fn from(y: Vec<f64>) -> Self {
        YData::Single(y)
    }
}

impl From<&[f64]> for YData {
    fn from(y: &[f64]) -> Self {
        YData::Single(y.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for YData {
    fn from(y: [f64; N]) -> Self {
        YData::Single(y.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for YData {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        YData::Block(rows)
    }
}

/// Everything a path element can be built from.
#[derive(Clone, Debug, Default)]
pub enum PathData {
    /// No geometries.
    #[default]
    Empty,
    /// Coordinate pairs.
    Xy {
        /// The shared `x` coordinates.
        x: Vec<f64>,
        /// One or more `y` sequences.
        y: YData,
    },
    /// Existing elements, whose geometries are concatenated in order.
    Elements(Vec<Path>),
    /// Geometry records, used as they are.
    Geometries(Vec<Geometry>),
}

impl PathData {
    fn into_geometries(self) -> Result<Vec<Geometry>, Error> {
        match self {
            PathData::Empty => Ok(Vec::new()),
            PathData::Geometries(geoms) => Ok(geoms),
            PathData::Elements(paths) => Ok(paths
                .iter()
                .flat_map(|p| p.geometries().iter().cloned())
                .collect()),
            PathData::Xy { x, y } => xy_geometries(x, y),
        }
    }
}

impl From<Vec<Geometry>> for PathData {
    fn from(geoms: Vec<Geometry>) -> Self {
        PathData::Geometries(geoms)
    }
}

impl From<Geometry> for PathData {
    fn from(geom: Geometry) -> Self {
        PathData::Geometries(vec![geom])
    }
}

impl From<Vec<Path>> for PathData {
    fn from(paths: Vec<Path>) -> Self {
        PathData::Elements(paths)
    }
}

impl<Xs: Into<Vec<f64>>, Ys: Into<YData>> From<(Xs, Ys)> for PathData {
    fn from((x, y): (Xs, Ys)) -> Self {
        PathData::Xy {
            x: x.into(),
            y: y.into(),
        }
    }
}

fn xy_geometries(x: Vec<f64>, y: YData) -> Result<Vec<Geometry>, Error> {
    match y {
        YData::Single(y) => Ok(vec![Geometry::new(x, y)?]),
        YData::Block(rows) => {
            if x.len() != rows.len() {
                return Err(Error::ShapeMismatch {
                    x: x.len(),
                    y: rows.len(),
                });
            }
            let width = rows.first().map_or(0, Vec::len);
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
                return Err(Error::RaggedBlock {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            (0..width)
                .map(|j| Geometry::new(x.clone(), rows.iter().map(|r| r[j]).collect::<Vec<_>>()))
                .collect()
        }
    }
}

/// A function that aggregates samples, as used when collapsing.
pub type Aggregator = fn(&[f64]) -> f64;

pub(crate) mod sealed {
    pub trait Sealed {
        /// Wraps an already checked path.
        fn wrap(path: super::Path) -> Self;
    }
}

/// A path element type: [`Path`], [`Contours`](crate::Contours) or [`Polygons`](crate::Polygons).
pub trait Element: sealed::Sealed + Sized {
    /// The kind that [`Builder`] checks the data against.
    const KIND: Kind;

    /// The underlying path.
    fn as_path(&self) -> &Path;

    /// Unwraps into the underlying path, keeping its kind.
    fn into_path(self) -> Path;
}

/// Configures and builds a path element.
///
/// All checks happen in [`Builder::build`]; nothing is built if any of them fail.
#[derive(Clone, Debug)]
pub struct Builder<E> {
    kind: Kind,
    vdims: Vec<Dimension>,
    store: StoreKind,
    level: Option<f64>,
    group: Option<String>,
    _element: PhantomData<fn() -> E>,
}

impl<E: Element> Default for Builder<E> {
    fn default() -> Self {
        Builder {
            kind: E::KIND,
            vdims: Vec::new(),
            store: StoreKind::default(),
            level: None,
            group: None,
            _element: PhantomData,
        }
    }
}

impl<E: Element> Builder<E> {
    /// A builder with no value dimensions on the multi-geometry store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares one more value dimension.
    pub fn vdim(mut self, dim: impl Into<Dimension>) -> Self {
        self.vdims.push(dim.into());
        self
    }

    /// Replaces the declared value dimensions.
    pub fn vdims<D: Into<Dimension>>(mut self, dims: impl IntoIterator<Item = D>) -> Self {
        self.vdims = dims.into_iter().map(Into::into).collect();
        self
    }

    /// Chooses the storage backing the element.
    pub fn store(mut self, store: StoreKind) -> Self {
        self.store = store;
        self
    }

    /// Sets a single constant value for every geometry.
    ///
    /// Deprecated: supply the value as a column of the data instead. The value
    /// is exposed under every declared value dimension, or under the kind's
    /// legacy dimension ("Level" or "Value") if none are declared. Plain paths
    /// don't accept a level.
    pub fn level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the group label; it defaults to the kind's name.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Checks `data` against everything configured and builds the element.
    pub fn build(self, data: impl Into<PathData>) -> Result<E, Error> {
        self.build_path(data.into()).map(E::wrap)
    }

    fn build_path(self, data: PathData) -> Result<Path, Error> {
        let kind = self.kind;
        let geometries = data.into_geometries()?;
        for geom in &geometries {
            geom.validate()?;
        }

        let vdims = self.resolve_vdims()?;
        let stored: Vec<&str> = vdims
            .iter()
            .filter(|v| matches!(v, ValueDim::Stored(_)))
            .map(ValueDim::name)
            .collect();
        check_columns(&geometries, &stored)?;
        if kind.hole_support() == HoleSupport::Supported {
            check_holes(&geometries, self.store)?;
        }

        let store = Storage::new(self.store, geometries, &stored)?;
        if kind.constraint() == ValueConstraint::ScalarOnly {
            if let Some(name) = stored.iter().find(|name| !store.is_scalar(name, true)) {
                return Err(Error::NonScalarValue {
                    kind,
                    dimension: (*name).to_owned(),
                });
            }
        }

        Ok(Path {
            kind,
            group: self.group.unwrap_or_else(|| kind.name().to_owned()),
            kdims: dimension::key_dimensions(),
            vdims,
            store,
            extents: Extents::default(),
        })
    }

    fn resolve_vdims(&self) -> Result<Vec<ValueDim>, Error> {
        let kind = self.kind;
        match (self.level, kind.level_dimension()) {
            (None, _) => Ok(self.vdims.iter().cloned().map(ValueDim::Stored).collect()),
            (Some(_), None) => Err(Error::ConfigurationConflict(format!(
                "the level parameter is not supported on {kind} elements"
            ))),
            (Some(value), Some(legacy)) => {
                log::warn!(
                    "the level parameter on {kind} elements is deprecated, \
                     supply the value dimension(s) as columns in the data"
                );
                let dims = if self.vdims.is_empty() {
                    vec![Dimension::new(legacy)]
                } else {
                    self.vdims.clone()
                };
                Ok(dims
                    .into_iter()
                    .map(|dim| ValueDim::Synthesized { dim, value })
                    .collect())
            }
        }
    }
}

fn check_columns(geometries: &[Geometry], columns: &[&str]) -> Result<(), Error> {
    for (i, geom) in geometries.iter().enumerate() {
        if let Some(missing) = columns.iter().find(|c| geom.value(c).is_none()) {
            return Err(Error::MissingColumn {
                geometry: i,
                column: (*missing).to_owned(),
            });
        }
    }
    Ok(())
}

fn check_holes(geometries: &[Geometry], store: StoreKind) -> Result<(), Error> {
    for (i, geom) in geometries.iter().enumerate() {
        let Some(holes) = geom.holes() else {
            continue;
        };
        let parts = geom.part_count();
        if holes.len() != parts {
            return Err(Error::HoleMismatch {
                geometry: i,
                parts,
                holes: holes.len(),
            });
        }
        if store == StoreKind::Flat && geom.has_holes() {
            return Err(Error::ConfigurationConflict(
                "holes require the multi-geometry store".to_owned(),
            ));
        }
    }
    Ok(())
}

/// Joins per-geometry sequences, with a break between consecutive ones.
fn join(parts: impl IntoIterator<Item = Vec<f64>>) -> Vec<f64> {
    let mut ret = Vec::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            ret.push(geom::BREAK);
        }
        ret.extend(part);
    }
    ret
}

pub(crate) fn concat_elements<E: Element>(items: &[E]) -> Result<E, Error> {
    let Some(first) = items.first().map(Element::as_path) else {
        return Builder::<E>::new().build(PathData::Empty);
    };
    let geometries: Vec<Geometry> = items
        .iter()
        .flat_map(|e| e.as_path().geometries().iter().cloned())
        .collect();
    first.rebuild::<E>(first.kind).build(geometries)
}

/// A collection of path geometries with associated values.
///
/// Each geometry is a sequence of `(x, y)` coordinates, possibly split into
/// sub-parts by breaks, plus a column for each value dimension. The key
/// dimensions are always `x` and `y`.
///
/// Paths are immutable: every operation that changes something returns a new
/// element.
#[derive(Clone, Debug)]
pub struct Path {
    kind: Kind,
    group: String,
    kdims: [Dimension; 2],
    vdims: Vec<ValueDim>,
    store: Storage,
    extents: Extents,
}

impl sealed::Sealed for Path {
    fn wrap(path: Path) -> Self {
        path
    }
}

impl Element for Path {
    const KIND: Kind = Kind::Path;

    fn as_path(&self) -> &Path {
        self
    }

    fn into_path(self) -> Path {
        self
    }
}

impl Path {
    /// Builds a path with no value dimensions on the multi-geometry store.
    pub fn new(data: impl Into<PathData>) -> Result<Path, Error> {
        Self::builder().build(data)
    }

    /// A builder for paths.
    pub fn builder() -> Builder<Path> {
        Builder::new()
    }

    /// Builds a path from coordinate pairs.
    ///
    /// If `y` is a block of `N` rows of `M` values, the result has `M`
    /// geometries, each pairing `x` with one column of `y`.
    pub fn from_xy(x: impl Into<Vec<f64>>, y: impl Into<YData>) -> Result<Path, Error> {
        Path::new(PathData::Xy {
            x: x.into(),
            y: y.into(),
        })
    }

    /// Concatenates the geometries of `paths`, in order.
    ///
    /// The value dimensions, store and kind are taken from the first path.
    pub fn concat(paths: &[Path]) -> Result<Path, Error> {
        concat_elements(paths)
    }

    /// The kind this element was built as.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The group label.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// The key dimensions, `x` and `y`.
    pub fn kdims(&self) -> &[Dimension; 2] {
        &self.kdims
    }

    /// The value dimensions, in declaration order.
    pub fn vdims(&self) -> &[ValueDim] {
        &self.vdims
    }

    /// All dimensions: the key dimensions followed by the value dimensions.
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> + '_ {
        self.kdims
            .iter()
            .chain(self.vdims.iter().map(ValueDim::dimension))
    }

    /// Looks up a dimension by name, failing if there isn't one.
    pub fn get_dimension(&self, name: &str) -> Result<&Dimension, Error> {
        dimension::lookup(self.dimensions(), name)
    }

    /// The backing store.
    pub fn interface(&self) -> &Storage {
        &self.store
    }

    /// The geometries, in order.
    pub fn geometries(&self) -> &[Geometry] {
        self.store.geometries()
    }

    /// The number of stored geometries. A flat store always has one.
    pub fn geometry_count(&self) -> usize {
        self.geometries().len()
    }

    /// The number of rows in the flattened representation, breaks included.
    pub fn len(&self) -> usize {
        self.store.length()
    }

    /// Does the element have no rows?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The declared extents. These don't depend on (or filter) the data.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// A copy with different declared extents.
    pub fn with_extents(&self, extents: Extents) -> Path {
        Path {
            extents,
            ..self.clone()
        }
    }

    /// The bounding box of the actual coordinates.
    pub fn bounding_box(&self) -> Option<kurbo::Rect> {
        geom::bounding_box(self.geometries().iter().flat_map(Geometry::points))
    }

    /// The values of a dimension across all geometries.
    ///
    /// Key dimensions, and value dimensions when `expanded`, have one entry per
    /// row of the flattened representation: geometries are separated by a NaN.
    /// Otherwise scalar columns contribute a single value per geometry.
    pub fn dimension_values(&self, name: &str, expanded: bool) -> Result<Vec<f64>, Error> {
        let dim = self.get_dimension(name)?;
        if dim.name() == X {
            return Ok(join(self.geometries().iter().map(|g| g.x().to_vec())));
        }
        if dim.name() == Y {
            return Ok(join(self.geometries().iter().map(|g| g.y().to_vec())));
        }

        let vdim = self
            .vdims
            .iter()
            .find(|v| v.name() == name)
            .ok_or_else(|| Error::DimensionNotFound(name.to_owned()))?;
        if let Some(value) = vdim.synthesized_value() {
            return Ok(if expanded {
                vec![value; self.len()]
            } else {
                vec![value]
            });
        }

        let mut columns = Vec::with_capacity(self.geometry_count());
        for (i, geom) in self.geometries().iter().enumerate() {
            let missing = || Error::MissingColumn {
                geometry: i,
                column: name.to_owned(),
            };
            columns.push(if expanded {
                geom.value(name).ok_or_else(missing)?.expanded(geom.len())
            } else {
                geom.compact(name).ok_or_else(missing)?
            });
        }
        Ok(if expanded {
            join(columns)
        } else {
            columns.concat()
        })
    }

    /// Splits into one item per geometry in `start..end`.
    ///
    /// With no `format`, each item is an element of the same kind holding one
    /// geometry. Bounds past the end are clipped. A flat store can't tell its
    /// geometries apart, so it returns a single item for the whole element.
    pub fn split(
        &self,
        start: Option<usize>,
        end: Option<usize>,
        format: Option<OutputFormat>,
    ) -> Result<Vec<Split>, Error> {
        self.store.split(self, start, end, format)
    }

    /// The whole element as a 2-D block, in the flattened representation.
    pub fn array(&self) -> Result<Array2, Error> {
        match self.convert_whole(Some(OutputFormat::Array))? {
            Split::Array(arr) => Ok(arr),
            _ => unreachable!("array conversion returned another format"),
        }
    }

    /// The whole element as a table, in the flattened representation.
    pub fn table(&self) -> Result<Table, Error> {
        match self.convert_whole(Some(OutputFormat::DataFrame))? {
            Split::Table(table) => Ok(table),
            _ => unreachable!("dataframe conversion returned another format"),
        }
    }

    /// The whole element as named columns, in the flattened representation.
    pub fn columns(&self) -> Result<std::collections::BTreeMap<String, Column>, Error> {
        match self.convert_whole(Some(OutputFormat::Columns))? {
            Split::Columns(cols) => Ok(cols),
            _ => unreachable!("columns conversion returned another format"),
        }
    }

    pub(crate) fn convert_whole(&self, format: Option<OutputFormat>) -> Result<Split, Error> {
        let Some(format) = format else {
            return Ok(Split::Element(self.clone()));
        };
        let flat = self.flattened()?;
        interface::convert(&flat, &self.vdims, format)
    }

    fn flattened(&self) -> Result<Cow<'_, Geometry>, Error> {
        match self.geometries() {
            [geom] => Ok(Cow::Borrowed(geom)),
            geoms => {
                let stored: Vec<&str> = self
                    .vdims
                    .iter()
                    .filter(|v| v.synthesized_value().is_none())
                    .map(ValueDim::name)
                    .collect();
                Geometry::flatten(geoms, &stored).map(Cow::Owned)
            }
        }
    }

    /// Indexes the element.
    ///
    /// - A dimension name gives that dimension's (expanded) values.
    /// - A slice, or a pair of slices, gives a new element whose extents are
    ///   set from the slices. The geometries are untouched.
    /// - An empty tuple gives an unchanged copy.
    ///
    /// Anything else fails with [`Error::UnsupportedKey`].
    pub fn index(&self, key: impl Into<Key>) -> Result<Selection, Error> {
        let unsupported = || Error::UnsupportedKey { kind: self.kind };
        match key.into() {
            Key::Name(name) => {
                if self.get_dimension(&name).is_err() {
                    return Err(unsupported());
                }
                Ok(Selection::Values(self.dimension_values(&name, true)?))
            }
            Key::Slice(x) => Ok(Selection::Element(self.slice(x, Slice::full()))),
            Key::Value(_) => Err(unsupported()),
            Key::Tuple(keys) => match keys.as_slice() {
                [] => Ok(Selection::Element(self.clone())),
                [Key::Slice(x)] => Ok(Selection::Element(self.slice(*x, Slice::full()))),
                [Key::Slice(x), Key::Slice(y)] => Ok(Selection::Element(self.slice(*x, *y))),
                _ => Err(unsupported()),
            },
        }
    }

    /// A copy with extents `(x.start, y.start, x.stop, y.stop)`.
    pub fn slice(&self, x: impl Into<Slice>, y: impl Into<Slice>) -> Path {
        let (x, y) = (x.into(), y.into());
        self.with_extents(Extents {
            left: x.start,
            bottom: y.start,
            right: x.stop,
            top: y.stop,
        })
    }

    /// Selects along the key dimensions by setting extents; the data isn't filtered.
    ///
    /// Selections on value dimensions are ignored. Unknown names are an error.
    pub fn select(&self, selection: &[(&str, Slice)]) -> Result<Path, Error> {
        let (mut x, mut y) = (Slice::full(), Slice::full());
        for (name, slice) in selection {
            let dim = self.get_dimension(name)?;
            if dim.name() == X {
                x = *slice;
            } else if dim.name() == Y {
                y = *slice;
            }
        }
        Ok(self.slice(x, y))
    }

    /// Collapses several geometry collections into one.
    ///
    /// Without a function this is concatenation. Path geometries don't share a
    /// sampling grid, so aggregating them with a function always fails.
    pub fn collapse_data(
        data: Vec<Vec<Geometry>>,
        function: Option<Aggregator>,
    ) -> Result<Vec<Geometry>, Error> {
        match function {
            None => Ok(data.into_iter().flatten().collect()),
            Some(_) => Err(Error::UnsupportedOperation(format!(
                "{} types are not uniformly sampled and therefore cannot be collapsed with a function",
                Kind::Path
            ))),
        }
    }

    /// A copy of this element holding different data.
    ///
    /// The data is checked against this element's kind and value dimensions.
    pub fn with_data(&self, data: impl Into<PathData>) -> Result<Path, Error> {
        let mut ret = self.rebuild::<Path>(self.kind).build_path(data.into())?;
        ret.extents = self.extents;
        Ok(ret)
    }

    /// A copy of this element with different (stored) value dimensions.
    pub fn with_vdims<D: Into<Dimension>>(&self, vdims: impl IntoIterator<Item = D>) -> Result<Path, Error> {
        let mut builder = self.rebuild::<Path>(self.kind).vdims(vdims);
        builder.level = None;
        let mut ret = builder.build_path(self.geometries().to_vec().into())?;
        ret.extents = self.extents;
        Ok(ret)
    }

    /// A builder reproducing this element's configuration, as `kind`.
    pub(crate) fn rebuild<E: Element>(&self, kind: Kind) -> Builder<E> {
        Builder {
            kind,
            vdims: self.vdims.iter().map(|v| v.dimension().clone()).collect(),
            store: self.store.kind(),
            level: self.vdims.iter().find_map(ValueDim::synthesized_value),
            group: Some(self.group.clone()),
            _element: PhantomData,
        }
    }

    /// An element like this one, holding `geometries` on a multi-geometry store.
    ///
    /// `geometries` must already satisfy this element's invariants.
    pub(crate) fn child(&self, geometries: Vec<Geometry>) -> Path {
        Path {
            kind: self.kind,
            group: self.group.clone(),
            kdims: self.kdims.clone(),
            vdims: self.vdims.clone(),
            store: Storage::Multi(MultiGeometryStore::new(geometries)),
            extents: self.extents,
        }
    }
}
