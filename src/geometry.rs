//! A single geometry record: coordinates plus value columns.

use std::collections::BTreeMap;
use std::ops::Range;

use crate::{
    column::Column,
    geom::{Point, Ring, BREAK},
    Error,
};

/// One logical path, contour or polygon.
///
/// The `x` and `y` sequences always have the same length. A geometry may be
/// compound: its sub-parts are separated by a [`BREAK`] at the same position
/// in both sequences.
///
/// `holes`, when present, has one entry per sub-part, and each entry is a
/// (possibly empty) list of hole rings. Only [`Polygons`](crate::Polygons)
/// checks and exposes holes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    x: Vec<f64>,
    y: Vec<f64>,
    values: BTreeMap<String, Column>,
    holes: Option<Vec<Vec<Ring>>>,
}

impl Geometry {
    /// Create a geometry from its coordinate sequences.
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self, Error> {
        let (x, y) = (x.into(), y.into());
        if x.len() != y.len() {
            return Err(Error::ShapeMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Geometry {
            x,
            y,
            values: BTreeMap::new(),
            holes: None,
        })
    }

    /// Create a geometry from a sequence of points.
    pub fn from_points<P: Into<Point>>(ps: impl IntoIterator<Item = P>) -> Self {
        let (x, y) = ps
            .into_iter()
            .map(|p| {
                let p = p.into();
                (p.x, p.y)
            })
            .unzip();
        Geometry {
            x,
            y,
            values: BTreeMap::new(),
            holes: None,
        }
    }

    /// Create a compound geometry from several parts, inserting breaks between them.
    pub fn from_parts<P: Into<Point>>(
        parts: impl IntoIterator<Item = impl IntoIterator<Item = P>>,
    ) -> Self {
        let mut points = Vec::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                points.push(Point::new(BREAK, BREAK));
            }
            points.extend(part.into_iter().map(Into::into));
        }
        Geometry::from_points(points)
    }

    /// Attach a value column.
    ///
    /// Array columns must have one entry per coordinate.
    pub fn with_value(mut self, name: impl Into<String>, column: impl Into<Column>) -> Result<Self, Error> {
        let name = name.into();
        let column = column.into();
        check_column_len(&name, &column, self.len())?;
        self.values.insert(name, column);
        Ok(self)
    }

    /// Attach holes: one list of hole rings per sub-part.
    ///
    /// The number of lists is checked against the sub-parts when a
    /// [`Polygons`](crate::Polygons) element is built; other elements carry
    /// holes without looking at them.
    pub fn with_holes(mut self, holes: Vec<Vec<Ring>>) -> Self {
        self.holes = Some(holes);
        self
    }

    /// The number of coordinates, breaks included.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Does this geometry have no coordinates at all?
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The horizontal coordinates, breaks included.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The vertical coordinates, breaks included.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterates over the coordinates, breaks included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }

    /// The value column called `name`, if there is one.
    pub fn value(&self, name: &str) -> Option<&Column> {
        self.values.get(name)
    }

    /// All value columns, by name.
    pub fn values(&self) -> &BTreeMap<String, Column> {
        &self.values
    }

    /// Is row `i` a sub-part break?
    pub fn is_break_at(&self, i: usize) -> bool {
        match (self.x.get(i), self.y.get(i)) {
            (Some(&x), Some(&y)) => Point::new(x, y).is_break(),
            _ => false,
        }
    }

    /// The single value of the column called `name`, ignoring break rows.
    pub fn scalar_value(&self, name: &str) -> Option<f64> {
        self.value(name)?
            .scalar_value_skipping(|i| self.is_break_at(i))
    }

    /// Is the column called `name` a scalar or a degenerate scalar, ignoring
    /// break rows? A missing column is not.
    pub fn is_scalar(&self, name: &str) -> bool {
        self.value(name)
            .is_some_and(|c| c.is_scalar_skipping(|i| self.is_break_at(i)))
    }

    /// The column called `name`, collapsed to one entry if it is scalar.
    pub fn compact(&self, name: &str) -> Option<Vec<f64>> {
        Some(
            self.value(name)?
                .compact_skipping(|i| self.is_break_at(i)),
        )
    }

    /// The raw holes structure, if one was attached.
    pub fn holes(&self) -> Option<&[Vec<Ring>]> {
        self.holes.as_deref()
    }

    /// Does this geometry have at least one hole?
    pub fn has_holes(&self) -> bool {
        self.holes
            .as_ref()
            .is_some_and(|hs| hs.iter().any(|part| !part.is_empty()))
    }

    /// The index ranges of the sub-parts.
    ///
    /// There is always one more sub-part than there are breaks, so an empty
    /// geometry has a single empty sub-part.
    pub fn parts(&self) -> Vec<Range<usize>> {
        let mut ret = Vec::new();
        let mut start = 0;
        for (i, p) in self.points().enumerate() {
            if p.is_break() {
                ret.push(start..i);
                start = i + 1;
            }
        }
        ret.push(start..self.x.len());
        ret
    }

    /// The number of sub-parts.
    pub fn part_count(&self) -> usize {
        self.parts().len()
    }

    /// Holes per sub-part, with empty lists where none were declared.
    pub fn holes_per_part(&self) -> Vec<Vec<Ring>> {
        match &self.holes {
            Some(holes) => holes.clone(),
            None => vec![Vec::new(); self.part_count()],
        }
    }

    /// Re-checks the structural invariants, for data that didn't come through
    /// the checked constructors (e.g. deserialized data).
    pub fn validate(&self) -> Result<(), Error> {
        if self.x.len() != self.y.len() {
            return Err(Error::ShapeMismatch {
                x: self.x.len(),
                y: self.y.len(),
            });
        }
        for (name, column) in &self.values {
            check_column_len(name, column, self.len())?;
        }
        Ok(())
    }

    /// Concatenates geometries into one, separated by breaks.
    ///
    /// Only the named value columns are carried over, expanded to one entry
    /// per coordinate and padded with a NaN at every break. Holes are dropped.
    pub fn flatten<'a>(geoms: impl IntoIterator<Item = &'a Geometry>, columns: &[&str]) -> Result<Geometry, Error> {
        let mut ret = Geometry::default();
        let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

        for (i, geom) in geoms.into_iter().enumerate() {
            if i > 0 {
                ret.x.push(BREAK);
                ret.y.push(BREAK);
                for vs in &mut values {
                    vs.push(f64::NAN);
                }
            }
            ret.x.extend_from_slice(&geom.x);
            ret.y.extend_from_slice(&geom.y);
            for (name, vs) in columns.iter().zip(&mut values) {
                let column = geom.value(name).ok_or_else(|| Error::MissingColumn {
                    geometry: i,
                    column: (*name).to_owned(),
                })?;
                vs.extend(column.expanded(geom.len()));
            }
        }

        for (name, vs) in columns.iter().zip(values) {
            ret.values.insert((*name).to_owned(), Column::Array(vs));
        }
        Ok(ret)
    }
}

fn check_column_len(name: &str, column: &Column, len: usize) -> Result<(), Error> {
    if let Column::Array(vs) = column {
        if vs.len() != len {
            return Err(Error::ColumnLength {
                column: name.to_owned(),
                expected: len,
                found: vs.len(),
            });
        }
    }
    Ok(())
}
