//! Output representations for split geometries.

use std::collections::BTreeMap;

use crate::{
    column::Column,
    dimension::{X, Y},
    geometry::Geometry,
    path::{Path, ValueDim},
    Error,
};

/// A representation that `split` can convert geometries into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// A 2-D numeric block: `x`, `y`, then one column per value dimension.
    Array,
    /// A table of named columns.
    DataFrame,
    /// A mapping from column name to column, scalars kept as scalars.
    Columns,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(OutputFormat::Array),
            "dataframe" => Ok(OutputFormat::DataFrame),
            "columns" => Ok(OutputFormat::Columns),
            other => Err(Error::UnsupportedFormat(other.to_owned())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            OutputFormat::Array => "array",
            OutputFormat::DataFrame => "dataframe",
            OutputFormat::Columns => "columns",
        })
    }
}

/// A row-major 2-D block of numbers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Array2 {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Array2 {
    fn from_columns(columns: &[Vec<f64>], rows: usize) -> Self {
        let cols = columns.len();
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            data.extend(columns.iter().map(|c| c[i]));
        }
        Array2 { rows, cols, data }
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row `i`. Panics if it is out of range.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// A copy of column `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.data.iter().skip(j).step_by(self.cols.max(1)).copied().collect()
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `chunks` panics on zero; a zero-column block has no rows worth showing.
        self.data.chunks(self.cols.max(1))
    }
}

/// Named columns of equal length.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    /// The column names, in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The column called `name`.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        let idx = self.names.iter().position(|n| n == name)?;
        Some(&self.columns[idx])
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Does the table have no rows?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One item returned by `split`.
#[derive(Clone, Debug)]
pub enum Split {
    /// A container of the same kind holding a single geometry.
    Element(Path),
    /// See [`OutputFormat::Array`].
    Array(Array2),
    /// See [`OutputFormat::DataFrame`].
    Table(Table),
    /// See [`OutputFormat::Columns`].
    Columns(BTreeMap<String, Column>),
}

impl Split {
    /// The element, if this is one.
    pub fn as_element(&self) -> Option<&Path> {
        match self {
            Split::Element(p) => Some(p),
            _ => None,
        }
    }

    /// The array, if this is one.
    pub fn as_array(&self) -> Option<&Array2> {
        match self {
            Split::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The table, if this is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Split::Table(t) => Some(t),
            _ => None,
        }
    }

    /// The columns, if this is a column mapping.
    pub fn as_columns(&self) -> Option<&BTreeMap<String, Column>> {
        match self {
            Split::Columns(c) => Some(c),
            _ => None,
        }
    }
}

/// Converts one geometry to `format`, with `vdims` resolved against it.
pub(crate) fn convert(geom: &Geometry, vdims: &[ValueDim], format: OutputFormat) -> Result<Split, Error> {
    let mut named: Vec<(&str, Column)> = vec![
        (X, Column::Array(geom.x().to_vec())),
        (Y, Column::Array(geom.y().to_vec())),
    ];
    for vdim in vdims {
        let column = vdim.column(geom).ok_or_else(|| Error::MissingColumn {
            geometry: 0,
            column: vdim.name().to_owned(),
        })?;
        named.push((vdim.name(), column));
    }

    let len = geom.len();
    Ok(match format {
        OutputFormat::Array => {
            let columns: Vec<_> = named.iter().map(|(_, c)| c.expanded(len)).collect();
            Split::Array(Array2::from_columns(&columns, len))
        }
        OutputFormat::DataFrame => Split::Table(Table {
            names: named.iter().map(|(n, _)| (*n).to_owned()).collect(),
            columns: named.iter().map(|(_, c)| c.expanded(len)).collect(),
        }),
        OutputFormat::Columns => Split::Columns(
            named
                .into_iter()
                .map(|(n, c)| (n.to_owned(), c))
                .collect(),
        ),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::{dimension::Dimension, geom::Point};

    fn geom() -> Geometry {
        Geometry::from_points([Point::new(0.0, 1.0), Point::new(2.0, 3.0)])
            .with_value("speed", vec![5.0, 6.0])
            .unwrap()
    }

    #[test]
    fn parse_formats() {
        assert_eq!("array".parse::<OutputFormat>().unwrap(), OutputFormat::Array);
        assert_eq!(
            "dataframe".parse::<OutputFormat>().unwrap(),
            OutputFormat::DataFrame
        );
        assert_matches!(
            "parquet".parse::<OutputFormat>(),
            Err(Error::UnsupportedFormat(f)) if f == "parquet"
        );
    }

    #[test]
    fn array_appends_value_columns() {
        let vdims = [
            ValueDim::Stored(Dimension::new("speed")),
            ValueDim::Synthesized {
                dim: Dimension::new("Level"),
                value: 9.0,
            },
        ];
        let Split::Array(arr) = convert(&geom(), &vdims, OutputFormat::Array).unwrap() else {
            panic!("expected an array");
        };
        assert_eq!(arr.shape(), (2, 4));
        assert_eq!(arr.row(0), &[0.0, 1.0, 5.0, 9.0]);
        assert_eq!(arr.row(1), &[2.0, 3.0, 6.0, 9.0]);
        assert_eq!(arr.column(2), vec![5.0, 6.0]);
        assert_eq!(arr.rows().count(), 2);
    }

    #[test]
    fn columns_keep_scalars() {
        let vdims = [ValueDim::Synthesized {
            dim: Dimension::new("Level"),
            value: 9.0,
        }];
        let Split::Columns(cols) = convert(&geom(), &vdims, OutputFormat::Columns).unwrap() else {
            panic!("expected columns");
        };
        assert_eq!(cols["Level"], Column::Scalar(9.0));
        assert_eq!(cols["x"], Column::Array(vec![0.0, 2.0]));
        assert!(!cols.contains_key("speed"));
    }

    #[test]
    fn table_columns() {
        let vdims = [ValueDim::Stored(Dimension::new("speed"))];
        let Split::Table(table) = convert(&geom(), &vdims, OutputFormat::DataFrame).unwrap() else {
            panic!("expected a table");
        };
        assert_eq!(table.names(), ["x", "y", "speed"]);
        assert_eq!(table.column("speed"), Some(&[5.0, 6.0][..]));
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("nope"), None);
    }
}
