//! Value columns attached to a geometry.

/// The values of one dimension over one geometry.
///
/// A column is either a true scalar, or an array with one entry per
/// coordinate. Arrays whose entries are all identical are "degenerate
/// scalars" and are treated exactly like scalars on read. NaN counts as equal
/// to NaN here, so an all-NaN array is as scalar as `Scalar(NaN)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Column {
    /// A single value for the whole geometry.
    Scalar(f64),
    /// One value per coordinate.
    Array(Vec<f64>),
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl Column {
    /// The single value of this column, if it has one. An empty array has none.
    pub fn scalar_value(&self) -> Option<f64> {
        self.scalar_value_skipping(|_| false)
    }

    /// Like [`Column::scalar_value`], ignoring the array entries at which `skip` holds.
    ///
    /// Geometries use this to skip the rows of their sub-part breaks.
    pub fn scalar_value_skipping(&self, skip: impl Fn(usize) -> bool) -> Option<f64> {
        match self {
            Column::Scalar(v) => Some(*v),
            Column::Array(vs) => {
                let mut kept = vs.iter().enumerate().filter(|(i, _)| !skip(*i)).map(|(_, v)| *v);
                let first = kept.next()?;
                kept.all(|v| same(v, first)).then_some(first)
            }
        }
    }

    /// Is this column a scalar or a degenerate scalar?
    pub fn is_scalar(&self) -> bool {
        self.is_scalar_skipping(|_| false)
    }

    /// Like [`Column::is_scalar`], ignoring the array entries at which `skip` holds.
    pub fn is_scalar_skipping(&self, skip: impl Fn(usize) -> bool) -> bool {
        match self {
            Column::Scalar(_) => true,
            Column::Array(vs) => {
                (0..vs.len()).all(|i| skip(i)) || self.scalar_value_skipping(skip).is_some()
            }
        }
    }

    /// The number of stored values: one for a scalar.
    pub fn len(&self) -> usize {
        match self {
            Column::Scalar(_) => 1,
            Column::Array(vs) => vs.len(),
        }
    }

    /// Is this an empty array?
    pub fn is_empty(&self) -> bool {
        matches!(self, Column::Array(vs) if vs.is_empty())
    }

    /// The values broadcast to `len` coordinates.
    ///
    /// Arrays are returned as stored; their length was checked against the
    /// coordinates when the geometry was built.
    pub fn expanded(&self, len: usize) -> Vec<f64> {
        match self {
            Column::Scalar(v) => vec![*v; len],
            Column::Array(vs) => vs.clone(),
        }
    }

    /// The values with scalars (and degenerate scalars) collapsed to one entry.
    pub fn compact(&self) -> Vec<f64> {
        self.compact_skipping(|_| false)
    }

    /// Like [`Column::compact`], ignoring the skipped entries when looking for a single value.
    pub fn compact_skipping(&self, skip: impl Fn(usize) -> bool) -> Vec<f64> {
        match (self.scalar_value_skipping(skip), self) {
            (Some(v), _) => vec![v],
            (None, Column::Scalar(v)) => vec![*v],
            (None, Column::Array(vs)) => vs.clone(),
        }
    }
}

impl From<f64> for Column {
    fn from(v: f64) -> Self {
        Column::Scalar(v)
    }
}

impl From<Vec<f64>> for Column {
    fn from(vs: Vec<f64>) -> Self {
        Column::Array(vs)
    }
}

impl From<&[f64]> for Column {
    fn from(vs: &[f64]) -> Self {
        Column::Array(vs.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn degenerate_scalars() {
        assert!(Column::Scalar(1.0).is_scalar());
        assert!(Column::Array(vec![2.0, 2.0, 2.0]).is_scalar());
        assert!(!Column::Array(vec![2.0, 3.0]).is_scalar());
        assert!(Column::Array(vec![]).is_scalar());
        assert_eq!(Column::Array(vec![2.0, 2.0]).scalar_value(), Some(2.0));
    }

    #[test]
    fn nan_is_a_value() {
        let all_nan = Column::Array(vec![f64::NAN; 4]);
        assert!(all_nan.is_scalar());
        assert!(all_nan.scalar_value().is_some_and(f64::is_nan));
        assert_eq!(all_nan.compact().len(), 1);
        assert!(Column::Scalar(f64::NAN).is_scalar());

        let holey = Column::Array(vec![1.0, f64::NAN, 1.0]);
        assert!(!holey.is_scalar());
        assert_eq!(holey.compact().len(), 3);
    }

    #[test]
    fn skipped_entries_do_not_count() {
        let col = Column::Array(vec![4.0, 4.0, f64::NAN, 4.0]);
        assert!(!col.is_scalar());
        assert!(col.is_scalar_skipping(|i| i == 2));
        assert_eq!(col.compact_skipping(|i| i == 2), vec![4.0]);
        assert!(Column::Array(vec![f64::NAN]).is_scalar_skipping(|_| true));
        assert_eq!(Column::Array(vec![f64::NAN]).scalar_value_skipping(|_| true), None);
    }

    #[test]
    fn expand_and_compact() {
        assert_eq!(Column::Scalar(5.0).expanded(3), vec![5.0, 5.0, 5.0]);
        assert_eq!(Column::Scalar(5.0).compact(), vec![5.0]);
        assert_eq!(Column::Array(vec![1.0, 2.0]).compact(), vec![1.0, 2.0]);
    }

    proptest! {
    #[test]
    fn constant_arrays_read_like_scalars(v in -1e6f64..1e6, len in 1usize..50) {
        let degenerate = Column::Array(vec![v; len]);
        let scalar = Column::Scalar(v);
        prop_assert!(degenerate.is_scalar());
        prop_assert_eq!(degenerate.compact(), scalar.compact());
        prop_assert_eq!(degenerate.expanded(len), scalar.expanded(len));
    }
    }
}
