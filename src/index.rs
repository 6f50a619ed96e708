//! Index keys for path elements.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::path::Path;

/// A half-open interval along one key dimension; either end may be open.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Slice {
    /// The inclusive lower end.
    pub start: Option<f64>,
    /// The exclusive upper end.
    pub stop: Option<f64>,
}

impl Slice {
    /// A slice between `start` and `stop`.
    pub fn new(start: Option<f64>, stop: Option<f64>) -> Self {
        Slice { start, stop }
    }

    /// The slice with both ends open.
    pub fn full() -> Self {
        Slice::default()
    }
}

impl From<Range<f64>> for Slice {
    fn from(r: Range<f64>) -> Self {
        Slice::new(Some(r.start), Some(r.end))
    }
}

impl From<RangeFrom<f64>> for Slice {
    fn from(r: RangeFrom<f64>) -> Self {
        Slice::new(Some(r.start), None)
    }
}

impl From<RangeTo<f64>> for Slice {
    fn from(r: RangeTo<f64>) -> Self {
        Slice::new(None, Some(r.end))
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Slice::full()
    }
}

/// Something a path element can be indexed with.
///
/// Only dimension names, a single slice, and tuples of at most two slices are
/// accepted; everything else is rejected when the index is applied.
#[derive(Clone, Debug, PartialEq)]
pub enum Key {
    /// A dimension name, selecting that dimension's values.
    Name(String),
    /// A slice along `x`.
    Slice(Slice),
    /// A bare number.
    Value(f64),
    /// A tuple of keys, one per key dimension.
    Tuple(Vec<Key>),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<f64> for Key {
    fn from(v: f64) -> Self {
        Key::Value(v)
    }
}

impl From<Slice> for Key {
    fn from(s: Slice) -> Self {
        Key::Slice(s)
    }
}

impl From<Range<f64>> for Key {
    fn from(r: Range<f64>) -> Self {
        Key::Slice(r.into())
    }
}

impl From<RangeFrom<f64>> for Key {
    fn from(r: RangeFrom<f64>) -> Self {
        Key::Slice(r.into())
    }
}

impl From<RangeTo<f64>> for Key {
    fn from(r: RangeTo<f64>) -> Self {
        Key::Slice(r.into())
    }
}

impl From<RangeFull> for Key {
    fn from(r: RangeFull) -> Self {
        Key::Slice(r.into())
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Key::Tuple(Vec::new())
    }
}

impl<A: Into<Key>, B: Into<Key>> From<(A, B)> for Key {
    fn from((a, b): (A, B)) -> Self {
        Key::Tuple(vec![a.into(), b.into()])
    }
}

/// The result of indexing a path element.
#[derive(Clone, Debug)]
pub enum Selection {
    /// The values of a dimension.
    Values(Vec<f64>),
    /// A new element with adjusted extents.
    Element(Path),
}

impl Selection {
    /// The dimension values, if this is a value selection.
    pub fn into_values(self) -> Option<Vec<f64>> {
        match self {
            Selection::Values(vs) => Some(vs),
            Selection::Element(_) => None,
        }
    }

    /// The new element, if this is an element selection.
    pub fn into_element(self) -> Option<Path> {
        match self {
            Selection::Element(p) => Some(p),
            Selection::Values(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_to_slices() {
        assert_eq!(Slice::from(0.0..5.0), Slice::new(Some(0.0), Some(5.0)));
        assert_eq!(Slice::from(2.0..), Slice::new(Some(2.0), None));
        assert_eq!(Slice::from(..2.0), Slice::new(None, Some(2.0)));
        assert_eq!(Slice::from(..), Slice::full());
    }

    #[test]
    fn tuple_keys() {
        assert_eq!(
            Key::from((0.0..5.0, 0.0..10.0)),
            Key::Tuple(vec![
                Key::Slice(Slice::new(Some(0.0), Some(5.0))),
                Key::Slice(Slice::new(Some(0.0), Some(10.0))),
            ])
        );
        assert_eq!(Key::from(()), Key::Tuple(vec![]));
    }
}
