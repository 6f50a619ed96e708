//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::{
    column::Column,
    geom::{Point, Ring},
    geometry::Geometry,
};

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

fn float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    float_in_range(-1e6, 1e6, u)
}

fn point(u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    Ok(Point::new(float(u)?, float(u)?))
}

fn ring(u: &mut Unstructured<'_>) -> Result<Ring, arbitrary::Error> {
    let len: usize = u.int_in_range(2..=8)?;
    let mut ret = (0..len).map(|_| point(u)).collect::<Result<Vec<_>, _>>()?;
    ret.push(ret[0]);
    Ok(ret)
}

/// Generate an arbitrary column for a geometry with `len` coordinates.
///
/// If `scalar` is true, the column is a scalar or a degenerate scalar.
pub fn column(len: usize, scalar: bool, u: &mut Unstructured<'_>) -> Result<Column, arbitrary::Error> {
    let value = float(u)?;
    let as_array: bool = u.arbitrary()?;
    Ok(match (scalar, as_array) {
        (true, false) => Column::Scalar(value),
        (true, true) => Column::Array(vec![value; len]),
        (false, _) => Column::Array((0..len).map(|_| float(u)).collect::<Result<_, _>>()?),
    })
}

/// Generate an arbitrary, possibly compound, geometry with a `"v"` column.
pub fn geometry(scalar: bool, u: &mut Unstructured<'_>) -> Result<Geometry, arbitrary::Error> {
    let parts: usize = u.int_in_range(1..=3)?;
    let rings = (0..parts).map(|_| ring(u)).collect::<Result<Vec<_>, _>>()?;
    let geom = Geometry::from_parts(rings);
    let col = column(geom.len(), scalar, u)?;
    // The column was generated with the right length.
    geom.with_value("v", col)
        .map_err(|_| arbitrary::Error::IncorrectFormat)
}

/// Generate an arbitrary polygon geometry: one list of holes per sub-part.
pub fn polygon(u: &mut Unstructured<'_>) -> Result<Geometry, arbitrary::Error> {
    let geom = geometry(true, u)?;
    let mut holes = Vec::new();
    for _ in 0..geom.part_count() {
        let count: usize = u.int_in_range(0..=2)?;
        holes.push((0..count).map(|_| ring(u)).collect::<Result<Vec<_>, _>>()?);
    }
    Ok(geom.with_holes(holes))
}
