//! Utilities for generating examples, benchmarks, and test cases.

use crate::{
    geom::{Point, Ring},
    geometry::Geometry,
    Error,
};

/// Generate a bunch of closed squares, arranged in a grid.
///
/// The bottom-left of the first square is at (x0, y0). Each square has size
/// `size x size`, and the distance between squares (both horizontally and
/// vertically) is `offset`.
///
/// If `slant` is non-zero, generates parallelograms instead of squares: the
/// right-hand side of each square gets translated up by `slant`.
fn squares((x0, y0): (f64, f64), size: f64, offset: f64, slant: f64, count: usize) -> Vec<Ring> {
    let mut ret = Vec::new();
    for i in 0..count {
        let x = x0 + i as f64 * offset;
        for j in 0..count {
            let y = y0 + j as f64 * offset;
            ret.push(vec![
                Point::new(x, y),
                Point::new(x, y + size),
                Point::new(x + size, y + size + slant),
                Point::new(x + size, y + slant),
                Point::new(x, y),
            ]);
        }
    }

    ret
}

/// An `n` by `n` grid of square contours.
///
/// Each square carries a scalar `"level"` column, counting up from zero.
pub fn contour_grid(n: usize) -> Result<Vec<Geometry>, Error> {
    squares((0.0, 0.0), 30.0, 40.0, 0.0, n)
        .into_iter()
        .enumerate()
        .map(|(i, ring)| Geometry::from_points(ring).with_value("level", i as f64))
        .collect()
}

/// Like `contour_grid`, but the level is stored once per coordinate.
///
/// Every level column is a degenerate scalar.
pub fn expanded_contour_grid(n: usize) -> Result<Vec<Geometry>, Error> {
    squares((0.0, 0.0), 30.0, 40.0, 1.0, n)
        .into_iter()
        .enumerate()
        .map(|(i, ring)| {
            let len = ring.len();
            Geometry::from_points(ring).with_value("level", vec![i as f64; len])
        })
        .collect()
}

/// An `n` by `n` grid of square frames: polygons with one square hole each.
pub fn frames(n: usize) -> Vec<Geometry> {
    squares((0.0, 0.0), 30.0, 40.0, 0.0, n)
        .into_iter()
        .zip(squares((10.0, 10.0), 10.0, 40.0, 0.0, n))
        .map(|(outer, hole)| Geometry::from_points(outer).with_holes(vec![vec![hole]]))
        .collect()
}

/// Long, skinny parallelograms, alternately leaning left and right.
///
/// Each one carries a `"t"` column that varies along it, so these are paths
/// but not contours.
pub fn slanties(n: usize) -> Result<Vec<Geometry>, Error> {
    let h = 20.0 * n as f64;

    let mut ret = Vec::new();
    for i in 0..n {
        let x_off = 20.0 * i as f64;
        let ring = if i % 2 == 0 {
            vec![
                Point::new(x_off, 0.0),
                Point::new(x_off + h, h),
                Point::new(x_off + h + 10.0, h),
                Point::new(x_off + 10.0, 0.0),
                Point::new(x_off, 0.0),
            ]
        } else {
            vec![
                Point::new(x_off + h, 0.0),
                Point::new(x_off, h),
                Point::new(x_off + 10.0, h),
                Point::new(x_off + h + 10.0, 0.0),
                Point::new(x_off + h, 0.0),
            ]
        };
        let t: Vec<f64> = (0..ring.len()).map(|k| k as f64).collect();
        ret.push(Geometry::from_points(ring).with_value("t", t)?);
    }

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Contours, Path, Polygons};

    #[test]
    fn grids_build() {
        let contours = Contours::builder()
            .vdim("level")
            .build(contour_grid(3).unwrap())
            .unwrap();
        assert_eq!(contours.geometry_count(), 9);

        let expanded = Contours::builder()
            .vdim("level")
            .build(expanded_contour_grid(3).unwrap())
            .unwrap();
        assert_eq!(expanded.dimension_values("level", false).unwrap().len(), 9);

        let polygons = Polygons::new(frames(2)).unwrap();
        assert!(polygons.has_holes());

        let slanties = slanties(4).unwrap();
        assert!(Contours::builder().vdim("t").build(slanties.clone()).is_err());
        assert!(Path::builder().vdim("t").build(slanties).is_ok());
    }
}
