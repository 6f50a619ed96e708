#![no_main]

use arbitrary::Unstructured;

use libfuzzer_sys::fuzz_target;
use pathframe::{Geometry, Polygons};

fn arbitrary_polygons(mut u: Unstructured) -> Result<(), arbitrary::Error> {
    let count: usize = u.int_in_range(0..=8)?;
    let mut geoms = Vec::with_capacity(count);
    for _ in 0..count {
        geoms.push(pathframe::arbitrary::polygon(&mut u)?);
    }
    let parts: Vec<usize> = geoms.iter().map(Geometry::part_count).collect();

    let polygons = Polygons::builder().vdim("v").build(geoms).unwrap();
    let holes = polygons.holes();
    assert_eq!(holes.len(), count);
    for (h, p) in holes.iter().zip(parts) {
        assert_eq!(h.len(), p);
    }
    assert_eq!(polygons.has_holes(), holes.iter().flatten().any(|h| !h.is_empty()));
    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let u = Unstructured::new(data);
    let _ = arbitrary_polygons(u);
});
