#![no_main]

use arbitrary::Unstructured;

use libfuzzer_sys::fuzz_target;
use pathframe::{Contours, Geometry, OutputFormat, Path, StoreKind};

fn arbitrary_contours(mut u: Unstructured) -> Result<(), arbitrary::Error> {
    let count: usize = u.int_in_range(0..=8)?;
    let scalar: bool = u.arbitrary()?;
    let mut geoms = Vec::with_capacity(count);
    for _ in 0..count {
        geoms.push(pathframe::arbitrary::geometry(scalar, &mut u)?);
    }

    let path = Path::builder().vdim("v").build(geoms.clone()).unwrap();
    let contours = Contours::builder().vdim("v").build(geoms.clone());
    // Every generated column is single-valued exactly when it was asked to be.
    if scalar {
        let contours = contours.unwrap();
        assert_eq!(contours.dimension_values("v", false).unwrap().len(), count);
    }

    let parts = path.split(None, None, None).unwrap();
    assert_eq!(parts.len(), count);
    let arrays = path.split(None, None, Some(OutputFormat::Array)).unwrap();
    for (arr, geom) in arrays.iter().zip(&geoms) {
        assert_eq!(arr.as_array().unwrap().shape(), (geom.len(), 3));
    }

    let flat = Path::builder()
        .vdim("v")
        .store(StoreKind::Flat)
        .build(geoms.clone())
        .unwrap();
    assert_eq!(flat.len(), path.len());
    assert_eq!(
        flat.geometries()[0].len(),
        geoms.iter().map(Geometry::len).sum::<usize>() + count.saturating_sub(1)
    );
    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let u = Unstructured::new(data);
    let _ = arbitrary_contours(u);
});
