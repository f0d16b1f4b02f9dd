//! Edge map combination.

use crate::error::{DeglareError, DeglareResult};
use crate::types::EdgeMap;
use image::Luma;

/// Element-wise maximum across several same-size edge maps.
///
/// The result at every cell is the maximum strength any input reports there;
/// input order does not matter. Fails with
/// [`DeglareError::DimensionMismatch`] if any map disagrees in size with the
/// first one.
///
/// # Panics
///
/// Panics if `maps` is empty.
pub fn max_reduce(maps: &[EdgeMap]) -> DeglareResult<EdgeMap> {
    let first = maps.first().expect("max_reduce requires at least one map");
    let (w, h) = first.dimensions();

    for map in &maps[1..] {
        if map.dimensions() != (w, h) {
            return Err(DeglareError::DimensionMismatch {
                expected: (w, h),
                got: map.dimensions(),
            });
        }
    }

    let mut out = first.clone();
    for map in &maps[1..] {
        for (out_px, px) in out.pixels_mut().zip(map.pixels()) {
            if px[0] > out_px[0] {
                *out_px = Luma([px[0]]);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_from(values: &[f32], w: u32, h: u32) -> EdgeMap {
        EdgeMap::from_raw(w, h, values.to_vec()).unwrap()
    }

    #[test]
    fn test_cellwise_maximum() {
        let a = map_from(&[0.1, 0.9, 0.5, 0.0], 2, 2);
        let b = map_from(&[0.3, 0.2, 0.5, 1.0], 2, 2);
        let c = map_from(&[0.0, 0.0, 0.7, 0.4], 2, 2);

        let combined = max_reduce(&[a, b, c]).unwrap();
        assert_eq!(combined.as_raw(), &[0.3, 0.9, 0.7, 1.0]);
    }

    #[test]
    fn test_invariant_to_input_order() {
        let a = map_from(&[0.1, 0.9, 0.5, 0.0], 2, 2);
        let b = map_from(&[0.3, 0.2, 0.5, 1.0], 2, 2);
        let c = map_from(&[0.0, 0.0, 0.7, 0.4], 2, 2);

        let forward = max_reduce(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let reversed = max_reduce(&[c, b, a]).unwrap();
        assert_eq!(forward.as_raw(), reversed.as_raw());
    }

    #[test]
    fn test_single_map_passes_through() {
        let a = map_from(&[0.2, 0.4, 0.6, 0.8], 2, 2);
        let combined = max_reduce(&[a.clone()]).unwrap();
        assert_eq!(combined.as_raw(), a.as_raw());
    }

    #[test]
    fn test_dimension_mismatch_is_an_error() {
        let a = EdgeMap::new(4, 4);
        let b = EdgeMap::new(4, 3);
        match max_reduce(&[a, b]) {
            Err(DeglareError::DimensionMismatch { expected, got }) => {
                assert_eq!(expected, (4, 4));
                assert_eq!(got, (4, 3));
            }
            other => panic!("expected DimensionMismatch, got {:?}", other.map(|_| ())),
        }
    }
}
