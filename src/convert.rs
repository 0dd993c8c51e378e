/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */

/// A pure per-pixel conversion between two color encodings.
///
/// Implementors are stateless unit structs: they own no data, never mutate
/// their input and hold no shared state, so a single functor value may be
/// applied to independent pixels from any number of threads without
/// coordination. Model identity lives in the functor, not in the pixel:
/// the same `Color<T, 3>` container carries RGB, XYZ, HSV and the rest.
pub trait Convert<Src> {
    type Output;

    /// Converts one pixel value into the destination model.
    fn convert(&self, src: Src) -> Self::Output;
}

/// Maps a conversion over a pixel buffer.
///
/// No assumption is made about where the pixels came from or in what order
/// they are laid out; this is the per-pixel seam that filter and pyramid
/// stages iterate through.
///
/// # Panics
/// Panics if `src` and `dst` differ in length.
pub fn convert_slice<F, Src>(functor: &F, src: &[Src], dst: &mut [F::Output])
where
    F: Convert<Src>,
    Src: Copy,
{
    assert_eq!(
        src.len(),
        dst.len(),
        "source and destination pixel counts must match"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = functor.convert(*s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::gray::RgbToGray;

    #[test]
    fn slice_mapping() {
        let src = [
            Color::new([255u8, 255, 255]),
            Color::new([0u8, 0, 0]),
            Color::new([255u8, 0, 0]),
        ];
        let mut dst = [0u8; 3];
        convert_slice(&RgbToGray, &src, &mut dst);
        assert_eq!(dst[0], 255);
        assert_eq!(dst[1], 0);
        assert_eq!(dst[2], 76);
    }
}
