/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::Color;
use crate::convert::Convert;
use crate::sample::Sample;
use crate::utils::mlaf;
use num_traits::Float;

/// Linear sRGB to CIE XYZ, D65 white.
pub(crate) const SRGB_TO_XYZ_D65: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// Numeric inverse of [`SRGB_TO_XYZ_D65`]. The coefficients are the fixed
/// reference constants, not re-derived, so round trips agree with the
/// forward matrix to float tolerance.
pub(crate) const XYZ_TO_SRGB_D65: [[f64; 3]; 3] = [
    [3.240479, -1.53715, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057311],
];

#[inline]
pub(crate) fn apply_matrix<F: Sample<Ext = F> + Float>(m: &[[f64; 3]; 3], c: [F; 3]) -> [F; 3] {
    let [a, b, d] = c;
    [
        mlaf(a, F::ext(m[0][0]), mlaf(b, F::ext(m[0][1]), d * F::ext(m[0][2]))),
        mlaf(a, F::ext(m[1][0]), mlaf(b, F::ext(m[1][1]), d * F::ext(m[1][2]))),
        mlaf(a, F::ext(m[2][0]), mlaf(b, F::ext(m[2][1]), d * F::ext(m[2][2]))),
    ]
}

/// Linear 3x3 transform from RGB into CIE XYZ. The input is assumed linear;
/// no gamma step is applied, and the pixel keeps its own storage scale.
#[derive(Debug, Copy, Clone, Default)]
pub struct RgbToXyz;

impl<T: Sample> Convert<Color<T, 3>> for RgbToXyz {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let xyz = apply_matrix(&SRGB_TO_XYZ_D65, src.widen().channels());
        Color::new(xyz.map(T::narrow))
    }
}

/// Linear 3x3 transform from CIE XYZ back into RGB.
#[derive(Debug, Copy, Clone, Default)]
pub struct XyzToRgb;

impl<T: Sample> Convert<Color<T, 3>> for XyzToRgb {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let rgb = apply_matrix(&XYZ_TO_SRGB_D65, src.widen().channels());
        Color::new(rgb.map(T::narrow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_point() {
        let xyz = RgbToXyz.convert(Color::new([1f32, 1f32, 1f32]));
        assert_abs_diff_eq!(xyz[0], 0.950456f32, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz[1], 1f32, epsilon = 1e-4);
        assert_abs_diff_eq!(xyz[2], 1.088754f32, epsilon = 1e-4);
    }

    #[test]
    fn round_trip_xyz() {
        let px = Color::new([0.25f32, 0.5f32, 0.75f32]);
        let rolled_back = XyzToRgb.convert(RgbToXyz.convert(px));
        for i in 0..3 {
            assert_abs_diff_eq!(rolled_back[i], px[i], epsilon = 1e-4);
        }
    }

    #[test]
    fn round_trip_white() {
        let rolled_back = XyzToRgb.convert(RgbToXyz.convert(Color::new([1f32, 1f32, 1f32])));
        for i in 0..3 {
            assert_abs_diff_eq!(rolled_back[i], 1f32, epsilon = 1e-4);
        }
    }

    #[test]
    fn byte_pixels_keep_storage_scale() {
        let xyz = RgbToXyz.convert(Color::new([100u8, 100, 100]));
        // The Y row sums to one, so a neutral pixel keeps its luminance.
        assert_eq!(xyz[1], 100);
        let rolled_back = XyzToRgb.convert(xyz);
        for i in 0..3 {
            let d = rolled_back[i] as i32 - 100;
            // One quantization step on X or Z moves RGB by up to two steps.
            assert!(d.abs() <= 2);
        }
    }
}
