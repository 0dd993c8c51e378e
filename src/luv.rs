/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::{Color, DefaultConverter};
use crate::convert::Convert;
use crate::lab::{lightness, lightness_to_y};
use crate::sample::Sample;
use crate::utils::mlaf;
use crate::xyz::{RgbToXyz, XyzToRgb};
use num_traits::Float;

/// D65 white-point chromaticities of the reference matrix.
pub(crate) const LUV_WHITE_U_PRIME: f64 = 0.19793943;
pub(crate) const LUV_WHITE_V_PRIME: f64 = 0.46831096;

// Integer destinations map these windows onto the full storage range.
const LUV_U_LO: f64 = -134.0;
const LUV_U_SPAN: f64 = 354.0;
const LUV_V_LO: f64 = -140.0;
const LUV_V_SPAN: f64 = 256.0;

/// RGB into CIELUV, composed from the 0..=1 lift and [`RgbToXyz`].
/// The chromaticity denominator X + 15Y + 3Z is exactly zero for black,
/// which collapses u and v to zero instead of dividing.
#[derive(Debug, Copy, Clone, Default)]
pub struct RgbToLuv;

impl<T: Sample> Convert<Color<T, 3>> for RgbToLuv {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let tmp = RgbToXyz.convert(DefaultConverter::<T::Ext>::default().convert(src));
        let [x, y, z] = tmp.channels();
        let zero = T::ext(0.0);
        let l = lightness(y);
        let den = mlaf(y, T::ext(15.0), mlaf(z, T::ext(3.0), x));
        let (u, v);
        if den != zero {
            let u_prime = T::ext(4.0) * x / den;
            let v_prime = T::ext(9.0) * y / den;
            let l13 = T::ext(13.0) * l;
            u = l13 * (u_prime - T::ext(LUV_WHITE_U_PRIME));
            v = l13 * (v_prime - T::ext(LUV_WHITE_V_PRIME));
        } else {
            u = zero;
            v = zero;
        }
        Color::new([
            T::narrow(T::encode_percent(l)),
            T::narrow(T::encode_span(u, T::ext(LUV_U_LO), T::ext(LUV_U_SPAN))),
            T::narrow(T::encode_span(v, T::ext(LUV_V_LO), T::ext(LUV_V_SPAN))),
        ])
    }
}

/// CIELUV back into RGB, the algebraic inverse of [`RgbToLuv`]. L <= 0 is
/// black; v' can only vanish alongside Y, so that branch also returns
/// zero chroma instead of dividing.
#[derive(Debug, Copy, Clone, Default)]
pub struct LuvToRgb;

impl<T: Sample> Convert<Color<T, 3>> for LuvToRgb {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let l = T::decode_percent(src[0].widen());
        let u = T::decode_span(src[1].widen(), T::ext(LUV_U_LO), T::ext(LUV_U_SPAN));
        let v = T::decode_span(src[2].widen(), T::ext(LUV_V_LO), T::ext(LUV_V_SPAN));
        let zero = T::ext(0.0);
        if l <= zero {
            let black = T::from_unit(zero);
            return Color::new([black, black, black]);
        }
        let l13 = (T::ext(13.0) * l).recip();
        let u_prime = mlaf(u, l13, T::ext(LUV_WHITE_U_PRIME));
        let v_prime = mlaf(v, l13, T::ext(LUV_WHITE_V_PRIME));
        let y = lightness_to_y(l);
        let (x, z);
        if v_prime != zero {
            let quarter = (T::ext(4.0) * v_prime).recip();
            x = y * T::ext(9.0) * u_prime * quarter;
            z = y * (T::ext(12.0) - T::ext(3.0) * u_prime - T::ext(20.0) * v_prime) * quarter;
        } else {
            x = zero;
            z = zero;
        }
        let rgb = XyzToRgb.convert(Color::new([x, y, z]));
        let [r, g, b] = rgb.channels();
        Color::new([T::from_unit(r), T::from_unit(g), T::from_unit(b)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn black_has_no_nan() {
        let luv = RgbToLuv.convert(Color::new([0f32, 0f32, 0f32]));
        assert_eq!(luv.channels(), [0f32, 0f32, 0f32]);
        let rolled_back = LuvToRgb.convert(luv);
        assert_eq!(rolled_back.channels(), [0f32, 0f32, 0f32]);
    }

    #[test]
    fn white_is_achromatic() {
        let luv = RgbToLuv.convert(Color::new([1f32, 1f32, 1f32]));
        assert!((luv[0] - 100f32).abs() < 1e-2);
        // The reference un/vn sit a hair off this matrix's white, so u and v
        // land near zero rather than exactly on it.
        assert!(luv[1].abs() < 0.2f32);
        assert!(luv[2].abs() < 0.1f32);
    }

    #[test]
    fn round_trip_luv() {
        for px in [
            Color::new([0.1f32, 0.2, 0.3]),
            Color::new([0.8f32, 0.4, 0.2]),
            Color::new([0.3f32, 0.9, 0.5]),
        ] {
            let rolled_back = LuvToRgb.convert(RgbToLuv.convert(px));
            for i in 0..3 {
                assert_abs_diff_eq!(rolled_back[i], px[i], epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn byte_encoding_window() {
        // A saturated red lands inside the byte windows without clipping.
        let luv = RgbToLuv.convert(Color::new([255u8, 0, 0]));
        assert!(luv[1] > 128);
        assert!(luv[2] > 128);
    }
}
