/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::{Color, DefaultConverter};
use crate::convert::Convert;
use crate::sample::Sample;
use num_traits::Float;

/// Reconstructs the channel triple around the dominant channel from the
/// stored hue. The 120-degree windows around 0/120/240 pick which channel
/// held the maximum; the remaining pair comes from the signed difference
/// H*S/60 the forward branches encoded.
#[inline]
pub(crate) fn hue_sector<F: Sample<Ext = F> + Float>(h: F, s: F, vmax: F, vmin: F) -> [F; 3] {
    let zero = F::ext(0.0);
    let sixty = F::ext(60.0);
    if h < sixty || h >= F::ext(300.0) {
        let base = if h >= F::ext(300.0) {
            h - F::ext(360.0)
        } else {
            h
        };
        let d = base * s / sixty; // d = G - B
        if d >= zero {
            [vmax, vmin + d, vmin]
        } else {
            [vmax, vmin, vmin - d]
        }
    } else if h < F::ext(180.0) {
        let d = (h - F::ext(120.0)) * s / sixty; // d = B - R
        if d >= zero {
            [vmin, vmax, vmin + d]
        } else {
            [vmin - d, vmax, vmin]
        }
    } else {
        let d = (h - F::ext(240.0)) * s / sixty; // d = R - G
        if d >= zero {
            [vmin + d, vmin, vmax]
        } else {
            [vmin, vmin - d, vmax]
        }
    }
}

/// RGB into HSV. Computed on a 0..=1 extended copy of the pixel, then
/// encoded into the destination convention (H/2, S*255, V*255 for bytes;
/// untouched for floats). Achromatic pixels yield S = 0 and H = 0 rather
/// than a division by zero.
#[derive(Debug, Copy, Clone, Default)]
pub struct RgbToHsv;

impl<T: Sample> Convert<Color<T, 3>> for RgbToHsv {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let tmp: Color<T::Ext, 3> = DefaultConverter::<T::Ext>::default().convert(src);
        let [r, g, b] = tmp.channels();
        let zero = T::ext(0.0);
        let sixty = T::ext(60.0);
        let v = r.max(g).max(b);
        let vmin = r.min(g).min(b);
        let s = if v != zero { (v - vmin) / v } else { zero };
        let mut h = if s == zero {
            zero
        } else if v == r {
            (g - b) * sixty / s
        } else if v == g {
            T::ext(120.0) + (b - r) * sixty / s
        } else {
            T::ext(240.0) + (r - g) * sixty / s
        };
        if h < zero {
            h = h + T::ext(360.0);
        }
        Color::new([
            T::narrow(T::encode_hue(h)),
            T::from_unit(s),
            T::from_unit(v),
        ])
    }
}

/// HSV back into RGB, the algebraic inverse of [`RgbToHsv`] including its
/// hue denominator convention. S = 0 ignores H and yields the neutral
/// pixel R = G = B = V.
#[derive(Debug, Copy, Clone, Default)]
pub struct HsvToRgb;

impl<T: Sample> Convert<Color<T, 3>> for HsvToRgb {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let h = T::decode_hue(src[0].widen());
        let s = src[1].to_unit();
        let v = src[2].to_unit();
        let zero = T::ext(0.0);
        if s == zero {
            let neutral = T::from_unit(v);
            return Color::new([neutral, neutral, neutral]);
        }
        let vmin = v * (T::ext(1.0) - s);
        let [r, g, b] = hue_sector(h, s, v, vmin);
        Color::new([T::from_unit(r), T::from_unit(g), T::from_unit(b)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_red() {
        let hsv = RgbToHsv.convert(Color::new([1f32, 0f32, 0f32]));
        assert_eq!(hsv.channels(), [0f32, 1f32, 1f32]);
    }

    #[test]
    fn achromatic_has_no_nan() {
        let hsv = RgbToHsv.convert(Color::new([0.5f32, 0.5, 0.5]));
        assert_eq!(hsv[0], 0f32);
        assert_eq!(hsv[1], 0f32);
        assert!((hsv[2] - 0.5f32).abs() < 1e-6);
        let black = RgbToHsv.convert(Color::new([0f32, 0f32, 0f32]));
        assert_eq!(black.channels(), [0f32, 0f32, 0f32]);
    }

    #[test]
    fn byte_encoding() {
        // Saturated primaries survive the H/2, S*255, V*255 convention.
        let red = RgbToHsv.convert(Color::new([255u8, 0, 0]));
        assert_eq!(red.channels(), [0, 255, 255]);
        let green = RgbToHsv.convert(Color::new([0u8, 255, 0]));
        assert_eq!(green.channels(), [60, 255, 255]);
        let blue = RgbToHsv.convert(Color::new([0u8, 0, 255]));
        assert_eq!(blue.channels(), [120, 255, 255]);
    }

    #[test]
    fn hue_wraps_positive() {
        // Magenta-ish pixel: R is max and B > G drives the branch negative.
        let hsv = RgbToHsv.convert(Color::new([1f32, 0f32, 1f32]));
        assert!(hsv[0] >= 300f32 && hsv[0] < 360f32);
    }

    #[test]
    fn forward_ranges() {
        let mut k = 0u32;
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let px = Color::new([r as f32 / 10.0, g as f32 / 10.0, b as f32 / 10.0]);
                    let hsv = RgbToHsv.convert(px);
                    assert!((0f32..=360f32).contains(&hsv[0]));
                    assert!((0f32..=1f32).contains(&hsv[1]));
                    assert!((0f32..=1f32).contains(&hsv[2]));
                    k += 1;
                }
            }
        }
        assert_eq!(k, 11 * 11 * 11);
    }

    #[test]
    fn round_trip_hsv() {
        for px in [
            Color::new([0.5f32, 0.25, 0.0]),
            Color::new([0.1f32, 0.8, 0.4]),
            Color::new([0.9f32, 0.9, 0.1]),
            Color::new([0.0f32, 0.0, 1.0]),
        ] {
            let rolled_back = HsvToRgb.convert(RgbToHsv.convert(px));
            for i in 0..3 {
                assert!((rolled_back[i] - px[i]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn inverse_ignores_hue_when_gray() {
        let px = HsvToRgb.convert(Color::new([213f32, 0f32, 0.7f32]));
        for i in 0..3 {
            assert!((px[i] - 0.7f32).abs() < 1e-6);
        }
    }
}
