/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::{Color, DefaultConverter};
use crate::convert::Convert;
use crate::hsv::hue_sector;
use crate::sample::Sample;
use num_traits::Float;

/// RGB into HSL on a 0..=1 extended copy, encoded like HSV into the
/// destination convention. Saturation branches on whether L sits below the
/// mid-point; max == min (achromatic) short-circuits to S = 0, H = 0, which
/// also covers both zero denominators.
#[derive(Debug, Copy, Clone, Default)]
pub struct RgbToHsl;

impl<T: Sample> Convert<Color<T, 3>> for RgbToHsl {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let tmp: Color<T::Ext, 3> = DefaultConverter::<T::Ext>::default().convert(src);
        let [r, g, b] = tmp.channels();
        let zero = T::ext(0.0);
        let two = T::ext(2.0);
        let sixty = T::ext(60.0);
        let vmax = r.max(g).max(b);
        let vmin = r.min(g).min(b);
        let l = (vmax + vmin) / two;
        let (s, h);
        if vmax == vmin {
            s = zero;
            h = zero;
        } else {
            s = if l < T::ext(0.5) {
                (vmax - vmin) / (vmax + vmin)
            } else {
                (vmax - vmin) / (two - (vmax + vmin))
            };
            let mut hh = if vmax == r {
                (g - b) * sixty / s
            } else if vmax == g {
                T::ext(120.0) + (b - r) * sixty / s
            } else {
                T::ext(240.0) + (r - g) * sixty / s
            };
            if hh < zero {
                hh = hh + T::ext(360.0);
            }
            h = hh;
        }
        Color::new([
            T::narrow(T::encode_hue(h)),
            T::from_unit(s),
            T::from_unit(l),
        ])
    }
}

/// HSL back into RGB, the algebraic inverse of [`RgbToHsl`]. S = 0 ignores
/// H and yields R = G = B = L.
#[derive(Debug, Copy, Clone, Default)]
pub struct HslToRgb;

impl<T: Sample> Convert<Color<T, 3>> for HslToRgb {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let h = T::decode_hue(src[0].widen());
        let s = src[1].to_unit();
        let l = src[2].to_unit();
        let zero = T::ext(0.0);
        if s == zero {
            let neutral = T::from_unit(l);
            return Color::new([neutral, neutral, neutral]);
        }
        let two = T::ext(2.0);
        let sum = two * l;
        let span = if l < T::ext(0.5) {
            s * sum
        } else {
            s * (two - sum)
        };
        let vmax = l + span / two;
        let vmin = l - span / two;
        let [r, g, b] = hue_sector(h, s, vmax, vmin);
        Color::new([T::from_unit(r), T::from_unit(g), T::from_unit(b)])
    }
}
