/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::color::{Color, DefaultConverter};
use crate::convert::Convert;
use crate::sample::Sample;
use crate::utils::mlaf;
use crate::xyz::{RgbToXyz, XyzToRgb};
use num_traits::Float;

pub(crate) const LAB_XN: f64 = 0.950456;
pub(crate) const LAB_ZN: f64 = 1.088754;
pub(crate) const LAB_EPS: f64 = 0.008856;
pub(crate) const LAB_KAPPA: f64 = 903.3;

/// Threshold-branched f(t). The cube root must stay an exact 1/3 exponent;
/// an integer-truncated exponent silently turns the branch into f(t) = t.
#[inline]
fn lab_f<F: Sample<Ext = F> + Float>(t: F) -> F {
    if t > F::ext(LAB_EPS) {
        t.cbrt()
    } else {
        mlaf(t, F::ext(7.787), F::ext(16.0 / 116.0))
    }
}

#[inline]
fn lab_f_inv<F: Sample<Ext = F> + Float>(t: F) -> F {
    let t3 = t * t * t;
    if t3 > F::ext(LAB_EPS) {
        t3
    } else {
        (t - F::ext(16.0 / 116.0)) / F::ext(7.787)
    }
}

/// CIE lightness from relative luminance, shared with Luv.
#[inline]
pub(crate) fn lightness<F: Sample<Ext = F> + Float>(y: F) -> F {
    if y > F::ext(LAB_EPS) {
        mlaf(y.cbrt(), F::ext(116.0), F::ext(-16.0))
    } else {
        y * F::ext(LAB_KAPPA)
    }
}

#[inline]
pub(crate) fn lightness_to_y<F: Sample<Ext = F> + Float>(l: F) -> F {
    if l > F::ext(LAB_KAPPA * LAB_EPS) {
        let fy = (l + F::ext(16.0)) / F::ext(116.0);
        fy * fy * fy
    } else {
        l / F::ext(LAB_KAPPA)
    }
}

/// RGB into CIELAB, composed from the 0..=1 lift and [`RgbToXyz`], with
/// X and Z normalized by the D65 reference white. Integer destinations
/// store L on the full scale and bias a/b by the mid-range delta.
#[derive(Debug, Copy, Clone, Default)]
pub struct RgbToLab;

impl<T: Sample> Convert<Color<T, 3>> for RgbToLab {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let tmp = RgbToXyz.convert(DefaultConverter::<T::Ext>::default().convert(src));
        let [x, y, z] = tmp.channels();
        let x = x / T::ext(LAB_XN);
        let z = z / T::ext(LAB_ZN);
        let l = lightness(y);
        let fy = lab_f(y);
        let a = T::ext(500.0) * (lab_f(x) - fy);
        let b = T::ext(200.0) * (fy - lab_f(z));
        Color::new([
            T::narrow(T::encode_percent(l)),
            T::narrow(T::encode_signed(a)),
            T::narrow(T::encode_signed(b)),
        ])
    }
}

/// CIELAB back into RGB, the algebraic inverse of [`RgbToLab`].
#[derive(Debug, Copy, Clone, Default)]
pub struct LabToRgb;

impl<T: Sample> Convert<Color<T, 3>> for LabToRgb {
    type Output = Color<T, 3>;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> Color<T, 3> {
        let l = T::decode_percent(src[0].widen());
        let a = T::decode_signed(src[1].widen());
        let b = T::decode_signed(src[2].widen());
        let y = lightness_to_y(l);
        // Rebuilt through the same branch rule the forward used, so the
        // linear region inverts exactly as well.
        let fy = lab_f(y);
        let x = lab_f_inv(fy + a / T::ext(500.0)) * T::ext(LAB_XN);
        let z = lab_f_inv(fy - b / T::ext(200.0)) * T::ext(LAB_ZN);
        let rgb = XyzToRgb.convert(Color::new([x, y, z]));
        let [r, g, bl] = rgb.channels();
        Color::new([T::from_unit(r), T::from_unit(g), T::from_unit(bl)])
    }
}
