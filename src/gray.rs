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

/// Rec.601 luma, shared with the YCrCb forward conversion.
#[inline]
pub(crate) fn luma<F: Sample<Ext = F> + Float>(r: F, g: F, b: F) -> F {
    mlaf(r, F::ext(0.299), mlaf(g, F::ext(0.587), b * F::ext(0.114)))
}

/// Collapses an RGB pixel into a single luma sample.
#[derive(Debug, Copy, Clone, Default)]
pub struct RgbToGray;

impl<T: Sample> Convert<Color<T, 3>> for RgbToGray {
    type Output = T;

    #[inline]
    fn convert(&self, src: Color<T, 3>) -> T {
        let [r, g, b] = src.widen().channels();
        T::narrow(luma(r, g, b))
    }
}
