/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use num_traits::Float;

#[inline]
pub(crate) fn mlaf<F: Float>(x: F, y: F, z: F) -> F {
    x.mul_add(y, z)
}
