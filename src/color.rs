/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::convert::Convert;
use crate::sample::Sample;
use num_traits::AsPrimitive;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// An ordered, fixed-arity tuple of samples representing one pixel.
///
/// The container is inert: it carries no color-model semantics of its own.
/// Which model a `Color<T, 3>` value is in (RGB, XYZ, YCrCb, HSV, HSL, Lab,
/// Luv) is determined entirely by the conversion functor that produced or
/// consumes it.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq)]
pub struct Color<T, const N: usize>([T; N]);

impl<T, const N: usize> Color<T, N> {
    /// Creates a pixel from its explicit channel values.
    #[inline]
    pub const fn new(channels: [T; N]) -> Self {
        Self(channels)
    }
}

impl<T: Copy, const N: usize> Color<T, N> {
    /// Returns the channel values.
    #[inline]
    pub fn channels(self) -> [T; N] {
        self.0
    }
}

impl<T: Copy + Default, const N: usize> Default for Color<T, N> {
    #[inline]
    fn default() -> Self {
        Self([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for Color<T, N> {
    #[inline]
    fn from(channels: [T; N]) -> Self {
        Self(channels)
    }
}

impl<T, const N: usize> Index<usize> for Color<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Color<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Sample, const N: usize> Color<T, N> {
    /// Widens every channel into the compute type, storage scale preserved.
    #[inline]
    pub fn widen(self) -> Color<T::Ext, N> {
        Color(self.0.map(T::widen))
    }
}

/// Compile-time description of a pixel container: its base component type,
/// its extended-precision variant and its channel count.
pub trait ColorComponents {
    type Component: Sample;
    /// Same arity, extended base type; holds the intermediates of one
    /// conversion call and nothing else.
    type Extended;
    const CHANNELS: usize;
}

impl<T: Sample, const N: usize> ColorComponents for Color<T, N> {
    type Component = T;
    type Extended = Color<T::Ext, N>;
    const CHANNELS: usize = N;
}

/// Element-wise storage cast between two colors of the same channel count.
///
/// The cast goes through each type's nominal 0..=1 convention and nothing
/// more: a byte 128 becomes ~0.502f32, not 128.0. Model-specific rescaling
/// (hue halving, percent lightness and the like) is each formula's own
/// responsibility.
#[derive(Debug)]
pub struct DefaultConverter<U> {
    _marker: PhantomData<U>,
}

impl<U> Default for DefaultConverter<U> {
    #[inline]
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, U, const N: usize> Convert<Color<T, N>> for DefaultConverter<U>
where
    T: Sample,
    U: Sample,
    T::Ext: AsPrimitive<U::Ext>,
{
    type Output = Color<U, N>;

    #[inline]
    fn convert(&self, src: Color<T, N>) -> Color<U, N> {
        Color(src.0.map(|v| U::from_unit(v.to_unit().as_())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_access() {
        let mut px = Color::new([10u8, 20, 30]);
        assert_eq!(px[0], 10);
        assert_eq!(px[2], 30);
        px[1] = 99;
        assert_eq!(px.channels(), [10, 99, 30]);
    }

    #[test]
    fn component_lookup() {
        assert_eq!(<Color<u8, 3> as ColorComponents>::CHANNELS, 3);
        assert_eq!(<Color<f32, 4> as ColorComponents>::CHANNELS, 4);
    }

    #[test]
    fn lift_and_narrow() {
        let px = Color::new([0u8, 128, 255]);
        let lifted: Color<f32, 3> = DefaultConverter::<f32>::default().convert(px);
        assert_eq!(lifted[0], 0f32);
        assert!((lifted[1] - 128f32 / 255f32).abs() < 1e-6);
        assert_eq!(lifted[2], 1f32);
        let back: Color<u8, 3> = DefaultConverter::<u8>::default().convert(lifted);
        assert_eq!(back, px);
    }

    #[test]
    fn cast_preserves_arity() {
        let px = Color::new([0.25f32, 0.5]);
        let wide: Color<f64, 2> = DefaultConverter::<f64>::default().convert(px);
        assert!((wide[0] - 0.25f64).abs() < 1e-6);
        assert!((wide[1] - 0.5f64).abs() < 1e-6);
    }
}
