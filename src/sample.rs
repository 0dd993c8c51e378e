/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use half::f16;
use num_traits::{AsPrimitive, Float};
use std::fmt::Debug;

/// A single channel value in its storage representation.
///
/// Every conversion computes in the wider [`Sample::Ext`] type and narrows
/// back only at the return boundary, so intermediate matrix products and
/// cube roots never truncate. Which `Ext` is used, and every per-type
/// constant below, is resolved at compile time; an unsupported sample type
/// is a build failure, not a runtime error.
pub trait Sample: Copy + Default + Debug + PartialOrd + Send + Sync + 'static {
    /// Extended compute type, wide enough to hold channel values scaled by
    /// coefficients up to ~1.4x before the final narrowing cast.
    type Ext: Float + Sample<Ext = Self::Ext> + AsPrimitive<Self::Ext>;

    /// Full-scale sample value: 255 for u8, 65535 for u16, 1.0 for floats.
    fn opaque() -> Self::Ext;

    /// Neutral-chroma mid-range constant: 128 for u8, 32768 for u16,
    /// 0.5 for floats. The delta offset of chroma-difference models.
    fn chroma_mid() -> Self::Ext;

    /// Lifts a formula constant into the compute type.
    fn ext(v: f64) -> Self::Ext;

    /// Plain widening cast, storage scale preserved.
    fn widen(self) -> Self::Ext;

    /// Casts back into storage, saturating to the representable range and
    /// rounding for integer samples.
    fn narrow(v: Self::Ext) -> Self;

    /// Widens and rescales into the nominal 0..=1 range.
    #[inline]
    fn to_unit(self) -> Self::Ext {
        self.widen() / Self::opaque()
    }

    /// Rescales a 0..=1 quantity back into storage and narrows.
    #[inline]
    fn from_unit(v: Self::Ext) -> Self {
        Self::narrow(v * Self::opaque())
    }

    /// Maps a hue in degrees (0..=360) into this type's storage convention.
    #[inline]
    fn encode_hue(h: Self::Ext) -> Self::Ext {
        h
    }

    /// Inverse of [`Sample::encode_hue`].
    #[inline]
    fn decode_hue(h: Self::Ext) -> Self::Ext {
        h
    }

    /// Maps a 0..=100 lightness into this type's storage convention.
    #[inline]
    fn encode_percent(l: Self::Ext) -> Self::Ext {
        l
    }

    /// Inverse of [`Sample::encode_percent`].
    #[inline]
    fn decode_percent(l: Self::Ext) -> Self::Ext {
        l
    }

    /// Biases a signed chroma-plane value (Lab a/b) into storage.
    #[inline]
    fn encode_signed(v: Self::Ext) -> Self::Ext {
        v
    }

    /// Inverse of [`Sample::encode_signed`].
    #[inline]
    fn decode_signed(v: Self::Ext) -> Self::Ext {
        v
    }

    /// Maps a signed value covering `lo..=lo + span` onto the full storage
    /// range (Luv u/v planes).
    #[inline]
    fn encode_span(v: Self::Ext, _lo: Self::Ext, _span: Self::Ext) -> Self::Ext {
        v
    }

    /// Inverse of [`Sample::encode_span`].
    #[inline]
    fn decode_span(v: Self::Ext, _lo: Self::Ext, _span: Self::Ext) -> Self::Ext {
        v
    }
}

impl Sample for u8 {
    type Ext = f32;

    #[inline]
    fn opaque() -> f32 {
        255f32
    }

    #[inline]
    fn chroma_mid() -> f32 {
        128f32
    }

    #[inline]
    fn ext(v: f64) -> f32 {
        v as f32
    }

    #[inline]
    fn widen(self) -> f32 {
        self as f32
    }

    #[inline]
    #[allow(clippy::manual_clamp)]
    fn narrow(v: f32) -> u8 {
        v.max(0f32).round().min(255f32) as u8
    }

    // H in 0..=360 is halved to fit the byte range.
    #[inline]
    fn encode_hue(h: f32) -> f32 {
        h * 0.5f32
    }

    #[inline]
    fn decode_hue(h: f32) -> f32 {
        h * 2f32
    }

    #[inline]
    fn encode_percent(l: f32) -> f32 {
        l * (255f32 / 100f32)
    }

    #[inline]
    fn decode_percent(l: f32) -> f32 {
        l * (100f32 / 255f32)
    }

    #[inline]
    fn encode_signed(v: f32) -> f32 {
        v + 128f32
    }

    #[inline]
    fn decode_signed(v: f32) -> f32 {
        v - 128f32
    }

    #[inline]
    fn encode_span(v: f32, lo: f32, span: f32) -> f32 {
        (v - lo) * 255f32 / span
    }

    #[inline]
    fn decode_span(v: f32, lo: f32, span: f32) -> f32 {
        v * span / 255f32 + lo
    }
}

impl Sample for u16 {
    type Ext = f32;

    #[inline]
    fn opaque() -> f32 {
        65535f32
    }

    #[inline]
    fn chroma_mid() -> f32 {
        32768f32
    }

    #[inline]
    fn ext(v: f64) -> f32 {
        v as f32
    }

    #[inline]
    fn widen(self) -> f32 {
        self as f32
    }

    #[inline]
    #[allow(clippy::manual_clamp)]
    fn narrow(v: f32) -> u16 {
        v.max(0f32).round().min(65535f32) as u16
    }

    // Hue in degrees already fits 16 bits and stays unscaled.

    #[inline]
    fn encode_percent(l: f32) -> f32 {
        l * (65535f32 / 100f32)
    }

    #[inline]
    fn decode_percent(l: f32) -> f32 {
        l * (100f32 / 65535f32)
    }

    #[inline]
    fn encode_signed(v: f32) -> f32 {
        v + 32768f32
    }

    #[inline]
    fn decode_signed(v: f32) -> f32 {
        v - 32768f32
    }

    #[inline]
    fn encode_span(v: f32, lo: f32, span: f32) -> f32 {
        (v - lo) * 65535f32 / span
    }

    #[inline]
    fn decode_span(v: f32, lo: f32, span: f32) -> f32 {
        v * span / 65535f32 + lo
    }
}

impl Sample for f16 {
    type Ext = f32;

    #[inline]
    fn opaque() -> f32 {
        1f32
    }

    #[inline]
    fn chroma_mid() -> f32 {
        0.5f32
    }

    #[inline]
    fn ext(v: f64) -> f32 {
        v as f32
    }

    #[inline]
    fn widen(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn narrow(v: f32) -> f16 {
        f16::from_f32(v)
    }
}

impl Sample for f32 {
    type Ext = f32;

    #[inline]
    fn opaque() -> f32 {
        1f32
    }

    #[inline]
    fn chroma_mid() -> f32 {
        0.5f32
    }

    #[inline]
    fn ext(v: f64) -> f32 {
        v as f32
    }

    #[inline]
    fn widen(self) -> f32 {
        self
    }

    #[inline]
    fn narrow(v: f32) -> f32 {
        v
    }
}

impl Sample for f64 {
    type Ext = f64;

    #[inline]
    fn opaque() -> f64 {
        1f64
    }

    #[inline]
    fn chroma_mid() -> f64 {
        0.5f64
    }

    #[inline]
    fn ext(v: f64) -> f64 {
        v
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(v: f64) -> f64 {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chroma_mid_per_type() {
        assert_eq!(<u8 as Sample>::chroma_mid(), 128f32);
        assert_eq!(<u16 as Sample>::chroma_mid(), 32768f32);
        assert_eq!(<f16 as Sample>::chroma_mid(), 0.5f32);
        assert_eq!(<f32 as Sample>::chroma_mid(), 0.5f32);
        assert_eq!(<f64 as Sample>::chroma_mid(), 0.5f64);
    }

    #[test]
    fn narrow_saturates_and_rounds() {
        assert_eq!(u8::narrow(-3f32), 0u8);
        assert_eq!(u8::narrow(310f32), 255u8);
        assert_eq!(u8::narrow(127.5f32), 128u8);
        assert_eq!(u16::narrow(70000f32), 65535u16);
    }

    #[test]
    fn unit_round_trip() {
        for v in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(u8::from_unit(v.to_unit()), v);
        }
        assert_eq!(f32::from_unit(0.25f32.to_unit()), 0.25f32);
    }

    #[test]
    fn byte_hue_halved() {
        assert_eq!(u8::encode_hue(360f32), 180f32);
        assert_eq!(u8::decode_hue(u8::encode_hue(240f32)), 240f32);
        assert_eq!(u16::encode_hue(240f32), 240f32);
    }

    #[test]
    fn signed_and_span_encodings() {
        assert_eq!(u8::encode_signed(0f32), 128f32);
        assert_eq!(u8::decode_signed(u8::encode_signed(-27f32)), -27f32);
        let lo = -134f32;
        let span = 354f32;
        assert_eq!(u8::encode_span(lo, lo, span), 0f32);
        assert_eq!(u8::encode_span(lo + span, lo, span), 255f32);
        let v = u8::encode_span(12f32, lo, span);
        assert!((u8::decode_span(v, lo, span) - 12f32).abs() < 1e-4);
    }
}
