/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
//! Per-pixel color model conversions generic over the sample storage type.
//!
//! One stateless functor exists per directional model pair (RGB, XYZ,
//! YCrCb, HSV, HSL, Lab, Luv), each a pure function from one [`Color`]
//! value to another. Arithmetic runs in a wider compute type selected at
//! compile time by the [`Sample`] trait and narrows back only at the
//! return boundary. There is no image container here and no execution
//! policy: callers iterate pixels however they like, including from many
//! threads at once.
//!
//! Model conversions exist only for three-channel colors; a two-channel
//! instantiation is rejected when the program is built:
//!
//! ```compile_fail
//! use colormodels_rs::{Color, Convert, RgbToHsv};
//!
//! let px = Color::new([0.5f32, 0.5]);
//! let _ = RgbToHsv.convert(px);
//! ```

mod color;
mod convert;
mod gray;
mod hsl;
mod hsv;
mod lab;
mod luv;
mod sample;
mod utils;
mod xyz;
mod ycrcb;

pub use color::Color;
pub use color::ColorComponents;
pub use color::DefaultConverter;
pub use convert::convert_slice;
pub use convert::Convert;
pub use gray::RgbToGray;
pub use hsl::HslToRgb;
pub use hsl::RgbToHsl;
pub use hsv::HsvToRgb;
pub use hsv::RgbToHsv;
pub use lab::LabToRgb;
pub use lab::RgbToLab;
pub use luv::LuvToRgb;
pub use luv::RgbToLuv;
pub use sample::Sample;
pub use xyz::RgbToXyz;
pub use xyz::XyzToRgb;
pub use ycrcb::RgbToYCrCb;
pub use ycrcb::YCrCbToRgb;
