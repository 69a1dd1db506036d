//! Perceptual color comparisons
//!
//! Each function is a total order suitable for `slice::sort_by`.

#![allow(clippy::trivially_copy_pass_by_ref)]

use std::cmp::Ordering;

use super::Color;

/// Order by HSL lightness
#[must_use]
pub fn brightness(x: &Color, y: &Color) -> Ordering {
    x.brightness().total_cmp(&y.brightness())
}

/// Order by HSL hue angle
#[must_use]
pub fn hue(x: &Color, y: &Color) -> Ordering {
    x.hue().total_cmp(&y.hue())
}

/// Order by the packed `0xRRGGBB` value (alpha is ignored)
#[must_use]
pub fn value(x: &Color, y: &Color) -> Ordering {
    x.to_rgb().cmp(&y.to_rgb())
}
