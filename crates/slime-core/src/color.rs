//! Four-channel floating-point trail intensity.
//!
//! Channels are unbounded non-negative values: deposition adds without
//! clamping and only decay scales them back down.

use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const ZERO:  Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scalar weight sensed by agents: the sum of the color channels.
    /// Alpha does not contribute.
    #[inline]
    pub fn weight(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        self + (other - self) * t
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Rgba::ZERO
    }
}

impl Add for Rgba {
    type Output = Rgba;
    #[inline]
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl AddAssign for Rgba {
    #[inline]
    fn add_assign(&mut self, rhs: Rgba) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}

impl Sub for Rgba {
    type Output = Rgba;
    #[inline]
    fn sub(self, rhs: Rgba) -> Rgba {
        Rgba::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b, self.a - rhs.a)
    }
}

impl Mul<f32> for Rgba {
    type Output = Rgba;
    #[inline]
    fn mul(self, rhs: f32) -> Rgba {
        Rgba::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
