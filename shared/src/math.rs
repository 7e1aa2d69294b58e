//! Math types for the render-state binder
//!
//! Provides POD (Plain Old Data) color storage that is serializable and can be
//! handed to uniform uploads as a flat `[f32; 4]` without conversion.

use std::ops::Div;

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Linear RGBA color (POD type)
///
/// Memory layout (16 bytes): `[r, g, b, a]`, matching a GLSL `vec4`.
/// Serialized as a plain `[r, g, b, a]` array.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
#[repr(C)]
pub struct Color {
    rgba: [f32; 4],
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            rgba: [red, green, blue, alpha],
        }
    }

    /// Opaque color from RGB components
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub fn red(&self) -> f32 {
        self.rgba[0]
    }

    pub fn green(&self) -> f32 {
        self.rgba[1]
    }

    pub fn blue(&self) -> f32 {
        self.rgba[2]
    }

    pub fn alpha(&self) -> f32 {
        self.rgba[3]
    }

    /// Flat component slice for GPU upload
    pub fn data(&self) -> &[f32; 4] {
        &self.rgba
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::from_array(self.rgba)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from(rgba: [f32; 4]) -> Self {
        Self { rgba }
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.rgba
    }
}

impl From<Vec4> for Color {
    fn from(value: Vec4) -> Self {
        Self {
            rgba: value.to_array(),
        }
    }
}

impl Div<f32> for Color {
    type Output = Color;

    /// Division by zero leaves the color unchanged.
    fn div(self, rhs: f32) -> Color {
        Color::from(safe_div(self.to_vec4(), rhs))
    }
}

/// Component-wise division that is a no-op when `divisor` is zero.
#[inline]
pub fn safe_div(value: Vec4, divisor: f32) -> Vec4 {
    if divisor != 0.0 { value / divisor } else { value }
}
