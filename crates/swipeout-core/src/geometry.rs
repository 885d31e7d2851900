#![forbid(unsafe_code)]

//! Geometric primitives shared by the gesture and layout layers.
//!
//! All values are logical pixels as `f32`. Deltas are cumulative from the
//! start of a gesture, never per-event increments.

use std::fmt;

/// Cumulative drag displacement since the gesture was granted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    /// Horizontal displacement; negative is leftward.
    pub dx: f32,
    /// Vertical displacement; negative is upward.
    pub dy: f32,
}

impl Delta {
    /// The zero displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create a new delta.
    #[inline]
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Horizontal-only delta.
    #[inline]
    #[must_use]
    pub const fn horizontal(dx: f32) -> Self {
        Self { dx, dy: 0.0 }
    }
}

impl From<(f32, f32)> for Delta {
    fn from((dx, dy): (f32, f32)) -> Self {
        Self { dx, dy }
    }
}

/// Result of measuring the content node: origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Measurement {
    /// Create a measurement.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Measurement at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Width sanitized to a finite, non-negative value.
    #[must_use]
    pub fn usable_width(&self) -> f32 {
        sanitize_extent(self.width)
    }

    /// Height sanitized to a finite, non-negative value.
    #[must_use]
    pub fn usable_height(&self) -> f32 {
        sanitize_extent(self.height)
    }
}

/// Clamp an extent to `[0, +inf)`, mapping NaN and infinities to zero.
#[inline]
#[must_use]
pub fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the two panel sides of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign of the content offset that reveals this side's panel.
    ///
    /// The left panel is revealed by shifting content right (positive).
    #[must_use]
    pub const fn reveal_sign(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }

    /// Lowercase name, as passed to open/close notifications.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
