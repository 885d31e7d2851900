#![forbid(unsafe_code)]

//! Easing curves for rendered row positions.
//!
//! [`rubber_band`] softens drag overshoot past a panel's resting edge, and
//! [`ease_out`] shapes the settle tween after a snap. Both are pure and
//! only ever applied to the value handed to a renderer; the authoritative
//! content offset used for open/close decisions is never eased.
//!
//! # Invariants
//!
//! 1. Values inside `[limit, 0]` (negative limit) or `[0, limit]`
//!    (non-negative limit) pass through unchanged.
//! 2. Overshoot is strictly compressed: `|rubber_band(v, l) - l| <= |v - l|`
//!    whenever the overshoot is at least one pixel.
//! 3. The curve is continuous at `limit` and monotonic in `value`.

/// Signature of a normalized easing curve `[0, 1] -> [0, 1]`.
pub type EasingFn = fn(f32) -> f32;

/// Exponent applied to overshoot beyond the panel edge.
pub const RUBBER_BAND_EXPONENT: f32 = 0.85;

/// Soften `value` once it moves past `limit`.
///
/// A negative `limit` bounds leftward travel (right panel engaged); a
/// positive `limit` bounds rightward travel (left panel engaged).
#[must_use]
pub fn rubber_band(value: f32, limit: f32) -> f32 {
    if value < 0.0 && value < limit {
        limit - (limit - value).powf(RUBBER_BAND_EXPONENT)
    } else if value > 0.0 && value > limit {
        limit + (value - limit).powf(RUBBER_BAND_EXPONENT)
    } else {
        value
    }
}

/// Identity curve.
#[inline]
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-out: fast start, gentle landing.
#[inline]
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Interpolate between `from` and `to` at normalized progress `t`.
#[inline]
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn inside_range_passes_through() {
        assert_eq!(rubber_band(-40.0, -100.0), -40.0);
        assert_eq!(rubber_band(60.0, 100.0), 60.0);
        assert_eq!(rubber_band(0.0, -100.0), 0.0);
        assert_eq!(rubber_band(-100.0, -100.0), -100.0);
    }

    #[test]
    fn leftward_overshoot_is_softened() {
        let eased = rubber_band(-150.0, -100.0);
        assert!(approx(eased, -100.0 - 50f32.powf(0.85)));
        assert!(eased > -150.0);
        assert!(eased < -100.0);
    }

    #[test]
    fn rightward_overshoot_is_softened() {
        let eased = rubber_band(180.0, 100.0);
        assert!(approx(eased, 100.0 + 80f32.powf(0.85)));
        assert!(eased < 180.0);
    }

    #[test]
    fn zero_limit_softens_everything() {
        // An empty panel has limit 0, so any travel is overshoot.
        assert!(rubber_band(-30.0, 0.0) > -30.0);
        assert!(rubber_band(30.0, 0.0) < 30.0);
    }

    #[test]
    fn opposite_direction_is_untouched() {
        // Right panel limit with a rightward value: not an overshoot.
        assert_eq!(rubber_band(25.0, -100.0), 25.0);
    }

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
        assert_eq!(ease_out(2.0), 1.0);
        assert_eq!(linear(-1.0), 0.0);
    }

    #[test]
    fn lerp_midpoint() {
        assert!(approx(lerp(-100.0, 0.0, 0.25), -75.0));
    }
}
