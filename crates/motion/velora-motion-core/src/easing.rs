//! Easing curves as cubic-bezier timing.
//!
//! Named presets cover the eases the source pages use. Evaluation inverts the
//! x-bezier by bisection, then evaluates the y-bezier at the found parameter.

use serde::{Deserialize, Serialize};

/// Named easing presets with their cubic-bezier control points (x1, y1, x2, y2).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    Power2In,
    #[default]
    Power2Out,
    Power2InOut,
    Power3Out,
}

impl Ease {
    #[inline]
    fn control_points(self) -> [f32; 4] {
        match self {
            Ease::Linear => [0.0, 0.0, 1.0, 1.0],
            Ease::Power2In => [0.55, 0.055, 0.675, 0.19],
            Ease::Power2Out => [0.215, 0.61, 0.355, 1.0],
            Ease::Power2InOut => [0.645, 0.045, 0.355, 1.0],
            Ease::Power3Out => [0.165, 0.84, 0.44, 1.0],
        }
    }

    /// Eased progress for t in [0,1].
    #[inline]
    pub fn eval(self, t: f32) -> f32 {
        let [x1, y1, x2, y2] = self.control_points();
        bezier_ease_t(t, x1, y1, x2, y2)
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 in [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for ease in [
            Ease::Linear,
            Ease::Power2In,
            Ease::Power2Out,
            Ease::Power2InOut,
            Ease::Power3Out,
        ] {
            assert!(ease.eval(0.0).abs() < 1e-4, "{ease:?} start");
            assert!((ease.eval(1.0) - 1.0).abs() < 1e-4, "{ease:?} end");
        }
    }

    #[test]
    fn linear_is_identity() {
        assert!((Ease::Linear.eval(0.37) - 0.37).abs() < 1e-6);
    }

    #[test]
    fn out_eases_lead_linear() {
        // Ease-out curves are ahead of linear at the midpoint.
        assert!(Ease::Power2Out.eval(0.5) > 0.5);
        assert!(Ease::Power3Out.eval(0.5) > Ease::Power2Out.eval(0.5));
        // Ease-in lags.
        assert!(Ease::Power2In.eval(0.5) < 0.5);
    }

    #[test]
    fn monotonic_non_decreasing() {
        for ease in [Ease::Power2Out, Ease::Power2InOut, Ease::Power2In] {
            let mut prev = 0.0f32;
            for i in 0..=100 {
                let v = ease.eval(i as f32 / 100.0);
                assert!(v >= prev - 1e-4, "{ease:?} dipped at {i}");
                prev = v;
            }
        }
    }
}
