//! L4 Atomic Layer: Easing curves for slide transitions
//!
//! Maps progress in [0, 1] to eased progress in [0, 1].

pub use folio_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing curve to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => power_ease_out(t, 3),
            EasingType::Quintic => power_ease_out(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Smooth => SLIDE_CURVE.sample(t),
        }
    }
}

/// The gallery's slide curve
const SLIDE_CURVE: CubicBezier = CubicBezier::new(0.22, 0.68, 0.0, 1.0);

/// f(t) = 1 - (1-t)^n
#[inline]
fn power_ease_out(t: f64, n: i32) -> f64 {
    1.0 - (1.0 - t).powi(n)
}

/// f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// CSS-style cubic Bézier timing function through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// One coordinate of the curve at parameter `s`
    fn component(s: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn component_slope(s: f64, p1: f64, p2: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Eased value for time fraction `t`
    pub fn sample(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        // Newton-Raphson for the parameter whose x equals t
        let mut s = t;
        for _ in 0..8 {
            let err = Self::component(s, self.x1, self.x2) - t;
            if err.abs() < 1e-7 {
                return Self::component(s, self.y1, self.y2);
            }
            let slope = Self::component_slope(s, self.x1, self.x2);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
        }

        // Bisection fallback where the slope flattens out
        let (mut lo, mut hi) = (0.0, 1.0);
        s = t;
        for _ in 0..32 {
            let x = Self::component(s, self.x1, self.x2);
            if (x - t).abs() < 1e-7 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::component(s, self.y1, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 6] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
        EasingType::Smooth,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL.into_iter().skip(1) {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v + 1e-9 >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_bezier_linear_control_points() {
        let linear = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((linear.sample(t) - t).abs() < 1e-5);
        }
    }

    #[test]
    fn test_slide_curve_front_loaded() {
        // Most of the distance is covered in the first half
        assert!(EasingType::Smooth.apply(0.5) > 0.8);
    }
}
