//! Easing curves, named after the power-curve family used by the site's motion design.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Ease {
    /// Linear; used for scroll-scrubbed motion.
    None,
    Power1Out,
    #[default]
    Power2Out,
    Power3Out,
    Power2InOut,
    SineInOut,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power1Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::None,
        Ease::Power1Out,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power2InOut,
        Ease::SineInOut,
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v >= prev - 1e-12, "{ease:?} decreased at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power3Out.apply(0.5) > Ease::Power2Out.apply(0.5));
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-9);
        assert_eq!(Ease::None.apply(1.5), 1.0);
    }
}
